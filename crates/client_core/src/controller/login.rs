use serde_json::Value;
use shared::{
    error::ApiError,
    protocol::{LoginRequest, LoginResponse},
    value::{display_text, is_truthy},
};
use tracing::{info, warn};

use crate::{api::ApiClient, navigation::Page};

const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    /// Message to show on the login page.
    Rejected(String),
}

pub struct LoginController {
    api: ApiClient,
}

impl LoginController {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Never fails: transport and storage errors become the rejection text.
    pub async fn submit(&self, email: &str, password: &str) -> LoginOutcome {
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = match self.api.login(&credentials).await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "login request failed");
                return LoginOutcome::Rejected(err.to_string());
            }
        };

        let Some(token) = login_token(&body) else {
            info!("login rejected by server");
            return LoginOutcome::Rejected(rejection_message(&body));
        };
        if let Err(err) = self.api.session().store_token(&token) {
            return LoginOutcome::Rejected(err.to_string());
        }
        info!("login succeeded");
        self.api.navigator().navigate(Page::Dashboard);
        LoginOutcome::LoggedIn
    }
}

fn login_token(body: &Value) -> Option<String> {
    let response: LoginResponse = serde_json::from_value(body.clone()).unwrap_or_default();
    is_truthy(&response.token).then(|| display_text(&response.token))
}

fn rejection_message(body: &Value) -> String {
    ApiError::from_body(body)
        .message()
        .unwrap_or_else(|| LOGIN_FAILED.to_string())
}
