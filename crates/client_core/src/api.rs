use std::sync::Arc;

use reqwest::{
    header::{CONTENT_TYPE, HeaderValue},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde::Serialize;
use serde_json::Value;
use shared::protocol::{LoginRequest, LOGIN_PATH, LOGOUT_PATH};
use tracing::{debug, warn};

use crate::{
    error::ClientError,
    navigation::{Navigator, Page},
    session::Session,
};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Single entry point for calls to the pharmacy API.
///
/// Every request carries a JSON content type and, when the session holds a
/// token, a bearer `Authorization` header. A `401` clears the session, sends
/// the navigator back to the login page and fails the call. There is no
/// retry and no timeout.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        Ok(match self.session.token()? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    fn builder(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        self.authorized(builder)
    }

    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        let builder = self.builder(Method::GET, path)?;
        self.dispatch(Method::GET, path, builder).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.builder(Method::POST, path)?.json(body);
        self.dispatch(Method::POST, path, builder).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Value, ClientError> {
        debug!(%method, path, "api request");
        let response = builder.send().await?;
        let status = response.status();
        debug!(%method, path, status = status.as_u16(), "api response");

        if status == StatusCode::UNAUTHORIZED {
            warn!(path, "api rejected the session; returning to login");
            if let Err(err) = self.session.clear() {
                warn!(error = %err, "failed to clear session after 401");
            }
            self.navigator.navigate(Page::Login);
            return Err(ClientError::Unauthorized);
        }

        read_json(response).await
    }

    /// Posts credentials without the session header and without the 401
    /// handling of [`ApiClient::get`] / [`ApiClient::post`].
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Value, ClientError> {
        debug!(path = LOGIN_PATH, "login request");
        let response = self
            .http
            .post(self.url(LOGIN_PATH))
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .json(credentials)
            .send()
            .await?;
        read_json(response).await
    }

    /// Notifies the server that the session ends. The response is not read.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let builder = self.authorized(self.http.post(self.url(LOGOUT_PATH)))?;
        let response = builder.send().await?;
        debug!(status = response.status().as_u16(), "logout acknowledged");
        Ok(())
    }
}

async fn read_json(response: Response) -> Result<Value, ClientError> {
    response.json::<Value>().await.map_err(ClientError::Decode)
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
