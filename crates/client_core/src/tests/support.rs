use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{ApiClient, NavigationLog, Session};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<(String, String), (u16, Value)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the pharmacy API. Unknown routes answer 404.
pub struct MockApi {
    pub base_url: String,
    state: MockState,
}

impl MockApi {
    pub async fn spawn() -> Self {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub async fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.state
            .routes
            .lock()
            .await
            .insert((method.to_string(), path.to_string()), (status, body));
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub async fn single_request(&self) -> RecordedRequest {
        let requests = self.requests().await;
        assert_eq!(requests.len(), 1, "unexpected requests: {requests:?}");
        requests.into_iter().next().expect("one request")
    }

    pub fn client(&self, session: Session) -> (ApiClient, Arc<NavigationLog>) {
        client_for(&self.base_url, session)
    }
}

pub fn client_for(base_url: &str, session: Session) -> (ApiClient, Arc<NavigationLog>) {
    let navigator = Arc::new(NavigationLog::new());
    let client = ApiClient::new(base_url, session, navigator.clone());
    (client, navigator)
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn session_with_token(token: &str) -> Session {
    let session = Session::in_memory();
    session.store_token(token).expect("store token");
    session
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header_text(header::AUTHORIZATION),
        content_type: header_text(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    state.requests.lock().await.push(recorded);

    let route = state
        .routes
        .lock()
        .await
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();
    match route {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body),
        ),
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "no such route"}))),
    }
}
