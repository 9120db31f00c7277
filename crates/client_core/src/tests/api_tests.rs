use super::*;
use crate::test_support::{client_for, session_with_token, MockApi};
use serde_json::json;

#[tokio::test]
async fn attaches_bearer_token_when_session_has_one() {
    let api = MockApi::spawn().await;
    api.respond("GET", "/api/dashboard", 200, json!({"central_items": 1}))
        .await;
    let (client, _nav) = api.client(session_with_token("tok-123"));

    client.get("/api/dashboard").await.expect("get");

    let request = api.single_request().await;
    assert_eq!(request.authorization.as_deref(), Some("Bearer tok-123"));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let api = MockApi::spawn().await;
    api.respond("POST", "/api/items", 200, json!({"id": 4})).await;
    let (client, _nav) = api.client(Session::in_memory());

    let body = client
        .post("/api/items", &json!({"name": "Doliprane", "dosage": "500mg"}))
        .await
        .expect("post");

    assert_eq!(body, json!({"id": 4}));
    let request = api.single_request().await;
    assert_eq!(request.authorization, None);
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.body, json!({"name": "Doliprane", "dosage": "500mg"}));
}

#[tokio::test]
async fn unauthorized_response_clears_session_and_returns_to_login() {
    let api = MockApi::spawn().await;
    api.respond("POST", "/api/bon", 401, json!({"error": "expired"}))
        .await;
    let session = session_with_token("stale");
    let (client, nav) = api.client(session.clone());

    let err = client
        .post("/api/bon", &json!({"items": []}))
        .await
        .expect_err("401 must fail");

    assert!(err.is_unauthorized(), "unexpected error: {err}");
    assert_eq!(session.token().expect("token"), None);
    assert_eq!(nav.current(), Some(Page::Login));
}

#[tokio::test]
async fn unauthorized_get_is_handled_the_same_way() {
    let api = MockApi::spawn().await;
    api.respond("GET", "/api/stock/central", 401, json!({})).await;
    let session = session_with_token("stale");
    let (client, nav) = api.client(session.clone());

    let err = client.get("/api/stock/central").await.expect_err("401");

    assert!(matches!(err, ClientError::Unauthorized));
    assert!(!session.is_authenticated().expect("store"));
    assert_eq!(nav.history(), vec![Page::Login]);
}

#[tokio::test]
async fn other_error_statuses_still_return_the_body() {
    let api = MockApi::spawn().await;
    api.respond("POST", "/api/items", 400, json!({"error": "name required"}))
        .await;
    let session = session_with_token("tok");
    let (client, nav) = api.client(session.clone());

    let body = client
        .post("/api/items", &json!({"name": "", "dosage": ""}))
        .await
        .expect("application errors are bodies");

    assert_eq!(body, json!({"error": "name required"}));
    assert_eq!(session.token().expect("token").as_deref(), Some("tok"));
    assert_eq!(nav.current(), None);
}

#[tokio::test]
async fn login_skips_session_header_and_401_handling() {
    let api = MockApi::spawn().await;
    api.respond("POST", "/api/login", 401, json!({"error": "bad password"}))
        .await;
    let session = session_with_token("previous");
    let (client, nav) = api.client(session.clone());

    let body = client
        .login(&LoginRequest {
            email: "a@b.dz".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .expect("login body");

    assert_eq!(body, json!({"error": "bad password"}));
    let request = api.single_request().await;
    assert_eq!(request.authorization, None);
    assert_eq!(request.body, json!({"email": "a@b.dz", "password": "wrong"}));
    assert_eq!(session.token().expect("token").as_deref(), Some("previous"));
    assert_eq!(nav.current(), None);
}

#[tokio::test]
async fn logout_sends_the_token() {
    let api = MockApi::spawn().await;
    api.respond("POST", "/api/logout", 200, json!({"ok": true}))
        .await;
    let (client, _nav) = api.client(session_with_token("tok-9"));

    client.logout().await.expect("logout");

    let request = api.single_request().await;
    assert_eq!(request.path, "/api/logout");
    assert_eq!(request.authorization.as_deref(), Some("Bearer tok-9"));
}

#[tokio::test]
async fn joins_base_url_with_trailing_slash() {
    let api = MockApi::spawn().await;
    api.respond("GET", "/api/dashboard", 200, json!({})).await;
    let (client, _nav) = client_for(&format!("{}/", api.base_url), Session::in_memory());

    client.get("/api/dashboard").await.expect("get");

    assert_eq!(api.single_request().await.path, "/api/dashboard");
}
