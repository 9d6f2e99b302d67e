//! Session registration API tests.

mod common;

use axum::http::StatusCode;

use common::TestContext;

/// Health check needs no session.
#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

/// Registering returns a session id and token.
#[tokio::test]
async fn test_register_session() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.post("/api/session/register").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert!(body["session_id"].is_string());
    assert!(!body["token"].as_str().unwrap().is_empty());
}

/// Status reports a fresh session with nothing loaded.
#[tokio::test]
async fn test_session_status() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let token = TestContext::register(&server).await;

    let response = server
        .get("/api/session/status")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["file"], serde_json::Value::Null);
    assert_eq!(body["document_count"], 0);
    assert_eq!(body["quiz_active"], false);
}

/// Protected routes reject missing tokens.
#[tokio::test]
async fn test_missing_token_unauthorized() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/session/status").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "unauthorized");
}

/// Protected routes reject unknown tokens.
#[tokio::test]
async fn test_invalid_token_unauthorized() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .get("/api/quiz/current")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value("not-a-token"),
        )
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

/// Tokens must use the Bearer scheme.
#[tokio::test]
async fn test_non_bearer_unauthorized() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let token = TestContext::register(&server).await;

    let response = server
        .get("/api/session/status")
        .add_header(axum::http::header::AUTHORIZATION, token)
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}
