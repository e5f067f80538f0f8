//! Admin auth client against a mock API server.

use assimox::auth::{AuthClient, AuthError, AuthForm, AuthMode, AuthRequest, Settled, Submission};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn request(email: &str) -> AuthRequest {
    AuthRequest {
        username: "admin".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
    }
}

fn client(server: &MockServer) -> AuthClient {
    AuthClient::new(server.base_url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_login_posts_json_and_returns_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/admin/login")
                .header("content-type", "application/json")
                .json_body(json!({"username": "admin", "email": "", "password": "secret"}));
            then.status(200)
                .json_body(json!({"token": "tok-abcdef123456", "message": "ok"}));
        })
        .await;

    let response = client(&server).login(&request("")).await.unwrap();
    assert_eq!(response.token.as_deref(), Some("tok-abcdef123456"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_register_hits_register_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/register");
            then.status(201)
                .json_body(json!({"message": "Admin registered"}));
        })
        .await;

    let response = client(&server)
        .submit(AuthMode::Register, &request("admin@assimox.com"))
        .await
        .unwrap();
    assert_eq!(response.message.as_deref(), Some("Admin registered"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejection_message_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/login");
            then.status(401)
                .json_body(json!({"message": "Invalid credentials"}));
        })
        .await;

    let err = client(&server).login(&request("")).await.unwrap_err();
    assert!(matches!(err, AuthError::Rejected { status: 401, .. }));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_error_without_body_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/login");
            then.status(500).body("internal error");
        })
        .await;

    let err = client(&server).login(&request("")).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Authentication failed (HTTP 500)");
}

#[tokio::test]
async fn test_login_without_token_is_invalid() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/login");
            then.status(200).json_body(json!({"message": "welcome"}));
        })
        .await;

    let err = client(&server).login(&request("")).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/login");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .json_body(json!({"token": "late"}));
        })
        .await;

    let client = AuthClient::new(server.base_url(), Duration::from_millis(200)).unwrap();
    let err = client.login(&request("")).await.unwrap_err();
    assert!(matches!(err, AuthError::Timeout));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 9 of localhost in the test environment
    let client = AuthClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = client.login(&request("")).await.unwrap_err();
    assert!(matches!(err, AuthError::Network(_) | AuthError::Timeout));
}

#[tokio::test]
async fn test_form_round_trip_through_server() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/register");
            then.status(200).json_body(json!({"message": "created"}));
        })
        .await;

    let mut form = AuthForm::new(AuthMode::Register);
    form.username.set_text("admin");
    form.email.set_text("admin@assimox.com");
    form.password.set_text("secret");
    form.confirm_password.set_text("secret");
    let Submission::Ready(mode, request) = form.submit() else {
        panic!("form should be valid");
    };
    assert!(form.is_in_flight());

    let result = client(&server).submit(mode, &request).await;
    assert_eq!(form.settle(result), Settled::Registered);
    assert!(!form.is_in_flight());
    assert_eq!(form.mode(), AuthMode::Login);
}
