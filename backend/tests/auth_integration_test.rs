//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = common::TestApp::new();

    let body = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "Str0ng!Pw"
    });

    let (status, response) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!response["token"].as_str().unwrap().is_empty());
    assert_eq!(response["user"]["username"], "alice");
    assert_eq!(response["user"]["email"], "alice@example.com");
    assert!(!response["user"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_response_never_contains_hash() {
    let app = common::TestApp::new();

    let body = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "Str0ng!Pw"
    });

    let (_, response) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert!(!response.contains("password_hash"));
    assert!(!response.contains("Str0ng!Pw"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = common::TestApp::new();

    let first = json!({
        "username": "alice",
        "email": "taken@example.com",
        "password": "Str0ng!Pw"
    });
    let second = json!({
        "username": "bob",
        "email": "taken@example.com",
        "password": "Str0ng!Pw"
    });

    let (status, _) = app.post("/api/v1/auth/register", &first.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, response) = app.post("/api/v1/auth/register", &second.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["field"], "email");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = common::TestApp::new();

    let first = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "Str0ng!Pw"
    });
    let second = json!({
        "username": "alice",
        "email": "other@example.com",
        "password": "Str0ng!Pw"
    });

    app.post("/api/v1/auth/register", &first.to_string()).await;
    let (status, response) = app.post("/api/v1/auth/register", &second.to_string()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["field"], "username");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = common::TestApp::new();

    let body = json!({
        "username": "alice",
        "email": "not-an-email",
        "password": "Str0ng!Pw"
    });

    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_weak_password_reports_rule() {
    let app = common::TestApp::new();

    let body = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "nodigits!"
    });

    let (status, response) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "PASSWORD_POLICY");
}

#[tokio::test]
async fn test_login_success() {
    let app = common::TestApp::new();

    let register = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "Str0ng!Pw"
    });
    app.post("/api/v1/auth/register", &register.to_string())
        .await;

    let login = json!({
        "email": "alice@example.com",
        "password": "Str0ng!Pw"
    });
    let (status, response) = app.post("/api/v1/auth/login", &login.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!response["token"].as_str().unwrap().is_empty());
    assert_eq!(response["user"]["username"], "alice");
}

#[tokio::test]
async fn test_login_failures_share_one_response() {
    let app = common::TestApp::new();

    let register = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "Str0ng!Pw"
    });
    app.post("/api/v1/auth/register", &register.to_string())
        .await;

    // Wrong password for a known account
    let wrong_password = json!({
        "email": "alice@example.com",
        "password": "WrongPass1!"
    });
    // Account that does not exist
    let unknown_email = json!({
        "email": "nobody@example.com",
        "password": "WrongPass1!"
    });
    // Password that could never pass policy
    let invalid_policy = json!({
        "email": "alice@example.com",
        "password": "short"
    });

    let (status_a, body_a) = app
        .post("/api/v1/auth/login", &wrong_password.to_string())
        .await;
    let (status_b, body_b) = app
        .post("/api/v1/auth/login", &unknown_email.to_string())
        .await;
    let (status_c, body_c) = app
        .post("/api/v1/auth/login", &invalid_policy.to_string())
        .await;

    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_b, StatusCode::UNAUTHORIZED);
    assert_eq!(status_c, StatusCode::UNAUTHORIZED);

    // The three bodies must be byte-identical: nothing may hint at which
    // step rejected the attempt
    assert_eq!(body_a, body_b);
    assert_eq!(body_b, body_c);
}

#[tokio::test]
async fn test_me_returns_token_owner() {
    let app = common::TestApp::new();

    let register = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "Str0ng!Pw"
    });
    let (_, response) = app
        .post("/api/v1/auth/register", &register.to_string())
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let token = response["token"].as_str().unwrap();

    let (status, me) = app.get_auth("/api/v1/auth/me", token).await;

    assert_eq!(status, StatusCode::OK);
    let me: serde_json::Value = serde_json::from_str(&me).unwrap();
    assert_eq!(me["username"], "alice");
    assert_eq!(me["id"], response["user"]["id"]);
}

#[tokio::test]
async fn test_me_rejects_tampered_token() {
    let app = common::TestApp::new();

    let register = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "Str0ng!Pw"
    });
    let (_, response) = app
        .post("/api/v1/auth/register", &register.to_string())
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let token = response["token"].as_str().unwrap();

    let tampered = format!("{}x", token);
    let (status, _) = app.get_auth("/api/v1/auth/me", &tampered).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_rejects_token_for_deleted_user() {
    let app = common::TestApp::new();

    let register = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "Str0ng!Pw"
    });
    let (_, response) = app
        .post("/api/v1/auth/register", &register.to_string())
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let token = response["token"].as_str().unwrap().to_string();
    let user_id: uuid::Uuid = response["user"]["id"].as_str().unwrap().parse().unwrap();

    app.store.remove(user_id).await.unwrap();

    let (status, body) = app.get_auth("/api/v1/auth/me", &token).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    // Indistinguishable from any other bad token
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_me_without_header() {
    let app = common::TestApp::new();

    let (status, _) = app.get("/api/v1/auth/me").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, response) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["status"], "healthy");
}
