//! Integration tests for login and token verification
mod common;

use crate::common::{
    TEST_SECRET, create_test_app, create_token_service, login_user, register_user, send,
};

use ag_auth::TokenService;
use ag_core::UserIdentity;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_register_then_login_yields_token_with_registered_email() {
    let (app, state) = create_test_app().await;
    register_user(&app, "Ada", "ada@example.com", "password1").await;

    let (status, json) = login_user(&app, "ada@example.com", "password1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Login successful");

    let token = json["token"].as_str().unwrap();
    let claims = state.tokens.decode(token).unwrap();
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.name, "Ada");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_login_wrong_password_returns_401_without_token() {
    let (app, _state) = create_test_app().await;
    register_user(&app, "Ada", "ada@example.com", "password1").await;

    let (status, json) = login_user(&app, "ada@example.com", "wrong-password").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["message"], "Invalid password");
    assert!(json.get("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_email_returns_404() {
    let (app, _state) = create_test_app().await;

    let (status, json) = login_user(&app, "nobody@example.com", "password1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_login_malformed_input_returns_400() {
    let (app, _state) = create_test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/users/auth",
        Some(json!({ "email": "ada@example.com", "password": "12345" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let (app, _state) = create_test_app().await;
    register_user(&app, "Ada", "ada@example.com", "password1").await;

    let (status, _) = login_user(&app, "ADA@example.com", "password1").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_me_with_valid_token_returns_identity() {
    let (app, _state) = create_test_app().await;
    let (_, created) = register_user(&app, "Ada", "ada@example.com", "password1").await;
    let (_, login) = login_user(&app, "ada@example.com", "password1").await;
    let token = login["token"].as_str().unwrap();

    let (status, json) = send(&app, "GET", "/api/users/me", None, Some(token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], created["data"]["id"]);
    assert_eq!(json["data"]["name"], "Ada");
    assert_eq!(json["data"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_me_without_header_returns_401() {
    let (app, _state) = create_test_app().await;

    let (status, json) = send(&app, "GET", "/api/users/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_me_with_token_signed_by_other_secret_returns_401() {
    let (app, _state) = create_test_app().await;
    let foreign = TokenService::with_hs256(
        b"another-secret-that-is-also-32-bytes!!",
        Duration::from_secs(3600),
    )
    .unwrap();
    let token = foreign
        .issue(&UserIdentity {
            id: Uuid::new_v4(),
            name: "Mallory".into(),
            email: "mallory@example.com".into(),
        })
        .unwrap();

    let (status, _) = send(&app, "GET", "/api/users/me", None, Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token_returns_401() {
    let (app, _state) = create_test_app().await;

    let (status, _) = send(&app, "GET", "/api/users/me", None, Some("not.a.jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_issued_token_decodes_with_shared_secret() {
    let service = create_token_service(Duration::from_secs(60));
    let identity = UserIdentity {
        id: Uuid::new_v4(),
        name: "Ada".into(),
        email: "ada@example.com".into(),
    };

    let token = service.issue(&identity).unwrap();
    let verifier = TokenService::with_hs256(TEST_SECRET, Duration::from_secs(60)).unwrap();

    assert_eq!(verifier.decode(&token).unwrap().identity(), identity);
}
