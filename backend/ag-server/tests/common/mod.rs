#![allow(dead_code)]

//! Test infrastructure for ag-server API tests

use ag_auth::{HashingParams, PasswordHasher, TokenService};
use ag_db::{CredentialStore, UserRepository};
use ag_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes";

/// Cheap Argon2 parameters so tests don't spend seconds hashing
pub fn fast_hashing_params() -> HashingParams {
    HashingParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    }
}

pub fn create_token_service(ttl: Duration) -> TokenService {
    TokenService::with_hs256(TEST_SECRET, ttl).expect("Failed to create token service")
}

/// Create AppState over a private in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = ag_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    let store: Arc<dyn CredentialStore> = Arc::new(UserRepository::new(pool));
    let hasher = PasswordHasher::new(fast_hashing_params()).expect("Failed to create hasher");

    AppState::new(store, hasher, create_token_service(Duration::from_secs(3600)))
}

pub async fn create_test_app() -> (Router, AppState) {
    let state = create_test_app_state().await;
    (build_router(state.clone()), state)
}

/// Send a request and return status plus parsed JSON body (Null when empty or not JSON)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    bearer: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

pub async fn register_user(
    app: &Router,
    name: &str,
    email: &str,
    password: &str,
) -> (StatusCode, serde_json::Value) {
    send(
        app,
        "POST",
        "/api/users",
        Some(serde_json::json!({ "name": name, "email": email, "password": password })),
        None,
    )
    .await
}

pub async fn login_user(app: &Router, email: &str, password: &str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        "POST",
        "/api/users/auth",
        Some(serde_json::json!({ "email": email, "password": password })),
        None,
    )
    .await
}
