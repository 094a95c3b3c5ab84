use crate::ApiError;

use ag_auth::AuthError;
use ag_core::ValidationErrors;
use ag_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::not_found("User not found");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field_list() {
    let mut errors = ValidationErrors::new();
    errors.push("email", "must be a valid email");
    errors.push("password", "must be at least 8 characters");
    let response = ApiError::from(errors).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"]["message"],
        "email must be a valid email, password must be at least 8 characters"
    );
    assert_eq!(json["error"]["field"], "email");
    assert_eq!(json["error"]["fields"][1]["field"], "password");
    assert_eq!(
        json["error"]["fields"][1]["message"],
        "must be at least 8 characters"
    );
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let response = ApiError::unauthorized("Invalid password").into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Invalid password");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let response = ApiError::conflict("Email already registered").into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal {
        message: "SQLITE_BUSY: database is locked at /home/app/users.db".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("SQLITE"));
    assert!(!message.contains("/home"));
}

#[tokio::test]
async fn test_bad_request_omits_field_keys() {
    let response = ApiError::bad_request("User id is required").into_response();

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"].get("field").is_none());
    assert!(json["error"].get("fields").is_none());
}

#[test]
fn test_uuid_error_converts_to_bad_request() {
    let uuid_err = Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_duplicate_email_converts_to_conflict() {
    let db_err = DbError::DuplicateEmail {
        email: "ada@example.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert_eq!(api_err.status(), StatusCode::CONFLICT);
}

#[test]
fn test_db_not_found_converts_to_not_found() {
    let db_err = DbError::NotFound {
        id: Uuid::new_v4(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert_eq!(api_err.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_db_initialization_error_converts_to_internal() {
    let db_err = DbError::Initialization {
        message: "bad row".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_expired_token_converts_to_unauthorized() {
    let auth_err = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();

    assert_eq!(api_err.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_hashing_failure_converts_to_internal() {
    let auth_err = AuthError::PasswordHash {
        message: "out of memory".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();

    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
