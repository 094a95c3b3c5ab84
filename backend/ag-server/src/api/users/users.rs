//! User management REST API handlers
//!
//! `/api/users` registers (POST), lists (GET), updates (PUT ?id=) and
//! deletes (DELETE ?id=) user records.

use crate::api::error::EMAIL_TAKEN_MESSAGE;
use crate::api::users::password::hash_password;
use crate::{
    ApiError, ApiResult, AppState, MessageResponse, RegisterRequest, UpdateUserRequest, UserDto,
    UserIdQuery, UserListResponse, UserResponse, ValidatedJson,
};

use ag_core::User;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;
use log::info;

/// POST /api/users
///
/// Register a new user. Duplicate emails are rejected with 409 and the
/// existing record is left untouched.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let (name, email, password) = req.into_fields();

    if state.store.find_by_email(&email).await?.is_some() {
        return Err(ApiError::conflict(EMAIL_TAKEN_MESSAGE));
    }

    let password_hash = hash_password(&state.hasher, password).await?;
    let user = User::new(name, email, password_hash);

    // A concurrent registration can still win the race; the unique index
    // turns that into DuplicateEmail -> 409.
    state.store.create(&user).await?;

    info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            data: UserDto::from(user),
            message: None,
        }),
    ))
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.store.list().await?;

    Ok(Json(UserListResponse {
        data: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// PUT /api/users?id=<uuid>
///
/// Partial update; a supplied password is re-hashed.
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let id = query.require_id()?;

    let mut user = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    if let Some(name) = req.name {
        user.name = name;
    }
    if let Some(email) = req.email {
        user.email = email;
    }
    if let Some(password) = req.password {
        user.password_hash = hash_password(&state.hasher, password).await?;
    }
    user.updated_at = Utc::now();

    state.store.update(&user).await?;

    info!("Updated user {}", user.id);

    Ok(Json(UserResponse {
        data: UserDto::from(user),
        message: Some("User updated successfully".to_string()),
    }))
}

/// DELETE /api/users?id=<uuid>
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let id = query.require_id()?;

    state.store.delete(id).await?;

    info!("Deleted user {}", id);

    Ok(Json(MessageResponse {
        message: format!("User {} deleted successfully", id),
    }))
}
