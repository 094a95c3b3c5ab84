//! Login and identity handlers

use crate::api::users::password::verify_password;
use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, IdentityResponse, LoginRequest,
    LoginResponse, ValidatedJson,
};

use axum::{Json, extract::State};
use log::{info, warn};

/// POST /api/users/auth
///
/// Unknown email is 404 and a wrong password is 401; only a verified
/// password yields a token.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (email, password) = req.into_fields();

    let user = state
        .store
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !verify_password(&state.hasher, password, user.password_hash.clone()).await? {
        warn!("Failed login for user {}", user.id);
        return Err(ApiError::unauthorized("Invalid password"));
    }

    let token = state.tokens.issue(&user.identity())?;

    info!("User {} logged in", user.id);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// GET /api/users/me
///
/// Server-side verification of a bearer token.
pub async fn me(AuthenticatedUser(claims): AuthenticatedUser) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        data: claims.identity(),
    })
}
