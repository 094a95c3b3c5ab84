//! Bearer-token authentication for REST handlers

use crate::{ApiError, AppState};

use ag_auth::{Claims, bearer_token};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Claims of a verified `Authorization: Bearer <token>` header.
///
/// Signature and expiry are checked with the server's token service; any
/// failure rejects the request with 401.
pub struct AuthenticatedUser(pub Claims);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header)?;
            let claims = state.tokens.decode(token)?;

            log::debug!("Authenticated user {}", claims.id);

            Ok(AuthenticatedUser(claims))
        }
    }
}
