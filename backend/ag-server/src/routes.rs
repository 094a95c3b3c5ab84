use crate::{
    AppState, delete_user, health, list_users, login, me, panic_handler, register, update_user,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Users
        .route(
            "/api/users",
            get(list_users)
                .post(register)
                .put(update_user)
                .delete(delete_user),
        )
        .route("/api/users/auth", post(login))
        .route("/api/users/me", get(me))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_handler::handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
