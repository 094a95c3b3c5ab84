use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - status, version and credential store reachability
pub async fn health_check(State(state): State<AppState>) -> Response {
    // Round trip to the store; no user has an empty email.
    let (status, database) = match state.store.find_by_email("").await {
        Ok(_) => (StatusCode::OK, "operational"),
        Err(e) => {
            warn!("Health check: credential store unavailable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let health = json!({
        "status": if status.is_success() { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "auth": "operational",
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - is the process alive?
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - ready to accept traffic?
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
