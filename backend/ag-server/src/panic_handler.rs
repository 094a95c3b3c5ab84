use crate::api::error::{ApiErrorBody, ApiErrorResponse, INTERNAL_ERROR_MESSAGE};

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

/// Turn a handler panic into the standard 500 body.
///
/// The panic payload is logged and never sent to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let panic_msg = match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(any) => match any.downcast::<&str>() {
            Ok(msg) => msg.to_string(),
            Err(_) => "Unknown panic".to_string(),
        },
    };

    error!("Handler panicked: {}", panic_msg);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse {
            error: ApiErrorBody::new("INTERNAL_ERROR", INTERNAL_ERROR_MESSAGE),
        }),
    )
        .into_response()
}
