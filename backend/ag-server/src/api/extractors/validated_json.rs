//! JSON body extractor that also runs the request's field schema.

use crate::ApiError;

use ag_core::ValidationErrors;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Field-level validation for a deserialized request body.
pub trait ValidateRequest {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Like `Json<T>`, but a body that is not valid JSON (or not the expected
/// shape) is a `BadRequest`, and a well-formed body that fails its schema
/// is a `Validation` error carrying every failing field.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateRequest + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

            value.validate()?;

            Ok(ValidatedJson(value))
        }
    }
}
