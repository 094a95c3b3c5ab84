use crate::ApiError;

use serde::Deserialize;
use uuid::Uuid;

/// `?id=<uuid>` selector for user mutations.
#[derive(Debug, Default, Deserialize)]
pub struct UserIdQuery {
    pub id: Option<String>,
}

impl UserIdQuery {
    #[track_caller]
    pub fn require_id(&self) -> Result<Uuid, ApiError> {
        let id = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::bad_request("User id is required"))?;

        Ok(Uuid::parse_str(id)?)
    }
}
