use crate::UserDto;

use serde::Serialize;

/// Single user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub data: UserDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
