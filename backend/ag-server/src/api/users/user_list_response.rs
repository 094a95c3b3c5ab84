use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub data: Vec<UserDto>,
}
