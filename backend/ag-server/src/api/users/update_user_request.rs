use crate::ValidateRequest;
use crate::api::users::register_request::MIN_PASSWORD_LENGTH;

use ag_core::{Rule, Schema, ValidationErrors};

use serde::Deserialize;

/// PUT /api/users?id= body. Only supplied fields change.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// New plaintext password; re-hashed before storage
    pub password: Option<String>,
}

impl ValidateRequest for UpdateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Schema::new()
            .optional_field("name", [Rule::Required])
            .optional_field("email", [Rule::Email])
            .optional_field("password", [Rule::MinLength(MIN_PASSWORD_LENGTH)])
            .validate(&[
                ("name", self.name.as_deref()),
                ("email", self.email.as_deref()),
                ("password", self.password.as_deref()),
            ])
    }
}
