use crate::ValidateRequest;

use ag_core::{Rule, Schema, ValidationErrors};

use serde::Deserialize;

pub const MIN_LOGIN_PASSWORD_LENGTH: usize = 6;

/// POST /api/users/auth body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// (email, password); only meaningful after validation.
    pub fn into_fields(self) -> (String, String) {
        (
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

impl ValidateRequest for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Schema::new()
            .field("email", [Rule::Email])
            .field("password", [Rule::MinLength(MIN_LOGIN_PASSWORD_LENGTH)])
            .validate(&[
                ("email", self.email.as_deref()),
                ("password", self.password.as_deref()),
            ])
    }
}
