use crate::ValidateRequest;

use ag_core::{Rule, Schema, ValidationErrors};

use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// POST /api/users body.
///
/// Fields are optional at the serde level so a missing field is reported
/// by the schema as "is required" rather than as a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    /// (name, email, password); only meaningful after validation.
    pub fn into_fields(self) -> (String, String, String) {
        (
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

impl ValidateRequest for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Schema::new()
            .field("name", [Rule::Required])
            .field("email", [Rule::Email])
            .field("password", [Rule::MinLength(MIN_PASSWORD_LENGTH)])
            .validate(&[
                ("name", self.name.as_deref()),
                ("email", self.email.as_deref()),
                ("password", self.password.as_deref()),
            ])
    }
}
