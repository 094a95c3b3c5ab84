//! Login and registration form input, validated before any request is sent.

use ag_core::{Rule, Schema, ValidationErrors};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 20;
pub const PASSWORD_MISMATCH_MESSAGE: &str = "passwords do not match";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn schema() -> Schema {
        Schema::new().field("email", [Rule::Email]).field(
            "password",
            [
                Rule::MinLength(MIN_PASSWORD_LENGTH),
                Rule::MaxLength(MAX_PASSWORD_LENGTH),
            ],
        )
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Self::schema().validate(&[
            ("email", Some(self.email.as_str())),
            ("password", Some(self.password.as_str())),
        ])
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Same password bounds as [`LoginForm`], so a registered password can
    /// always be used to log in.
    pub fn schema() -> Schema {
        Schema::new()
            .field("name", [Rule::Required])
            .field("email", [Rule::Email])
            .field(
                "password",
                [
                    Rule::MinLength(MIN_PASSWORD_LENGTH),
                    Rule::MaxLength(MAX_PASSWORD_LENGTH),
                ],
            )
    }

    /// Schema failures first, then a `confirm_password` mismatch.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Self::schema()
            .validate(&[
                ("name", Some(self.name.as_str())),
                ("email", Some(self.email.as_str())),
                ("password", Some(self.password.as_str())),
            ])
            .err()
            .unwrap_or_default();

        if self.confirm_password != self.password {
            errors.push("confirm_password", PASSWORD_MISMATCH_MESSAGE);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
