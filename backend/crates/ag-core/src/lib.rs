pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::user::User;
pub use models::user_identity::UserIdentity;
pub use validation::{FieldError, Rule, Schema, ValidationErrors};
