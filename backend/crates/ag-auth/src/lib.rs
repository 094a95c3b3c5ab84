pub mod bearer;
pub mod claims;
pub mod error;
pub mod hashing_params;
pub mod password_hasher;
pub mod token_service;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use hashing_params::HashingParams;
pub use password_hasher::PasswordHasher;
pub use token_service::TokenService;

#[cfg(test)]
mod tests;
