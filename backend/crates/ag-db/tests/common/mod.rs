#![allow(dead_code)]

use ag_core::User;
use ag_db::{UserRepository, connect_in_memory};

/// Repository over a fresh in-memory database
pub async fn create_test_repository() -> UserRepository {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");
    UserRepository::new(pool)
}

/// Build a user record; the hash is a placeholder, never a real password
pub fn test_user(name: &str, email: &str) -> User {
    User::new(
        name.to_string(),
        email.to_string(),
        format!("$argon2id$placeholder${}", name),
    )
}
