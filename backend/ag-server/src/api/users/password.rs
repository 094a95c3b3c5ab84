//! Argon2 runs on the blocking pool so a slow hash never stalls the
//! request executor.

use crate::{ApiError, ApiResult};

use ag_auth::PasswordHasher;

use tokio::task;

pub(crate) async fn hash_password(hasher: &PasswordHasher, password: String) -> ApiResult<String> {
    let hasher = hasher.clone();

    let hash = task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Password hashing task failed: {}", e)))??;

    Ok(hash)
}

pub(crate) async fn verify_password(
    hasher: &PasswordHasher,
    password: String,
    password_hash: String,
) -> ApiResult<bool> {
    let hasher = hasher.clone();

    task::spawn_blocking(move || hasher.verify(&password, &password_hash))
        .await
        .map_err(|e| ApiError::internal(format!("Password verification task failed: {}", e)))
}
