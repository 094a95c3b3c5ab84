use ag_auth::{PasswordHasher, TokenService};
use ag_db::CredentialStore;

use std::sync::Arc;

/// Shared state for the HTTP handlers.
///
/// Request handling is otherwise stateless; consistency of user records is
/// left to the credential store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub hasher: PasswordHasher,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        tokens: TokenService,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens: Arc::new(tokens),
        }
    }
}
