use ag_client::{FileStorage, RememberMe, SessionStorage, SessionStore};
use ag_core::UserIdentity;

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

pub const USER_ID: &str = "00000000-0000-0000-0000-000000000001";

pub fn test_user() -> UserIdentity {
    UserIdentity {
        id: Uuid::parse_str(USER_ID).unwrap(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
    }
}

/// Token shaped like the server's, signed with nothing in particular.
pub fn fake_token(user: &UserIdentity) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({
            "id": user.id,
            "name": user.name,
            "email": user.email,
            "iat": 1_700_000_000,
            "exp": 1_700_003_600,
        })
        .to_string(),
    );
    format!("{header}.{payload}.sig")
}

pub struct TestSession {
    pub dir: TempDir,
    pub storage: Arc<dyn SessionStorage>,
    pub store: SessionStore,
    pub remember: RememberMe,
}

pub fn create_test_session() -> TestSession {
    let dir = TempDir::new().unwrap();
    let storage: Arc<dyn SessionStorage> = Arc::new(FileStorage::new(dir.path()));
    let store = SessionStore::hydrate(storage.clone()).unwrap();
    let remember = RememberMe::new(storage.clone());

    TestSession {
        dir,
        storage,
        store,
        remember,
    }
}
