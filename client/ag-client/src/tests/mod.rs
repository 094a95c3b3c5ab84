mod file_storage;
mod remember_me;
mod token;

use ag_core::UserIdentity;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use uuid::Uuid;

pub(crate) fn sample_user() -> UserIdentity {
    UserIdentity {
        id: Uuid::new_v4(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
    }
}

/// Unsigned token with the claim set the server issues.
pub(crate) fn make_token(user: &UserIdentity, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "iat": exp - 3600,
        "exp": exp,
    });
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.signature")
}
