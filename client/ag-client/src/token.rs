//! Client-side claim extraction.
//!
//! The payload segment of a freshly issued token is base64url-decoded and
//! parsed. The signature is not checked here; `Client::me` asks the server
//! when a verified identity is needed.

use crate::error::{ClientError, Result as ClientErrorResult};

use ag_core::UserIdentity;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// `true` once `now` (Unix seconds) is at or past `exp`. A token without
    /// `exp` never expires by this check.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| now >= exp)
    }
}

pub fn decode_claims(token: &str) -> ClientErrorResult<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(ClientError::token(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClientError::token(format!("payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::token(format!("payload is not a claim set: {e}")))
}
