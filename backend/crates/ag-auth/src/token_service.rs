use crate::{AuthError, Claims, Result as AuthErrorResult};

use ag_core::UserIdentity;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Clock skew tolerance when checking `exp`
const LEEWAY_SECS: u64 = 30;

/// Issues and verifies signed, time-limited tokens (HS256).
///
/// Tokens are stateless: nothing is stored server-side and a token stays
/// valid until its `exp`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a service signing with HS256 and the given shared secret.
    #[track_caller]
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::MissingSecret {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            validation,
            ttl,
        })
    }

    /// Issue a token for `identity`, expiring `ttl` from now.
    #[track_caller]
    pub fn issue(&self, identity: &UserIdentity) -> AuthErrorResult<String> {
        let claims = Claims::new(identity, chrono::Utc::now().timestamp(), self.ttl);

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| AuthError::TokenIssue {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Verify signature and expiry, then return the claims.
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &'static str {
        "HS256"
    }
}
