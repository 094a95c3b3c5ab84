use crate::error::{ClientError, Result as ClientErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Durable key/value storage for client state, one raw string per key.
pub trait SessionStorage: Send + Sync {
    /// Stored value for `key`, or `None` if nothing was saved.
    fn load(&self, key: &str) -> ClientErrorResult<Option<String>>;

    fn save(&self, key: &str, value: &str) -> ClientErrorResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> ClientErrorResult<()>;
}

/// Keys become file names, so only ASCII letters, digits, `-` and `_` are
/// accepted.
#[track_caller]
pub(crate) fn check_key(key: &str) -> ClientErrorResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ClientError::InvalidKey {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
