//! Remembered login email, stored under [`REMEMBER_ME_KEY`].

use crate::error::Result as ClientErrorResult;
use crate::session::session_storage::SessionStorage;

use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

pub const REMEMBER_ME_KEY: &str = "rememberMe";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberMeRecord {
    pub email: String,
    pub remember_me: bool,
}

pub struct RememberMe {
    storage: Arc<dyn SessionStorage>,
}

impl RememberMe {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Email to prefill the login form with, if one was remembered.
    ///
    /// A record that does not parse is ignored.
    pub fn email(&self) -> ClientErrorResult<Option<String>> {
        let Some(raw) = self.storage.load(REMEMBER_ME_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<RememberMeRecord>(&raw) {
            Ok(record) if record.remember_me => Ok(Some(record.email)),
            Ok(_) => Ok(None),
            Err(e) => {
                warn!("Ignoring unreadable remember-me record: {e}");
                Ok(None)
            }
        }
    }

    /// Store `email` when `remember` is set, otherwise forget any record.
    pub fn apply(&self, email: &str, remember: bool) -> ClientErrorResult<()> {
        if !remember {
            return self.storage.remove(REMEMBER_ME_KEY);
        }

        let record = RememberMeRecord {
            email: email.to_string(),
            remember_me: true,
        };
        let json = serde_json::to_string(&record)?;
        self.storage.save(REMEMBER_ME_KEY, &json)
    }
}
