use crate::error::Result as ClientErrorResult;
use crate::session::session_storage::{SessionStorage, check_key};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-process storage. Sharing one instance between two stores behaves
/// like a reload against the same disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> ClientErrorResult<Option<String>> {
        check_key(key)?;
        Ok(self.entries().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> ClientErrorResult<()> {
        check_key(key)?;
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientErrorResult<()> {
        check_key(key)?;
        self.entries().remove(key);
        Ok(())
    }
}
