//! Persisted authentication session.
//!
//! The record lives under [`SESSION_KEY`] as
//! `{"state": {"user": ..., "token": ...}, "version": 0}`. Every mutation
//! is written to storage before the in-memory copy changes, so a failed
//! write leaves the current session as it was. Mutations are serialized:
//! the persisted record and the in-memory state always hold the same
//! session once a call returns.

use crate::error::Result as ClientErrorResult;
use crate::session::session_state::SessionState;
use crate::session::session_storage::SessionStorage;

use ag_core::UserIdentity;

use std::sync::{Arc, Mutex};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

pub const SESSION_KEY: &str = "auth";
pub const SESSION_RECORD_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    state: SessionState,
    version: u32,
}

pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    state: watch::Sender<SessionState>,
    // held across persist + publish
    write_lock: Mutex<()>,
}

impl SessionStore {
    /// Read the persisted session.
    ///
    /// A missing record is an empty session. An unreadable, half-populated
    /// or unknown-version record is logged, discarded, and also treated
    /// as empty. Storage I/O failures are returned.
    pub fn hydrate(storage: Arc<dyn SessionStorage>) -> ClientErrorResult<Self> {
        let initial = match storage.load(SESSION_KEY)? {
            None => {
                debug!("No persisted session");
                SessionState::empty()
            }
            Some(raw) => match Self::parse_record(&raw) {
                Ok(state) => state,
                Err(reason) => {
                    warn!("Discarding corrupted session record: {reason}");
                    storage.remove(SESSION_KEY)?;
                    SessionState::empty()
                }
            },
        };

        if let Some(user) = initial.user() {
            info!("Restored session for {}", user.email);
        }

        let (state, _) = watch::channel(initial);
        Ok(Self {
            storage,
            state,
            write_lock: Mutex::new(()),
        })
    }

    fn parse_record(raw: &str) -> Result<SessionState, String> {
        let record: SessionRecord = serde_json::from_str(raw).map_err(|e| e.to_string())?;

        if record.version != SESSION_RECORD_VERSION {
            return Err(format!("unsupported version {}", record.version));
        }
        if !record.state.is_consistent() {
            return Err("user and token must be set together".to_string());
        }

        Ok(record.state)
    }

    /// Current session, readable outside any async context.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn set_user(&self, user: UserIdentity, token: String) -> ClientErrorResult<()> {
        let email = user.email.clone();
        self.commit(SessionState::authenticated(user, token))?;

        info!("Session started for {email}");
        Ok(())
    }

    pub fn remove_user(&self) -> ClientErrorResult<()> {
        self.commit(SessionState::empty())?;

        info!("Session cleared");
        Ok(())
    }

    /// Receiver that observes every session change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn commit(&self, next: SessionState) -> ClientErrorResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        self.persist(&next)?;
        self.state.send_replace(next);
        Ok(())
    }

    fn persist(&self, state: &SessionState) -> ClientErrorResult<()> {
        let record = SessionRecord {
            state: state.clone(),
            version: SESSION_RECORD_VERSION,
        };
        let json = serde_json::to_string(&record)?;
        self.storage.save(SESSION_KEY, &json)
    }
}
