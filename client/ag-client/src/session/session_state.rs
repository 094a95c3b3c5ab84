use ag_core::UserIdentity;

use serde::{Deserialize, Serialize};

/// The client-held `{user, token}` pair.
///
/// Both halves are set or cleared together; the only constructors are
/// [`SessionState::empty`] and [`SessionState::authenticated`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    user: Option<UserIdentity>,
    token: Option<String>,
}

impl SessionState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn authenticated(user: UserIdentity, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// A deserialized record holding only one half is not a valid session.
    pub(crate) fn is_consistent(&self) -> bool {
        self.user.is_some() == self.token.is_some()
    }
}
