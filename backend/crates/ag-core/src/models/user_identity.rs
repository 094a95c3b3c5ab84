use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public identity of a user: what a token carries and what a client session holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
