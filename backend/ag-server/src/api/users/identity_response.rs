use ag_core::UserIdentity;

use serde::Serialize;

/// Identity carried by a verified token
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub data: UserIdentity,
}
