use crate::Result as DbErrorResult;

use ag_core::User;

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence seam for user records.
///
/// Implementations own email uniqueness: `create` and `update` must fail
/// with `DbError::DuplicateEmail` rather than store a second record with
/// the same email. `update` and `delete` fail with `DbError::NotFound`
/// for an unknown id.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>>;

    async fn list(&self) -> DbErrorResult<Vec<User>>;

    async fn create(&self, user: &User) -> DbErrorResult<()>;

    async fn update(&self, user: &User) -> DbErrorResult<()>;

    async fn delete(&self, id: Uuid) -> DbErrorResult<()>;
}
