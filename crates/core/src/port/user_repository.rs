// User Repository Port (Interface)

use async_trait::async_trait;

use crate::domain::User;
use crate::error::Result;

/// Repository interface for user account persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user account.
    ///
    /// A duplicate username surfaces as `AppError::Conflict` from the
    /// storage UNIQUE constraint.
    async fn insert(&self, user: &User) -> Result<()>;

    /// Count all users
    async fn count(&self) -> Result<i64>;

    /// List one page of users
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>>;

    /// Find user by UUID
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Delete by UUID; returns the number of rows removed
    async fn delete(&self, uuid: &str) -> Result<u64>;
}
