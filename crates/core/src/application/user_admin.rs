// User Administration Use Cases

use std::sync::Arc;

use crate::domain::{PageInfo, PageRequest, User};
use crate::error::{AppError, Result};
use crate::port::UserRepository;

/// User Administration Service (list / detail / delete)
pub struct UserAdminService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserAdminService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// One page of all users; count and page share the (empty) predicate.
    pub async fn list(&self, page: PageRequest) -> Result<(Vec<User>, PageInfo)> {
        let total = self.user_repo.count().await?;
        let users = self.user_repo.list(page.offset(), page.limit()).await?;
        Ok((users, PageInfo::new(page, total)))
    }

    /// Fetch one user; missing uuid is a typed NotFound, translated to
    /// 404 at the HTTP boundary only.
    pub async fn get(&self, uuid: &str) -> Result<User> {
        self.user_repo
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", uuid)))
    }

    /// Delete one user, returning the removed account so the boundary
    /// can name it in the success message. Deleting a missing uuid is
    /// an error, never a silent success.
    pub async fn delete(&self, uuid: &str) -> Result<User> {
        let user = self.get(uuid).await?;

        let removed = self.user_repo.delete(uuid).await?;
        if removed == 0 {
            // Lost a race with a concurrent delete
            return Err(AppError::NotFound(format!("user {} not found", uuid)));
        }

        tracing::info!(user = %user.uuid, username = %user.username, "user deleted");
        Ok(user)
    }
}
