// Department Repository Port (Interface)

use async_trait::async_trait;

use crate::domain::Department;
use crate::error::Result;

/// Repository interface for department ("poli") lookups
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find department by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Department>>;
}
