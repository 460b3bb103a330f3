// SQLite DepartmentRepository Implementation

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use antrean_core::domain::Department;
use antrean_core::error::Result;
use antrean_core::port::DepartmentRepository;

use crate::error::map_sqlx_error;

pub struct SqliteDepartmentRepository {
    pool: SqlitePool,
}

impl SqliteDepartmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for SqliteDepartmentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Department>> {
        let row = sqlx::query("SELECT id, name, doctor_uuid FROM departments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => Ok(Some(Department {
                id: row.try_get("id").map_err(map_sqlx_error)?,
                name: row.try_get("name").map_err(map_sqlx_error)?,
                doctor_uuid: row.try_get("doctor_uuid").map_err(map_sqlx_error)?,
            })),
            None => Ok(None),
        }
    }
}
