// SQLite UserRepository Implementation

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use antrean_core::domain::User;
use antrean_core::error::Result;
use antrean_core::port::UserRepository;

use crate::error::map_sqlx_error;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
    Ok(User {
        uuid: row.try_get("uuid").map_err(map_sqlx_error)?,
        username: row.try_get("username").map_err(map_sqlx_error)?,
        password_hash: row.try_get("password_hash").map_err(map_sqlx_error)?,
        full_name: row.try_get("full_name").map_err(map_sqlx_error)?,
        role: row.try_get("role").map_err(map_sqlx_error)?,
    })
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: &User) -> Result<()> {
        // A duplicate username trips the UNIQUE column constraint and
        // surfaces as Conflict via map_sqlx_error
        sqlx::query(
            r#"
            INSERT INTO users (uuid, username, password_hash, full_name, role)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.uuid)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(&user.role)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT uuid, username, password_hash, full_name, role
            FROM users
            ORDER BY username
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_user).collect()
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT uuid, username, password_hash, full_name, role
            FROM users
            WHERE uuid = ?
            "#,
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT uuid, username, password_hash, full_name, role
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn delete(&self, uuid: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users WHERE uuid = ?")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
