// sqlx -> AppError mapping (orphan rules keep this out of core)

use antrean_core::error::AppError;

/// Convert sqlx::Error to AppError with structured information.
///
/// UNIQUE constraint violations become `Conflict` so the application
/// layer can treat the constraint as the authoritative duplicate
/// signal instead of trusting its pre-check.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code.as_ref() {
                    // UNIQUE constraint failed
                    "2067" | "1555" => AppError::Conflict(db_err.message().to_string()),
                    // FOREIGN KEY constraint failed
                    "787" | "3850" => AppError::Database(format!(
                        "foreign key constraint violation: {}",
                        db_err.message()
                    )),
                    // SQLITE_BUSY - database is locked
                    "5" => AppError::Database(format!(
                        "database locked (SQLITE_BUSY): {}",
                        db_err.message()
                    )),
                    _ => AppError::Database(format!(
                        "database error [{}]: {}",
                        code.as_ref(),
                        db_err.message()
                    )),
                }
            } else {
                AppError::Database(format!("database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::NotFound("row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("column not found: {}", col))
        }
        _ => AppError::Database(err.to_string()),
    }
}

/// A status string stored outside the enum is corrupt data, not caller
/// input; report it as an internal error.
pub(crate) fn corrupt_status(raw: &str) -> AppError {
    AppError::Internal(format!("invalid queue status in storage: {}", raw))
}
