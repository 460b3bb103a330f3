// SQLite QueueEntryRepository Implementation

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::str::FromStr;

use antrean_core::domain::{QueueEntry, QueueEntryId, QueueStatus};
use antrean_core::error::Result;
use antrean_core::port::{
    DoctorQueueQuery, DoctorQueueRow, PickupQueueQuery, PickupQueueRow, QueueEntryRepository,
};

use crate::error::{corrupt_status, map_sqlx_error};

pub struct SqliteQueueEntryRepository {
    pool: SqlitePool,
}

impl SqliteQueueEntryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn parse_status(raw: &str) -> Result<QueueStatus> {
    QueueStatus::from_str(raw).map_err(|_| corrupt_status(raw))
}

/// `?, ?, ...` for an IN clause; "" disables the clause entirely.
fn status_filter(statuses: &[QueueStatus]) -> String {
    if statuses.is_empty() {
        return String::new();
    }
    let placeholders = vec!["?"; statuses.len()].join(", ");
    format!(" AND q.status IN ({})", placeholders)
}

#[async_trait]
impl QueueEntryRepository for SqliteQueueEntryRepository {
    async fn find_by_id(&self, id: QueueEntryId) -> Result<Option<QueueEntry>> {
        let row = sqlx::query(
            r#"
            SELECT id, patient_id, department_id, scheduled_date, status
            FROM queue_entries
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => {
                let raw_status: String = row.try_get("status").map_err(map_sqlx_error)?;
                Ok(Some(QueueEntry {
                    id: row.try_get("id").map_err(map_sqlx_error)?,
                    patient_id: row.try_get("patient_id").map_err(map_sqlx_error)?,
                    department_id: row.try_get("department_id").map_err(map_sqlx_error)?,
                    scheduled_date: row.try_get("scheduled_date").map_err(map_sqlx_error)?,
                    status: parse_status(&raw_status)?,
                }))
            }
            None => Ok(None),
        }
    }

    async fn set_status(
        &self,
        id: QueueEntryId,
        expected: QueueStatus,
        to: QueueStatus,
    ) -> Result<()> {
        let result = sqlx::query("UPDATE queue_entries SET status = ? WHERE id = ? AND status = ?")
            .bind(to.to_string())
            .bind(id)
            .bind(expected.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            // The entry vanished or advanced under a concurrent request
            return Err(antrean_core::error::AppError::Conflict(format!(
                "queue entry {} was modified concurrently",
                id
            )));
        }
        Ok(())
    }

    async fn count_for_doctor(&self, query: &DoctorQueueQuery) -> Result<i64> {
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM queue_entries q
            JOIN departments d ON d.id = q.department_id
            WHERE d.doctor_uuid = ? AND q.scheduled_date = ?{}
            "#,
            status_filter(&query.statuses)
        );

        let mut q = sqlx::query_scalar::<_, i64>(&sql)
            .bind(&query.doctor_uuid)
            .bind(query.date);
        for status in &query.statuses {
            q = q.bind(status.to_string());
        }

        q.fetch_one(&self.pool).await.map_err(map_sqlx_error)
    }

    async fn fetch_for_doctor(
        &self,
        query: &DoctorQueueQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<DoctorQueueRow>> {
        let sql = format!(
            r#"
            SELECT p.insurance_number,
                   p.name AS patient_name,
                   u.username AS doctor,
                   d.name AS department,
                   q.status
            FROM queue_entries q
            JOIN patients p ON p.id = q.patient_id
            JOIN departments d ON d.id = q.department_id
            JOIN users u ON u.uuid = d.doctor_uuid
            WHERE d.doctor_uuid = ? AND q.scheduled_date = ?{}
            ORDER BY q.id
            LIMIT ? OFFSET ?
            "#,
            status_filter(&query.statuses)
        );

        let mut q = sqlx::query(&sql)
            .bind(&query.doctor_uuid)
            .bind(query.date);
        for status in &query.statuses {
            q = q.bind(status.to_string());
        }
        let rows = q
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|row| {
                let raw_status: String = row.try_get("status").map_err(map_sqlx_error)?;
                Ok(DoctorQueueRow {
                    insurance_number: row.try_get("insurance_number").map_err(map_sqlx_error)?,
                    patient_name: row.try_get("patient_name").map_err(map_sqlx_error)?,
                    doctor: row.try_get("doctor").map_err(map_sqlx_error)?,
                    department: row.try_get("department").map_err(map_sqlx_error)?,
                    status: parse_status(&raw_status)?,
                })
            })
            .collect()
    }

    async fn count_pickup(&self, query: &PickupQueueQuery) -> Result<i64> {
        // Same join chain as fetch_pickup, count projection only; the
        // departments/users joins must match or the count drifts from
        // the page for departments without an assigned doctor
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM prescriptions r
            JOIN patients p ON p.id = r.patient_id
            JOIN queue_entries q
              ON q.patient_id = p.id
             AND q.scheduled_date = ?
             AND q.status = ?
            JOIN departments d ON d.id = q.department_id
            JOIN users u ON u.uuid = d.doctor_uuid
            "#,
        )
        .bind(query.date)
        .bind(QueueStatus::Pickup.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn fetch_pickup(
        &self,
        query: &PickupQueueQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<PickupQueueRow>> {
        let rows = sqlx::query(
            r#"
            SELECT p.insurance_number,
                   p.name AS patient_name,
                   u.username AS doctor,
                   d.name AS department,
                   q.status,
                   r.diagnosis,
                   r.notes AS prescription_notes
            FROM prescriptions r
            JOIN patients p ON p.id = r.patient_id
            JOIN queue_entries q
              ON q.patient_id = p.id
             AND q.scheduled_date = ?
             AND q.status = ?
            JOIN departments d ON d.id = q.department_id
            JOIN users u ON u.uuid = d.doctor_uuid
            ORDER BY r.id, q.id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(query.date)
        .bind(QueueStatus::Pickup.to_string())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|row| {
                let raw_status: String = row.try_get("status").map_err(map_sqlx_error)?;
                Ok(PickupQueueRow {
                    insurance_number: row.try_get("insurance_number").map_err(map_sqlx_error)?,
                    patient_name: row.try_get("patient_name").map_err(map_sqlx_error)?,
                    doctor: row.try_get("doctor").map_err(map_sqlx_error)?,
                    department: row.try_get("department").map_err(map_sqlx_error)?,
                    status: parse_status(&raw_status)?,
                    diagnosis: row.try_get("diagnosis").map_err(map_sqlx_error)?,
                    prescription_notes: row
                        .try_get("prescription_notes")
                        .map_err(map_sqlx_error)?,
                })
            })
            .collect()
    }
}
