// SQLite PatientRepository Implementation

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use antrean_core::domain::{NewPatient, Patient};
use antrean_core::error::Result;
use antrean_core::port::PatientRepository;

use crate::error::map_sqlx_error;

pub struct SqlitePatientRepository {
    pool: SqlitePool,
}

impl SqlitePatientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_patient(row: &sqlx::sqlite::SqliteRow) -> Result<Patient> {
    Ok(Patient {
        id: row.try_get("id").map_err(map_sqlx_error)?,
        insurance_number: row.try_get("insurance_number").map_err(map_sqlx_error)?,
        name: row.try_get("name").map_err(map_sqlx_error)?,
        birth_date: row.try_get("birth_date").map_err(map_sqlx_error)?,
        department_id: row.try_get("department_id").map_err(map_sqlx_error)?,
    })
}

#[async_trait]
impl PatientRepository for SqlitePatientRepository {
    async fn insert(&self, patient: &NewPatient) -> Result<Patient> {
        // A duplicate insurance number trips the UNIQUE index and
        // surfaces as Conflict via map_sqlx_error
        let result = sqlx::query(
            r#"
            INSERT INTO patients (insurance_number, name, birth_date, department_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&patient.insurance_number)
        .bind(&patient.name)
        .bind(patient.birth_date)
        .bind(patient.department_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Patient {
            id: result.last_insert_rowid(),
            insurance_number: patient.insurance_number.clone(),
            name: patient.name.clone(),
            birth_date: patient.birth_date,
            department_id: patient.department_id,
        })
    }

    async fn find_by_insurance_number(&self, insurance_number: &str) -> Result<Option<Patient>> {
        let row = sqlx::query(
            r#"
            SELECT id, insurance_number, name, birth_date, department_id
            FROM patients
            WHERE insurance_number = ?
            "#,
        )
        .bind(insurance_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_patient).transpose()
    }
}
