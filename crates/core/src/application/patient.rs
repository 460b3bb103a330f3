// Patient Registration Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::NewPatient;
use crate::error::{AppError, Result, ValidationErrors};
use crate::port::{DepartmentRepository, PatientRepository};

const INSURANCE_NUMBER_LEN: usize = 13;
const MAX_NAME_LEN: usize = 100;

/// Registration request as received from the API layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    pub insurance_number: String,
    pub name: String,
    /// YYYY-MM-DD
    pub birth_date: String,
    pub department_id: i64,
}

/// Created patient projection returned on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientResponse {
    pub id: i64,
    pub insurance_number: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub department: String,
}

/// Validate the request shape, collecting every violation.
/// Returns the parsed birth date on success.
fn validate(req: &RegisterPatientRequest) -> std::result::Result<NaiveDate, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if req.insurance_number.len() != INSURANCE_NUMBER_LEN
        || !req.insurance_number.bytes().all(|b| b.is_ascii_digit())
    {
        errors.push(
            "insurance_number",
            format!("must be {} digits", INSURANCE_NUMBER_LEN),
        );
    }

    let name = req.name.trim();
    if name.is_empty() {
        errors.push("name", "must not be empty");
    } else if name.len() > MAX_NAME_LEN {
        errors.push("name", format!("must be at most {} characters", MAX_NAME_LEN));
    }

    let birth_date = match NaiveDate::parse_from_str(&req.birth_date, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push("birth_date", "must be a YYYY-MM-DD date");
            None
        }
    };

    if req.department_id < 1 {
        errors.push("department_id", "must be a positive id");
    }

    match (errors.is_empty(), birth_date) {
        (true, Some(date)) => Ok(date),
        _ => Err(errors),
    }
}

/// Patient Registration Service
pub struct PatientService {
    patient_repo: Arc<dyn PatientRepository>,
    department_repo: Arc<dyn DepartmentRepository>,
}

impl PatientService {
    pub fn new(
        patient_repo: Arc<dyn PatientRepository>,
        department_repo: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            patient_repo,
            department_repo,
        }
    }

    /// Register a new patient.
    ///
    /// The duplicate lookup is a fast path only: the UNIQUE constraint
    /// on the insurance number is the source of truth, and a constraint
    /// conflict on insert reports the same duplicate error.
    pub async fn register(&self, req: RegisterPatientRequest) -> Result<PatientResponse> {
        tracing::debug!(insurance_number = %req.insurance_number, "registering patient");

        let birth_date = validate(&req).map_err(AppError::Validation)?;

        let department = self
            .department_repo
            .find_by_id(req.department_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("department not found".to_string()))?;

        if self
            .patient_repo
            .find_by_insurance_number(&req.insurance_number)
            .await?
            .is_some()
        {
            return Err(duplicate_insurance());
        }

        let new_patient = NewPatient {
            insurance_number: req.insurance_number,
            name: req.name.trim().to_string(),
            birth_date,
            department_id: req.department_id,
        };

        let patient = self
            .patient_repo
            .insert(&new_patient)
            .await
            .map_err(|err| match err {
                AppError::Conflict(_) => duplicate_insurance(),
                other => other,
            })?;

        tracing::info!(patient = patient.id, "patient registered");
        Ok(PatientResponse {
            id: patient.id,
            insurance_number: patient.insurance_number,
            name: patient.name,
            birth_date: patient.birth_date,
            department: department.name,
        })
    }
}

fn duplicate_insurance() -> AppError {
    AppError::BadRequest("insurance number already registered".to_string())
}
