// Patient Domain Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registered patient. `insurance_number` is the national
/// health-insurance (BPJS) identifier, unique per patient; uniqueness
/// is enforced by the storage layer, not by the registration pre-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub insurance_number: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub department_id: i64,
}

/// Patient fields prior to insertion (the id is assigned by storage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub insurance_number: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub department_id: i64,
}
