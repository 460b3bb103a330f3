// Patient Repository Port (Interface)

use async_trait::async_trait;

use crate::domain::{NewPatient, Patient};
use crate::error::Result;

/// Repository interface for patient persistence
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Insert a new patient and return the stored row.
    ///
    /// A duplicate insurance number surfaces as `AppError::Conflict`
    /// from the storage UNIQUE constraint.
    async fn insert(&self, patient: &NewPatient) -> Result<Patient>;

    /// Find patient by insurance number
    async fn find_by_insurance_number(&self, insurance_number: &str) -> Result<Option<Patient>>;
}
