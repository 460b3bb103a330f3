// Queue Entry Repository Port (Interface)

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{QueueEntry, QueueEntryId, QueueStatus};
use crate::error::Result;

/// Predicate for the per-doctor day listing.
///
/// The same value is passed to `count_for_doctor` and
/// `fetch_for_doctor`, so pagination metadata and the data page cannot
/// apply different filter sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorQueueQuery {
    pub doctor_uuid: String,
    pub date: NaiveDate,
    /// Restrict to these statuses; empty means no status filter.
    pub statuses: Vec<QueueStatus>,
}

/// Predicate for the prescription-pickup listing: today's queue entries
/// holding a PICKUP slot, joined through their patient's prescriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupQueueQuery {
    pub date: NaiveDate,
}

/// Row projected for the doctor listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorQueueRow {
    pub insurance_number: String,
    pub patient_name: String,
    pub doctor: String,
    pub department: String,
    pub status: QueueStatus,
}

/// Row projected for the pickup listing: one row per
/// (prescription, queue entry) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickupQueueRow {
    pub insurance_number: String,
    pub patient_name: String,
    pub doctor: String,
    pub department: String,
    pub status: QueueStatus,
    pub diagnosis: String,
    pub prescription_notes: String,
}

/// Repository interface for queue entry persistence and listing
#[async_trait]
pub trait QueueEntryRepository: Send + Sync {
    /// Find queue entry by ID
    async fn find_by_id(&self, id: QueueEntryId) -> Result<Option<QueueEntry>>;

    /// Persist a new status only while the stored status still equals
    /// `expected`; a concurrent change surfaces as `AppError::Conflict`
    /// instead of overwriting the newer status.
    async fn set_status(
        &self,
        id: QueueEntryId,
        expected: QueueStatus,
        to: QueueStatus,
    ) -> Result<()>;

    /// Count rows matching the doctor-listing predicate
    async fn count_for_doctor(&self, query: &DoctorQueueQuery) -> Result<i64>;

    /// Fetch one page of the doctor listing
    async fn fetch_for_doctor(
        &self,
        query: &DoctorQueueQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<DoctorQueueRow>>;

    /// Count rows matching the pickup-listing predicate
    async fn count_pickup(&self, query: &PickupQueueQuery) -> Result<i64>;

    /// Fetch one page of the pickup listing
    async fn fetch_pickup(
        &self,
        query: &PickupQueueQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<PickupQueueRow>>;
}
