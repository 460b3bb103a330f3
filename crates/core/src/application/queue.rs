// Queue Entry Manager - listing and status transitions

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;

use crate::domain::{PageInfo, PageRequest, QueueEntryId, QueueStatus};
use crate::error::{AppError, Result};
use crate::port::clock::{clinic_date, Clock};
use crate::port::{
    DoctorQueueQuery, DoctorQueueRow, PickupQueueQuery, PickupQueueRow, QueueEntryRepository,
};

/// Outcome of a status transition, echoed in the success message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub id: QueueEntryId,
    pub status: QueueStatus,
}

/// Queue Service
///
/// "Today" comes from the injected clock plus the explicit clinic
/// offset; nothing here reads the system timezone.
pub struct QueueService {
    queue_repo: Arc<dyn QueueEntryRepository>,
    clock: Arc<dyn Clock>,
    clinic_offset: FixedOffset,
}

impl QueueService {
    pub fn new(
        queue_repo: Arc<dyn QueueEntryRepository>,
        clock: Arc<dyn Clock>,
        clinic_offset: FixedOffset,
    ) -> Self {
        Self {
            queue_repo,
            clock,
            clinic_offset,
        }
    }

    fn today(&self) -> NaiveDate {
        clinic_date(self.clock.now_utc(), self.clinic_offset)
    }

    /// Today's WAITING/CHECKING entries for one doctor.
    ///
    /// One query value drives both the count and the page fetch, so the
    /// pagination total and the returned rows always agree on the
    /// filter set.
    pub async fn list_for_doctor(
        &self,
        page: PageRequest,
        doctor_uuid: &str,
    ) -> Result<(Vec<DoctorQueueRow>, PageInfo)> {
        let query = DoctorQueueQuery {
            doctor_uuid: doctor_uuid.to_string(),
            date: self.today(),
            statuses: vec![QueueStatus::Waiting, QueueStatus::Checking],
        };

        let total = self.queue_repo.count_for_doctor(&query).await?;
        let rows = self
            .queue_repo
            .fetch_for_doctor(&query, page.offset(), page.limit())
            .await?;

        Ok((rows, PageInfo::new(page, total)))
    }

    /// Today's prescription-pickup queue: one row per
    /// (prescription, PICKUP queue entry) pair, with diagnosis and notes.
    pub async fn list_pickup(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<PickupQueueRow>, PageInfo)> {
        let query = PickupQueueQuery { date: self.today() };

        let total = self.queue_repo.count_pickup(&query).await?;
        let rows = self
            .queue_repo
            .fetch_pickup(&query, page.offset(), page.limit())
            .await?;

        Ok((rows, PageInfo::new(page, total)))
    }

    /// Advance a queue entry to a new status.
    ///
    /// Missing entry -> NotFound; illegal transition -> domain error;
    /// neither performs a write. The write itself is conditional on the
    /// status the transition was validated against, so a request that
    /// lost a race fails instead of clobbering the newer status.
    pub async fn update_status(
        &self,
        id: QueueEntryId,
        status: QueueStatus,
    ) -> Result<StatusUpdate> {
        let mut entry = self
            .queue_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("queue entry {} not found", id)))?;

        let current = entry.status;
        entry.transition_to(status)?;
        self.queue_repo.set_status(id, current, status).await?;

        tracing::info!(queue_entry = id, status = %status, "queue status updated");
        Ok(StatusUpdate { id, status })
    }
}
