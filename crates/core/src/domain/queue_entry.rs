// Queue Entry ("antrian") Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, Result};
use chrono::NaiveDate;

/// Queue entry ID (database rowid)
pub type QueueEntryId = i64;

/// Visit status of a queue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueStatus {
    Waiting,
    Checking,
    Pickup,
    Done,
    Cancelled,
}

impl std::fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueStatus::Waiting => write!(f, "WAITING"),
            QueueStatus::Checking => write!(f, "CHECKING"),
            QueueStatus::Pickup => write!(f, "PICKUP"),
            QueueStatus::Done => write!(f, "DONE"),
            QueueStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl std::str::FromStr for QueueStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "WAITING" => Ok(QueueStatus::Waiting),
            "CHECKING" => Ok(QueueStatus::Checking),
            "PICKUP" => Ok(QueueStatus::Pickup),
            "DONE" => Ok(QueueStatus::Done),
            "CANCELLED" => Ok(QueueStatus::Cancelled),
            other => Err(DomainError::ValidationError(format!(
                "unknown queue status: {}",
                other
            ))),
        }
    }
}

impl QueueStatus {
    /// Transition table:
    ///
    /// ```text
    /// WAITING   -> CHECKING | CANCELLED
    /// CHECKING  -> PICKUP | DONE | CANCELLED
    /// PICKUP    -> DONE
    /// DONE      -> (terminal)
    /// CANCELLED -> (terminal)
    /// ```
    ///
    /// Re-setting the current status is not a transition and is rejected.
    pub fn can_transition_to(self, to: QueueStatus) -> bool {
        use QueueStatus::*;
        matches!(
            (self, to),
            (Waiting, Checking)
                | (Waiting, Cancelled)
                | (Checking, Pickup)
                | (Checking, Done)
                | (Checking, Cancelled)
                | (Pickup, Done)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, QueueStatus::Done | QueueStatus::Cancelled)
    }
}

/// Queue Entry Entity
///
/// Represents a patient's visit slot with a department on a given date.
/// Entries are created at check-in (outside this service's write scope),
/// listed per doctor/day, and advanced through the status table above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: QueueEntryId,
    pub patient_id: i64,
    pub department_id: i64,
    pub scheduled_date: NaiveDate,
    pub status: QueueStatus,
}

impl QueueEntry {
    /// Advance to a new status, enforcing the transition table.
    pub fn transition_to(&mut self, to: QueueStatus) -> Result<()> {
        if !self.status.can_transition_to(to) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}
