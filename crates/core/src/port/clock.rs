// Clock Port (for testability)
//
// "Today" is never read from ambient global state: services take the
// reference instant from an injected clock and an explicit clinic
// timezone offset.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Clock interface (allows fixing "now" in tests)
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// System clock (production)
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The clinic-local calendar date for a given instant.
///
/// Scheduled dates are stored as clinic-local dates, so the "today"
/// window of a listing is a single date equality rather than a
/// midnight-to-midnight timestamp range.
pub fn clinic_date(now: DateTime<Utc>, clinic_offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&clinic_offset).date_naive()
}
