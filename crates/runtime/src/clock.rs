//! Wall-clock access for the runtime.
//!
//! game-core never reads time; the runtime stamps `completedAt` and
//! `lastUpdated` through a [`Clock`] so tests can pin the instant.

use chrono::{DateTime, Local, NaiveDate, Utc};

use game_core::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Today's date on the player's local calendar.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }

    fn now_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(self.now().timestamp_millis())
    }
}

/// System wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Converts an engine timestamp into a UTC instant.
///
/// Returns `None` outside chrono's representable range.
pub fn to_datetime(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(timestamp.as_millis())
}

pub fn from_datetime(instant: DateTime<Utc>) -> Timestamp {
    Timestamp::from_millis(instant.timestamp_millis())
}
