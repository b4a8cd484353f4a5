//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for log entries and broadcast events.
pub type Timestamp = DateTime<Utc>;

/// `strftime` pattern for timestamps in sensor log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
