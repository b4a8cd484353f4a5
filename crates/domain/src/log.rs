//! Sensor log entries — timestamped records of device property changes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::{self, TIMESTAMP_FORMAT, Timestamp};

/// One timestamped line destined for the append-only sensor log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: Timestamp,
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(time::now(), message)
    }

    /// Create an entry with an explicit timestamp.
    #[must_use]
    pub fn at(timestamp: Timestamp, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    /// The entry as a single newline-terminated log line.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}
