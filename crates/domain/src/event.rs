//! Events — broadcast records of logged device changes.

use serde::{Deserialize, Serialize};

use crate::log::LogEntry;

/// A record of one logged property change, delivered to live observers.
///
/// `device_index` is the device's stable position in the controller's
/// discovery order, which presentation layers use to correlate the entry
/// with the widget it affects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub device_index: usize,
    pub entry: LogEntry,
}

impl Event {
    /// Create an event for the device at `device_index`.
    #[must_use]
    pub fn new(device_index: usize, entry: LogEntry) -> Self {
        Self {
            device_index,
            entry,
        }
    }
}
