//! Log sink port — append-only persistence for sensor log entries.

use std::future::Future;

use homesim_domain::error::HomeSimError;
use homesim_domain::log::LogEntry;

/// Append-only sink for timestamped sensor log entries.
///
/// Every append is self-contained: implementations acquire and release any
/// underlying resource (file handle, connection) within the single call.
pub trait LogSink {
    /// Append one entry to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when the sink cannot be written.
    /// Append failures are surfaced to the caller, never swallowed.
    fn append(&self, entry: &LogEntry) -> impl Future<Output = Result<(), HomeSimError>> + Send;
}
