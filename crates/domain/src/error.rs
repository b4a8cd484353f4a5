//! Common error type used across the workspace.

/// Errors surfaced by controller operations.
///
/// Out-of-range device indices are deliberately *not* represented here:
/// index validity is a caller contract, and violations panic.
#[derive(Debug, thiserror::Error)]
pub enum HomeSimError {
    /// Appending to the persistent sensor log failed.
    #[error("failed to append to the sensor log")]
    LogSink(#[from] std::io::Error),

    /// The controller task has stopped and can no longer serve requests.
    #[error("controller is no longer running")]
    ControllerClosed,
}
