//! # homesim-adapter-logfile
//!
//! Append-only text file implementation of the [`LogSink`] port.
//!
//! Each append opens the file (creating it if absent), writes one
//! newline-terminated line, and closes it again. The file is never
//! truncated or rotated; every run of the simulator extends the same
//! record.
//!
//! ## Dependency rule
//!
//! Depends on `homesim-app` (port traits) and `homesim-domain` only.

use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use homesim_app::ports::LogSink;
use homesim_domain::error::HomeSimError;
use homesim_domain::log::LogEntry;

/// Sensor log sink backed by an append-only text file.
#[derive(Debug, Clone)]
pub struct FileLogSink {
    path: PathBuf,
}

impl FileLogSink {
    /// Create a sink writing to `path`. The file is created lazily on the
    /// first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this sink appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLogSink {
    fn append(&self, entry: &LogEntry) -> impl Future<Output = Result<(), HomeSimError>> + Send {
        let line = entry.line();
        let path = self.path.clone();
        async move {
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .await?;
            file.write_all(line.as_bytes()).await?;
            file.flush().await?;
            Ok(())
        }
    }
}
