// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures. Traversal errors are recovered inside the walker and
/// never reach this taxonomy; anything here aborts the whole report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read size of '{path}': {source}")]
    FileSize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report '{path}': {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
