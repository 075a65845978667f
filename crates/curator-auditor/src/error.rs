//! Auditor error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading auditor policies
#[derive(Debug, Error)]
pub enum AuditorError {
    /// A policy file could not be read
    #[error("failed to read policy file {path}: {source}")]
    Io {
        /// The unreadable path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A policy file is not valid JSON for its table
    #[error("invalid policy file: {0}")]
    Json(#[from] serde_json::Error),
}
