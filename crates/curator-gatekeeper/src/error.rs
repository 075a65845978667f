//! Gatekeeper error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or compiling rule tables
#[derive(Debug, Error)]
pub enum GatekeeperError {
    /// A rule file could not be read
    #[error("failed to read rule file {path}: {source}")]
    Io {
        /// The unreadable path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A rule file is not valid JSON for its table
    #[error("invalid rule file: {0}")]
    Json(#[from] serde_json::Error),

    /// A sanitization rule's pattern failed to compile
    #[error("sanitization rule '{name}' has an invalid pattern: {message}")]
    Rule {
        /// The named rule
        name: String,
        /// Regex compiler diagnostic
        message: String,
    },
}
