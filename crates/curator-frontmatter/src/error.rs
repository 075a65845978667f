//! Front-matter parsing and catalog loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors from splitting or parsing a single document
#[derive(Debug, Error)]
pub enum ParseError {
    /// The opening sentinel was never closed
    #[error("front matter opened on line {line} is never closed")]
    Unterminated {
        /// Line number of the opening sentinel (1-based)
        line: usize,
    },

    /// The header block is not valid YAML
    #[error("invalid front matter near line {line}: {message}")]
    Yaml {
        /// Approximate line within the document (1-based)
        line: usize,
        /// Underlying parser diagnostic
        message: String,
    },

    /// The header block parsed but is not a mapping
    #[error("front matter is not a key/value mapping")]
    NotAMapping,
}

/// Errors from loading a catalog directory
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog root does not exist or is not a directory
    #[error("catalog root {0} is not a directory")]
    NotADirectory(PathBuf),

    /// A file or directory could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// The unreadable path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
