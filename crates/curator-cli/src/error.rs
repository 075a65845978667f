//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors. All of these are script/environment problems; rule
/// findings are not errors and travel through command results instead.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog loading error
    #[error("Catalog error: {0}")]
    Load(#[from] curator_frontmatter::LoadError),

    /// Rule table error
    #[error("Rule error: {0}")]
    Gatekeeper(#[from] curator_gatekeeper::GatekeeperError),

    /// Policy table error
    #[error("Policy error: {0}")]
    Auditor(#[from] curator_auditor::AuditorError),

    /// Index writing error
    #[error("Index error: {0}")]
    Index(#[from] curator_index::IndexError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
