//! Configuration management for the CLI

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration, loaded from `curator.toml` at the repository root
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub settings: Settings,

    /// Staleness thresholds
    #[serde(default)]
    pub staleness: StalenessSettings,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Staleness thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StalenessSettings {
    /// Age in days beyond which a last-verified date is reported
    #[serde(default = "default_max_verified_days")]
    pub max_last_verified_days: i64,
}

/// Output format preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table output
    #[default]
    Table,
    /// JSON output
    Json,
    /// Findings only, no decoration
    Quiet,
}

fn default_true() -> bool {
    true
}

fn default_max_verified_days() -> i64 {
    curator_auditor::DEFAULT_MAX_LAST_VERIFIED_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for StalenessSettings {
    fn default() -> Self {
        Self {
            max_last_verified_days: default_max_verified_days(),
        }
    }
}

impl Config {
    /// Load configuration from `<root>/curator.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("curator.toml");
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| CliError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}
