//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Curator - catalog integrity engine for pattern records
#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(about = "Validate, scan, index, and audit a Markdown pattern catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Repository root containing the catalog directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Catalog directory, relative to the root
    #[arg(long, global = true, default_value = "patterns")]
    pub patterns: String,

    /// Directory of rule table overrides (JSON files), defaults to `<root>/rules`
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliFormat {
    /// Human-readable table output
    Table,
    /// JSON output
    Json,
    /// Findings only, no decoration
    Quiet,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full gate: schema, sanitization, structure, similarity
    Validate,

    /// Scan record text for secret and PII patterns only
    #[command(name = "sanitize-scan")]
    SanitizeScan,

    /// Rebuild the catalog index file
    Index,

    /// Report overdue reviews, stale verification dates, and deprecated references
    Staleness(StalenessArgs),
}

/// Arguments for the staleness command
#[derive(clap::Args, Debug)]
pub struct StalenessArgs {
    /// Evaluation date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<String>,

    /// Age threshold in days for the last-verified check
    #[arg(long, env = "CURATOR_MAX_VERIFIED_DAYS")]
    pub max_verified_days: Option<i64>,
}
