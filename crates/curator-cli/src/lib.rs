//! Curator CLI library.
//!
//! The full catalog-integrity engine: loads a pattern catalog, composes the
//! gatekeeper and auditor phases, and renders findings. Each subcommand is a
//! full, stateless re-scan of the corpus.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod rules;

pub use cli::{Cli, Command};
pub use commands::{CommandContext, CommandStatus};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use rules::RuleTables;
