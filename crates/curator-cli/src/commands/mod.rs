//! Command implementations

mod index;
mod sanitize;
mod staleness;
mod validate;

pub use index::execute_index;
pub use sanitize::execute_sanitize;
pub use staleness::execute_staleness;
pub use validate::execute_validate;

use crate::output::Formatter;
use crate::rules::RuleTables;
use std::path::PathBuf;

/// Outcome of a command run, mapped to the process exit code by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// No blocking findings
    Clean,
    /// At least one blocking finding
    FindingsFailed,
}

/// Everything a command needs: where the catalog lives, which rule tables to
/// run, and how to render the results.
pub struct CommandContext {
    /// Absolute or root-relative path of the catalog directory
    pub patterns_dir: PathBuf,
    /// The four rule tables
    pub tables: RuleTables,
    /// Output renderer
    pub formatter: Formatter,
}
