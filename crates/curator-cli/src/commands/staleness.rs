//! Staleness audit: overdue reviews, aging verification dates, references to
//! deprecated records.
//!
//! The full engine prints the JSON report and always exits clean; the
//! standalone `pattern-staleness` binary is the one whose exit code blocks
//! on overdue reviews.

use crate::cli::StalenessArgs;
use crate::commands::{CommandContext, CommandStatus};
use crate::config::Config;
use crate::error::{CliError, Result};
use chrono::Local;
use curator_auditor::{report, StalenessAuditor};
use curator_domain::date;
use curator_frontmatter::{load_catalog, FullParser};

/// Run the staleness audit and print the JSON report
pub fn execute_staleness(
    ctx: &CommandContext,
    config: &Config,
    args: &StalenessArgs,
) -> Result<CommandStatus> {
    let today = match &args.today {
        Some(raw) => date::parse_date(raw).ok_or_else(|| {
            CliError::InvalidInput(format!("--today must be YYYY-MM-DD, got '{}'", raw))
        })?,
        None => Local::now().date_naive(),
    };
    let max_days = args
        .max_verified_days
        .unwrap_or(config.staleness.max_last_verified_days);
    if max_days <= 0 {
        return Err(CliError::InvalidInput(format!(
            "--max-verified-days must be positive, got {}",
            max_days
        )));
    }

    let outcome = load_catalog(&ctx.patterns_dir, &FullParser::new())?;
    let auditor = StalenessAuditor::new(today, max_days);
    let audit = auditor.audit(&outcome.catalog);

    let generated_at = Local::now().to_rfc3339();
    let value = report::to_json(&audit, &generated_at);
    ctx.formatter.raw(&serde_json::to_string_pretty(&value)?);

    Ok(CommandStatus::Clean)
}
