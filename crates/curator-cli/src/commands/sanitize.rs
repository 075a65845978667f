//! Standalone sanitization scan.
//!
//! Scans the raw text of every record file, including those whose front
//! matter fails to parse - a leaked credential does not care whether the
//! header was well formed.

use crate::commands::{CommandContext, CommandStatus};
use crate::error::Result;
use crate::output::Finding;
use curator_frontmatter::{load_catalog, FullParser};
use std::path::PathBuf;

/// Scan every record for secret and PII patterns
pub fn execute_sanitize(ctx: &CommandContext) -> Result<CommandStatus> {
    let outcome = load_catalog(&ctx.patterns_dir, &FullParser::new())?;
    let scanner = ctx.tables.sanitization.compile()?;

    let mut paths: Vec<PathBuf> = outcome.catalog.iter().map(|r| r.path.clone()).collect();
    paths.extend(outcome.parse_failures.iter().map(|(p, _)| p.clone()));
    paths.sort();

    let mut findings: Vec<Finding> = Vec::new();
    let mut blocked = false;
    for path in &paths {
        let raw = std::fs::read_to_string(ctx.patterns_dir.join(path))?;
        let report = scanner.scan(&raw);
        blocked |= report.has_blocked();

        let display = path.display().to_string();
        for rule in &report.blocked {
            findings.push(Finding::error(
                display.clone(),
                "sanitize",
                format!("matched block rule '{}'", rule),
            ));
        }
        for rule in &report.warned {
            findings.push(Finding::warning(
                display.clone(),
                "sanitize",
                format!("matched warn rule '{}'", rule),
            ));
        }
    }

    ctx.formatter.findings(&findings);

    if blocked {
        ctx.formatter
            .error(&format!("{} file(s) scanned: blocking matches found", paths.len()));
        Ok(CommandStatus::FindingsFailed)
    } else {
        ctx.formatter
            .success(&format!("{} file(s) scanned: no blocking matches", paths.len()));
        Ok(CommandStatus::Clean)
    }
}
