//! Full validation gate: parse, schema, sanitization, structure, similarity.
//!
//! Every check runs over every record before anything is reported; a failing
//! record never short-circuits the rest of the corpus.

use crate::commands::{CommandContext, CommandStatus};
use crate::error::Result;
use crate::output::{Finding, Severity};
use curator_auditor::SimilarityDetector;
use curator_frontmatter::{load_catalog, FullParser, LoadOutcome};
use curator_gatekeeper::{LifecycleAuditor, SchemaValidator};
use tracing::debug;

/// Run the full gate over the catalog
pub fn execute_validate(ctx: &CommandContext) -> Result<CommandStatus> {
    let outcome = load_catalog(&ctx.patterns_dir, &FullParser::new())?;
    let findings = collect_findings(ctx, &outcome)?;

    debug!(findings = findings.len(), "validate pass complete");
    ctx.formatter.findings(&findings);

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;

    if errors > 0 {
        ctx.formatter.error(&format!(
            "{} record(s) checked: {} error(s), {} warning(s)",
            outcome.catalog.len(),
            errors,
            warnings
        ));
        Ok(CommandStatus::FindingsFailed)
    } else {
        ctx.formatter.success(&format!(
            "{} record(s) checked: 0 errors, {} warning(s)",
            outcome.catalog.len(),
            warnings
        ));
        Ok(CommandStatus::Clean)
    }
}

/// Run every check phase and collect the findings, all attributed by the
/// record's file path
fn collect_findings(ctx: &CommandContext, outcome: &LoadOutcome) -> Result<Vec<Finding>> {
    let mut findings: Vec<Finding> = Vec::new();

    for (path, error) in &outcome.parse_failures {
        findings.push(Finding::error(
            path.display().to_string(),
            "parse",
            error.to_string(),
        ));
    }

    let validator = SchemaValidator::new(ctx.tables.schema.clone());
    for (path, error) in validator.validate_catalog(&outcome.catalog) {
        findings.push(Finding::error(
            path.display().to_string(),
            "schema",
            error.to_string(),
        ));
    }

    let scanner = ctx.tables.sanitization.compile()?;
    let lifecycle = LifecycleAuditor::new(ctx.tables.lifecycle.clone());
    for record in outcome.catalog.iter() {
        let path = record.path.display().to_string();

        for error in validator.validate(&record.header) {
            findings.push(Finding::error(path.clone(), "schema", error.to_string()));
        }

        // Scan the raw file text: front matter leaks secrets as readily as
        // the body does.
        let raw = std::fs::read_to_string(ctx.patterns_dir.join(&record.path))?;
        let report = scanner.scan(&raw);
        for rule in &report.blocked {
            findings.push(Finding::error(
                path.clone(),
                "sanitize",
                format!("matched block rule '{}'", rule),
            ));
        }
        for rule in &report.warned {
            findings.push(Finding::warning(
                path.clone(),
                "sanitize",
                format!("matched warn rule '{}'", rule),
            ));
        }

        for failure in lifecycle.audit(record) {
            findings.push(Finding::error(path.clone(), "structure", failure.to_string()));
        }
    }

    // Similarity warnings name record ids; attribution stays by file path
    // like every other phase
    let path_of = |id: &str| {
        outcome
            .catalog
            .get(id)
            .map(|r| r.path.display().to_string())
            .unwrap_or_else(|| id.to_string())
    };
    let detector = SimilarityDetector::new(ctx.tables.similarity.clone());
    for warning in detector.detect(&outcome.catalog) {
        findings.push(Finding::warning(
            path_of(&warning.left),
            "similarity",
            format!(
                "'{}' is a likely duplicate of '{}' (tag overlap {}, title ratio {:.2})",
                warning.left, warning.right, warning.metrics.tag_overlap, warning.metrics.title_ratio
            ),
        ));
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::output::Formatter;
    use crate::rules::RuleTables;
    use std::fs;
    use std::path::Path;

    fn context(patterns_dir: &Path) -> CommandContext {
        CommandContext {
            patterns_dir: patterns_dir.to_path_buf(),
            tables: RuleTables::default(),
            formatter: Formatter::new(OutputFormat::Quiet, false),
        }
    }

    fn write_titled(dir: &Path, name: &str, id: &str, title: &str) {
        let text = format!(
            "---\nid: {id}\ntitle: {title}\ntype: other\nstatus: draft\n\
             confidence: low\ndomain: database\ntags:\n  - pool\nsanitized: true\n---\nBody.\n"
        );
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_similarity_findings_are_attributed_to_file_paths() {
        let dir = tempfile::tempdir().unwrap();
        write_titled(dir.path(), "a.md", "pat-a", "Connection pool exhaustion");
        write_titled(dir.path(), "b.md", "pat-b", "Connection pool exhaustions");

        let ctx = context(dir.path());
        let outcome = load_catalog(&ctx.patterns_dir, &FullParser::new()).unwrap();
        let findings = collect_findings(&ctx, &outcome).unwrap();

        let similarity: Vec<&Finding> =
            findings.iter().filter(|f| f.phase == "similarity").collect();
        assert_eq!(similarity.len(), 1);
        assert_eq!(similarity[0].path, "a.md");
        assert!(similarity[0].message.contains("pat-b"));
    }
}
