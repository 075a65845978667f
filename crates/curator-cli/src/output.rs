//! Output formatting for CLI results

use crate::config::OutputFormat;
use colored::Colorize;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Severity of a single finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the run (exit code 1)
    Error,
    /// Reported but does not block
    Warning,
}

/// One rendered finding: a record, a check phase, and what went wrong
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Path of the offending record, relative to the catalog root
    pub path: String,
    /// Which check produced the finding
    pub phase: &'static str,
    /// Severity of the finding
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    /// A blocking finding
    pub fn error(path: impl Into<String>, phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            phase,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// An advisory finding
    pub fn warning(
        path: impl Into<String>,
        phase: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            phase,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Formats command output according to the configured format
pub struct Formatter {
    format: OutputFormat,
    use_color: bool,
}

impl Formatter {
    /// Create a new formatter
    pub fn new(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Print a success message (suppressed in quiet mode)
    pub fn success(&self, message: &str) {
        if self.format == OutputFormat::Quiet {
            return;
        }
        if self.use_color {
            println!("{} {}", "✓".green().bold(), message);
        } else {
            println!("OK {}", message);
        }
    }

    /// Print an informational message (suppressed in quiet mode)
    pub fn info(&self, message: &str) {
        if self.format == OutputFormat::Quiet {
            return;
        }
        if self.use_color {
            println!("{} {}", "i".blue().bold(), message);
        } else {
            println!("{}", message);
        }
    }

    /// Print an error summary to stderr
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "✗".red().bold(), message);
        } else {
            eprintln!("ERROR {}", message);
        }
    }

    /// Render a batch of findings in the configured format
    pub fn findings(&self, findings: &[Finding]) {
        if findings.is_empty() {
            return;
        }
        match self.format {
            OutputFormat::Json => {
                // Serializing a slice of plain structs cannot fail
                println!(
                    "{}",
                    serde_json::to_string_pretty(findings).unwrap_or_default()
                );
            }
            OutputFormat::Quiet => {
                for finding in findings {
                    println!(
                        "{}\t{}\t{}\t{}",
                        finding.path,
                        finding.phase,
                        severity_label(finding.severity),
                        finding.message
                    );
                }
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Path", "Phase", "Severity", "Message"]);
                for finding in findings {
                    builder.push_record([
                        finding.path.as_str(),
                        finding.phase,
                        severity_label(finding.severity),
                        finding.message.as_str(),
                    ]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                println!("{}", table);
            }
        }
    }

    /// Print pre-rendered text verbatim, regardless of format
    pub fn raw(&self, text: &str) {
        println!("{}", text);
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_constructors() {
        let e = Finding::error("a.md", "schema", "missing field: id");
        assert_eq!(e.severity, Severity::Error);
        let w = Finding::warning("a.md", "similarity", "near-duplicate of b.md");
        assert_eq!(w.severity, Severity::Warning);
    }

    #[test]
    fn test_findings_serialize_to_json() {
        let findings = vec![Finding::error("a.md", "schema", "missing field: id")];
        let json = serde_json::to_string(&findings).unwrap();
        assert!(json.contains("\"severity\":\"error\""));
        assert!(json.contains("\"phase\":\"schema\""));
    }
}
