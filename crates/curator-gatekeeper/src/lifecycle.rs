//! Lifecycle/structural auditing of published records
//!
//! Only `status = validated` triggers these checks; a draft may be as
//! messy as its author likes. Status transitions themselves are never
//! enforced - runs are stateless, so there is no prior status to compare
//! against.

use crate::GatekeeperError;
use curator_domain::PatternRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Declarative policy for what a validated record must contain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecyclePolicy {
    /// Required body section headings, keyed by record type
    #[serde(default = "default_required_sections")]
    pub required_sections: BTreeMap<String, Vec<String>>,

    /// Minimum body length, in characters, after the header
    #[serde(default = "default_min_body_chars")]
    pub min_body_chars: usize,

    /// Metadata fields that must be present and non-empty once validated
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,
}

fn default_required_sections() -> BTreeMap<String, Vec<String>> {
    let section_list = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    BTreeMap::from([
        (
            "troubleshooting".to_string(),
            section_list(&["Context", "Symptoms", "Root Cause", "Fix", "Verification"]),
        ),
        (
            "implementation".to_string(),
            section_list(&["Context", "Approach", "Steps", "Verification"]),
        ),
        (
            "anti-pattern".to_string(),
            section_list(&["Context", "The Anti-Pattern", "Why It Fails", "Better Alternative"]),
        ),
        (
            "architecture".to_string(),
            section_list(&["Context", "Decision", "Consequences"]),
        ),
        ("other".to_string(), Vec::new()),
    ])
}

fn default_min_body_chars() -> usize {
    200
}

fn default_required_fields() -> Vec<String> {
    ["maintainers", "last_verified", "review_by"]
        .map(String::from)
        .to_vec()
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            required_sections: default_required_sections(),
            min_body_chars: default_min_body_chars(),
            required_fields: default_required_fields(),
        }
    }
}

impl LifecyclePolicy {
    /// Load a lifecycle policy from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, GatekeeperError> {
        let text = std::fs::read_to_string(path).map_err(|source| GatekeeperError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// One structural finding on a validated record.
///
/// Each missing section or field is its own failure so a human can fix each
/// one; nothing is aggregated into an opaque message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralFailure {
    /// A required body section heading is absent
    MissingSection {
        /// The expected heading
        section: String,
    },

    /// The body is shorter than the configured minimum
    BodyTooShort {
        /// Actual character count
        actual: usize,
        /// Configured minimum
        minimum: usize,
    },

    /// A metadata field required for validated records is absent or empty
    MissingField {
        /// The field
        field: String,
    },
}

impl fmt::Display for StructuralFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralFailure::MissingSection { section } => {
                write!(f, "validated record lacks a '{}' section", section)
            }
            StructuralFailure::BodyTooShort { actual, minimum } => {
                write!(f, "body is {} characters, minimum is {}", actual, minimum)
            }
            StructuralFailure::MissingField { field } => {
                write!(f, "validated record lacks metadata field '{}'", field)
            }
        }
    }
}

/// Audits validated records against a [`LifecyclePolicy`]
pub struct LifecycleAuditor {
    policy: LifecyclePolicy,
}

impl LifecycleAuditor {
    /// Create an auditor over the given policy
    pub fn new(policy: LifecyclePolicy) -> Self {
        Self { policy }
    }

    /// Create an auditor over the default policy
    pub fn default_policy() -> Self {
        Self::new(LifecyclePolicy::default())
    }

    /// Audit one record. Non-validated records always pass.
    pub fn audit(&self, record: &PatternRecord) -> Vec<StructuralFailure> {
        if !record.is_validated() {
            return Vec::new();
        }

        let mut failures = Vec::new();

        if let Some(kind) = record.pattern_type {
            if let Some(sections) = self.policy.required_sections.get(kind.as_str()) {
                for section in sections {
                    if !has_section(&record.body, section) {
                        failures.push(StructuralFailure::MissingSection {
                            section: section.clone(),
                        });
                    }
                }
            }
        }

        let body_chars = record.body.chars().count();
        if body_chars < self.policy.min_body_chars {
            failures.push(StructuralFailure::BodyTooShort {
                actual: body_chars,
                minimum: self.policy.min_body_chars,
            });
        }

        for field in &self.policy.required_fields {
            let present = record.header.non_empty_scalar(field).is_some()
                || !record.header.string_list(field).is_empty();
            if !present {
                failures.push(StructuralFailure::MissingField {
                    field: field.clone(),
                });
            }
        }

        failures
    }
}

/// A section is a Markdown heading whose text starts with the required name,
/// compared case-insensitively
fn has_section(body: &str, section: &str) -> bool {
    let wanted = section.to_lowercase();
    body.lines().any(|line| {
        let trimmed = line.trim_start();
        trimmed.starts_with('#')
            && trimmed
                .trim_start_matches('#')
                .trim()
                .to_lowercase()
                .starts_with(&wanted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_domain::{Header, Value};

    fn troubleshooting_body() -> String {
        let mut body = String::from(
            "## Context\ntext\n## Symptoms\ntext\n## Root Cause\ntext\n## Fix\ntext\n## Verification\ntext\n",
        );
        body.push_str(&"padding ".repeat(30));
        body
    }

    fn record(status: &str, body: &str) -> PatternRecord {
        let mut header = Header::new();
        for (key, value) in [
            ("id", "pat-001"),
            ("type", "troubleshooting"),
            ("status", status),
            ("maintainers", "team-platform"),
            ("last_verified", "2024-01-01"),
            ("review_by", "2025-01-01"),
        ] {
            header.insert(key, Value::Scalar(value.to_string()));
        }
        PatternRecord::from_parts("p.md", header, body.to_string())
    }

    #[test]
    fn test_complete_validated_record_passes() {
        let auditor = LifecycleAuditor::default_policy();
        let record = record("validated", &troubleshooting_body());
        assert!(auditor.audit(&record).is_empty());
    }

    #[test]
    fn test_draft_is_never_audited() {
        let auditor = LifecycleAuditor::default_policy();
        let record = record("draft", "tiny");
        assert!(auditor.audit(&record).is_empty());
    }

    #[test]
    fn test_deprecated_is_never_audited() {
        let auditor = LifecycleAuditor::default_policy();
        let record = record("deprecated", "");
        assert!(auditor.audit(&record).is_empty());
    }

    #[test]
    fn test_each_missing_section_is_a_distinct_failure() {
        let auditor = LifecycleAuditor::default_policy();
        let mut body = String::from("## Context\ntext\n## Fix\ntext\n");
        body.push_str(&"padding ".repeat(30));
        let record = record("validated", &body);

        let failures = auditor.audit(&record);
        let missing: Vec<_> = failures
            .iter()
            .filter_map(|f| match f {
                StructuralFailure::MissingSection { section } => Some(section.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(missing, vec!["Symptoms", "Root Cause", "Verification"]);
    }

    #[test]
    fn test_short_body_fails() {
        let auditor = LifecycleAuditor::new(LifecyclePolicy {
            min_body_chars: 1000,
            ..Default::default()
        });
        let record = record("validated", &troubleshooting_body());

        let failures = auditor.audit(&record);
        assert!(failures
            .iter()
            .any(|f| matches!(f, StructuralFailure::BodyTooShort { minimum: 1000, .. })));
    }

    #[test]
    fn test_missing_maintainers_fails() {
        let auditor = LifecycleAuditor::default_policy();
        let mut record = record("validated", &troubleshooting_body());
        let slim: Header = record
            .header
            .iter()
            .filter(|(k, _)| k.as_str() != "maintainers")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        record.header = slim;

        let failures = auditor.audit(&record);
        assert_eq!(
            failures,
            vec![StructuralFailure::MissingField {
                field: "maintainers".to_string()
            }]
        );
    }

    #[test]
    fn test_section_match_is_case_insensitive() {
        assert!(has_section("# ROOT CAUSE\n", "Root Cause"));
        assert!(has_section("### root cause analysis\n", "Root Cause"));
        assert!(!has_section("Root Cause without a heading\n", "Root Cause"));
    }
}
