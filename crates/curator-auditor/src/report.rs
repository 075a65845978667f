//! Rendering staleness reports - Markdown for humans, JSON for tooling

use crate::staleness::StalenessReport;
use chrono::NaiveDate;
use serde_json::json;

/// Render the three-section Markdown report the standalone auditor emits
pub fn markdown(report: &StalenessReport, today: NaiveDate, max_days: i64) -> String {
    let mut out = String::new();
    out.push_str("# Pattern staleness report\n\n");
    out.push_str(&format!("Generated for {}.\n\n", today.format("%Y-%m-%d")));

    out.push_str("## Overdue reviews (BLOCKING)\n\n");
    if report.overdue.is_empty() {
        out.push_str("None.\n");
    } else {
        for entry in &report.overdue {
            out.push_str(&format!("- `{}` review was due {}\n", entry.id, entry.review_by));
        }
    }
    out.push('\n');

    out.push_str(&format!("## Last verified more than {} days ago\n\n", max_days));
    if report.stale_verification.is_empty() {
        out.push_str("None.\n");
    } else {
        for entry in &report.stale_verification {
            out.push_str(&format!(
                "- `{}` last verified {} ({} days ago)\n",
                entry.id, entry.last_verified, entry.age_days
            ));
        }
    }
    out.push('\n');

    out.push_str("## References to deprecated patterns\n\n");
    if report.deprecated_refs.is_empty() {
        out.push_str("None.\n");
    } else {
        for entry in &report.deprecated_refs {
            out.push_str(&format!(
                "- `{}` references deprecated `{}`\n",
                entry.id, entry.reference
            ));
        }
    }

    out
}

/// Render the JSON report the `staleness` subcommand prints
pub fn to_json(report: &StalenessReport, generated_at: &str) -> serde_json::Value {
    json!({
        "generated_at": generated_at,
        "overdue": report.overdue,
        "deprecatedRefs": report.deprecated_refs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staleness::{DeprecatedReference, OverdueEntry};

    fn sample_report() -> StalenessReport {
        StalenessReport {
            overdue: vec![OverdueEntry {
                id: "pat-a".to_string(),
                review_by: "2024-01-01".to_string(),
            }],
            stale_verification: Vec::new(),
            deprecated_refs: vec![DeprecatedReference {
                id: "pat-b".to_string(),
                reference: "pat-old".to_string(),
            }],
        }
    }

    #[test]
    fn test_markdown_has_all_three_sections() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let text = markdown(&sample_report(), today, 90);

        assert!(text.contains("## Overdue reviews (BLOCKING)"));
        assert!(text.contains("## Last verified more than 90 days ago"));
        assert!(text.contains("## References to deprecated patterns"));
        assert!(text.contains("pat-a"));
        assert!(text.contains("deprecated `pat-old`"));
    }

    #[test]
    fn test_markdown_empty_sections_say_none() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let text = markdown(&StalenessReport::default(), today, 90);
        assert_eq!(text.matches("None.").count(), 3);
    }

    #[test]
    fn test_json_shape() {
        let value = to_json(&sample_report(), "2024-06-15T12:00:00Z");

        assert_eq!(value["generated_at"], "2024-06-15T12:00:00Z");
        assert_eq!(value["overdue"][0]["id"], "pat-a");
        assert_eq!(value["overdue"][0]["review_by"], "2024-01-01");
        assert_eq!(value["deprecatedRefs"][0]["reference"], "pat-old");
    }
}
