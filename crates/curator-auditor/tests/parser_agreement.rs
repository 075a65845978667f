//! The full engine and the standalone auditor must never disagree on
//! staleness findings, whichever parser variant loaded the corpus.

use chrono::NaiveDate;
use curator_auditor::StalenessAuditor;
use curator_frontmatter::{load_catalog, DegradedParser, FullParser};
use std::fs;

#[test]
fn both_parsers_agree_on_overdue_records() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("foo.md"),
        "---\nid: foo\nstatus: validated\nreview_by: 2020-01-01\n---\nBody.\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("bar.md"),
        "---\nid: bar\nstatus: validated\nreview_by: 2099-01-01\n---\nBody.\n",
    )
    .unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let full = load_catalog(dir.path(), &FullParser::new()).unwrap();
    let degraded = load_catalog(dir.path(), &DegradedParser::new()).unwrap();

    let full_report = StalenessAuditor::with_default_threshold(today).audit(&full.catalog);
    let degraded_report =
        StalenessAuditor::with_default_threshold(today).audit(&degraded.catalog);

    assert_eq!(full_report.overdue, degraded_report.overdue);
    assert_eq!(full_report.overdue.len(), 1);
    assert_eq!(full_report.overdue[0].id, "foo");
}

#[test]
fn both_parsers_agree_on_deprecated_references() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.md"),
        "---\nid: a\nstatus: draft\nrelated:\n  - old\n---\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("old.md"),
        "---\nid: old\nstatus: deprecated\ndeprecated_date: 2023-01-01\n---\n",
    )
    .unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let full = load_catalog(dir.path(), &FullParser::new()).unwrap();
    let degraded = load_catalog(dir.path(), &DegradedParser::new()).unwrap();

    let full_report = StalenessAuditor::with_default_threshold(today).audit(&full.catalog);
    let degraded_report =
        StalenessAuditor::with_default_threshold(today).audit(&degraded.catalog);

    assert_eq!(full_report.deprecated_refs, degraded_report.deprecated_refs);
    assert_eq!(full_report.deprecated_refs.len(), 1);
}
