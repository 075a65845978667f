//! Staleness auditing - review deadlines, verification age, deprecated refs
//!
//! Staleness is a health signal, not a correctness gate: malformed dates
//! are treated as absent and silently excluded from the check they would
//! have fed, never crashing the run. Only the Overdue list blocks, and only
//! in the `staleness` surface's own exit code.

use chrono::NaiveDate;
use curator_domain::{date, Catalog, PatternRecord};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Default threshold for how old a `last_verified` date may be, in days
pub const DEFAULT_MAX_LAST_VERIFIED_DAYS: i64 = 90;

/// A validated record whose review deadline has passed (blocking)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueEntry {
    /// Record id (or path when the id is missing)
    pub id: String,

    /// The lapsed deadline, ISO form
    pub review_by: String,
}

/// A validated record verified too long ago (advisory)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleVerification {
    /// Record id
    pub id: String,

    /// When it was last verified, ISO form
    pub last_verified: String,

    /// Age of that verification in days
    pub age_days: i64,
}

/// A record whose `related` list points at a deprecated record (advisory)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeprecatedReference {
    /// The referencing record
    pub id: String,

    /// The deprecated record it points at
    pub reference: String,
}

/// The three independent staleness lists
#[derive(Debug, Clone, Default, Serialize)]
pub struct StalenessReport {
    /// Blocking: validated records past `review_by`
    pub overdue: Vec<OverdueEntry>,

    /// Advisory: validated records with old `last_verified` dates
    pub stale_verification: Vec<StaleVerification>,

    /// Advisory: references to deprecated records
    pub deprecated_refs: Vec<DeprecatedReference>,
}

impl StalenessReport {
    /// Whether the report contains any blocking findings
    pub fn has_blocking(&self) -> bool {
        !self.overdue.is_empty()
    }
}

/// Audits a whole catalog for staleness
pub struct StalenessAuditor {
    today: NaiveDate,
    max_last_verified_days: i64,
}

impl StalenessAuditor {
    /// Create an auditor for a given "today" and verification-age threshold
    pub fn new(today: NaiveDate, max_last_verified_days: i64) -> Self {
        Self {
            today,
            max_last_verified_days,
        }
    }

    /// Create an auditor with the default verification-age threshold
    pub fn with_default_threshold(today: NaiveDate) -> Self {
        Self::new(today, DEFAULT_MAX_LAST_VERIFIED_DAYS)
    }

    /// Run all three checks over the catalog
    pub fn audit(&self, catalog: &Catalog) -> StalenessReport {
        let mut report = StalenessReport::default();

        for record in catalog.iter() {
            self.check_overdue(record, &mut report);
            self.check_verification_age(record, &mut report);
            self.check_deprecated_refs(record, catalog, &mut report);
        }

        debug!(
            overdue = report.overdue.len(),
            stale = report.stale_verification.len(),
            deprecated_refs = report.deprecated_refs.len(),
            "staleness audit complete"
        );
        report
    }

    fn check_overdue(&self, record: &PatternRecord, report: &mut StalenessReport) {
        if !record.is_validated() {
            return;
        }
        // A malformed review_by is already None here: excluded, not fatal
        if let Some(review_by) = record.review_by {
            if review_by < self.today {
                report.overdue.push(OverdueEntry {
                    id: record.display_id(),
                    review_by: review_by.format("%Y-%m-%d").to_string(),
                });
            }
        }
    }

    fn check_verification_age(&self, record: &PatternRecord, report: &mut StalenessReport) {
        if !record.is_validated() {
            return;
        }
        if let Some(last_verified) = record.last_verified {
            let age_days = date::days_between(last_verified, self.today);
            if age_days > self.max_last_verified_days {
                report.stale_verification.push(StaleVerification {
                    id: record.display_id(),
                    last_verified: last_verified.format("%Y-%m-%d").to_string(),
                    age_days,
                });
            }
        }
    }

    fn check_deprecated_refs(
        &self,
        record: &PatternRecord,
        catalog: &Catalog,
        report: &mut StalenessReport,
    ) {
        // one finding per (record, target), however often the id repeats
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for reference in &record.related {
            if !seen.insert(reference.as_str()) {
                continue;
            }
            let deprecated = catalog
                .get(reference)
                .is_some_and(PatternRecord::is_deprecated);
            if deprecated {
                report.deprecated_refs.push(DeprecatedReference {
                    id: record.display_id(),
                    reference: reference.clone(),
                });
            }
        }
    }
}
