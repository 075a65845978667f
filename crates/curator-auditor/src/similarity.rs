//! Near-duplicate detection over the whole catalog

use crate::AuditorError;
use curator_domain::{Catalog, PatternRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds for when a pair of records counts as a likely duplicate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityPolicy {
    /// Minimum shared tags (with matching domains) to flag a pair
    #[serde(default = "default_min_tag_overlap")]
    pub min_tag_overlap: usize,

    /// Minimum normalized title similarity to flag a pair on titles alone
    #[serde(default = "default_title_ratio_threshold")]
    pub title_ratio_threshold: f64,
}

fn default_min_tag_overlap() -> usize {
    3
}

fn default_title_ratio_threshold() -> f64 {
    0.70
}

impl Default for SimilarityPolicy {
    fn default() -> Self {
        Self {
            min_tag_overlap: default_min_tag_overlap(),
            title_ratio_threshold: default_title_ratio_threshold(),
        }
    }
}

impl SimilarityPolicy {
    /// Load a similarity policy from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, AuditorError> {
        let text = std::fs::read_to_string(path).map_err(|source| AuditorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// The comparison signals for one pair of records.
///
/// Symmetric: comparing (A, B) and (B, A) yields identical metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairMetrics {
    /// Both domains are non-empty and equal
    pub same_domain: bool,

    /// Size of the tag-set intersection
    pub tag_overlap: usize,

    /// Normalized title similarity in [0, 1]
    pub title_ratio: f64,
}

/// A flagged pair, advisory only - never fails a validate run
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityWarning {
    /// Id of the first record (catalog path order)
    pub left: String,

    /// Id of the second record
    pub right: String,

    /// Why the pair was flagged
    pub metrics: PairMetrics,
}

/// Flags likely-duplicate pairs across a catalog
pub struct SimilarityDetector {
    policy: SimilarityPolicy,
}

impl SimilarityDetector {
    /// Create a detector over the given policy
    pub fn new(policy: SimilarityPolicy) -> Self {
        Self { policy }
    }

    /// Create a detector over the default policy
    pub fn default_policy() -> Self {
        Self::new(SimilarityPolicy::default())
    }

    /// Compute the comparison signals for one pair
    pub fn compare(&self, a: &PatternRecord, b: &PatternRecord) -> PairMetrics {
        let same_domain = match (&a.domain, &b.domain) {
            (Some(da), Some(db)) => !da.is_empty() && da == db,
            _ => false,
        };
        let tag_overlap = a.tags.intersection(&b.tags).count();
        let title_ratio = title_ratio(
            a.title.as_deref().unwrap_or(""),
            b.title.as_deref().unwrap_or(""),
        );

        PairMetrics {
            same_domain,
            tag_overlap,
            title_ratio,
        }
    }

    /// Whether a pair's metrics cross the duplicate thresholds
    pub fn is_likely_duplicate(&self, metrics: &PairMetrics) -> bool {
        (metrics.same_domain && metrics.tag_overlap >= self.policy.min_tag_overlap)
            || metrics.title_ratio >= self.policy.title_ratio_threshold
    }

    /// Compare every unordered pair of distinct id-bearing records.
    ///
    /// Quadratic over the catalog; fine at catalog scale. Tag-based
    /// bucketing before the pairwise pass is the first thing to revisit if
    /// that ever changes.
    pub fn detect(&self, catalog: &Catalog) -> Vec<SimilarityWarning> {
        let records: Vec<&PatternRecord> =
            catalog.iter().filter(|r| r.id.is_some()).collect();

        let mut warnings = Vec::new();
        for (i, left) in records.iter().enumerate() {
            for right in &records[i + 1..] {
                let metrics = self.compare(left, right);
                if self.is_likely_duplicate(&metrics) {
                    warnings.push(SimilarityWarning {
                        left: left.display_id(),
                        right: right.display_id(),
                        metrics,
                    });
                }
            }
        }
        warnings
    }
}

/// Normalized title similarity: lowercase, strip non-alphanumerics,
/// collapse whitespace, then `1 - editDistance / max(len)`.
///
/// Two empty titles are a perfect match; exactly one empty is no match.
pub fn title_ratio(a: &str, b: &str) -> f64 {
    let a = normalize_title(a);
    let b = normalize_title(b);

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let distance = strsim::levenshtein(&a, &b);
    let longest = a.chars().count().max(b.chars().count());
    1.0 - (distance as f64 / longest as f64)
}

fn normalize_title(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_domain::{Header, Value};

    fn record(id: &str, title: &str, domain: &str, tags: &[&str]) -> PatternRecord {
        let mut header = Header::new();
        header.insert("id", Value::Scalar(id.to_string()));
        header.insert("title", Value::Scalar(title.to_string()));
        header.insert("domain", Value::Scalar(domain.to_string()));
        header.insert(
            "tags",
            Value::List(tags.iter().map(|t| Value::Scalar(t.to_string())).collect()),
        );
        PatternRecord::from_parts(format!("{}.md", id), header, String::new())
    }

    #[test]
    fn test_title_ratio_identity() {
        assert_eq!(title_ratio("Connection pooling", "Connection pooling"), 1.0);
        assert_eq!(title_ratio("", ""), 1.0);
        assert_eq!(title_ratio("", "x"), 0.0);
        assert_eq!(title_ratio("x", ""), 0.0);
    }

    #[test]
    fn test_title_ratio_ignores_case_and_punctuation() {
        assert_eq!(
            title_ratio("Retry, with back-off!", "retry with back off"),
            1.0
        );
    }

    #[test]
    fn test_title_ratio_is_symmetric() {
        let a = "Handling connection resets";
        let b = "Handling connection timeouts";
        assert_eq!(title_ratio(a, b), title_ratio(b, a));
    }

    #[test]
    fn test_compare_is_symmetric() {
        let detector = SimilarityDetector::default_policy();
        let a = record("a", "Pool exhaustion", "db", &["pool", "timeout"]);
        let b = record("b", "Pool starvation", "db", &["pool", "retry"]);

        let ab = detector.compare(&a, &b);
        let ba = detector.compare(&b, &a);
        assert_eq!(ab.same_domain, ba.same_domain);
        assert_eq!(ab.tag_overlap, ba.tag_overlap);
        assert_eq!(ab.title_ratio, ba.title_ratio);
    }

    #[test]
    fn test_tag_overlap_with_same_domain_fires() {
        // unrelated titles; overlap of 3 in the same domain is enough
        let detector = SimilarityDetector::default_policy();
        let a = record("a", "Flaky integration suite", "testing", &["a", "b", "c"]);
        let b = record("b", "Snapshot mismatch noise", "testing", &["a", "b", "c", "d"]);

        let catalog = Catalog::from_records(vec![a, b]);
        let warnings = detector.detect(&catalog);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].metrics.tag_overlap, 3);
        assert!(warnings[0].metrics.same_domain);
    }

    #[test]
    fn test_tag_overlap_without_same_domain_does_not_fire() {
        let detector = SimilarityDetector::default_policy();
        let a = record("a", "Flaky integration suite", "testing", &["a", "b", "c"]);
        let b = record("b", "Snapshot mismatch noise", "tooling", &["a", "b", "c"]);

        let catalog = Catalog::from_records(vec![a, b]);
        assert!(detector.detect(&catalog).is_empty());
    }

    #[test]
    fn test_near_identical_titles_fire_across_domains() {
        let detector = SimilarityDetector::default_policy();
        let a = record("a", "Graceful shutdown ordering", "services", &[]);
        let b = record("b", "Graceful shutdown orderings", "batch", &[]);

        let catalog = Catalog::from_records(vec![a, b]);
        let warnings = detector.detect(&catalog);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].metrics.title_ratio >= 0.70);
    }

    #[test]
    fn test_records_without_ids_are_skipped() {
        let detector = SimilarityDetector::default_policy();
        let a = record("a", "Same title", "x", &[]);
        let mut b = record("b", "Same title", "x", &[]);
        b.id = None;

        let catalog = Catalog::from_records(vec![a, b]);
        assert!(detector.detect(&catalog).is_empty());
    }

    #[test]
    fn test_policy_overrides() {
        let detector = SimilarityDetector::new(SimilarityPolicy {
            min_tag_overlap: 1,
            title_ratio_threshold: 1.1, // titles can never fire
        });
        let a = record("a", "Alpha", "x", &["shared"]);
        let b = record("b", "Omega", "x", &["shared"]);

        let catalog = Catalog::from_records(vec![a, b]);
        assert_eq!(detector.detect(&catalog).len(), 1);
    }
}
