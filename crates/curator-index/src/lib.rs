//! Curator Index Builder
//!
//! Produces the flat discovery listing: one row per record, sorted by
//! `(domain, id)`, rendered as a Markdown table and written to a fixed
//! file that each run overwrites. A pure transformation of the catalog -
//! no validation side effects, byte-identical output for an unchanged
//! corpus.

#![warn(missing_docs)]
#![warn(clippy::all)]

use curator_domain::Catalog;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from writing the index file
#[derive(Debug, Error)]
pub enum IndexError {
    /// The report file could not be written
    #[error("failed to write index {path}: {source}")]
    Io {
        /// The output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// One listing row
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexRow {
    /// Grouping key (sorted first)
    pub domain: String,

    /// Record id (sorted second)
    pub id: String,

    /// Record title
    pub title: String,

    /// Record type
    pub kind: String,

    /// Publication status
    pub status: String,

    /// Path relative to the catalog root
    pub path: String,
}

/// Builds the discovery index for a catalog
pub struct IndexBuilder;

impl IndexBuilder {
    /// Collect one row per record, sorted by `(domain, id)`
    pub fn rows(catalog: &Catalog) -> Vec<IndexRow> {
        let mut rows: Vec<IndexRow> = catalog
            .iter()
            .map(|record| IndexRow {
                domain: record.domain.clone().unwrap_or_default(),
                id: record.id.clone().unwrap_or_default(),
                title: record.title.clone().unwrap_or_default(),
                kind: record
                    .pattern_type
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_default(),
                status: record
                    .status
                    .map(|s| s.as_str().to_string())
                    .unwrap_or_default(),
                path: record.path.display().to_string(),
            })
            .collect();
        // IndexRow's derived ordering starts with (domain, id)
        rows.sort();
        rows
    }

    /// Render the rows as a Markdown table
    pub fn render(catalog: &Catalog) -> String {
        let mut out = String::from("# Pattern index\n\n");
        out.push_str("| Domain | Id | Title | Type | Status | Path |\n");
        out.push_str("|---|---|---|---|---|---|\n");
        for row in Self::rows(catalog) {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                row.domain, row.id, row.title, row.kind, row.status, row.path
            ));
        }
        out
    }

    /// Render and write the index file, overwriting any previous run's
    pub fn write(catalog: &Catalog, path: &Path) -> Result<(), IndexError> {
        std::fs::write(path, Self::render(catalog)).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_domain::{Header, PatternRecord, Value};

    fn record(path: &str, id: &str, domain: &str, title: &str) -> PatternRecord {
        let mut header = Header::new();
        for (key, value) in [
            ("id", id),
            ("domain", domain),
            ("title", title),
            ("type", "troubleshooting"),
            ("status", "draft"),
        ] {
            header.insert(key, Value::Scalar(value.to_string()));
        }
        PatternRecord::from_parts(path, header, String::new())
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("c.md", "pat-c", "networking", "Retry storms"),
            record("a.md", "pat-a", "database", "Pool sizing"),
            record("b.md", "pat-b", "database", "Lock contention"),
        ])
    }

    #[test]
    fn test_rows_sorted_by_domain_then_id() {
        let rows = IndexBuilder::rows(&sample_catalog());
        let keys: Vec<(String, String)> = rows
            .into_iter()
            .map(|r| (r.domain, r.id))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("database".to_string(), "pat-a".to_string()),
                ("database".to_string(), "pat-b".to_string()),
                ("networking".to_string(), "pat-c".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let catalog = sample_catalog();
        assert_eq!(IndexBuilder::render(&catalog), IndexBuilder::render(&catalog));
    }

    #[test]
    fn test_write_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("INDEX.md");
        std::fs::write(&path, "stale content").unwrap();

        IndexBuilder::write(&sample_catalog(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Pattern index"));
        assert!(written.contains("| database | pat-a |"));
    }

    #[test]
    fn test_records_without_metadata_still_get_rows() {
        let catalog = Catalog::from_records(vec![PatternRecord::from_parts(
            "bare.md",
            Header::new(),
            String::new(),
        )]);
        let rows = IndexBuilder::rows(&catalog);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].path, "bare.md");
    }
}
