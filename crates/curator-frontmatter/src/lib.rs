//! Curator Front-Matter Layer
//!
//! Extracts the metadata header ("front matter") and body from raw pattern
//! documents, and loads whole catalogs from disk.
//!
//! Two interchangeable parser variants are provided:
//!
//! - [`FullParser`] - delegates the header block to serde_yaml; supports
//!   arbitrary nesting, scalars, and lists
//! - [`DegradedParser`] - line-oriented matching only; flat scalars and
//!   single-level block lists, for minimal environments
//!
//! The degraded variant is a documented subset, not a general parser. Both
//! variants must produce identical results for the fields the staleness
//! auditor consumes (`id`, `status`, `review_by`, `last_verified`,
//! `related`, `deprecated_date`); `tests/agreement.rs` holds the shared
//! fixture corpus that pins this down.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod degraded;
mod error;
mod full;
mod loader;

pub use degraded::DegradedParser;
pub use error::{LoadError, ParseError};
pub use full::FullParser;
pub use loader::{load_catalog, LoadOutcome, INDEX_FILE_NAME};

use curator_domain::Header;

/// The line that opens and closes a front-matter block
pub const SENTINEL: &str = "---";

/// A document split into its parsed header and body text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Parsed front-matter fields; empty when the file has no front matter
    pub header: Header,

    /// Everything after the front matter (the whole file when there is none)
    pub body: String,
}

/// A front-matter parser variant.
///
/// Implementations must agree on the common-subset grammar: flat scalars
/// (`key: value`, quotes stripped, whitespace trimmed) and single-level
/// block lists (`key:` followed by `- item` lines).
pub trait FrontMatterParser {
    /// Split raw file text into header and body
    fn parse(&self, text: &str) -> Result<Document, ParseError>;
}

/// The raw pieces of a sentinel-delimited document.
struct RawSplit<'a> {
    header_lines: Vec<&'a str>,
    body: String,
    terminated: bool,
}

/// Split on the `---` sentinels.
///
/// Returns `None` when line 1 is not the sentinel, which means "no front
/// matter": empty header, whole file as body. An unterminated block is
/// returned with `terminated = false`; the two variants disagree on whether
/// that is an error (the degraded parser treats EOF as the terminator).
fn split_sentinels(text: &str) -> Option<RawSplit<'_>> {
    let mut lines = text.lines();
    if lines.next()?.trim_end() != SENTINEL {
        return None;
    }

    let rest: Vec<&str> = lines.collect();
    match rest.iter().position(|line| line.trim_end() == SENTINEL) {
        Some(close) => Some(RawSplit {
            header_lines: rest[..close].to_vec(),
            body: rest[close + 1..].join("\n"),
            terminated: true,
        }),
        None => Some(RawSplit {
            header_lines: rest,
            body: String::new(),
            terminated: false,
        }),
    }
}

/// Strip one layer of matching surrounding quotes and trim whitespace.
///
/// The inner content is trimmed again after unquoting, matching what the
/// full variant does with YAML string scalars; `" pat-009 "` must read the
/// same through both parsers.
fn clean_scalar(raw: &str) -> String {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return trimmed[1..trimmed.len() - 1].trim().to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_opening_sentinel() {
        assert!(split_sentinels("# Just a document\n\nbody").is_none());
    }

    #[test]
    fn test_sentinel_split() {
        let split = split_sentinels("---\nid: x\n---\nbody line\n").unwrap();
        assert!(split.terminated);
        assert_eq!(split.header_lines, vec!["id: x"]);
        assert_eq!(split.body, "body line");
    }

    #[test]
    fn test_unterminated_block() {
        let split = split_sentinels("---\nid: x\n").unwrap();
        assert!(!split.terminated);
        assert_eq!(split.header_lines, vec!["id: x"]);
    }

    #[test]
    fn test_clean_scalar() {
        assert_eq!(clean_scalar("  plain  "), "plain");
        assert_eq!(clean_scalar("\"quoted\""), "quoted");
        assert_eq!(clean_scalar("'quoted'"), "quoted");
        assert_eq!(clean_scalar("\"mismatched'"), "\"mismatched'");
        assert_eq!(clean_scalar("\""), "\"");
    }

    #[test]
    fn test_clean_scalar_trims_inside_quotes() {
        assert_eq!(clean_scalar("\" padded \""), "padded");
        assert_eq!(clean_scalar("' padded '"), "padded");
        assert_eq!(clean_scalar("\"  \""), "");
    }
}
