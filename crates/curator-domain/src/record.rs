//! Record module - one catalog entry and its lifecycle enums

use crate::date::parse_date;
use crate::header::Header;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Publication lifecycle status of a record
///
/// Records progress draft → validated → deprecated. The engine only
/// observes status; it never transitions records, and runs are stateless,
/// so transition legality is not (and cannot be) checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Work in progress; only the base schema applies
    Draft,

    /// Published and trusted; structural and staleness checks apply
    Validated,

    /// Superseded or withdrawn; references to it are flagged
    Deprecated,
}

impl Status {
    /// All accepted status spellings, for schema diagnostics
    pub const ALLOWED: &'static [&'static str] = &["draft", "validated", "deprecated"];

    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Validated => "validated",
            Status::Deprecated => "deprecated",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Some(Status::Draft),
            "validated" => Some(Status::Validated),
            "deprecated" => Some(Status::Deprecated),
            _ => None,
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

/// What kind of note a record is; drives the required-section policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternType {
    /// Diagnosing and fixing a failure
    Troubleshooting,

    /// How to build something
    Implementation,

    /// Something to avoid, and why
    AntiPattern,

    /// Structural/system-level guidance
    Architecture,

    /// Anything that fits none of the above
    Other,
}

impl PatternType {
    /// All accepted type spellings, for schema diagnostics
    pub const ALLOWED: &'static [&'static str] = &[
        "troubleshooting",
        "implementation",
        "anti-pattern",
        "architecture",
        "other",
    ];

    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::Troubleshooting => "troubleshooting",
            PatternType::Implementation => "implementation",
            PatternType::AntiPattern => "anti-pattern",
            PatternType::Architecture => "architecture",
            PatternType::Other => "other",
        }
    }

    /// Parse a type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "troubleshooting" => Some(PatternType::Troubleshooting),
            "implementation" => Some(PatternType::Implementation),
            "anti-pattern" => Some(PatternType::AntiPattern),
            "architecture" => Some(PatternType::Architecture),
            "other" => Some(PatternType::Other),
            _ => None,
        }
    }
}

impl std::str::FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern type: {}", s))
    }
}

/// Author-asserted confidence in a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    /// Untested or anecdotal
    Low,

    /// Worked at least once in context
    Medium,

    /// Verified repeatedly
    High,
}

impl Confidence {
    /// All accepted confidence spellings, for schema diagnostics
    pub const ALLOWED: &'static [&'static str] = &["low", "medium", "high"];

    /// Get the confidence name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Parse a confidence from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Confidence::Low),
            "medium" => Some(Confidence::Medium),
            "high" => Some(Confidence::High),
            _ => None,
        }
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid confidence: {}", s))
    }
}

/// One catalog entry: a Markdown document plus its typed front matter.
///
/// Construction is deliberately lenient: a missing or malformed field
/// becomes `None`/empty rather than an error, because the schema validator
/// is the component that reports field problems. The raw [`Header`] is kept
/// alongside the typed projection so validators can inspect fields (such as
/// `languages`/`frameworks`) that the typed view does not model.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRecord {
    /// Where the record was read from, relative to the catalog root
    pub path: PathBuf,

    /// Unique identifier; the key for cross-references
    pub id: Option<String>,

    /// Human-readable title
    pub title: Option<String>,

    /// Record kind (drives required sections)
    pub pattern_type: Option<PatternType>,

    /// Publication status
    pub status: Option<Status>,

    /// Author-asserted confidence
    pub confidence: Option<Confidence>,

    /// Free-form grouping key
    pub domain: Option<String>,

    /// Tag set; insertion order is irrelevant
    pub tags: BTreeSet<String>,

    /// Ids of related records; may dangle or point at deprecated records
    pub related: Vec<String>,

    /// Id of the record that replaces this one, if any
    pub superseded_by: Option<String>,

    /// When the pattern was first recorded
    pub introduced: Option<NaiveDate>,

    /// When the pattern was last confirmed to still work
    pub last_verified: Option<NaiveDate>,

    /// Deadline for the next review
    pub review_by: Option<NaiveDate>,

    /// When the record was deprecated
    pub deprecated_date: Option<NaiveDate>,

    /// Author's assertion that the document has been sanitized
    pub sanitized: bool,

    /// The raw front-matter header as parsed
    pub header: Header,

    /// Everything after the front matter
    pub body: String,
}

impl PatternRecord {
    /// Build a record from parsed front matter.
    ///
    /// Malformed individual fields degrade to absent; they are reported by
    /// the schema validator, not here.
    pub fn from_parts(path: impl Into<PathBuf>, header: Header, body: String) -> Self {
        let owned = |key: &str| header.non_empty_scalar(key).map(str::to_string);
        let date = |key: &str| header.scalar(key).and_then(parse_date);

        Self {
            path: path.into(),
            id: owned("id"),
            title: owned("title"),
            pattern_type: header.scalar("type").and_then(PatternType::parse),
            status: header.scalar("status").and_then(Status::parse),
            confidence: header.scalar("confidence").and_then(Confidence::parse),
            domain: owned("domain"),
            tags: header.string_list("tags").into_iter().collect(),
            related: header.string_list("related"),
            superseded_by: owned("superseded_by"),
            introduced: date("introduced"),
            last_verified: date("last_verified"),
            review_by: date("review_by"),
            deprecated_date: date("deprecated_date"),
            sanitized: header.boolean("sanitized").unwrap_or(false),
            header,
            body,
        }
    }

    /// The id if present, otherwise the file path, for diagnostics
    pub fn display_id(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Whether this record is published as validated
    pub fn is_validated(&self) -> bool {
        self.status == Some(Status::Validated)
    }

    /// Whether this record is deprecated
    pub fn is_deprecated(&self) -> bool {
        self.status == Some(Status::Deprecated)
    }

    /// The path relative to a catalog root, falling back to the full path
    pub fn relative_path(&self, root: &Path) -> PathBuf {
        self.path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| self.path.clone())
    }
}
