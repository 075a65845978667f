//! Curator Auditor
//!
//! Corpus-wide health checks: the phases that need every record loaded
//! before they can run.
//!
//! - **Similarity detection** - flags likely-duplicate record pairs by
//!   domain/tag overlap and title edit distance. Advisory only; O(n²) over
//!   the catalog by design, since catalogs are hundreds of records, not
//!   millions.
//! - **Staleness auditing** - flags validated records past their review
//!   deadline (blocking), with old verification dates (advisory), or
//!   referencing deprecated records (advisory).
//!
//! The crate also ships the `pattern-staleness` binary: a degraded
//! standalone auditor that uses only the line-oriented parser, for
//! environments without the full engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod report;
mod similarity;
mod staleness;

pub use error::AuditorError;
pub use similarity::{
    title_ratio, PairMetrics, SimilarityDetector, SimilarityPolicy, SimilarityWarning,
};
pub use staleness::{
    DeprecatedReference, OverdueEntry, StaleVerification, StalenessAuditor, StalenessReport,
    DEFAULT_MAX_LAST_VERIFIED_DAYS,
};
