//! Curator Domain Layer
//!
//! This crate contains the core data model for the Curator catalog-integrity
//! engine. It has no dependencies beyond chrono (calendar dates are a
//! fundamental primitive here) and defines the concepts every other layer
//! depends upon.
//!
//! ## Key Concepts
//!
//! - **PatternRecord**: one catalog entry - a Markdown document with a
//!   front-matter header and a free-text body
//! - **Header / Value**: the parsed front-matter mapping shared by both
//!   parser variants
//! - **Status**: publication lifecycle (draft → validated → deprecated)
//! - **Catalog**: the full, id-indexed set of records under a root
//!
//! ## Architecture
//!
//! - Pure data model only; parsing and filesystem access live in
//!   `curator-frontmatter`
//! - Validation and auditing logic lives in `curator-gatekeeper` and
//!   `curator-auditor`
//! - Records are constructed fresh on every run; nothing here mutates
//!   after construction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod date;
pub mod header;
pub mod record;

// Re-exports for convenience
pub use catalog::Catalog;
pub use header::{Header, Value};
pub use record::{Confidence, PatternRecord, PatternType, Status};
