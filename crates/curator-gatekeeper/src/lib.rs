//! Curator Gatekeeper
//!
//! Per-record quality control for the catalog: decides whether a record is
//! well-formed and safe to publish.
//!
//! The Gatekeeper provides:
//! - Schema validation against a declarative [`SchemaDefinition`]
//! - Sanitization scanning (secrets, internal hostnames, PII) against a
//!   [`SanitizationRuleSet`]
//! - Structural auditing of published records against a [`LifecyclePolicy`]
//!
//! All three rule tables are immutable inputs loaded once at startup (from
//! JSON files, with built-in defaults) and passed in explicitly; nothing
//! here reaches for ambient configuration. Validators accumulate findings
//! and never short-circuit - the output is a full audit report, not a
//! first-failure.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod lifecycle;
mod sanitize;
mod schema;

pub use error::GatekeeperError;
pub use lifecycle::{LifecycleAuditor, LifecyclePolicy, StructuralFailure};
pub use sanitize::{SanitizationRule, SanitizationRuleSet, ScanReport, Scanner};
pub use schema::{SchemaDefinition, SchemaError, SchemaValidator};
