//! Rule table loading.
//!
//! Each table ships with a compiled-in default and can be overridden by a
//! JSON file in the rules directory. A missing file means the default; a
//! present but malformed file is a hard error, never a silent fallback.

use crate::error::Result;
use curator_auditor::SimilarityPolicy;
use curator_gatekeeper::{LifecyclePolicy, SanitizationRuleSet, SchemaDefinition};
use std::path::Path;

/// The four rule tables the engine runs against
#[derive(Debug, Clone)]
pub struct RuleTables {
    /// Front-matter schema
    pub schema: SchemaDefinition,
    /// Structural requirements per record type
    pub lifecycle: LifecyclePolicy,
    /// Secret and PII scan rules
    pub sanitization: SanitizationRuleSet,
    /// Near-duplicate detection thresholds
    pub similarity: SimilarityPolicy,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            schema: SchemaDefinition::default(),
            lifecycle: LifecyclePolicy::default(),
            sanitization: SanitizationRuleSet::default(),
            similarity: SimilarityPolicy::default(),
        }
    }
}

impl RuleTables {
    /// Load rule tables from a directory, falling back to defaults for any
    /// file that is absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut tables = Self::default();

        let schema_path = dir.join("schema.json");
        if schema_path.exists() {
            tables.schema = SchemaDefinition::from_path(&schema_path)?;
        }

        let lifecycle_path = dir.join("lifecycle.json");
        if lifecycle_path.exists() {
            tables.lifecycle = LifecyclePolicy::from_path(&lifecycle_path)?;
        }

        let sanitize_path = dir.join("sanitize.json");
        if sanitize_path.exists() {
            tables.sanitization = SanitizationRuleSet::from_path(&sanitize_path)?;
        }

        let similarity_path = dir.join("similarity.json");
        if similarity_path.exists() {
            tables.similarity = SimilarityPolicy::from_path(&similarity_path)?;
        }

        Ok(tables)
    }
}
