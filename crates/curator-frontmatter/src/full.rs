//! Full parser variant - YAML-backed front matter

use crate::error::ParseError;
use crate::{split_sentinels, Document};
use curator_domain::{Header, Value};
use std::collections::BTreeMap;

/// Full-featured front-matter parser.
///
/// The header block is handed to serde_yaml, so arbitrary nesting, quoting
/// styles, and inline collections all work. The parsed tree is converted
/// into the shared [`Value`] model, with non-string scalars stringified so
/// downstream code sees one representation regardless of variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullParser;

impl FullParser {
    /// Create a full parser
    pub fn new() -> Self {
        Self
    }
}

impl crate::FrontMatterParser for FullParser {
    fn parse(&self, text: &str) -> Result<Document, ParseError> {
        let Some(split) = split_sentinels(text) else {
            // No front matter: the whole file is body
            return Ok(Document {
                header: Header::new(),
                body: text.to_string(),
            });
        };

        if !split.terminated {
            return Err(ParseError::Unterminated { line: 1 });
        }

        let block = split.header_lines.join("\n");
        if block.trim().is_empty() {
            return Ok(Document {
                header: Header::new(),
                body: split.body,
            });
        }

        let parsed: serde_yaml::Value =
            serde_yaml::from_str(&block).map_err(|e| ParseError::Yaml {
                // serde_yaml reports lines within the block; the block
                // starts on document line 2
                line: e.location().map(|l| l.line() + 1).unwrap_or(2),
                message: e.to_string(),
            })?;

        let header = match parsed {
            serde_yaml::Value::Null => Header::new(),
            serde_yaml::Value::Mapping(mapping) => mapping
                .into_iter()
                .filter_map(|(key, value)| key_string(&key).map(|k| (k, convert(value))))
                .collect(),
            _ => return Err(ParseError::NotAMapping),
        };

        Ok(Document {
            header,
            body: split.body,
        })
    }
}

/// Convert a YAML node into the shared value model
fn convert(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Scalar(String::new()),
        serde_yaml::Value::Bool(b) => Value::Scalar(b.to_string()),
        serde_yaml::Value::Number(n) => Value::Scalar(n.to_string()),
        serde_yaml::Value::String(s) => Value::Scalar(s.trim().to_string()),
        serde_yaml::Value::Sequence(items) => {
            Value::List(items.into_iter().map(convert).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let entries: BTreeMap<String, Value> = mapping
                .into_iter()
                .filter_map(|(key, value)| key_string(&key).map(|k| (k, convert(value))))
                .collect();
            Value::Map(entries)
        }
        serde_yaml::Value::Tagged(tagged) => convert(tagged.value),
    }
}

/// Stringify a mapping key; non-scalar keys are dropped
fn key_string(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.trim().to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
