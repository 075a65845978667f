//! Degraded parser variant - line-oriented front matter
//!
//! For environments where pulling in a YAML parser is not an option. This
//! is a documented subset of the full grammar, not a general parser:
//!
//! - flat scalars: `key: value`, quotes stripped, whitespace trimmed
//! - block lists: a bare `key:` line followed by indented `- item` lines;
//!   blank lines are skipped, and the list closes at the first line that is
//!   neither blank nor an item (including the next top-level key)
//! - nested mappings, multi-line scalars, and inline collections are
//!   silently ignored
//!
//! Unlike the full variant, an unterminated header block is not an error
//! here; end of file closes it. The shared fixture corpus in
//! `tests/agreement.rs` keeps both variants aligned on the fields the
//! staleness auditor reads.

use crate::error::ParseError;
use crate::{clean_scalar, split_sentinels, Document};
use curator_domain::{Header, Value};

/// Line-oriented front-matter parser (scalar and block-list subset)
#[derive(Debug, Clone, Copy, Default)]
pub struct DegradedParser;

impl DegradedParser {
    /// Create a degraded parser
    pub fn new() -> Self {
        Self
    }
}

impl crate::FrontMatterParser for DegradedParser {
    fn parse(&self, text: &str) -> Result<Document, ParseError> {
        let Some(split) = split_sentinels(text) else {
            return Ok(Document {
                header: Header::new(),
                body: text.to_string(),
            });
        };

        let mut header = Header::new();
        let mut open_list: Option<(String, Vec<Value>)> = None;

        for line in &split.header_lines {
            if line.trim().is_empty() {
                // blank lines never close a block list
                continue;
            }

            let indented = line.starts_with(' ') || line.starts_with('\t');
            let content = line.trim_start();

            if indented && content.starts_with("- ") {
                if let Some((_, items)) = open_list.as_mut() {
                    items.push(Value::Scalar(clean_scalar(&content[2..])));
                } // an item with no owning key is out of subset
                continue;
            }

            // anything else closes an open block list
            flush_list(&mut header, &mut open_list);

            if indented {
                // nested structure: out of subset
                continue;
            }

            if let Some((key, value)) = content.split_once(':') {
                let key = key.trim().to_string();
                let value = value.trim();
                if value.is_empty() {
                    open_list = Some((key, Vec::new()));
                } else {
                    header.insert(key, Value::Scalar(clean_scalar(value)));
                }
            }
        }

        flush_list(&mut header, &mut open_list);

        Ok(Document {
            header,
            body: split.body,
        })
    }
}

/// Close an open block list; a `key:` with no items reads as an empty scalar,
/// matching what YAML makes of a null value
fn flush_list(header: &mut Header, open_list: &mut Option<(String, Vec<Value>)>) {
    if let Some((key, items)) = open_list.take() {
        if items.is_empty() {
            header.insert(key, Value::Scalar(String::new()));
        } else {
            header.insert(key, Value::List(items));
        }
    }
}
