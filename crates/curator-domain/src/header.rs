//! Header module - the parsed front-matter mapping shared by both parsers

use std::collections::BTreeMap;

/// A single front-matter value.
///
/// The degraded parser only ever produces `Scalar` and `List`-of-`Scalar`;
/// `Map` and nested lists come from the full parser. Everything downstream
/// of the parsers works against this model, which is what keeps the two
/// variants behaviorally aligned on the common subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single scalar, stored as its string form (quotes stripped, trimmed)
    Scalar(String),

    /// A sequence of values
    List(Vec<Value>),

    /// A nested mapping (full parser only)
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Borrow the scalar string, if this is a scalar
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrow the list items, if this is a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Borrow the mapping, if this is a map
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

/// The front-matter header: a flat mapping from field name to [`Value`].
///
/// Field order is irrelevant to every consumer, so entries are kept sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    entries: BTreeMap<String, Value>,
}

impl Header {
    /// Create an empty header (a document with no front matter)
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether a field is present at all
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Scalar value of a field, if present and scalar
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_scalar)
    }

    /// Scalar value of a field, treating the empty string as absent
    pub fn non_empty_scalar(&self, key: &str) -> Option<&str> {
        self.scalar(key).filter(|s| !s.is_empty())
    }

    /// The scalar items of a list field.
    ///
    /// Non-scalar items are skipped; a scalar field yields a single-item
    /// list so that `tags: foo` and `tags:\n  - foo` read the same.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::List(items)) => items
                .iter()
                .filter_map(Value::as_scalar)
                .map(str::to_string)
                .collect(),
            Some(Value::Scalar(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    /// Boolean value of a field (`true`/`false`, case-insensitive)
    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.scalar(key)?.to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// Number of fields in the header
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the header has no fields (no front matter)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(field, value)` pairs in sorted field order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl FromIterator<(String, Value)> for Header {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> Value {
        Value::Scalar(s.to_string())
    }

    #[test]
    fn test_scalar_lookup() {
        let mut header = Header::new();
        header.insert("id", scalar("pat-001"));

        assert_eq!(header.scalar("id"), Some("pat-001"));
        assert_eq!(header.scalar("missing"), None);
        assert!(header.contains("id"));
        assert!(!header.contains("missing"));
    }

    #[test]
    fn test_non_empty_scalar_treats_empty_as_absent() {
        let mut header = Header::new();
        header.insert("domain", scalar(""));

        assert_eq!(header.scalar("domain"), Some(""));
        assert_eq!(header.non_empty_scalar("domain"), None);
    }

    #[test]
    fn test_string_list_skips_non_scalars() {
        let mut header = Header::new();
        header.insert(
            "tags",
            Value::List(vec![
                scalar("retry"),
                Value::List(vec![scalar("nested")]),
                scalar("timeout"),
            ]),
        );

        assert_eq!(header.string_list("tags"), vec!["retry", "timeout"]);
    }

    #[test]
    fn test_string_list_promotes_scalar() {
        let mut header = Header::new();
        header.insert("related", scalar("pat-002"));

        assert_eq!(header.string_list("related"), vec!["pat-002"]);
        assert!(header.string_list("missing").is_empty());
    }

    #[test]
    fn test_boolean_parsing() {
        let mut header = Header::new();
        header.insert("sanitized", scalar("True"));
        header.insert("flag", scalar("yes"));

        assert_eq!(header.boolean("sanitized"), Some(true));
        assert_eq!(header.boolean("flag"), None);
        assert_eq!(header.boolean("missing"), None);
    }
}
