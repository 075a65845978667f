//! Schema validation against a declarative field table

use crate::GatekeeperError;
use curator_domain::{date, Catalog, Confidence, Header, PatternType, Status, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Declarative schema: which fields must exist and what shape each takes.
///
/// Loaded from a JSON file when one is provided; the defaults describe the
/// standard pattern-record layout. The engine never mutates a loaded schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Fields that must be present and non-empty on every record
    #[serde(default = "default_required")]
    pub required: Vec<String>,

    /// Allowed values for `type`
    #[serde(default = "default_type_values")]
    pub type_values: Vec<String>,

    /// Allowed values for `status`
    #[serde(default = "default_status_values")]
    pub status_values: Vec<String>,

    /// Allowed values for `confidence`
    #[serde(default = "default_confidence_values")]
    pub confidence_values: Vec<String>,

    /// Fields that must be lists of plain strings when present
    #[serde(default = "default_list_fields")]
    pub list_fields: Vec<String>,

    /// Fields that must be lists of version-range entries when present
    /// (an entry is a bare name or a mapping with a non-empty `name`)
    #[serde(default = "default_versioned_fields")]
    pub versioned_fields: Vec<String>,

    /// Fields that must parse as booleans when present
    #[serde(default = "default_boolean_fields")]
    pub boolean_fields: Vec<String>,

    /// Fields that must be ISO calendar dates when present
    #[serde(default = "default_date_fields")]
    pub date_fields: Vec<String>,
}

fn default_required() -> Vec<String> {
    ["id", "title", "type", "status", "confidence", "domain", "tags", "sanitized"]
        .map(String::from)
        .to_vec()
}

fn default_type_values() -> Vec<String> {
    PatternType::ALLOWED.iter().map(|s| s.to_string()).collect()
}

fn default_status_values() -> Vec<String> {
    Status::ALLOWED.iter().map(|s| s.to_string()).collect()
}

fn default_confidence_values() -> Vec<String> {
    Confidence::ALLOWED.iter().map(|s| s.to_string()).collect()
}

fn default_list_fields() -> Vec<String> {
    ["tags", "related"].map(String::from).to_vec()
}

fn default_versioned_fields() -> Vec<String> {
    ["languages", "frameworks"].map(String::from).to_vec()
}

fn default_boolean_fields() -> Vec<String> {
    vec!["sanitized".to_string()]
}

fn default_date_fields() -> Vec<String> {
    ["introduced", "last_verified", "review_by", "deprecated_date"]
        .map(String::from)
        .to_vec()
}

impl Default for SchemaDefinition {
    fn default() -> Self {
        Self {
            required: default_required(),
            type_values: default_type_values(),
            status_values: default_status_values(),
            confidence_values: default_confidence_values(),
            list_fields: default_list_fields(),
            versioned_fields: default_versioned_fields(),
            boolean_fields: default_boolean_fields(),
            date_fields: default_date_fields(),
        }
    }
}

impl SchemaDefinition {
    /// Load a schema definition from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, GatekeeperError> {
        let text = std::fs::read_to_string(path).map_err(|source| GatekeeperError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// A single schema finding, attributable to one field of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A required field is absent
    MissingField(String),

    /// A required field is present but empty
    EmptyField(String),

    /// An enum field holds a value outside its allowed set
    InvalidEnum {
        /// The field
        field: String,
        /// The offending value
        value: String,
        /// The allowed values
        allowed: Vec<String>,
    },

    /// A list field holds something that is not a list of strings
    NotAList(String),

    /// A version-range entry is missing its name or has the wrong shape
    MalformedVersionEntry {
        /// The field
        field: String,
        /// What was wrong
        detail: String,
    },

    /// A boolean field holds something other than true/false
    NotABoolean {
        /// The field
        field: String,
        /// The offending value
        value: String,
    },

    /// A date field does not parse as an ISO calendar date
    MalformedDate {
        /// The field
        field: String,
        /// The offending value
        value: String,
    },

    /// Another record already claims this id
    DuplicateId {
        /// The contested id
        id: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::MissingField(field) => {
                write!(f, "required field '{}' is missing", field)
            }
            SchemaError::EmptyField(field) => {
                write!(f, "required field '{}' is empty", field)
            }
            SchemaError::InvalidEnum {
                field,
                value,
                allowed,
            } => write!(
                f,
                "field '{}' has value '{}', expected one of: {}",
                field,
                value,
                allowed.join(", ")
            ),
            SchemaError::NotAList(field) => {
                write!(f, "field '{}' must be a list of strings", field)
            }
            SchemaError::MalformedVersionEntry { field, detail } => {
                write!(f, "field '{}' has a malformed entry: {}", field, detail)
            }
            SchemaError::NotABoolean { field, value } => {
                write!(f, "field '{}' must be true or false, found '{}'", field, value)
            }
            SchemaError::MalformedDate { field, value } => {
                write!(f, "field '{}' is not a YYYY-MM-DD date: '{}'", field, value)
            }
            SchemaError::DuplicateId { id } => {
                write!(f, "id '{}' is already used by another record", id)
            }
        }
    }
}

/// Validates headers against a [`SchemaDefinition`].
///
/// `validate` never fails; it returns a possibly-empty list of findings.
/// A non-empty list marks the record schema-invalid, which is a hard
/// failure in `validate` mode.
pub struct SchemaValidator {
    schema: SchemaDefinition,
}

impl SchemaValidator {
    /// Create a validator over the given schema
    pub fn new(schema: SchemaDefinition) -> Self {
        Self { schema }
    }

    /// Create a validator over the default schema
    pub fn default_schema() -> Self {
        Self::new(SchemaDefinition::default())
    }

    /// Validate one record's header
    pub fn validate(&self, header: &Header) -> Vec<SchemaError> {
        let mut errors = Vec::new();

        for field in &self.schema.required {
            match header.get(field) {
                None => errors.push(SchemaError::MissingField(field.clone())),
                Some(value) if is_empty_value(value) => {
                    errors.push(SchemaError::EmptyField(field.clone()));
                }
                Some(_) => {}
            }
        }

        self.check_enum(header, "type", &self.schema.type_values, &mut errors);
        self.check_enum(header, "status", &self.schema.status_values, &mut errors);
        self.check_enum(
            header,
            "confidence",
            &self.schema.confidence_values,
            &mut errors,
        );

        for field in &self.schema.list_fields {
            check_string_list(header, field, &mut errors);
        }

        for field in &self.schema.versioned_fields {
            check_versioned_list(header, field, &mut errors);
        }

        for field in &self.schema.boolean_fields {
            if let Some(value) = header.non_empty_scalar(field) {
                if header.boolean(field).is_none() {
                    errors.push(SchemaError::NotABoolean {
                        field: field.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }

        for field in &self.schema.date_fields {
            if let Some(value) = header.non_empty_scalar(field) {
                if date::parse_date(value).is_none() {
                    errors.push(SchemaError::MalformedDate {
                        field: field.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }

        errors
    }

    /// Catalog-level checks: findings that need the whole corpus.
    ///
    /// Currently this is duplicate-id detection, attributed to the record
    /// encountered later in path order.
    pub fn validate_catalog(&self, catalog: &Catalog) -> Vec<(PathBuf, SchemaError)> {
        catalog
            .duplicate_ids()
            .iter()
            .map(|(id, path)| (path.clone(), SchemaError::DuplicateId { id: id.clone() }))
            .collect()
    }

    fn check_enum(
        &self,
        header: &Header,
        field: &str,
        allowed: &[String],
        errors: &mut Vec<SchemaError>,
    ) {
        if let Some(value) = header.non_empty_scalar(field) {
            if !allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
                errors.push(SchemaError::InvalidEnum {
                    field: field.to_string(),
                    value: value.to_string(),
                    allowed: allowed.to_vec(),
                });
            }
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Scalar(s) => s.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
    }
}

fn check_string_list(header: &Header, field: &str, errors: &mut Vec<SchemaError>) {
    match header.get(field) {
        // A bare scalar promotes to a single-item list; see Header::string_list
        None | Some(Value::Scalar(_)) => {}
        Some(Value::List(items)) => {
            if items.iter().any(|item| item.as_scalar().is_none()) {
                errors.push(SchemaError::NotAList(field.to_string()));
            }
        }
        Some(Value::Map(_)) => errors.push(SchemaError::NotAList(field.to_string())),
    }
}

fn check_versioned_list(header: &Header, field: &str, errors: &mut Vec<SchemaError>) {
    let Some(value) = header.get(field) else {
        return;
    };
    let items = match value {
        Value::List(items) => items.as_slice(),
        Value::Scalar(s) if s.is_empty() => return,
        _ => {
            errors.push(SchemaError::NotAList(field.to_string()));
            return;
        }
    };

    for item in items {
        match item {
            // A bare name is fine; version ranges are optional
            Value::Scalar(s) if !s.is_empty() => {}
            Value::Scalar(_) => errors.push(SchemaError::MalformedVersionEntry {
                field: field.to_string(),
                detail: "empty entry".to_string(),
            }),
            Value::Map(entries) => {
                let named = entries
                    .get("name")
                    .and_then(Value::as_scalar)
                    .is_some_and(|name| !name.is_empty());
                if !named {
                    errors.push(SchemaError::MalformedVersionEntry {
                        field: field.to_string(),
                        detail: "entry has no 'name'".to_string(),
                    });
                }
            }
            Value::List(_) => errors.push(SchemaError::MalformedVersionEntry {
                field: field.to_string(),
                detail: "entry is a nested list".to_string(),
            }),
        }
    }
}
