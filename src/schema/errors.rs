//! Schema error types
//!
//! Two failure families:
//! - definition-time conflicts (duplicate field, method or static name)
//! - validation-time failures, carrying a named kind and a field path
//!
//! Conflicts must surface to the caller; they are never masked by
//! silently overwriting the existing definition.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Details of a single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetails {
    /// Dotted path of the offending field (e.g. "status.value")
    pub field: String,
    /// Failure kind, either a built-in kind ("Missing", "ExtraField",
    /// "Null", "TypeMismatch") or the kind of the field validator that
    /// rejected the value (e.g. "StatusInvalid")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationDetails {
    pub fn new(
        field: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// A required field is absent
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("required field '{}' is missing", field);
        Self::new(field, "Missing", message)
    }

    /// A field not declared by the schema is present
    pub fn extra_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("field '{}' is not declared by the schema", field);
        Self::new(field, "ExtraField", message)
    }

    /// A declared field holds null
    pub fn null_value(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("field '{}' must not be null", field);
        Self::new(field, "Null", message)
    }

    /// A field value does not match the declared type
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let message = format!(
            "field '{}': expected {}, got {}",
            field,
            expected.into(),
            actual.into()
        );
        Self::new(field, "TypeMismatch", message)
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Schema errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A field with this name is already defined on the schema
    #[error("field '{0}' is already defined on this schema")]
    DuplicateField(String),

    /// A method with this name is already registered on the schema
    #[error("method '{0}' is already registered on this schema")]
    DuplicateMethod(String),

    /// A static with this name is already registered on the schema
    #[error("static '{0}' is already registered on this schema")]
    DuplicateStatic(String),

    /// A document failed validation against the schema
    #[error("document validation failed: {details}")]
    ValidationFailed {
        /// What failed, where and why
        details: ValidationDetails,
    },
}

impl SchemaError {
    /// Create a validation failure from its details
    pub fn validation_failed(details: ValidationDetails) -> Self {
        Self::ValidationFailed { details }
    }

    /// Returns validation details if this is a validation failure
    pub fn details(&self) -> Option<&ValidationDetails> {
        match self {
            Self::ValidationFailed { details } => Some(details),
            _ => None,
        }
    }

    /// Returns the validation failure kind, if any
    pub fn kind(&self) -> Option<&str> {
        self.details().map(|d| d.kind.as_str())
    }
}
