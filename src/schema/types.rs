//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string
//! - date: RFC 3339 timestamp, stored as a string
//! - object: nested object with its own field schema
//! - any: opaque value, skipped by validation
//!
//! A field may additionally carry a default (applied when a document is
//! constructed from the schema) and a validator (applied when a document
//! is validated against the schema).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};

/// Supported field types
#[derive(Debug, Clone)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// RFC 3339 timestamp
    Date,
    /// Nested object with its own field schema
    Object {
        /// Nested field definitions
        fields: HashMap<String, FieldDef>,
    },
    /// Opaque value, accepted as-is
    Any,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::Object { .. } => "object",
            FieldType::Any => "any",
        }
    }
}

/// Default value applied at document construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Wall-clock time at the moment the document is constructed
    Now,
}

/// A named, callback-backed field validator.
///
/// Runs after type checking. The message template may reference the
/// offending value via the `{VALUE}` placeholder.
#[derive(Clone)]
pub struct FieldValidator {
    kind: String,
    message: String,
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl FieldValidator {
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// The validation failure kind this validator produces
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Runs the predicate against a value
    pub fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    /// Renders the message template against the offending value
    pub fn render_message(&self, value: &Value) -> String {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        self.message.replace("{VALUE}", &rendered)
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Field definition: type, required-ness, optional default and validator
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
    /// Default applied at document construction
    pub default: Option<FieldDefault>,
    /// Validator applied at document validation
    pub validator: Option<FieldValidator>,
}

impl FieldDef {
    /// Create a required string field
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
            default: None,
            validator: None,
        }
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: false,
            default: None,
            validator: None,
        }
    }

    /// Create a date field defaulting to construction-time now
    pub fn date_defaulting_to_now() -> Self {
        Self {
            field_type: FieldType::Date,
            required: false,
            default: Some(FieldDefault::Now),
            validator: None,
        }
    }

    /// Create an optional opaque field, skipped by validation
    pub fn optional_any() -> Self {
        Self {
            field_type: FieldType::Any,
            required: false,
            default: None,
            validator: None,
        }
    }

    /// Create an optional object field
    pub fn optional_object(fields: HashMap<String, FieldDef>) -> Self {
        Self {
            field_type: FieldType::Object { fields },
            required: false,
            default: None,
            validator: None,
        }
    }

    /// Attach a validator to this field
    pub fn with_validator(mut self, validator: FieldValidator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// A mutable schema definition: named fields plus registries for
/// per-instance methods and schema-level statics.
///
/// Adding a field, method or static whose name is taken is an error;
/// existing definitions are never silently overwritten.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: HashMap<String, FieldDef>,
    methods: Vec<String>,
    statics: Vec<String>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema from initial field definitions
    pub fn with_fields(fields: HashMap<String, FieldDef>) -> Self {
        Self {
            fields,
            methods: Vec::new(),
            statics: Vec::new(),
        }
    }

    /// Adds a field definition.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateField` when the name is taken.
    pub fn add_field(&mut self, name: impl Into<String>, def: FieldDef) -> SchemaResult<()> {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return Err(SchemaError::DuplicateField(name));
        }
        self.fields.insert(name, def);
        Ok(())
    }

    /// Registers a per-instance method name.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateMethod` when the name is taken.
    pub fn register_method(&mut self, name: impl Into<String>) -> SchemaResult<()> {
        let name = name.into();
        if self.methods.iter().any(|m| m == &name) {
            return Err(SchemaError::DuplicateMethod(name));
        }
        self.methods.push(name);
        Ok(())
    }

    /// Registers a schema-level static name.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateStatic` when the name is taken.
    pub fn register_static(&mut self, name: impl Into<String>) -> SchemaResult<()> {
        let name = name.into();
        if self.statics.iter().any(|s| s == &name) {
            return Err(SchemaError::DuplicateStatic(name));
        }
        self.statics.push(name);
        Ok(())
    }

    /// Returns a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Returns true if a field with this name is defined
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns true if a method with this name is registered
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m == name)
    }

    /// Returns true if a static with this name is registered
    pub fn has_static(&self, name: &str) -> bool {
        self.statics.iter().any(|s| s == name)
    }

    /// All field definitions
    pub fn fields(&self) -> &HashMap<String, FieldDef> {
        &self.fields
    }
}
