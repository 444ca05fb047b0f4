//! Document validation against a schema
//!
//! Validation semantics:
//! - all required fields are present
//! - no undeclared fields exist
//! - no null values
//! - field types match exactly, no coercion
//! - field validators run after the type check
//!
//! Validation never mutates the document and is deterministic.
//! Fields typed `any` are accepted as-is.

use serde_json::Value;
use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::{FieldDef, FieldType, Schema};

/// Validates documents against a schema definition.
///
/// This is the deferred validation pass: setters write freely, and any
/// out-of-set value is caught here, not at set time.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Validates a document against a schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` with details naming the
    /// offending field, the failure kind and a human-readable message.
    pub fn validate_document(schema: &Schema, document: &Value) -> SchemaResult<()> {
        let doc_obj = document.as_object().ok_or_else(|| {
            SchemaError::validation_failed(ValidationDetails::type_mismatch(
                "$root",
                "object",
                json_type_name(document),
            ))
        })?;

        Self::validate_object(doc_obj, schema.fields(), "")
    }

    /// Validates an object against field definitions
    fn validate_object(
        obj: &serde_json::Map<String, Value>,
        fields: &HashMap<String, FieldDef>,
        path_prefix: &str,
    ) -> SchemaResult<()> {
        // No undeclared fields
        for key in obj.keys() {
            if !fields.contains_key(key) {
                return Err(SchemaError::validation_failed(
                    ValidationDetails::extra_field(make_path(path_prefix, key)),
                ));
            }
        }

        for (field_name, field_def) in fields {
            let field_path = make_path(path_prefix, field_name);

            match obj.get(field_name) {
                Some(value) => {
                    if value.is_null() {
                        return Err(SchemaError::validation_failed(
                            ValidationDetails::null_value(field_path),
                        ));
                    }

                    Self::validate_value(value, field_def, &field_path)?;
                }
                None => {
                    if field_def.required {
                        return Err(SchemaError::validation_failed(
                            ValidationDetails::missing_field(field_path),
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Validates a single value: type check first, then the field validator
    fn validate_value(value: &Value, field_def: &FieldDef, field_path: &str) -> SchemaResult<()> {
        match &field_def.field_type {
            FieldType::String => {
                if !value.is_string() {
                    return Err(type_mismatch(field_path, "string", value));
                }
            }
            FieldType::Date => {
                let parseable = value
                    .as_str()
                    .map(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok())
                    .unwrap_or(false);
                if !parseable {
                    return Err(type_mismatch(field_path, "date", value));
                }
            }
            FieldType::Object { fields } => {
                let nested = value
                    .as_object()
                    .ok_or_else(|| type_mismatch(field_path, "object", value))?;
                Self::validate_object(nested, fields, field_path)?;
            }
            FieldType::Any => {
                // opaque payload, accepted as-is
            }
        }

        if let Some(validator) = &field_def.validator {
            if !validator.check(value) {
                return Err(SchemaError::validation_failed(ValidationDetails::new(
                    field_path,
                    validator.kind(),
                    validator.render_message(value),
                )));
            }
        }

        Ok(())
    }
}

fn type_mismatch(field_path: &str, expected: &str, actual: &Value) -> SchemaError {
    SchemaError::validation_failed(ValidationDetails::type_mismatch(
        field_path,
        expected,
        json_type_name(actual),
    ))
}

/// Builds a dotted field path
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

/// Returns the JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
