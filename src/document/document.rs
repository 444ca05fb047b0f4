//! Document instances with dotted-path addressing
//!
//! A document is a JSON object. `get`/`set` address nested values by
//! dotted path (e.g. "billingStatus.value"); `set` creates intermediate
//! objects as needed and overwrites non-object intermediates.

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::schema::{FieldDef, FieldDefault, FieldType, Schema};

/// Resolves a dotted path inside a JSON value.
///
/// Returns `None` when any segment is missing or a non-object is
/// traversed.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// A document instance: one entity constructed from a schema.
///
/// Holds its own copy of every status record declared on the schema;
/// mutation happens through the generated setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    inner: Value,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            inner: Value::Object(Map::new()),
        }
    }

    /// Constructs a document carrying the schema's field defaults.
    ///
    /// Defaulted fields (including nested ones) are materialized; a
    /// schema-declared `_id` field receives a generated identifier.
    pub fn with_defaults(schema: &Schema) -> Self {
        let mut doc = Self::new();

        let mut defaults = Vec::new();
        collect_defaults(schema.fields(), "", &mut defaults);
        for (path, default) in defaults {
            match default {
                FieldDefault::Now => doc.set(&path, Value::String(now_rfc3339())),
            }
        }

        if schema.has_field("_id") {
            doc.set("_id", Value::String(Uuid::new_v4().to_string()));
        }

        doc
    }

    /// Reads the value at a dotted path
    pub fn get(&self, path: &str) -> Option<&Value> {
        get_path(&self.inner, path)
    }

    /// Writes a value at a dotted path, creating intermediate objects
    pub fn set(&mut self, path: &str, value: Value) {
        let mut current = &mut self.inner;
        let segments: Vec<&str> = path.split('.').collect();

        for segment in &segments[..segments.len() - 1] {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            let obj = current.as_object_mut().unwrap();
            current = obj
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }

        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current
            .as_object_mut()
            .unwrap()
            .insert(segments[segments.len() - 1].to_string(), value);
    }

    /// The underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.inner
    }

    /// Consumes the document, returning the underlying JSON value
    pub fn into_value(self) -> Value {
        self.inner
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects (dotted path, default) pairs declared by the field map
fn collect_defaults(
    fields: &HashMap<String, FieldDef>,
    prefix: &str,
    out: &mut Vec<(String, FieldDefault)>,
) {
    for (name, def) in fields {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        if let Some(default) = def.default {
            out.push((path.clone(), default));
        }

        if let FieldType::Object { fields } = &def.field_type {
            collect_defaults(fields, &path, out);
        }
    }
}

/// Current wall-clock time as an RFC 3339 string
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
