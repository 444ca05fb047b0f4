//! The generated status behaviors
//!
//! A [`StatusHandle`] is what decoration returns: the per-instance
//! setter and the schema-level query scoping behavior, with every
//! dotted path precomputed at decoration time.

use serde_json::{json, Value};

use crate::document::{now_rfc3339, Document};

use super::errors::{StatusError, StatusResult};
use super::naming::{StatusNames, StatusPaths};

/// Options accepted by the setter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetStatusOptions {
    /// Opaque payload stored alongside the status; left untouched
    /// when absent
    pub detail: Option<Value>,
}

impl SetStatusOptions {
    /// Options carrying a detail payload
    pub fn with_detail(detail: Value) -> Self {
        Self {
            detail: Some(detail),
        }
    }
}

/// The behaviors generated for one decorated (schema, prefix) pair.
///
/// Holds no document state; both behaviors mutate caller-owned objects
/// synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusHandle {
    names: StatusNames,
    paths: StatusPaths,
    statuses: Vec<String>,
}

impl StatusHandle {
    pub(crate) fn new(names: StatusNames, statuses: Vec<String>) -> Self {
        let paths = StatusPaths::new(&names.field);
        Self {
            names,
            paths,
            statuses,
        }
    }

    /// Name of the status field on the schema
    pub fn field_name(&self) -> &str {
        &self.names.field
    }

    /// Name of the generated setter method
    pub fn setter_name(&self) -> &str {
        &self.names.setter
    }

    /// Name of the generated query scoping static
    pub fn scope_name(&self) -> &str {
        &self.names.scope
    }

    /// The configured legal status values
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Sets the document's status.
    ///
    /// Writes the value, the reason and the current wall-clock time
    /// unconditionally; writes the detail payload only when present in
    /// the options, leaving any prior detail untouched otherwise.
    ///
    /// The value is NOT checked against the configured set here; an
    /// out-of-set value surfaces later, when the document is validated
    /// against the schema.
    pub fn set_status(
        &self,
        document: &mut Document,
        value: impl Into<String>,
        reason: impl Into<String>,
        options: Option<SetStatusOptions>,
    ) {
        document.set(&self.paths.value, Value::String(value.into()));
        document.set(&self.paths.reason, Value::String(reason.into()));
        document.set(&self.paths.updated_at, Value::String(now_rfc3339()));

        if let Some(detail) = options.and_then(|o| o.detail) {
            document.set(&self.paths.detail, detail);
        }
    }

    /// Scopes a query to documents whose status is one of the given
    /// values.
    ///
    /// Writes an in-set predicate (`{"$in": [...]}`) under the status
    /// value key, overwriting any prior predicate there and leaving
    /// every other key of the query untouched. Returns the same query
    /// object so callers can chain.
    ///
    /// # Errors
    ///
    /// - `StatusError::TypeConstraint` when `query` is not a JSON
    ///   object
    /// - `StatusError::TypeConstraint` when `statuses` is neither a
    ///   string nor an array of strings
    pub fn scope_query_by_statuses<'q>(
        &self,
        query: &'q mut Value,
        statuses: &Value,
    ) -> StatusResult<&'q mut Value> {
        let selected = normalize_statuses(statuses)?;

        let obj = query.as_object_mut().ok_or_else(|| {
            StatusError::type_constraint("query MUST be a JSON object")
        })?;

        obj.insert(self.paths.value.clone(), json!({ "$in": selected }));

        Ok(query)
    }
}

/// Normalizes the statuses argument: a single string becomes a
/// one-element list, a list of strings passes through.
fn normalize_statuses(statuses: &Value) -> StatusResult<Vec<String>> {
    match statuses {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    StatusError::type_constraint(
                        "statuses MUST be either a list of status strings or a status string",
                    )
                })
            })
            .collect(),
        _ => Err(StatusError::type_constraint(
            "statuses MUST be either a list of status strings or a status string",
        )),
    }
}
