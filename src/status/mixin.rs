//! Schema decoration: attaching a status record to a schema
//!
//! Decoration adds the status field (value, reason, updatedAt, detail)
//! to the schema, registers the generated behavior names, and returns a
//! [`StatusHandle`] carrying the behaviors themselves. It runs once per
//! (schema, prefix) pair, at schema definition time.

use std::collections::HashMap;

use crate::observability::{Logger, Severity};
use crate::schema::{FieldDef, FieldValidator, Schema};

use super::errors::{StatusError, StatusResult};
use super::handle::StatusHandle;
use super::naming::StatusNames;

/// Validation kind produced when a persisted status value is not in
/// the configured set
pub const STATUS_INVALID: &str = "StatusInvalid";

/// Immutable decoration configuration: the legal status values and an
/// optional namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOptions {
    /// Optional namespace for the generated field and behavior names
    pub prefix: Option<String>,
    /// Every legal status value, in caller order
    pub statuses: Vec<String>,
}

impl StatusOptions {
    /// Create options from the legal status values
    pub fn new<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: None,
            statuses: statuses.into_iter().map(Into::into).collect(),
        }
    }

    /// Namespace the generated names with a prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Decorates a schema with a status record and its behaviors.
///
/// Adds the status field, registers the setter as a method and the
/// query scoping behavior as a static, and returns the handle that
/// implements both. Multiple prefixes may coexist on one schema; each
/// call produces an independent field and handle.
///
/// # Errors
///
/// - `StatusError::TypeConstraint` when `options.statuses` is empty
/// - `StatusError::Schema` when the field, method or static name is
///   already taken on the schema
pub fn decorate(schema: &mut Schema, options: &StatusOptions) -> StatusResult<StatusHandle> {
    if options.statuses.is_empty() {
        return Err(StatusError::type_constraint(
            "options.statuses MUST be a non-empty list of status values",
        ));
    }

    let names = StatusNames::derive(options.prefix.as_deref());

    schema.add_field(&names.field, build_status_field(&options.statuses))?;
    schema.register_method(&names.setter)?;
    schema.register_static(&names.scope)?;

    Logger::log(
        Severity::Info,
        "status.decorated",
        &[
            ("field", &names.field),
            ("prefix", options.prefix.as_deref().unwrap_or("")),
            ("statuses", &options.statuses.len().to_string()),
        ],
    );

    Ok(StatusHandle::new(names, options.statuses.clone()))
}

/// Builds the status sub-document field definition.
///
/// The value is validated against the configured set only here, at the
/// deferred validation pass; the setter writes it unchecked.
fn build_status_field(statuses: &[String]) -> FieldDef {
    let allowed: Vec<String> = statuses.to_vec();
    let validator = FieldValidator::new(
        STATUS_INVALID,
        "Status {VALUE} is not a valid status",
        move |value| {
            value
                .as_str()
                .map(|s| allowed.iter().any(|a| a == s))
                .unwrap_or(false)
        },
    );

    let mut fields = HashMap::new();
    fields.insert(
        "value".to_string(),
        FieldDef::required_string().with_validator(validator),
    );
    fields.insert("reason".to_string(), FieldDef::required_string());
    fields.insert("updatedAt".to_string(), FieldDef::date_defaulting_to_now());
    fields.insert("detail".to_string(), FieldDef::optional_any());

    FieldDef::optional_object(fields)
}
