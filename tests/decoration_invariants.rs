//! Decoration Invariant Tests
//!
//! Decoration happens once per (schema, prefix) pair and must fail
//! fast on malformed options or name conflicts:
//! - statuses must be a non-empty list
//! - an existing field with the derived name is a conflict, never a
//!   silent overwrite
//! - generated names follow the documented derivation exactly

use statusable::schema::{FieldDef, Schema, SchemaError};
use statusable::status::{decorate, StatusError, StatusOptions};

// =============================================================================
// Options Validation
// =============================================================================

/// Empty statuses list is rejected at decoration time.
#[test]
fn test_decoration_requires_non_empty_statuses() {
    let mut schema = Schema::new();

    let err = decorate(&mut schema, &StatusOptions::new(Vec::<String>::new())).unwrap_err();
    assert!(err.is_type_constraint());

    // nothing was added to the schema
    assert!(!schema.has_field("status"));
    assert!(!schema.has_method("setStatus"));
}

// =============================================================================
// Name Conflicts
// =============================================================================

/// An existing `status` field makes unprefixed decoration fail.
#[test]
fn test_unprefixed_field_conflict() {
    let mut schema = Schema::new();
    schema
        .add_field("status", FieldDef::optional_string())
        .unwrap();

    let err = decorate(&mut schema, &StatusOptions::new(["status1", "status2"])).unwrap_err();
    assert_eq!(
        err,
        StatusError::Schema(SchemaError::DuplicateField("status".into()))
    );
}

/// An existing `<prefix>Status` field makes prefixed decoration fail.
#[test]
fn test_prefixed_field_conflict() {
    let mut schema = Schema::new();
    schema
        .add_field("prefixedStatus", FieldDef::optional_string())
        .unwrap();

    let options = StatusOptions::new(["status1", "status2"]).with_prefix("prefixed");
    let err = decorate(&mut schema, &options).unwrap_err();
    assert_eq!(
        err,
        StatusError::Schema(SchemaError::DuplicateField("prefixedStatus".into()))
    );
}

/// Decorating the same schema twice with the same prefix conflicts.
#[test]
fn test_repeated_decoration_conflicts() {
    let mut schema = Schema::new();
    decorate(&mut schema, &StatusOptions::new(["enabled"])).unwrap();

    let err = decorate(&mut schema, &StatusOptions::new(["enabled"])).unwrap_err();
    assert!(matches!(err, StatusError::Schema(_)));
}

// =============================================================================
// Name Derivation
// =============================================================================

/// Unprefixed decoration generates the default names.
#[test]
fn test_unprefixed_names() {
    let mut schema = Schema::new();
    let handle = decorate(&mut schema, &StatusOptions::new(["enabled", "disabled"])).unwrap();

    assert_eq!(handle.field_name(), "status");
    assert_eq!(handle.setter_name(), "setStatus");
    assert_eq!(handle.scope_name(), "scopeQueryByStatuses");

    assert!(schema.has_field("status"));
    assert!(schema.has_method("setStatus"));
    assert!(schema.has_static("scopeQueryByStatuses"));
}

/// A prefix namespaces the field and both behaviors, capitalizing only
/// the first character.
#[test]
fn test_prefixed_names() {
    let mut schema = Schema::new();
    let options = StatusOptions::new(["enabled", "disabled"]).with_prefix("billing");
    let handle = decorate(&mut schema, &options).unwrap();

    assert_eq!(handle.field_name(), "billingStatus");
    assert_eq!(handle.setter_name(), "setBillingStatus");
    assert_eq!(handle.scope_name(), "scopeQueryByBillingStatuses");

    assert!(schema.has_field("billingStatus"));
    assert!(schema.has_method("setBillingStatus"));
    assert!(schema.has_static("scopeQueryByBillingStatuses"));
}

/// Distinct prefixes coexist independently on one schema.
#[test]
fn test_multiple_prefixes_coexist() {
    let mut schema = Schema::new();

    let plain = decorate(&mut schema, &StatusOptions::new(["enabled", "disabled"])).unwrap();
    let billing = decorate(
        &mut schema,
        &StatusOptions::new(["paid", "overdue"]).with_prefix("billing"),
    )
    .unwrap();

    assert!(schema.has_field("status"));
    assert!(schema.has_field("billingStatus"));
    assert_eq!(plain.statuses(), &["enabled", "disabled"]);
    assert_eq!(billing.statuses(), &["paid", "overdue"]);
}
