//! Prefixed Status Behavior Tests
//!
//! The prefixed behaviors work exactly like the unprefixed ones, only
//! namespaced: the field is `billingStatus`, the setter writes under
//! `billingStatus.*`, and scoping keys the predicate accordingly.

use serde_json::json;
use statusable::document::Document;
use statusable::schema::{FieldDef, Schema};
use statusable::status::{decorate, SetStatusOptions, StatusHandle, StatusOptions};

fn setup() -> (Schema, StatusHandle) {
    let mut schema = Schema::new();
    schema
        .add_field("testProperty", FieldDef::optional_string())
        .unwrap();

    let options = StatusOptions::new(["enabled", "disabled"]).with_prefix("billing");
    let handle = decorate(&mut schema, &options).unwrap();
    (schema, handle)
}

// =============================================================================
// setBillingStatus(value, reason, options)
// =============================================================================

/// The prefixed setter populates `billingStatus.*` exactly like the
/// unprefixed setter populates `status.*`.
#[test]
fn test_prefixed_setter_modifies_prefixed_field() {
    let (schema, handle) = setup();
    let mut resource = Document::with_defaults(&schema);

    handle.set_status(&mut resource, "enabled", "UserRequested", None);

    assert_eq!(resource.get("billingStatus.value"), Some(&json!("enabled")));
    assert_eq!(
        resource.get("billingStatus.reason"),
        Some(&json!("UserRequested"))
    );

    let updated_at = resource
        .get("billingStatus.updatedAt")
        .and_then(|v| v.as_str())
        .unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(updated_at).is_ok());

    // the unprefixed field is not involved
    assert_eq!(resource.get("status.value"), None);
}

/// Detail payloads land under the prefixed field too.
#[test]
fn test_prefixed_setter_with_detail() {
    let (schema, handle) = setup();
    let mut resource = Document::with_defaults(&schema);

    handle.set_status(
        &mut resource,
        "disabled",
        "PaymentFailed",
        Some(SetStatusOptions::with_detail(json!({ "attempts": 3 }))),
    );

    assert_eq!(
        resource.get("billingStatus.detail"),
        Some(&json!({ "attempts": 3 }))
    );
}

// =============================================================================
// scopeQueryByBillingStatuses(query, statuses)
// =============================================================================

/// Scoping keys the predicate by the prefixed field.
#[test]
fn test_prefixed_scope_query() {
    let (_schema, handle) = setup();
    let mut query = json!({ "tags": ["a", "b"] });

    handle
        .scope_query_by_statuses(&mut query, &json!(["enabled", "disabled"]))
        .unwrap();

    assert_eq!(query["tags"].as_array().unwrap().len(), 2);
    assert_eq!(
        query["billingStatus.value"],
        json!({ "$in": ["enabled", "disabled"] })
    );
    assert!(query.get("status.value").is_none());
}

/// Prefixed and unprefixed records on one schema stay independent.
#[test]
fn test_prefixed_and_unprefixed_records_are_independent() {
    let (mut schema, billing) = setup();
    let plain = decorate(&mut schema, &StatusOptions::new(["on", "off"])).unwrap();

    let mut resource = Document::with_defaults(&schema);
    billing.set_status(&mut resource, "enabled", "UserRequested", None);
    plain.set_status(&mut resource, "off", "Maintenance", None);

    assert_eq!(resource.get("billingStatus.value"), Some(&json!("enabled")));
    assert_eq!(resource.get("status.value"), Some(&json!("off")));
    assert_eq!(resource.get("status.reason"), Some(&json!("Maintenance")));
}
