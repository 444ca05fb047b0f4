//! Name and path derivation for a status record
//!
//! Names are derived once, at decoration time:
//! - field:  `{prefix}Status`, or `status` when unprefixed
//! - setter: `set{Prefix}Status`, or `setStatus` when unprefixed
//! - scope:  `scopeQueryBy{Prefix}Statuses`, or `scopeQueryByStatuses`
//!
//! where `{Prefix}` uppercases only the first character of the prefix.

/// Uppercases the first character, leaving the rest unchanged
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The derived names of one status record on a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNames {
    /// Name of the status field on the schema
    pub field: String,
    /// Name of the per-instance setter method
    pub setter: String,
    /// Name of the schema-level query scoping static
    pub scope: String,
}

impl StatusNames {
    /// Derives the field, setter and scope names for a prefix
    pub fn derive(prefix: Option<&str>) -> Self {
        match prefix {
            Some(prefix) if !prefix.is_empty() => {
                let capitalized = capitalize_first(prefix);
                Self {
                    field: format!("{}Status", prefix),
                    setter: format!("set{}Status", capitalized),
                    scope: format!("scopeQueryBy{}Statuses", capitalized),
                }
            }
            _ => Self {
                field: "status".into(),
                setter: "setStatus".into(),
                scope: "scopeQueryByStatuses".into(),
            },
        }
    }
}

/// Dotted paths into one status record, computed once at decoration
/// time instead of per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPaths {
    /// Path to the status value (also the query predicate key)
    pub value: String,
    /// Path to the reason
    pub reason: String,
    /// Path to the last-update timestamp
    pub updated_at: String,
    /// Path to the opaque detail payload
    pub detail: String,
}

impl StatusPaths {
    /// Builds the sub-property paths for a status field name
    pub fn new(field: &str) -> Self {
        Self {
            value: format!("{}.value", field),
            reason: format!("{}.reason", field),
            updated_at: format!("{}.updatedAt", field),
            detail: format!("{}.detail", field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unprefixed_names() {
        let names = StatusNames::derive(None);
        assert_eq!(names.field, "status");
        assert_eq!(names.setter, "setStatus");
        assert_eq!(names.scope, "scopeQueryByStatuses");
    }

    #[test]
    fn test_prefixed_names() {
        let names = StatusNames::derive(Some("billing"));
        assert_eq!(names.field, "billingStatus");
        assert_eq!(names.setter, "setBillingStatus");
        assert_eq!(names.scope, "scopeQueryByBillingStatuses");
    }

    #[test]
    fn test_capitalize_touches_only_first_character() {
        let names = StatusNames::derive(Some("dataSync"));
        assert_eq!(names.field, "dataSyncStatus");
        assert_eq!(names.setter, "setDataSyncStatus");
        assert_eq!(names.scope, "scopeQueryByDataSyncStatuses");
    }

    #[test]
    fn test_empty_prefix_falls_back_to_unprefixed() {
        assert_eq!(StatusNames::derive(Some("")), StatusNames::derive(None));
    }

    #[test]
    fn test_paths_follow_field_name() {
        let paths = StatusPaths::new("billingStatus");
        assert_eq!(paths.value, "billingStatus.value");
        assert_eq!(paths.reason, "billingStatus.reason");
        assert_eq!(paths.updated_at, "billingStatus.updatedAt");
        assert_eq!(paths.detail, "billingStatus.detail");
    }
}
