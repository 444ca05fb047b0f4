//! Query matching for scoped queries
//!
//! Evaluates a query object against documents. Query keys are dotted
//! paths; a clause of the form `{"$in": [...]}` is an in-set membership
//! test, any other clause is exact equality. No type coercion.

use serde_json::Value;

use crate::document::get_path;

/// Evaluates query objects against documents
pub struct QueryMatcher;

impl QueryMatcher {
    /// Checks whether a document matches every clause of a query.
    ///
    /// AND semantics across keys; a missing field or a null value
    /// never matches. A non-object query matches nothing.
    pub fn matches(document: &Value, query: &Value) -> bool {
        let clauses = match query.as_object() {
            Some(obj) => obj,
            None => return false,
        };

        clauses
            .iter()
            .all(|(path, clause)| Self::matches_clause(document, path, clause))
    }

    /// Checks a single clause against the value at a dotted path
    fn matches_clause(document: &Value, path: &str, clause: &Value) -> bool {
        let field_value = match get_path(document, path) {
            Some(v) => v,
            None => return false,
        };

        if field_value.is_null() {
            return false;
        }

        match in_set(clause) {
            Some(allowed) => allowed.contains(field_value),
            None => field_value == clause,
        }
    }
}

/// Recognizes an in-set clause: an object whose only key is `$in`
/// holding an array
fn in_set(clause: &Value) -> Option<&Vec<Value>> {
    let obj = clause.as_object()?;
    if obj.len() != 1 {
        return None;
    }
    obj.get("$in")?.as_array()
}
