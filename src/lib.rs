//! statusable - status decoration for document schemas
//!
//! Decorates a document schema with a "status" sub-document
//! (value, reason, updatedAt, detail) and two generated behaviors:
//! a per-instance status setter and a schema-level query scoping helper.
//!
//! Decoration happens once, at schema definition time. The generated
//! behaviors are pure synchronous mutations of caller-owned objects.

pub mod document;
pub mod observability;
pub mod query;
pub mod schema;
pub mod status;
