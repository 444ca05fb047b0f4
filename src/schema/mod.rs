//! Schema abstraction: field definitions, behavior registries and
//! deferred document validation.
//!
//! # Design Principles
//!
//! - Definition-time conflicts surface as errors, never silent overwrites
//! - Validation is deferred: setters write freely, validation catches
//!   violations afterwards
//! - No nulls, defaults at construction only, no coercion
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult, ValidationDetails};
pub use types::{FieldDef, FieldDefault, FieldType, FieldValidator, Schema};
pub use validator::SchemaValidator;
