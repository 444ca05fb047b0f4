//! Status decoration error types
//!
//! All errors are synchronous and fatal to the calling operation;
//! nothing is retried or suppressed internally.

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for status operations
pub type StatusResult<T> = Result<T, StatusError>;

/// Status decoration and scoping errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusError {
    /// A malformed input at decoration or query-scoping call time
    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    /// A conflict raised by the schema while decorating
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl StatusError {
    /// Create a type constraint error
    pub fn type_constraint(message: impl Into<String>) -> Self {
        Self::TypeConstraint(message.into())
    }

    /// Returns true for malformed-input failures
    pub fn is_type_constraint(&self) -> bool {
        matches!(self, Self::TypeConstraint(_))
    }
}
