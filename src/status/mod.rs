//! Status decoration
//!
//! [`decorate`] attaches a status record (value, reason, updatedAt,
//! detail) to a schema and returns the [`StatusHandle`] implementing
//! the generated setter and query scoping behaviors.
//!
//! The setter never checks the status value at call time; the value is
//! enforced against the configured set by the deferred validation pass
//! ([`crate::schema::SchemaValidator`]), which reports the kind
//! [`STATUS_INVALID`].

mod errors;
mod handle;
mod mixin;
mod naming;

pub use errors::{StatusError, StatusResult};
pub use handle::{SetStatusOptions, StatusHandle};
pub use mixin::{decorate, StatusOptions, STATUS_INVALID};
pub use naming::{StatusNames, StatusPaths};
