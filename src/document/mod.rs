//! Document abstraction: a JSON object addressable by dotted paths.

mod document;

pub use document::{get_path, Document};

pub(crate) use document::now_rfc3339;
