//! Structured logging.

mod logger;

pub use logger::{Logger, Severity};
