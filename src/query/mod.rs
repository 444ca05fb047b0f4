//! In-memory query evaluation for scoped queries.

mod matcher;

pub use matcher::QueryMatcher;
