//! Request extractors.

pub mod query;

pub use query::{PageQuery, SearchQuery};
