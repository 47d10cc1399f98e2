//! Cache module for the Tech Blogs server.
//!
//! This module provides the query result cache using Moka, with TTL-based
//! expiration and metrics. Entries are never invalidated explicitly.

pub mod keys;
pub mod query_cache;

// Re-exports
pub use keys::{CacheKey, QueryOperation};
pub use query_cache::{CacheConfig, CacheError, QueryCache};
