//! Post store trait definition.

use async_trait::async_trait;
use techblog_core::{Post, PostSummary};

use super::PostFilter;
use crate::error::StoreError;

/// A read-only source of blog posts.
///
/// This trait abstracts over the document store so the server can query
/// posts without knowing the underlying backend.
///
/// # Implementors
///
/// - `MongoPostStore` - Reads posts from a MongoDB collection
/// - `InMemoryPostStore` - Holds posts in memory (tests, local development)
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Lists post summaries matching `filter`, in natural store order.
    ///
    /// Only `title`, `description` and `slug` are fetched.
    ///
    /// # Errors
    ///
    /// - `StoreError::Configuration` if the store client cannot be built
    /// - `StoreError::Connectivity` if the store is not accessible
    async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<PostSummary>, StoreError>;

    /// Finds the single post whose slug equals `slug` exactly.
    ///
    /// Returns `Ok(None)` when no post matches.
    async fn find_post(&self, slug: &str) -> Result<Option<Post>, StoreError>;

    /// Verifies that the store is reachable and properly configured.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Returns the name of this store, for logging.
    fn name(&self) -> &str;
}
