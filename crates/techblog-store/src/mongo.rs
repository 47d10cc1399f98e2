//! MongoDB post store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use techblog_core::{Post, PostSummary};
use tracing::debug;

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::source::{PostFilter, PostStore};

/// A post store backed by a MongoDB collection.
///
/// The driver connection is opened lazily through the shared
/// [`StoreClient`] on the first query.
#[derive(Debug, Clone)]
pub struct MongoPostStore {
    client: StoreClient,
}

impl MongoPostStore {
    /// Creates a store that queries through `client`.
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &StoreClient {
        &self.client
    }

    async fn collection<T>(&self) -> Result<Collection<T>, StoreError>
    where
        T: Send + Sync,
    {
        let config = self.client.config();
        let client = self.client.get_client().await?;
        Ok(client
            .database(config.database())
            .collection::<T>(config.collection()))
    }
}

/// Builds the list filter document.
///
/// `{}` for all posts, otherwise a case-insensitive match of the escaped
/// term against `title` or `slug`.
pub fn list_filter(filter: &PostFilter) -> Document {
    match filter.pattern() {
        None => doc! {},
        Some(pattern) => doc! {
            "$or": [
                { "title": { "$regex": pattern.as_str(), "$options": "i" } },
                { "slug": { "$regex": pattern.as_str(), "$options": "i" } }
            ]
        },
    }
}

/// Projection for list queries: the body is never fetched.
pub fn summary_projection() -> Document {
    doc! { "title": 1, "description": 1, "slug": 1 }
}

/// Point lookup document for an exact slug.
pub fn slug_filter(slug: &str) -> Document {
    doc! { "slug": slug }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<PostSummary>, StoreError> {
        let collection = self.collection::<PostSummary>().await?;

        debug!(term = ?filter.term(), "Listing posts");

        let cursor = collection
            .find(list_filter(filter))
            .projection(summary_projection())
            .await?;
        let posts: Vec<PostSummary> = cursor.try_collect().await?;

        debug!("Listed {} posts", posts.len());

        Ok(posts)
    }

    async fn find_post(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let collection = self.collection::<Post>().await?;

        debug!(slug, "Fetching post");

        Ok(collection.find_one(slug_filter(slug)).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let client = self.client.get_client().await?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "mongodb"
    }
}
