//! In-memory post store.

use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;
use techblog_core::{Post, PostSummary};

use crate::error::StoreError;
use crate::source::{PostFilter, PostStore};

/// Posts held in memory, in insertion order.
///
/// Applies the same matching rules as the document store. Mutation methods
/// stand in for out-of-band edits made to the real collection.
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `posts`. Later duplicates of a slug replace
    /// earlier ones.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let store = Self::new();
        for post in posts {
            store.insert(post);
        }
        store
    }

    /// Loads posts from a JSON file containing an array of post documents.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            StoreError::configuration(format!("cannot read seed file {}: {}", path.display(), e))
        })?;
        let posts: Vec<Post> = serde_json::from_str(&raw).map_err(|e| {
            StoreError::configuration(format!("invalid seed file {}: {}", path.display(), e))
        })?;

        Ok(Self::with_posts(posts))
    }

    /// Inserts a post, replacing any post with the same slug in place.
    pub fn insert(&self, post: Post) {
        let mut posts = self.posts.write();
        match posts.iter_mut().find(|p| p.slug == post.slug) {
            Some(existing) => *existing = post,
            None => posts.push(post),
        }
    }

    /// Removes the post with `slug`. Returns true if one was removed.
    pub fn remove(&self, slug: &str) -> bool {
        let mut posts = self.posts.write();
        let before = posts.len();
        posts.retain(|p| p.slug != slug);
        posts.len() != before
    }

    /// Returns the number of posts.
    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    /// Returns true if the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<PostSummary>, StoreError> {
        Ok(self
            .posts
            .read()
            .iter()
            .filter(|p| filter.matches(p))
            .map(Post::summary)
            .collect())
    }

    async fn find_post(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().iter().find(|p| p.slug == slug).cloned())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
