//! Posts y stores de prueba.

use std::sync::Arc;

use async_trait::async_trait;
use techblog_core::{Post, PostSummary};
use techblog_store::{InMemoryPostStore, PostFilter, PostStore, StoreError};

/// Posts de ejemplo, en el orden natural del store.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new("intro", "Intro to Systems", "# Intro\n\nHello **world**")
            .with_description("Basics of distributed systems")
            .with_date("2024-01-01")
            .with_tags(["rust", "raft"]),
        Post::new("adv-intro", "Advanced", "# Advanced\n\nMore <em>depth</em>"),
        Post::new("raft-explained", "Raft Explained", "Leader election")
            .with_description("Consensus <made> simple")
            .with_tags(Vec::<String>::new()),
    ]
}

/// Store en memoria con los posts de ejemplo.
pub fn sample_store() -> Arc<InMemoryPostStore> {
    Arc::new(InMemoryPostStore::with_posts(sample_posts()))
}

/// Store que siempre falla con un error de conectividad.
pub struct FailingStore;

#[async_trait]
impl PostStore for FailingStore {
    async fn list_posts(&self, _filter: &PostFilter) -> Result<Vec<PostSummary>, StoreError> {
        Err(StoreError::connectivity("connection refused"))
    }

    async fn find_post(&self, _slug: &str) -> Result<Option<Post>, StoreError> {
        Err(StoreError::connectivity("connection refused"))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::connectivity("connection refused"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}
