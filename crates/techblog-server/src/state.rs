//! Application state.

use std::sync::Arc;

use techblog_store::PostStore;

use crate::cache::CacheConfig;
use crate::queries::PostQueries;
use crate::render::Credits;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The cached query layer over the post store.
    queries: PostQueries,
    /// Footer credits.
    credits: Arc<Credits>,
}

impl AppState {
    /// Creates a new AppState over the given store.
    pub fn new(store: Arc<dyn PostStore>, cache_config: CacheConfig) -> Self {
        Self {
            queries: PostQueries::new(store, cache_config),
            credits: Arc::new(Credits::default()),
        }
    }

    /// Replaces the footer credits.
    pub fn with_credits(mut self, credits: Credits) -> Self {
        self.credits = Arc::new(credits);
        self
    }

    /// Returns the footer credits.
    pub fn credits(&self) -> &Credits {
        &self.credits
    }

    /// Returns the query layer.
    pub fn queries(&self) -> &PostQueries {
        &self.queries
    }

    /// Returns the post store.
    pub fn store(&self) -> &dyn PostStore {
        self.queries.store()
    }
}
