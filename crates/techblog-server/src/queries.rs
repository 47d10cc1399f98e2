//! Cached post queries.

use std::sync::Arc;

use techblog_core::{Post, PostSummary, SearchTerm};
use techblog_store::{PostFilter, PostStore};
use tracing::instrument;

use crate::cache::{CacheConfig, CacheError, CacheKey, QueryCache};

/// The two read operations, each memoized per argument for the cache TTL.
///
/// Results may be up to one TTL stale with respect to the store.
#[derive(Clone)]
pub struct PostQueries {
    store: Arc<dyn PostStore>,
    lists: QueryCache<Arc<Vec<PostSummary>>>,
    posts: QueryCache<Option<Arc<Post>>>,
}

impl PostQueries {
    /// Creates the query layer over `store`.
    pub fn new(store: Arc<dyn PostStore>, config: CacheConfig) -> Self {
        Self {
            store,
            lists: QueryCache::new("list_posts", config.clone()),
            posts: QueryCache::new("get_post", config),
        }
    }

    /// Lists post summaries, filtered by `search_term` when one is given.
    ///
    /// An empty term is the same as no term.
    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        search_term: Option<&str>,
    ) -> Result<Arc<Vec<PostSummary>>, CacheError> {
        let term = SearchTerm::parse(search_term);
        let key = CacheKey::list_posts(term.as_ref().map(SearchTerm::as_str));
        let filter = match term {
            Some(term) => PostFilter::Search(term),
            None => PostFilter::All,
        };

        self.lists
            .get_or_try_insert_with(key, || async move {
                let posts = self.store.list_posts(&filter).await?;
                Ok(Arc::new(posts))
            })
            .await
    }

    /// Fetches the post with exactly this slug. Misses are cached too.
    #[instrument(skip(self))]
    pub async fn get_post(&self, slug: &str) -> Result<Option<Arc<Post>>, CacheError> {
        self.posts
            .get_or_try_insert_with(CacheKey::get_post(slug), || async move {
                let post = self.store.find_post(slug).await?;
                Ok(post.map(Arc::new))
            })
            .await
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &dyn PostStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use techblog_store::InMemoryPostStore;

    fn intro_store() -> Arc<InMemoryPostStore> {
        Arc::new(InMemoryPostStore::with_posts([
            Post::new("intro", "Intro to Systems", "# Intro"),
            Post::new("adv-intro", "Advanced", "# Advanced"),
        ]))
    }

    fn slugs(posts: &[PostSummary]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[tokio::test]
    async fn test_intro_scenario() {
        let queries = PostQueries::new(intro_store(), CacheConfig::default());

        let listed = queries.list_posts(Some("intro")).await.unwrap();
        assert_eq!(slugs(&listed), vec!["intro", "adv-intro"]);

        let post = queries.get_post("intro").await.unwrap().unwrap();
        assert_eq!(post.title, "Intro to Systems");

        assert!(queries.get_post("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_no_term_lists_everything() {
        let queries = PostQueries::new(intro_store(), CacheConfig::default());

        assert_eq!(queries.list_posts(None).await.unwrap().len(), 2);
        assert_eq!(queries.list_posts(Some("")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_results_are_stable_within_ttl() {
        let store = intro_store();
        let queries = PostQueries::new(store.clone(), CacheConfig::default());

        let before = queries.list_posts(None).await.unwrap();
        assert!(queries.get_post("raft").await.unwrap().is_none());
        assert!(queries.get_post("intro").await.unwrap().is_some());

        // Out-of-band edits
        store.insert(Post::new("raft", "Raft", "# Raft"));
        store.remove("intro");

        let after = queries.list_posts(None).await.unwrap();
        assert_eq!(before, after);
        assert!(queries.get_post("raft").await.unwrap().is_none());
        assert!(queries.get_post("intro").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_mutation_visible_after_ttl() {
        let store = intro_store();
        let config = CacheConfig {
            ttl: Duration::from_millis(200),
            ..CacheConfig::default()
        };
        let queries = PostQueries::new(store.clone(), config);

        assert_eq!(queries.list_posts(None).await.unwrap().len(), 2);
        assert!(queries.get_post("raft").await.unwrap().is_none());

        store.insert(Post::new("raft", "Raft", "# Raft"));
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(queries.list_posts(None).await.unwrap().len(), 3);
        assert!(queries.get_post("raft").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_each_term_has_its_own_entry() {
        let store = intro_store();
        let queries = PostQueries::new(store.clone(), CacheConfig::default());

        assert_eq!(queries.list_posts(Some("intro")).await.unwrap().len(), 2);

        store.insert(Post::new("intro-raft", "Raft", ""));

        // Cached term keeps its result; a new term queries the store.
        assert_eq!(queries.list_posts(Some("intro")).await.unwrap().len(), 2);
        assert_eq!(queries.list_posts(Some("INTRO")).await.unwrap().len(), 3);
    }
}
