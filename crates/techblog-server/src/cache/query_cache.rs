//! TTL cache over store query results, backed by moka.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::future::Cache;
use moka::notification::RemovalCause;
use techblog_store::StoreError;
use thiserror::Error;

use crate::cache::keys::CacheKey;
use crate::metrics::CacheMetrics;

/// Error del sistema de cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// The store query behind a miss failed. Shared between coalesced callers.
    #[error("failed to fetch posts: {0}")]
    Fetch(Arc<StoreError>),
}

impl CacheError {
    pub fn store_error(&self) -> &StoreError {
        match self {
            Self::Fetch(err) => err,
        }
    }
}

/// Configuracion del cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Vida de una entry desde que se inserta (default: 300 segundos)
    pub ttl: Duration,
    /// Maximo numero de entries (default: 10000)
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

fn eviction_cause(cause: RemovalCause) -> &'static str {
    match cause {
        RemovalCause::Expired => "ttl",
        RemovalCause::Size => "capacity",
        RemovalCause::Explicit => "manual",
        RemovalCause::Replaced => "replaced",
    }
}

/// Resultados de una query, keyed por (operacion, argumento).
///
/// Una entry expira `ttl` despues de ser poblada y no hay otra forma de
/// invalidarla. Clonar el cache comparte el almacenamiento.
///
/// # Examples
///
/// ```no_run
/// use techblog_server::cache::{CacheConfig, CacheKey, QueryCache};
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache: QueryCache<Vec<String>> = QueryCache::new("list_posts", CacheConfig::default());
/// let key = CacheKey::list_posts(Some("raft"));
///
/// let slugs = cache
///     .get_or_try_insert_with(key, || async { Ok(vec!["raft-explained".to_string()]) })
///     .await
///     .unwrap();
/// println!("{} posts", slugs.len());
/// # }
/// ```
#[derive(Clone)]
pub struct QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    entries: Cache<CacheKey, V>,
    metrics: CacheMetrics,
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// `name` se usa como label `cache` de las metricas.
    pub fn new(name: &'static str, config: CacheConfig) -> Self {
        let metrics = CacheMetrics::new(name);
        let listener_metrics = metrics;

        let entries = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.ttl)
            .eviction_listener(move |_key, _value, cause| {
                listener_metrics.record_eviction(eviction_cause(cause));
            })
            .build();

        Self { entries, metrics }
    }

    /// Lookup without populating; `None` on a miss or after expiry.
    #[cfg(test)]
    pub(crate) async fn get(&self, key: &CacheKey) -> Option<V> {
        let started = Instant::now();
        let found = self.entries.get(key).await;

        match found {
            Some(_) => self.metrics.record_hit(),
            None => self.metrics.record_miss(),
        }
        self.metrics
            .record_operation_duration("get", started.elapsed());

        found
    }

    /// Returns the cached value, or runs `fetch` and caches its result.
    ///
    /// Concurrent misses on one key share a single `fetch`. Errors are
    /// returned to every waiting caller and are not cached.
    pub async fn get_or_try_insert_with<F, Fut>(
        &self,
        key: CacheKey,
        fetch: F,
    ) -> Result<V, CacheError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, StoreError>>,
    {
        let started = Instant::now();

        if let Some(value) = self.entries.get(&key).await {
            self.metrics.record_hit();
            self.metrics
                .record_operation_duration("hit", started.elapsed());
            return Ok(value);
        }

        self.metrics.record_miss();
        tracing::debug!(key = %key, "Query cache miss");

        let value = self
            .entries
            .try_get_with(key, fetch())
            .await
            .map_err(CacheError::Fetch)?;

        self.metrics
            .record_operation_duration("miss", started.elapsed());
        self.metrics.update_entry_count(self.entries.entry_count());

        Ok(value)
    }

    #[cfg(test)]
    pub(crate) async fn insert(&self, key: CacheKey, value: V) {
        self.entries.insert(key, value).await;
        self.metrics.update_entry_count(self.entries.entry_count());
    }

    /// Corre las tareas pendientes de moka (expiracion, conteos).
    #[cfg(test)]
    pub(crate) async fn sync(&self) {
        self.entries.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn short_ttl() -> CacheConfig {
        CacheConfig {
            ttl: Duration::from_millis(200),
            ..CacheConfig::default()
        }
    }

    #[tokio::test]
    async fn test_cache_insert_and_get() {
        let cache: QueryCache<Vec<String>> = QueryCache::new("test", CacheConfig::default());
        let key = CacheKey::list_posts(None);

        cache.insert(key.clone(), vec!["intro".to_string()]).await;

        let cached = cache.get(&key).await;
        assert_eq!(cached.unwrap(), vec!["intro".to_string()]);
    }

    #[tokio::test]
    async fn test_cache_miss_returns_none() {
        let cache: QueryCache<Vec<String>> = QueryCache::new("test", CacheConfig::default());

        let result = cache.get(&CacheKey::get_post("nonexistent")).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_or_insert_populates_cache() {
        let cache: QueryCache<u32> = QueryCache::new("test", CacheConfig::default());
        let key = CacheKey::get_post("intro");

        let call_count = Arc::new(AtomicU32::new(0));

        // Primera llamada: ejecuta init
        let count = Arc::clone(&call_count);
        let first = cache
            .get_or_try_insert_with(key.clone(), || async move {
                Ok(count.fetch_add(1, Ordering::SeqCst) + 1)
            })
            .await
            .unwrap();

        // Segunda llamada: usa cache, no ejecuta init
        let count = Arc::clone(&call_count);
        let second = cache
            .get_or_try_insert_with(key.clone(), || async move {
                Ok(count.fetch_add(1, Ordering::SeqCst) + 1)
            })
            .await
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 1);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let cache: QueryCache<u32> = QueryCache::new("test", short_ttl());
        let key = CacheKey::list_posts(Some("raft"));

        cache.insert(key.clone(), 1).await;
        assert_eq!(cache.get(&key).await, Some(1));

        tokio::time::sleep(Duration::from_millis(300)).await;
        cache.sync().await;

        assert!(cache.get(&key).await.is_none());

        // Recomputa y sobreescribe
        let value = cache
            .get_or_try_insert_with(key.clone(), || async { Ok(2) })
            .await
            .unwrap();
        assert_eq!(value, 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache: QueryCache<u32> = QueryCache::new("test", CacheConfig::default());
        let key = CacheKey::get_post("intro");

        let result = cache
            .get_or_try_insert_with(key.clone(), || async {
                Err(StoreError::connectivity("connection refused"))
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.store_error(),
            StoreError::Connectivity { .. }
        ));

        let value = cache
            .get_or_try_insert_with(key, || async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache: QueryCache<&'static str> = QueryCache::new("test", CacheConfig::default());

        cache.insert(CacheKey::list_posts(Some("a")), "a").await;
        cache.insert(CacheKey::list_posts(Some("b")), "b").await;

        assert_eq!(cache.get(&CacheKey::list_posts(Some("a"))).await, Some("a"));
        assert_eq!(cache.get(&CacheKey::list_posts(Some("b"))).await, Some("b"));
        assert!(cache.get(&CacheKey::list_posts(None)).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_access() {
        let cache: Arc<QueryCache<u32>> =
            Arc::new(QueryCache::new("test", CacheConfig::default()));
        let call_count = Arc::new(AtomicU32::new(0));

        let key = CacheKey::list_posts(None);

        // Simular 100 requests concurrentes para la misma key
        let mut handles = vec![];

        for _ in 0..100 {
            let cache = Arc::clone(&cache);
            let key = key.clone();
            let count = Arc::clone(&call_count);

            handles.push(tokio::spawn(async move {
                cache
                    .get_or_try_insert_with(key, || async move {
                        count.fetch_add(1, Ordering::SeqCst);
                        // Simular latencia del store
                        tokio::time::sleep(Duration::from_millis(10)).await;
                        Ok(42)
                    })
                    .await
            }));
        }

        // Esperar todas las tasks
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), 42);
        }

        // Moka coalesce los misses concurrentes
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }
}
