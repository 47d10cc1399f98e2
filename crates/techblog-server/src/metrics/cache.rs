//! Query cache metrics.

use std::time::Duration;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};

pub const CACHE_HITS: &str = "techblog_cache_hits_total";
pub const CACHE_MISSES: &str = "techblog_cache_misses_total";
pub const CACHE_EVICTIONS: &str = "techblog_cache_evictions_total";
pub const CACHE_ENTRIES: &str = "techblog_cache_entries";
pub const CACHE_OPERATION_SECONDS: &str = "techblog_cache_operation_seconds";

/// Describe las metricas de cache en el recorder global.
pub fn register_cache_metrics() {
    describe_counter!(CACHE_HITS, "Query cache lookups answered from cache");
    describe_counter!(CACHE_MISSES, "Query cache lookups that went to the store");
    describe_counter!(CACHE_EVICTIONS, "Query cache entries removed, by cause");
    describe_gauge!(CACHE_ENTRIES, "Approximate number of cached query results");
    describe_histogram!(CACHE_OPERATION_SECONDS, "Query cache lookup latency");
}

/// Metricas de un cache, etiquetadas con `cache = <name>`.
#[derive(Debug, Clone, Copy)]
pub struct CacheMetrics {
    cache: &'static str,
}

impl CacheMetrics {
    pub fn new(cache: &'static str) -> Self {
        Self { cache }
    }

    pub fn record_hit(&self) {
        counter!(CACHE_HITS, "cache" => self.cache).increment(1);
    }

    pub fn record_miss(&self) {
        counter!(CACHE_MISSES, "cache" => self.cache).increment(1);
    }

    /// `cause`: ttl, capacity, manual o replaced.
    pub fn record_eviction(&self, cause: &'static str) {
        counter!(CACHE_EVICTIONS, "cache" => self.cache, "cause" => cause).increment(1);
    }

    pub fn update_entry_count(&self, entries: u64) {
        gauge!(CACHE_ENTRIES, "cache" => self.cache).set(entries as f64);
    }

    pub fn record_operation_duration(&self, operation: &'static str, elapsed: Duration) {
        histogram!(
            CACHE_OPERATION_SECONDS,
            "cache" => self.cache,
            "operation" => operation
        )
        .record(elapsed.as_secs_f64());
    }
}
