//! Memoization of expensive asynchronous estimations.
//!
//! Estimations are keyed by a deterministic string derived from their inputs. Concurrent requests
//! for the same key share a single in-flight computation, successful results are kept until they
//! expire or are evicted by recency once the cache is full, and failures are never stored so the
//! next request for the same key recomputes.

use crate::config::CacheSettings;
use metrics::{counter, histogram};
use moka::{future::Cache, policy::EvictionPolicy};
use std::{
    fmt,
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};
use strum::IntoStaticStr;
use tracing::trace;

/// What happened to a single cache lookup. Used as the `outcome` label of
/// `tezos_bridge_cache_lookups_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum Lookup {
    /// Served from a stored value or by joining an in-flight computation.
    Hit,
    /// Computed by this caller.
    Miss,
    /// The computation failed and nothing was stored.
    Failed,
}

/// Keyed store of pending or resolved estimations with least-recently-used eviction.
#[derive(Clone)]
pub struct BridgeCache<V> {
    name: &'static str,
    inner: Cache<String, V>,
}

impl<V> fmt::Debug for BridgeCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeCache")
            .field("name", &self.name)
            .field("entries", &self.entry_count())
            .finish_non_exhaustive()
    }
}

impl<V> BridgeCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache holding at most `max_entries` values, each for at most `ttl`.
    pub fn new(name: &'static str, max_entries: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .name(name)
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { name, inner }
    }

    /// Create a cache from configuration.
    pub fn from_settings(name: &'static str, settings: &CacheSettings) -> Self {
        Self::new(name, settings.capacity, settings.ttl)
    }

    /// Returns the value cached under `key`, or computes it with `fetcher`.
    ///
    /// If a computation for `key` is already in flight, this waits for it instead of starting a
    /// second one. An `Err` is handed to every waiting caller and is not cached.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: String, fetcher: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: Clone + Send + Sync + 'static,
    {
        trace!(cache = self.name, %key, "Cache lookup");

        let name = self.name;
        let init = async move {
            let started = Instant::now();
            let result = fetcher().await;
            histogram!("tezos_bridge_cache_fetch_duration_seconds", "cache" => name)
                .record(started.elapsed().as_secs_f64());
            result
        };

        match self.inner.entry(key).or_try_insert_with(init).await {
            Ok(entry) => {
                self.record(if entry.is_fresh() { Lookup::Miss } else { Lookup::Hit });
                Ok(entry.into_value())
            }
            Err(err) => {
                self.record(Lookup::Failed);
                Err(Arc::unwrap_or_clone(err))
            }
        }
    }

    fn record(&self, lookup: Lookup) {
        let outcome: &'static str = lookup.into();
        counter!("tezos_bridge_cache_lookups_total", "cache" => self.name, "outcome" => outcome)
            .increment(1);
    }

    /// Drop every cached value.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Apply pending evictions and expirations.
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }

    /// Approximate number of cached values.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Name of the cache, used as a metrics label.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached gas and storage estimates
    pub gas_cache_size: u64,
    /// Number of cached fee estimates
    pub fee_cache_size: u64,
}
