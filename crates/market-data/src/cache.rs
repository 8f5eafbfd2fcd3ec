//! TTL cache for market snapshots.
//!
//! Per-ticker and per-country results share one store under disjoint key
//! prefixes. Expiry is checked on read; an expired entry counts as a miss
//! and is overwritten by the next compute. Negative results are cached like
//! any other value, so a symbol with no data does not hammer the provider
//! for the whole TTL window.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::models::{CountryMarketRecord, TickerRecord};

/// Default time-to-live for cached market data: one hour.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Value type stored by the shared market cache.
///
/// Ticker-level and country-level entries live in one store; the
/// [`ticker_key`] / [`market_key`] prefixes keep their key spaces disjoint.
#[derive(Clone, Debug)]
pub enum CachedMarket {
    /// Snapshot for one symbol; `None` means the provider had nothing.
    Ticker(Option<TickerRecord>),
    /// Aggregate for one configured country.
    Country(CountryMarketRecord),
}

/// Cache key for a single-symbol entry.
pub fn ticker_key(symbol: &str) -> String {
    format!("ticker_{}", symbol)
}

/// Cache key for a country aggregate entry.
pub fn market_key(country_code: &str) -> String {
    format!("market_{}", country_code)
}

/// A single cache slot.
#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// String-keyed TTL cache.
///
/// Thread-safe; the lock is never held across an await. Two tasks that miss
/// the same key at the same time both compute and the later insert wins,
/// which this workload tolerates (reads vastly outnumber expiries and the
/// key space is a handful of tickers and countries).
pub struct TimedCache<V: Clone> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> TimedCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Lock the entries mutex, recovering from poison if necessary.
    ///
    /// Worst case after recovery is a stale or missing entry, which the
    /// next compute repairs.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("Timed cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Return the fresh value under `key`, or run `compute` and cache its
    /// result for `ttl`.
    ///
    /// The computed value is stored unconditionally, "nothing found"
    /// included.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        if let Some(value) = self.get(key) {
            debug!("Cache hit for '{}'", key);
            return value;
        }

        debug!("Cache miss for '{}', computing", key);
        let value = compute().await;
        self.insert(key.to_string(), value.clone(), ttl);
        value
    }

    /// Fresh value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.lock_entries();
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            _ => None,
        }
    }

    /// Store `value` under `key` for `ttl`.
    pub fn insert(&self, key: String, value: V, ttl: Duration) {
        let mut entries = self.lock_entries();
        entries.insert(key, CacheEntry::new(value, ttl));
    }
}

impl<V: Clone> Default for TimedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_key_namespaces_are_disjoint() {
        assert_eq!(ticker_key("^GSPC"), "ticker_^GSPC");
        assert_eq!(market_key("us"), "market_us");
        assert_ne!(ticker_key("us"), market_key("us"));
    }

    #[tokio::test]
    async fn test_second_read_within_ttl_skips_compute() {
        let cache: TimedCache<i32> = TimedCache::new();
        let computes = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = cache
                .get_or_compute("k", Duration::from_secs(60), || async {
                    computes.fetch_add(1, Ordering::SeqCst);
                    7
                })
                .await;
            assert_eq!(value, 7);
        }

        assert_eq!(computes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_recomputed() {
        let cache: TimedCache<i32> = TimedCache::new();

        let first = cache
            .get_or_compute("k", Duration::from_secs(60), || async { 1 })
            .await;
        assert_eq!(first, 1);

        // Backdate the entry instead of sleeping through the TTL
        {
            let mut entries = cache.lock_entries();
            let entry = entries.get_mut("k").unwrap();
            entry.expires_at = Instant::now() - Duration::from_secs(1);
        }

        let second = cache
            .get_or_compute("k", Duration::from_secs(60), || async { 2 })
            .await;
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_negative_result_is_cached() {
        let cache: TimedCache<Option<i32>> = TimedCache::new();
        let computes = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = cache
                .get_or_compute("dead", Duration::from_secs(60), || async {
                    computes.fetch_add(1, Ordering::SeqCst);
                    None
                })
                .await;
            assert_eq!(value, None);
        }

        assert_eq!(computes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_expires_immediately() {
        let cache: TimedCache<i32> = TimedCache::new();

        cache.insert("k".to_string(), 1, Duration::ZERO);
        assert_eq!(cache.get("k"), None);
    }
}
