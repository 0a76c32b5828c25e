//! TTL cache implementation.

use derive_getters::Getters;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default allowed lifetime for entries inserted without an override.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Cache entry with value and expiration.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    value: JsonValue,
    cached_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// Check whether this entry is still fresh at the given instant.
    ///
    /// An entry is fresh iff `now <= cached_at + ttl`, so an entry is still
    /// usable at exactly the end of its lifetime.
    pub fn fresh_at(&self, now: Instant) -> bool {
        now <= self.cached_at + self.ttl
    }

    /// Check whether this entry has outlived its allowed lifetime.
    pub fn is_expired(&self) -> bool {
        !self.fresh_at(Instant::now())
    }

    /// Get remaining time until expiration.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.ttl.checked_sub(self.cached_at.elapsed())
    }
}

/// Cache for expensive aggregate computations.
///
/// Stores JSON payloads with TTL-based expiration. Entries are overwritten
/// unconditionally on insert and removed lazily when a lookup finds them
/// expired; there is no eviction or capacity bound, since the key set is
/// small and fixed by the callers.
///
/// # Example
///
/// ```
/// use octoboard_cache::TtlCache;
/// use std::time::Duration;
///
/// let mut cache = TtlCache::new();
/// cache.insert("leaderboard", &vec![("alice", 5)], None);
///
/// let hit: Option<Vec<(String, u64)>> = cache.try_get("leaderboard");
/// assert!(hit.is_some());
/// ```
#[derive(Debug, Default)]
pub struct TtlCache {
    entries: HashMap<String, CacheEntry>,
}

impl TtlCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under the given key.
    ///
    /// Overwrites any previous entry and stamps the current time. Entries
    /// inserted with `ttl: None` use [`DEFAULT_TTL`].
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be serialized to JSON; callers only store
    /// plain data types for which serialization is infallible.
    #[tracing::instrument(skip(self, value), fields(cache_size = self.entries.len()))]
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(DEFAULT_TTL);
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| panic!("cache payload for {key} failed to serialize: {e}"));

        tracing::debug!(key, ttl = ?ttl, "Inserting entry into cache");

        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                cached_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Get a cached value if it exists and is still fresh.
    ///
    /// The freshness check and the read are fused into one operation so there
    /// is no gap between "is it fresh" and "give it to me". Expired entries
    /// are removed on the way out.
    ///
    /// Returns None if:
    /// - No entry exists for the key
    /// - The entry has outlived its allowed lifetime
    /// - The stored payload does not deserialize to `T`
    #[tracing::instrument(skip(self), fields(cache_size = self.entries.len()))]
    pub fn try_get<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let entry = self.entries.get(key)?;

        if entry.is_expired() {
            tracing::debug!(key, "Cache entry expired, removing");
            self.entries.remove(key);
            return None;
        }

        tracing::debug!(key, time_remaining = ?entry.time_remaining(), "Cache hit");
        serde_json::from_value(entry.value().clone()).ok()
    }

    /// Clear all cache entries.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        tracing::info!(cleared = count, "Cleared cache");
    }

    /// Get number of cached entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn entry_mut(&mut self, key: &str) -> Option<&mut CacheEntry> {
        self.entries.get_mut(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let mut cache = TtlCache::new();
        let hit: Option<Vec<String>> = cache.try_get("contributors_mini");
        assert!(hit.is_none());
    }

    #[test]
    fn fresh_entry_round_trips() {
        let mut cache = TtlCache::new();
        cache.insert("contributors_mini", &vec!["alice", "bob"], None);

        let hit: Option<Vec<String>> = cache.try_get("contributors_mini");
        assert_eq!(hit, Some(vec!["alice".to_string(), "bob".to_string()]));
    }

    #[test]
    fn freshness_boundary_is_inclusive() {
        let mut cache = TtlCache::new();
        cache.insert("leaderboard", &42u64, Some(Duration::from_secs(60)));

        let entry = cache.entry_mut("leaderboard").unwrap().clone();
        let deadline = *entry.cached_at() + *entry.ttl();

        // Fresh at exactly cached_at + ttl, stale one tick past it.
        assert!(entry.fresh_at(deadline));
        assert!(!entry.fresh_at(deadline + Duration::from_nanos(1)));
    }

    #[test]
    fn expired_entry_is_removed_on_read() {
        let mut cache = TtlCache::new();
        cache.insert("leaderboard", &42u64, Some(Duration::from_secs(3600)));

        // Shrink the lifetime to zero, as if the entry were written 31
        // minutes ago with a 30 minute ttl.
        cache.entry_mut("leaderboard").unwrap().ttl = Duration::ZERO;
        std::thread::sleep(Duration::from_millis(10));

        let hit: Option<u64> = cache.try_get("leaderboard");
        assert!(hit.is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn insert_overwrites_and_restamps() {
        let mut cache = TtlCache::new();
        cache.insert("leaderboard", &1u64, Some(Duration::ZERO));
        cache.insert("leaderboard", &2u64, None);

        assert_eq!(cache.len(), 1);
        let entry = cache.entry_mut("leaderboard").unwrap();
        assert_eq!(*entry.ttl(), DEFAULT_TTL);
        let hit: Option<u64> = cache.try_get("leaderboard");
        assert_eq!(hit, Some(2));
    }

    #[test]
    fn default_ttl_is_thirty_minutes() {
        assert_eq!(DEFAULT_TTL, Duration::from_secs(1800));
    }
}
