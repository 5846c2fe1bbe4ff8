//! Cache Store Module
//!
//! String-valued cache used by the HTTP layer: the LRU engine plus hit/miss
//! and eviction statistics.

use tracing::debug;

use crate::cache::{Cache, CacheStats, OnEvicted};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// LRU cache of string values with usage statistics.
#[derive(Debug)]
pub struct CacheStore {
    /// Byte-bounded LRU engine
    cache: Cache<String>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given byte budget.
    ///
    /// # Arguments
    /// * `max_bytes` - Byte budget for keys plus values; `0` = unbounded
    pub fn new(max_bytes: u64) -> Self {
        let on_evicted: OnEvicted<String> = Box::new(|key: String, value: String| {
            debug!(key = %key, bytes = key.len() + value.len(), "Evicted cache entry");
        });

        let mut stats = CacheStats::new();
        stats.set_usage(0, 0, max_bytes);

        Self {
            cache: Cache::new(max_bytes, Some(on_evicted)),
            stats,
        }
    }

    // == Set ==
    /// Stores a key-value pair, overwriting any previous value.
    ///
    /// Returns how many entries were evicted to make room. This count
    /// includes the new entry itself when it alone exceeds the budget.
    pub fn set(&mut self, key: String, value: String) -> usize {
        let expected = self.cache.len() + usize::from(!self.cache.contains(&key));

        self.cache.add(key, value);

        let evicted = expected - self.cache.len();
        self.stats.record_evictions(evicted as u64);
        self.refresh_usage();
        evicted
    }

    // == Get ==
    /// Retrieves a value by key, marking it as most recently used.
    pub fn get(&mut self, key: &str) -> Result<String> {
        match self.cache.get(key) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                Ok(value)
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Evict Oldest ==
    /// Evicts the least recently used entry and returns its key.
    ///
    /// Returns None if the cache is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let key = self.cache.peek_oldest().map(|(key, _)| key.to_string())?;

        if self.cache.remove_oldest() {
            self.stats.record_evictions(1);
        }
        self.refresh_usage();
        Some(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn current_bytes(&self) -> u64 {
        self.cache.current_bytes()
    }

    fn refresh_usage(&mut self) {
        self.stats.set_usage(
            self.cache.len(),
            self.cache.current_bytes(),
            self.cache.max_bytes(),
        );
    }
}
