//! LRU Cache Module
//!
//! Byte-accounted least recently used cache: a recency list, a key index,
//! a running byte counter and an optional eviction callback.

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::cache::{Entry, RecencyList, Value};

// == Eviction Callback ==
/// Called with the key and value of every entry the cache evicts.
///
/// Runs synchronously on the caller's thread before the triggering
/// `add` or `remove_oldest` returns.
pub type OnEvicted<V> = Box<dyn FnMut(String, V) + Send>;

// == Cache ==
/// Least recently used cache bounded by a byte budget.
///
/// Each entry costs `key.len() + value.size()` bytes. After every `add`, the
/// least recently used entries are evicted until the total fits the budget.
/// A budget of `0` disables eviction.
///
/// The cache is a plain single-threaded structure. Callers sharing it across
/// tasks must serialize access themselves (e.g. behind a mutex).
pub struct Cache<V: Value> {
    /// Byte budget, 0 = unbounded
    max_bytes: u64,
    /// Bytes currently held
    current_bytes: u64,
    /// Entries by recency, front = most recently used
    order: RecencyList<V>,
    /// Key to slot in `order`
    index: HashMap<String, usize>,
    on_evicted: Option<OnEvicted<V>>,
}

impl<V: Value> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `max_bytes` - Byte budget; `0` means never evict
    /// * `on_evicted` - Optional callback invoked once per evicted entry
    pub fn new(max_bytes: u64, on_evicted: Option<OnEvicted<V>>) -> Self {
        Self {
            max_bytes,
            current_bytes: 0,
            order: RecencyList::new(),
            index: HashMap::new(),
            on_evicted,
        }
    }

    /// Creates a cache that never evicts and has no callback.
    pub fn unbounded() -> Self {
        Self::new(0, None)
    }

    // == Get ==
    /// Looks up a key and marks it as most recently used.
    ///
    /// Returns `None` without side effects if the key is absent.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.order.move_to_front(idx);
        self.order.get(idx).map(|entry| &entry.value)
    }

    // == Add ==
    /// Inserts or overwrites a key, then evicts until within budget.
    ///
    /// Overwriting keeps the entry (the callback is not invoked) and moves it
    /// to the front. The eviction loop may remove the entry just added if its
    /// cost alone exceeds the budget, leaving the cache empty.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if let Some(&idx) = self.index.get(&key) {
            self.order.move_to_front(idx);
            if let Some(entry) = self.order.get_mut(idx) {
                let old_size = entry.value.size() as u64;
                let new_size = value.size() as u64;
                entry.value = value;
                self.current_bytes = self.current_bytes - old_size + new_size;
            }
        } else {
            let entry = Entry::new(key.clone(), value);
            self.current_bytes += entry.cost();
            let idx = self.order.push_front(entry);
            self.index.insert(key, idx);
        }

        let mut evicted = 0usize;
        while self.max_bytes != 0 && self.current_bytes > self.max_bytes {
            if !self.remove_oldest() {
                break;
            }
            evicted += 1;
        }
        if evicted > 0 {
            trace!(
                evicted,
                current_bytes = self.current_bytes,
                max_bytes = self.max_bytes,
                "byte budget exceeded, evicted oldest entries"
            );
        }
    }

    // == Remove Oldest ==
    /// Evicts the least recently used entry, if any.
    ///
    /// The entry is unlinked from both the list and the index and its cost
    /// released before the callback sees it. Returns `false` when empty.
    pub fn remove_oldest(&mut self) -> bool {
        let Some(entry) = self.order.pop_back() else {
            return false;
        };

        self.index.remove(&entry.key);
        self.current_bytes -= entry.cost();

        if let Some(on_evicted) = self.on_evicted.as_mut() {
            on_evicted(entry.key, entry.value);
        }
        true
    }

    // == Peek ==
    /// Looks up a key without changing its recency.
    pub fn peek(&self, key: &str) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.order.get(idx).map(|entry| &entry.value)
    }

    // == Peek Oldest ==
    /// Returns the next eviction candidate without removing it.
    pub fn peek_oldest(&self) -> Option<(&str, &V)> {
        self.order
            .back()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    // == Contains ==
    /// Checks membership without changing recency.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Iter ==
    /// Iterates `(key, value)` pairs from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.order
            .iter()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn current_bytes(&self) -> u64 {
        self.current_bytes
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }
}

impl<V: Value> fmt::Debug for Cache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("max_bytes", &self.max_bytes)
            .field("current_bytes", &self.current_bytes)
            .field("len", &self.len())
            .field("on_evicted", &self.on_evicted.is_some())
            .finish()
    }
}
