//! Cache Entry Module
//!
//! Defines the unit stored in the recency list.

use crate::cache::Value;

// == Entry ==
/// A key and its value, as held by the recency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// The lookup key
    pub key: String,
    /// The stored value
    pub value: V,
}

impl<V: Value> Entry<V> {
    // == Constructor ==
    pub fn new(key: String, value: V) -> Self {
        Self { key, value }
    }

    // == Cost ==
    /// Bytes charged against the cache budget: key length plus value size.
    pub fn cost(&self) -> u64 {
        self.key.len() as u64 + self.value.size() as u64
    }
}
