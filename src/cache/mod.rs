//! Cache Module
//!
//! Byte-accounted LRU eviction engine, plus the string store served over HTTP.

mod entry;
mod list;
mod lru;
mod stats;
mod store;
mod value;


// Re-export public types
pub use entry::Entry;
pub use list::RecencyList;
pub use lru::{Cache, OnEvicted};
pub use stats::CacheStats;
pub use store::CacheStore;
pub use value::Value;
