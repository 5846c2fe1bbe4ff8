//! Byte LRU - A byte-accounted least recently used cache
//!
//! The `cache` module holds the eviction engine. The remaining modules serve a
//! single engine instance over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{Cache, OnEvicted, Value};
pub use config::Config;
