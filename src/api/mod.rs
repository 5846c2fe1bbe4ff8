//! API Module
//!
//! HTTP handlers and routing for a single cache instance.
//!
//! # Endpoints
//! - `PUT /cache/:key` - Store a value
//! - `GET /cache/:key` - Retrieve a value
//! - `POST /evict` - Evict the least recently used entry
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
