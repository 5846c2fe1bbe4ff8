//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::models::{
    validate_key, EvictResponse, GetResponse, HealthResponse, SetRequest, SetResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// The LRU engine is single-threaded; every handler takes the mutex for the
/// whole operation, reads included, since a lookup reorders entries.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<Mutex<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(CacheStore::new(config.max_bytes))
    }
}

/// Handler for PUT /cache/:key
///
/// Stores a value under the key, evicting least recently used entries as
/// needed to stay within the byte budget.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = validate_key(&key) {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.lock().await;
    let evicted = cache.set(key.clone(), req.value);
    if evicted > 0 {
        debug!(key = %key, evicted, "Write evicted entries");
    }

    Ok(Json(SetResponse::new(key, evicted, cache.current_bytes())))
}

/// Handler for GET /cache/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let mut cache = state.cache.lock().await;
    let value = cache.get(&key)?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for POST /evict
///
/// Manually evicts the least recently used entry.
pub async fn evict_handler(State(state): State<AppState>) -> Json<EvictResponse> {
    let mut cache = state.cache.lock().await;
    Json(EvictResponse {
        evicted: cache.evict_oldest(),
    })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn set_request(value: &str) -> Json<SetRequest> {
        Json(SetRequest {
            value: value.to_string(),
        })
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = AppState::new(CacheStore::new(1024));

        let result = set_handler(
            State(state.clone()),
            Path("test_key".to_string()),
            set_request("test_value"),
        )
        .await;
        let response = assert_ok!(result);
        assert_eq!(response.evicted, 0);
        assert_eq!(response.current_bytes, 18);

        let result = get_handler(State(state.clone()), Path("test_key".to_string())).await;
        let response = assert_ok!(result);
        assert_eq!(response.value, "test_value");
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = AppState::new(CacheStore::new(1024));

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        assert_err!(result);
    }

    #[tokio::test]
    async fn test_set_reports_evictions() {
        let state = AppState::new(CacheStore::new(4));

        let response = set_handler(State(state.clone()), Path("a".to_string()), set_request("1"))
            .await
            .unwrap();
        assert_eq!(response.evicted, 0);

        let response = set_handler(State(state.clone()), Path("b".to_string()), set_request("1"))
            .await
            .unwrap();
        assert_eq!(response.evicted, 0);

        let response = set_handler(State(state.clone()), Path("c".to_string()), set_request("1"))
            .await
            .unwrap();
        assert_eq!(response.evicted, 1);
        assert_eq!(response.current_bytes, 4);

        assert_err!(get_handler(State(state), Path("a".to_string())).await);
    }

    #[tokio::test]
    async fn test_evict_handler() {
        let state = AppState::new(CacheStore::new(0));
        set_handler(State(state.clone()), Path("old".to_string()), set_request("v"))
            .await
            .unwrap();
        set_handler(State(state.clone()), Path("new".to_string()), set_request("v"))
            .await
            .unwrap();

        let response = evict_handler(State(state.clone())).await;
        assert_eq!(response.evicted.as_deref(), Some("old"));

        let response = evict_handler(State(state.clone())).await;
        assert_eq!(response.evicted.as_deref(), Some("new"));

        let response = evict_handler(State(state)).await;
        assert!(response.evicted.is_none());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::new(CacheStore::new(1024));

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.max_bytes, 1024);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_set_invalid_key() {
        let state = AppState::new(CacheStore::new(1024));

        let result = set_handler(
            State(state),
            Path("k".repeat(crate::models::MAX_KEY_LENGTH + 1)),
            set_request("value"),
        )
        .await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }
}
