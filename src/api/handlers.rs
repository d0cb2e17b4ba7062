//! API Handlers
//!
//! HTTP request handlers exposing the cache contract.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{Cache, TimedLruCache};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    ClearResponse, GetResponse, HealthResponse, PutRequest, PutResponse, StatsResponse,
};

/// The cache type hosted by the HTTP facade.
pub type SharedCache = TimedLruCache<String, String>;

/// Application state shared across all handlers.
///
/// The cache serializes its own operations, so handlers share it through a
/// plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<SharedCache>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: SharedCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity or store time is not positive.
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        let cache = TimedLruCache::from_config(config)?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /put
///
/// Stores a key-value pair, replacing any previous value and restarting its store time.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> ApiResult<Json<PutResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    state.cache.put(req.key.clone(), req.value);

    Ok(Json(PutResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Never-stored, expired and evicted keys all answer 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<GetResponse>> {
    match state.cache.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(ApiError::NotFound(key)),
    }
}

/// Handler for DELETE /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear();
    Json(ClearResponse::new())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = &state.cache;

    Json(StatsResponse::new(
        &cache.stats(),
        cache.capacity(),
        cache.store_time().as_millis() as u64,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
