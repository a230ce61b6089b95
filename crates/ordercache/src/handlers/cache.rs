use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Snapshot of the order cache occupancy.
#[derive(Debug, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
}

/// GET /api/cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(CacheStats {
        size: state.cache.size(),
        capacity: state.cache.capacity(),
    })
}
