//! Cache API operations.

use serde::{Deserialize, Serialize};

use super::OrdercacheClient;
use crate::error::Result;

/// Cache occupancy as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
}

impl OrdercacheClient {
    /// Get cache size and capacity.
    pub async fn cache_stats(&self) -> Result<CacheStats> {
        let response = self.client.get(self.url("/api/cache/stats")).send().await?;
        self.handle_response(response, "cache stats").await
    }
}
