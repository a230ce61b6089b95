//! Health check operations.

use serde::{Deserialize, Serialize};

use super::{error_from_status, OrdercacheClient};
use crate::error::Result;

/// Result of the server health probe.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl OrdercacheClient {
    /// Check server and storage health.
    pub async fn health(&self) -> Result<Health> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(Health {
                status: response.text().await?,
            })
        } else {
            Err(error_from_status(status.as_u16(), "health", response).await)
        }
    }
}
