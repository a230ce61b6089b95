//! HTTP client for ordercache API.

pub mod cache;
pub mod health;
pub mod orders;

use crate::error::{ClientError, Result};

/// HTTP client for the ordercache API.
#[derive(Debug, Clone)]
pub struct OrdercacheClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrdercacheClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (ORDERCACHE_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ORDERCACHE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a successful response or turn the status into an error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(error_from_status(status.as_u16(), resource, response).await)
        }
    }
}

async fn error_from_status(status: u16, resource: &str, response: reqwest::Response) -> ClientError {
    if status == 404 {
        return ClientError::NotFound {
            resource: resource.to_string(),
        };
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ClientError::ServerError { status, message }
}
