use thiserror::Error;

use ordercache_core::order::OrderError;
use ordercache_core::storage::RepositoryError;

/// Errors raised while accepting an order.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to decode order: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid order: {0}")]
    Validation(#[from] OrderError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Ingest queue is full")]
    QueueFull,
    #[error("Ingest queue is closed")]
    QueueClosed,
}

impl IngestError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Decode(_) | Self::Validation(_) => 400,
            Self::Repository(err) => {
                ordercache_core::storage::repository_error_to_status_code(err)
            }
            Self::QueueFull | Self::QueueClosed => 503,
        }
    }
}
