//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only see trait objects: the cached repository
//! decorator, the cache itself (for stats) and the ingest queue.

use std::sync::Arc;

use tokio::sync::broadcast;

use ordercache_core::cache::OrderCache;
use ordercache_core::storage::OrderRepository;

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::ingest::{IngestQueue, IngestWorker};
use crate::storage::CachedOrderRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Order repository (cached, wraps underlying storage).
    pub orders: Arc<dyn OrderRepository>,
    /// The cache inside `orders`, exposed for stats.
    pub cache: Arc<dyn OrderCache>,
    /// Producer side of the background ingest queue.
    pub ingest: IngestQueue,
    /// Shutdown signal sender for background tasks.
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    /// Wires the cached repository around `repository` and creates the
    /// ingest queue. The returned worker must be spawned by the caller.
    async fn build<R>(repository: Arc<R>, config: &Config) -> (Self, IngestWorker)
    where
        R: OrderRepository + 'static,
    {
        let cache = Arc::new(MemoryCache::new(config.cache_capacity));
        let orders: Arc<dyn OrderRepository> =
            Arc::new(CachedOrderRepository::new(repository, cache.clone()).await);

        let (shutdown_tx, _) = broadcast::channel(1);
        let (ingest, receiver) = IngestQueue::new(config.ingest_queue_size);
        let worker = IngestWorker::new(orders.clone(), receiver, shutdown_tx.subscribe());

        let state = Self {
            orders,
            cache,
            ingest,
            shutdown_tx,
        };

        (state, worker)
    }

    /// Signal all background tasks to shut down.
    pub fn signal_shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_memory {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and the in-memory cache.
        pub async fn new(config: &Config) -> Result<(Self, IngestWorker), anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            tracing::info!(path = %config.sqlite_path, "Opened SQLite storage");

            Ok(Self::build(sqlite_repo, config).await)
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_memory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<(Self, IngestWorker), anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());

            Ok(Self::build(inmemory_repo, config).await)
        }
    }
}

// ============================================================================
// Test support - backend independent state for unit tests
// ============================================================================
