use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use ordercache_core::storage::OrderRepository;

use super::{process_order_json, IngestError};

/// Producer side of the ingest queue.
///
/// Cheap to clone; every clone feeds the same worker.
#[derive(Debug, Clone)]
pub struct IngestQueue {
    sender: mpsc::Sender<Vec<u8>>,
}

impl IngestQueue {
    /// Creates a queue holding at most `capacity` pending payloads.
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Vec<u8>>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }

    /// Enqueues a raw JSON payload without waiting for room.
    pub fn enqueue(&self, payload: Vec<u8>) -> Result<(), IngestError> {
        self.sender.try_send(payload).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => IngestError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => IngestError::QueueClosed,
        })
    }

    /// Number of payloads the queue can still accept.
    pub fn remaining_capacity(&self) -> usize {
        self.sender.capacity()
    }
}

/// Counters reported by a finished worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub accepted: usize,
    pub rejected: usize,
}

/// Consumer side of the ingest queue.
///
/// Runs until every [`IngestQueue`] handle is dropped or a shutdown signal
/// arrives. A rejected payload is logged and skipped.
pub struct IngestWorker {
    repository: Arc<dyn OrderRepository>,
    receiver: mpsc::Receiver<Vec<u8>>,
    shutdown_rx: broadcast::Receiver<()>,
}

impl IngestWorker {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        receiver: mpsc::Receiver<Vec<u8>>,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Self {
        Self {
            repository,
            receiver,
            shutdown_rx,
        }
    }

    /// Drains the queue until it closes or shutdown is signalled.
    pub async fn run(mut self) -> IngestStats {
        let mut stats = IngestStats::default();
        tracing::debug!("Ingest worker started");

        loop {
            tokio::select! {
                payload = self.receiver.recv() => {
                    let Some(payload) = payload else {
                        tracing::info!("Ingest queue closed");
                        break;
                    };

                    match process_order_json(self.repository.as_ref(), &payload).await {
                        Ok(_) => stats.accepted += 1,
                        Err(err) => {
                            stats.rejected += 1;
                            tracing::warn!(
                                error = %err,
                                bytes = payload.len(),
                                "Rejected queued order"
                            );
                        }
                    }
                }
                _ = self.shutdown_rx.recv() => {
                    tracing::debug!(pending = self.receiver.len(), "Ingest worker shutting down");
                    break;
                }
            }
        }

        tracing::info!(
            accepted = stats.accepted,
            rejected = stats.rejected,
            "Ingest worker stopped"
        );
        stats
    }
}
