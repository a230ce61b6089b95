//! Order ingestion.
//!
//! Orders arrive as raw JSON, either synchronously through
//! [`process_order_json`] (the `POST /api/orders` handler) or through the
//! bounded [`IngestQueue`] drained by a background [`IngestWorker`]. Both
//! paths decode, validate and write through the cached repository.

mod error;
mod process;
mod worker;

pub use error::IngestError;
pub use process::{process_order, process_order_json};
pub use worker::{IngestQueue, IngestStats, IngestWorker};
