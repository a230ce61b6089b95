//! ordercache_client - CLI client for the ordercache API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::OrdercacheClient;
pub use error::{ClientError, Result};
