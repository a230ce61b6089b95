//! In-memory cache backend implementation.
//!
//! Provides a thread-safe, bounded LRU cache of orders for single-instance
//! deployments.

mod cache;

pub use cache::MemoryCache;
