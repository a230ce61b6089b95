//! Cached repository decorators.
//!
//! This module provides a decorator that wraps an [`OrderRepository`] with an
//! in-process cache:
//!
//! - **Reads**: Check cache first, on miss fetch from repository and populate cache
//! - **Writes**: Persist to repository, then put the order into the cache
//! - **Startup**: Warm the cache with the newest stored orders
//!
//! [`OrderRepository`]: ordercache_core::storage::OrderRepository
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::new("ordercache.db").await?);
//! let cache = Arc::new(MemoryCache::new(DEFAULT_CACHE_CAPACITY));
//!
//! let cached_repo = CachedOrderRepository::new(repo, cache).await;
//! ```

mod order;

pub use order::CachedOrderRepository;
