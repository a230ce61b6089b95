//! Cache backend implementations.
//!
//! This module provides concrete implementations of the cache trait defined
//! in `ordercache_core::cache`. The only backend is an in-process LRU cache:
//! the cache is an accelerator for a single node, never a shared store.

pub mod memory;

pub use memory::MemoryCache;
