//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`OrderRepository`]
//! that keeps every order in a `HashMap` wrapped in `Arc<RwLock<_>>`. It is
//! the default backend for development and tests; data is lost on restart.
//!
//! [`OrderRepository`]: ordercache_core::storage::OrderRepository
//!
//! # Example
//!
//! ```rust,ignore
//! use ordercache::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.save_order(&order).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
