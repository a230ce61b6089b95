//! Storage backend implementations.
//!
//! This module provides concrete implementations of [`OrderRepository`]
//! defined in `ordercache_core::storage`. The backend is selected at compile
//! time via feature flags and is always wrapped in [`CachedOrderRepository`].
//!
//! [`OrderRepository`]: ordercache_core::storage::OrderRepository
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local `HashMap`, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with the in-memory backend (default):
//! ```bash
//! cargo build -p ordercache
//! ```
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p ordercache --no-default-features --features sqlite
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!(
    "Features 'inmemory' and 'sqlite' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p ordercache --no-default-features --features sqlite"
);

pub mod cached;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use cached::CachedOrderRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
