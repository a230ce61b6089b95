//! Functional core of ordercache.
//!
//! Domain types, validation and the storage/cache contracts. Nothing in this
//! crate performs I/O; concrete backends live in the `ordercache` crate.

pub mod cache;
pub mod order;
pub mod storage;
