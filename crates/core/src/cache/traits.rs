use std::collections::HashMap;

use crate::order::Order;

/// A bounded, in-process order cache.
///
/// Implementations hold at most [`capacity`](OrderCache::capacity) orders and
/// are internally synchronized, so every method takes `&self` and may be
/// called from many tasks at once. None of the methods perform I/O.
pub trait OrderCache: Send + Sync {
    /// Inserts or replaces the order stored under `key`, making it the most
    /// recently used entry. Replacing an existing key never evicts.
    fn put(&self, key: &str, order: Order);

    /// Returns the order stored under `key` and marks it most recently used.
    fn get(&self, key: &str) -> Option<Order>;

    /// Returns a snapshot of every cached order. Does not affect recency.
    fn get_all(&self) -> HashMap<String, Order>;

    /// Replaces the whole cache content with `orders`.
    ///
    /// Entries are taken in iteration order until the cache is full; the rest
    /// are dropped. The first entry becomes the most recently used one and a
    /// repeated key keeps its first occurrence.
    fn restore(&self, orders: Vec<(String, Order)>);

    /// Number of cached orders.
    fn size(&self) -> usize;

    /// Maximum number of cached orders.
    fn capacity(&self) -> usize;
}
