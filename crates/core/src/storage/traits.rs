use async_trait::async_trait;

use crate::order::Order;

use super::Result;

/// Durable store for orders.
///
/// Implemented by the storage backends and by the caching decorator, so the
/// rest of the application never knows whether a cache sits in front.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order.
    async fn save_order(&self, order: &Order) -> Result<()>;

    /// Gets an order by its `order_uid`.
    ///
    /// Returns `RepositoryError::NotFound` when no such order exists.
    async fn get_order(&self, order_uid: &str) -> Result<Order>;

    /// Gets every stored order, newest `date_created` first (ties broken by
    /// `order_uid`).
    async fn get_all_orders(&self) -> Result<Vec<Order>>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> Result<()>;
}
