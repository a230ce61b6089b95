//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ordercache_core::order::{sort_newest_first, Order};
use ordercache_core::storage::{OrderRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepository {
    async fn save_order(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.order_uid) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Order",
                id: order.order_uid.clone(),
            });
        }
        orders.insert(order.order_uid.clone(), order.clone());
        Ok(())
    }

    async fn get_order(&self, order_uid: &str) -> Result<Order> {
        let orders = self.orders.read().await;
        orders
            .get(order_uid)
            .cloned()
            .ok_or_else(|| RepositoryError::order_not_found(order_uid))
    }

    async fn get_all_orders(&self) -> Result<Vec<Order>> {
        let mut all: Vec<Order> = self.orders.read().await.values().cloned().collect();
        sort_newest_first(&mut all);
        Ok(all)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
