//! Cached order repository decorator.
//!
//! Wraps an `OrderRepository` with an in-process `OrderCache`: write-through
//! on save, cache-aside on get, and a one-time warm-up from the store.

use std::sync::Arc;

use async_trait::async_trait;

use ordercache_core::cache::OrderCache;
use ordercache_core::order::Order;
use ordercache_core::storage::{OrderRepository, Result};

/// Cached order repository decorator.
///
/// - **Warm-up**: `new` loads every stored order (newest first) into the
///   cache. A failing store leaves the cache empty and is only logged.
/// - **Writes**: persist to the repository first, then put into the cache.
///   The cache never holds an order the store rejected.
/// - **Reads**: check the cache first; on a miss fetch from the repository
///   and populate the cache. Errors, including not-found, pass through and
///   leave the cache untouched.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedOrderRepository<R, C>
where
    R: OrderRepository,
    C: OrderCache,
{
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> CachedOrderRepository<R, C>
where
    R: OrderRepository,
    C: OrderCache,
{
    /// Creates the decorator and warms the cache from the repository.
    pub async fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        let cached = Self { repository, cache };
        cached.warm_up().await;
        cached
    }

    async fn warm_up(&self) {
        match self.repository.get_all_orders().await {
            Ok(orders) => {
                let total = orders.len();
                self.cache.restore(
                    orders
                        .into_iter()
                        .map(|order| (order.order_uid.clone(), order))
                        .collect(),
                );
                tracing::info!(
                    stored = total,
                    cached = self.cache.size(),
                    capacity = self.cache.capacity(),
                    "Cache warmed up from storage"
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "Cache warm-up failed, starting with an empty cache");
            }
        }
    }
}

#[async_trait]
impl<R, C> OrderRepository for CachedOrderRepository<R, C>
where
    R: OrderRepository + 'static,
    C: OrderCache + 'static,
{
    async fn save_order(&self, order: &Order) -> Result<()> {
        self.repository.save_order(order).await?;

        self.cache.put(order.key(), order.clone());
        tracing::debug!(order_uid = %order.order_uid, "Order saved and cached");

        Ok(())
    }

    async fn get_order(&self, order_uid: &str) -> Result<Order> {
        if let Some(order) = self.cache.get(order_uid) {
            tracing::trace!(%order_uid, "Cache hit for order");
            return Ok(order);
        }

        tracing::trace!(%order_uid, "Cache miss for order");
        let order = self.repository.get_order(order_uid).await?;

        self.cache.put(order.key(), order.clone());

        Ok(order)
    }

    async fn get_all_orders(&self) -> Result<Vec<Order>> {
        self.repository.get_all_orders().await
    }

    async fn health_check(&self) -> Result<()> {
        self.repository.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::num::NonZeroUsize;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use chrono::Duration;
    use tokio::sync::RwLock;

    use ordercache_core::order::{sample_order, sort_newest_first};
    use ordercache_core::storage::RepositoryError;

    use crate::cache::MemoryCache;

    // Mock repository that tracks calls and can be switched into failure mode
    struct MockOrderRepository {
        orders: RwLock<HashMap<String, Order>>,
        save_calls: AtomicUsize,
        get_calls: AtomicUsize,
        get_all_calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl MockOrderRepository {
        fn new() -> Self {
            Self {
                orders: RwLock::new(HashMap::new()),
                save_calls: AtomicUsize::new(0),
                get_calls: AtomicUsize::new(0),
                get_all_calls: AtomicUsize::new(0),
                failing: AtomicBool::new(false),
            }
        }

        async fn insert(&self, order: Order) {
            self.orders
                .write()
                .await
                .insert(order.order_uid.clone(), order);
        }

        async fn remove(&self, order_uid: &str) {
            self.orders.write().await.remove(order_uid);
        }

        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn check(&self) -> Result<()> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(RepositoryError::ConnectionFailed(
                    "store unavailable".to_string(),
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepository {
        async fn save_order(&self, order: &Order) -> Result<()> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.insert(order.clone()).await;
            Ok(())
        }

        async fn get_order(&self, order_uid: &str) -> Result<Order> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.orders
                .read()
                .await
                .get(order_uid)
                .cloned()
                .ok_or_else(|| RepositoryError::order_not_found(order_uid))
        }

        async fn get_all_orders(&self) -> Result<Vec<Order>> {
            self.get_all_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            let mut all: Vec<Order> = self.orders.read().await.values().cloned().collect();
            sort_newest_first(&mut all);
            Ok(all)
        }

        async fn health_check(&self) -> Result<()> {
            self.check()
        }
    }

    fn cache_with_capacity(capacity: usize) -> Arc<MemoryCache> {
        Arc::new(MemoryCache::new(NonZeroUsize::new(capacity).unwrap()))
    }

    async fn setup(
        capacity: usize,
    ) -> (
        Arc<MockOrderRepository>,
        Arc<MemoryCache>,
        CachedOrderRepository<MockOrderRepository, MemoryCache>,
    ) {
        let repo = Arc::new(MockOrderRepository::new());
        let cache = cache_with_capacity(capacity);
        let cached = CachedOrderRepository::new(repo.clone(), cache.clone()).await;
        (repo, cache, cached)
    }

    #[tokio::test]
    async fn test_warm_up_restores_stored_orders() {
        let repo = Arc::new(MockOrderRepository::new());
        repo.insert(sample_order("a")).await;
        repo.insert(sample_order("b")).await;
        let cache = cache_with_capacity(10);

        let cached = CachedOrderRepository::new(repo.clone(), cache.clone()).await;

        assert_eq!(repo.get_all_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.size(), 2);

        cached.get_order("a").await.unwrap();
        cached.get_order("b").await.unwrap();
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_warm_up_keeps_newest_orders() {
        let repo = Arc::new(MockOrderRepository::new());
        let base = sample_order("base").date_created;
        for (uid, hours) in [("oldest", 0), ("middle", 1), ("newest", 2)] {
            let mut order = sample_order(uid);
            order.date_created = base + Duration::hours(hours);
            repo.insert(order).await;
        }
        let cache = cache_with_capacity(2);

        let _cached = CachedOrderRepository::new(repo, cache.clone()).await;

        let snapshot = cache.get_all();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.contains_key("newest"));
        assert!(snapshot.contains_key("middle"));
        assert!(!snapshot.contains_key("oldest"));
    }

    #[tokio::test]
    async fn test_warm_up_failure_is_not_fatal() {
        let repo = Arc::new(MockOrderRepository::new());
        repo.insert(sample_order("a")).await;
        repo.set_failing(true);
        let cache = cache_with_capacity(10);

        let cached = CachedOrderRepository::new(repo.clone(), cache.clone()).await;

        assert_eq!(cache.size(), 0);

        // The decorator keeps serving once the store recovers
        repo.set_failing(false);
        assert_eq!(cached.get_order("a").await.unwrap().order_uid, "a");
        assert_eq!(cache.size(), 1);
    }

    #[tokio::test]
    async fn test_write_then_read_is_cache_hit() {
        let (repo, cache, cached) = setup(10).await;
        let order = sample_order("a");

        cached.save_order(&order).await.unwrap();

        assert_eq!(repo.save_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.size(), 1);
        assert_eq!(cached.get_order("a").await.unwrap(), order);
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cache_hit_survives_store_outage() {
        let (repo, _cache, cached) = setup(10).await;
        let order = sample_order("a");
        cached.save_order(&order).await.unwrap();

        repo.remove("a").await;
        repo.set_failing(true);

        assert_eq!(cached.get_order("a").await.unwrap(), order);
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_no_cache_entry() {
        let (repo, cache, cached) = setup(10).await;
        repo.set_failing(true);

        let err = cached.save_order(&sample_order("a")).await.unwrap_err();

        assert!(matches!(err, RepositoryError::ConnectionFailed(_)));
        assert_eq!(cache.size(), 0);
        assert!(cache.get("a").is_none());
    }

    #[tokio::test]
    async fn test_miss_populates_cache() {
        let (repo, cache, cached) = setup(10).await;
        repo.insert(sample_order("a")).await;

        cached.get_order("a").await.unwrap();
        cached.get_order("a").await.unwrap();

        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.size(), 1);
    }

    #[tokio::test]
    async fn test_not_found_leaves_cache_unchanged() {
        let (repo, cache, cached) = setup(10).await;
        cached.save_order(&sample_order("a")).await.unwrap();

        let err = cached.get_order("missing").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(cache.size(), 1);
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_store_error_on_miss_propagates() {
        let (repo, cache, cached) = setup(10).await;
        repo.insert(sample_order("a")).await;
        repo.set_failing(true);

        let err = cached.get_order("a").await.unwrap_err();

        assert!(matches!(err, RepositoryError::ConnectionFailed(_)));
        assert_eq!(cache.size(), 0);
    }

    #[tokio::test]
    async fn test_evicted_order_is_reloaded_from_store() {
        let (repo, cache, cached) = setup(1).await;
        cached.save_order(&sample_order("a")).await.unwrap();
        cached.save_order(&sample_order("b")).await.unwrap();

        assert!(cache.get("a").is_none());
        assert_eq!(cached.get_order("a").await.unwrap().order_uid, "a");
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
        assert!(cache.get("b").is_none());
        assert_eq!(cache.size(), 1);
    }

    #[tokio::test]
    async fn test_passthrough_operations() {
        let (repo, _cache, cached) = setup(10).await;
        repo.insert(sample_order("a")).await;

        assert_eq!(cached.get_all_orders().await.unwrap().len(), 1);
        assert!(cached.health_check().await.is_ok());

        repo.set_failing(true);
        assert!(cached.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_works_behind_trait_object() {
        let (_repo, _cache, cached) = setup(10).await;
        let repo: Arc<dyn OrderRepository> = Arc::new(cached);

        repo.save_order(&sample_order("a")).await.unwrap();

        assert_eq!(repo.get_order("a").await.unwrap().order_uid, "a");
    }
}
