//! In-memory order cache with LRU eviction.
//!
//! The mapping and the recency order live together in an [`lru::LruCache`]
//! (a hash map over an intrusive doubly-linked list), so promotion and
//! eviction are O(1) and every key in the map appears exactly once in the
//! recency list.
//!
//! All access goes through a synchronous [`RwLock`]. Reads that promote an
//! entry (`get`) mutate the recency list and therefore take the write lock;
//! only `get_all`, `size` and `capacity` are shared readers. No lock is ever
//! held across an `.await`.

use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lru::LruCache;

use ordercache_core::cache::OrderCache;
use ordercache_core::order::Order;

/// Bounded in-memory order cache with least-recently-used eviction.
///
/// Cloning is cheap and yields a handle to the same underlying cache.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, Order>>>,
}

impl MemoryCache {
    /// Creates an empty cache holding at most `capacity` orders.
    ///
    /// Use [`ordercache_core::cache::normalize_capacity`] to turn a configured
    /// value into a `NonZeroUsize`.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    // Every mutation is a single LruCache call, so a poisoned lock still
    // guards a consistent cache.
    fn read(&self) -> RwLockReadGuard<'_, LruCache<String, Order>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LruCache<String, Order>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Keys from most to least recently used.
    #[cfg(test)]
    fn keys_by_recency(&self) -> Vec<String> {
        self.read().iter().map(|(key, _)| key.clone()).collect()
    }
}

impl OrderCache for MemoryCache {
    fn put(&self, key: &str, order: Order) {
        let evicted = self.write().push(key.to_owned(), order);

        // `push` also returns the old value when the key was already present;
        // only a different key means something was evicted.
        if let Some((evicted_key, _)) = evicted {
            if evicted_key != key {
                tracing::trace!(order_uid = %evicted_key, "Evicted least recently used order");
            }
        }
    }

    fn get(&self, key: &str) -> Option<Order> {
        self.write().get(key).cloned()
    }

    fn get_all(&self) -> HashMap<String, Order> {
        self.read()
            .iter()
            .map(|(key, order)| (key.clone(), order.clone()))
            .collect()
    }

    fn restore(&self, orders: Vec<(String, Order)>) {
        let capacity = self.read().cap();
        let selection = select_for_restore(orders, capacity);

        // Insert back to front so the first kept entry ends up most recent.
        let mut fresh = LruCache::new(capacity);
        for (key, order) in selection.kept.into_iter().rev() {
            fresh.put(key, order);
        }
        let retained = fresh.len();

        *self.write() = fresh;

        if selection.duplicates > 0 {
            tracing::debug!(
                duplicates = selection.duplicates,
                "Cache restore skipped repeated keys"
            );
        }
        if selection.over_capacity > 0 {
            tracing::debug!(
                dropped = selection.over_capacity,
                retained,
                capacity = capacity.get(),
                "Cache restore dropped orders beyond capacity"
            );
        }
    }

    fn size(&self) -> usize {
        self.read().len()
    }

    fn capacity(&self) -> usize {
        self.read().cap().get()
    }
}

/// Entries chosen by [`select_for_restore`] plus what was left out and why.
#[derive(Debug)]
struct RestoreSelection {
    kept: Vec<(String, Order)>,
    duplicates: usize,
    over_capacity: usize,
}

/// Keeps the first occurrence of each key, up to `capacity` distinct keys.
fn select_for_restore(orders: Vec<(String, Order)>, capacity: NonZeroUsize) -> RestoreSelection {
    let mut seen = HashSet::new();
    let mut selection = RestoreSelection {
        kept: Vec::with_capacity(orders.len().min(capacity.get())),
        duplicates: 0,
        over_capacity: 0,
    };

    for (key, order) in orders {
        if !seen.insert(key.clone()) {
            selection.duplicates += 1;
        } else if selection.kept.len() < capacity.get() {
            selection.kept.push((key, order));
        } else {
            selection.over_capacity += 1;
        }
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordercache_core::cache::normalize_capacity;
    use ordercache_core::order::sample_order;

    fn cache_with_capacity(capacity: usize) -> MemoryCache {
        MemoryCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    fn put(cache: &MemoryCache, uid: &str) {
        cache.put(uid, sample_order(uid));
    }

    fn entries(uids: &[&str]) -> Vec<(String, Order)> {
        uids.iter()
            .map(|uid| (uid.to_string(), sample_order(*uid)))
            .collect()
    }

    fn sorted_keys(cache: &MemoryCache) -> Vec<String> {
        let mut keys: Vec<String> = cache.get_all().into_keys().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_put_and_get() {
        let cache = cache_with_capacity(2);
        put(&cache, "order1");
        put(&cache, "order2");

        assert_eq!(cache.get("order1"), Some(sample_order("order1")));
        assert_eq!(cache.get("order2"), Some(sample_order("order2")));
    }

    #[test]
    fn test_get_missing_key() {
        let cache = cache_with_capacity(2);
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_insert_at_capacity_evicts_least_recently_used() {
        let cache = cache_with_capacity(2);
        put(&cache, "order1");
        put(&cache, "order2");
        put(&cache, "order3");

        assert_eq!(cache.size(), 2);
        assert_eq!(cache.get("order1"), None);
        assert!(cache.get("order2").is_some());
        assert!(cache.get("order3").is_some());
    }

    #[test]
    fn test_get_promotes_and_protects_from_eviction() {
        // capacity=2; put a, put b, get a, put c => {a, c}
        let cache = cache_with_capacity(2);
        put(&cache, "a");
        put(&cache, "b");
        assert!(cache.get("a").is_some());
        put(&cache, "c");

        assert_eq!(sorted_keys(&cache), vec!["a", "c"]);
    }

    #[test]
    fn test_cold_entry_read_survives_while_untouched_peer_is_evicted() {
        let cache = cache_with_capacity(3);
        put(&cache, "order1");
        put(&cache, "order2");
        put(&cache, "order3");

        // order1 is the coldest entry until it is read.
        assert!(cache.get("order1").is_some());
        put(&cache, "order4");

        assert_eq!(cache.get("order2"), None);
        assert!(cache.get("order1").is_some());
        assert!(cache.get("order3").is_some());
        assert!(cache.get("order4").is_some());
    }

    #[test]
    fn test_update_existing_key_replaces_without_eviction() {
        let cache = cache_with_capacity(2);
        put(&cache, "order1");
        put(&cache, "order2");

        let mut updated = sample_order("order1");
        updated.track_number = "NEWTRACK".to_string();
        cache.put("order1", updated);

        assert_eq!(cache.size(), 2);
        assert_eq!(cache.get("order1").unwrap().track_number, "NEWTRACK");
        assert!(cache.get("order2").is_some());
    }

    #[test]
    fn test_update_existing_key_promotes() {
        let cache = cache_with_capacity(2);
        put(&cache, "a");
        put(&cache, "b");
        put(&cache, "a");
        put(&cache, "c");

        assert_eq!(sorted_keys(&cache), vec!["a", "c"]);
    }

    #[test]
    fn test_recency_order() {
        let cache = cache_with_capacity(3);
        put(&cache, "a");
        put(&cache, "b");
        put(&cache, "c");
        cache.get("a");

        assert_eq!(cache.keys_by_recency(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        let cache = cache_with_capacity(5);
        for i in 0..50 {
            put(&cache, &format!("order{i}"));
            assert!(cache.size() <= 5);
        }
        assert_eq!(cache.size(), 5);
    }

    #[test]
    fn test_size() {
        let cache = cache_with_capacity(3);
        assert_eq!(cache.size(), 0);

        put(&cache, "order1");
        assert_eq!(cache.size(), 1);

        put(&cache, "order2");
        assert_eq!(cache.size(), 2);
    }

    #[test]
    fn test_get_all_is_a_snapshot() {
        let cache = cache_with_capacity(3);
        put(&cache, "order1");
        put(&cache, "order2");

        let mut all = cache.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all["order1"], sample_order("order1"));
        assert_eq!(all["order2"], sample_order("order2"));

        // Mutating the snapshot does not reach the cache.
        all.remove("order1");
        all.insert("order9".to_string(), sample_order("order9"));
        assert_eq!(cache.size(), 2);
        assert!(cache.get("order9").is_none());
    }

    #[test]
    fn test_get_all_does_not_change_recency() {
        let cache = cache_with_capacity(2);
        put(&cache, "a");
        put(&cache, "b");

        let _ = cache.get_all();
        put(&cache, "c");

        assert_eq!(sorted_keys(&cache), vec!["b", "c"]);
    }

    #[test]
    fn test_restore_replaces_content() {
        let cache = cache_with_capacity(3);
        put(&cache, "stale");

        cache.restore(entries(&["a", "b"]));

        assert_eq!(sorted_keys(&cache), vec!["a", "b"]);
    }

    #[test]
    fn test_restore_keeps_input_prefix_when_over_capacity() {
        // capacity=2; restore(a, b, c) => {a, b}
        let cache = cache_with_capacity(2);
        cache.restore(entries(&["a", "b", "c"]));

        assert_eq!(cache.size(), 2);
        assert_eq!(sorted_keys(&cache), vec!["a", "b"]);
        assert!(cache.get("c").is_none());
    }

    #[test]
    fn test_restore_first_entry_is_most_recent() {
        let cache = cache_with_capacity(3);
        cache.restore(entries(&["a", "b", "c"]));

        assert_eq!(cache.keys_by_recency(), vec!["a", "b", "c"]);

        // The last restored entry is the first to go.
        put(&cache, "d");
        assert_eq!(sorted_keys(&cache), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_restore_duplicate_key_keeps_first_occurrence() {
        let cache = cache_with_capacity(2);
        let mut duplicate = sample_order("a");
        duplicate.track_number = "SECOND".to_string();
        let mut input = entries(&["a"]);
        input.push(("a".to_string(), duplicate));
        input.extend(entries(&["b"]));

        cache.restore(input);

        assert_eq!(sorted_keys(&cache), vec!["a", "b"]);
        assert_eq!(cache.get("a").unwrap().track_number, "WBILMTESTTRACK");
    }

    #[test]
    fn test_restore_selection_separates_duplicates_from_overflow() {
        let entries = |keys: &[&str]| -> Vec<(String, Order)> {
            keys.iter()
                .map(|key| (key.to_string(), sample_order(*key)))
                .collect()
        };

        let duplicates_only = select_for_restore(
            entries(&["a", "a", "b"]),
            NonZeroUsize::new(2).unwrap(),
        );
        assert_eq!(duplicates_only.kept.len(), 2);
        assert_eq!(duplicates_only.duplicates, 1);
        assert_eq!(duplicates_only.over_capacity, 0);

        let both = select_for_restore(
            entries(&["a", "b", "a", "c", "d"]),
            NonZeroUsize::new(2).unwrap(),
        );
        let kept: Vec<&str> = both.kept.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(kept, vec!["a", "b"]);
        assert_eq!(both.duplicates, 1);
        assert_eq!(both.over_capacity, 2);
    }

    #[test]
    fn test_restore_empty_clears_cache() {
        let cache = cache_with_capacity(2);
        put(&cache, "a");

        cache.restore(Vec::new());

        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_non_positive_capacity_is_normalized() {
        let cache = MemoryCache::new(normalize_capacity(0));
        assert_eq!(cache.capacity(), 1000);

        let cache = MemoryCache::new(normalize_capacity(-5));
        put(&cache, "order1");
        put(&cache, "order2");
        assert_eq!(cache.size(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let cache = cache_with_capacity(2);
        let handle = cache.clone();
        put(&handle, "order1");

        assert!(cache.get("order1").is_some());
    }

    #[test]
    fn test_concurrent_access_respects_capacity() {
        let cache = cache_with_capacity(64);

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let cache = &cache;
                scope.spawn(move || {
                    for i in 0..200 {
                        let uid = format!("order{}", (worker * 200 + i) % 150);
                        cache.put(&uid, sample_order(uid.as_str()));
                        assert!(cache.size() <= 64);
                    }
                });
            }
            for _ in 0..4 {
                let cache = &cache;
                scope.spawn(move || {
                    for i in 0..200 {
                        let _ = cache.get(&format!("order{}", i % 150));
                        let _ = cache.get_all();
                    }
                });
            }
            let cache = &cache;
            scope.spawn(move || {
                for round in 0..20 {
                    let uids: Vec<String> =
                        (0..100).map(|i| format!("restored{round}-{i}")).collect();
                    let input = uids
                        .iter()
                        .map(|uid| (uid.clone(), sample_order(uid.as_str())))
                        .collect();
                    cache.restore(input);
                    assert!(cache.size() <= 64);
                }
            });
        });

        assert!(cache.size() <= 64);
        assert_eq!(cache.get_all().len(), cache.size());
    }
}
