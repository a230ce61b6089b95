use std::num::NonZeroUsize;

/// Capacity used when none (or a non-positive one) is configured.
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Turns a configured capacity into a usable one.
///
/// Zero and negative values fall back to [`DEFAULT_CACHE_CAPACITY`] so a cache
/// can never be built that evicts on every insert.
///
/// ```
/// use ordercache_core::cache::{normalize_capacity, DEFAULT_CACHE_CAPACITY};
///
/// assert_eq!(normalize_capacity(50).get(), 50);
/// assert_eq!(normalize_capacity(0), DEFAULT_CACHE_CAPACITY);
/// assert_eq!(normalize_capacity(-5), DEFAULT_CACHE_CAPACITY);
/// ```
pub fn normalize_capacity(configured: i64) -> NonZeroUsize {
    usize::try_from(configured)
        .ok()
        .and_then(NonZeroUsize::new)
        .unwrap_or(DEFAULT_CACHE_CAPACITY)
}
