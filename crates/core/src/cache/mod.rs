mod capacity;
mod traits;

pub use capacity::{normalize_capacity, DEFAULT_CACHE_CAPACITY};
pub use traits::OrderCache;
