mod error;
mod mock_data;
mod sorting;
mod types;
mod validation;

pub use error::OrderError;
pub use mock_data::sample_order;
pub use sorting::sort_newest_first;
pub use types::{Delivery, Item, Order, Payment};
pub use validation::{validate_order, MAX_FUTURE_SKEW_HOURS};
