use std::cmp::Ordering;

use super::types::Order;

/// Sorts orders newest `date_created` first, ties broken by `order_uid`.
///
/// This is the order in which repositories return `get_all_orders`, and
/// therefore the order in which a cache warm-up prefers entries when the
/// store holds more orders than the cache can keep.
pub fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(compare_newest_first);
}

fn compare_newest_first(a: &Order, b: &Order) -> Ordering {
    b.date_created
        .cmp(&a.date_created)
        .then_with(|| a.order_uid.cmp(&b.order_uid))
}
