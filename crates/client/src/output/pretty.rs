//! Pretty output formatting.

use ordercache_core::order::Order;

use crate::client::cache::CacheStats;

/// Format an order for display.
pub fn format_order(order: &Order) -> String {
    let payment = &order.payment;
    let delivery = &order.delivery;

    let mut output = format!(
        "{} [{}]\n  Track: {}\n  Created: {}\n  Customer: {}\n  Delivery: {}, {}, {} ({})\n  Payment: {} {} via {} ({})",
        order.order_uid,
        order.entry,
        order.track_number,
        order.date_created.to_rfc3339(),
        order.customer_id,
        delivery.name,
        delivery.city,
        delivery.address,
        order.delivery_service,
        payment.amount,
        payment.currency,
        payment.provider,
        payment.bank,
    );

    output.push_str(&format!("\n  ITEMS ({})", order.items.len()));
    for item in &order.items {
        output.push_str(&format!(
            "\n    - {} {} (size {}) x {} = {}",
            item.brand, item.name, item.size, item.price, item.total_price
        ));
    }
    output
}

/// Format cache statistics for display.
pub fn format_cache_stats(stats: &CacheStats) -> String {
    let percent = if stats.capacity == 0 {
        0.0
    } else {
        stats.size as f64 * 100.0 / stats.capacity as f64
    };
    format!(
        "Cache:\n  Size: {}\n  Capacity: {}\n  Used: {:.1}%",
        stats.size, stats.capacity, percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordercache_core::order::sample_order;

    #[test]
    fn test_format_order_lists_items() {
        let order = sample_order("b563feb7b2b84b6test");

        let output = format_order(&order);

        assert!(output.starts_with("b563feb7b2b84b6test [WBIL]"));
        assert!(output.contains("ITEMS (1)"));
        assert!(output.contains(&order.items[0].name));
    }

    #[test]
    fn test_format_cache_stats() {
        let output = format_cache_stats(&CacheStats {
            size: 250,
            capacity: 1000,
        });

        assert!(output.contains("Size: 250"));
        assert!(output.contains("Capacity: 1000"));
        assert!(output.contains("Used: 25.0%"));
    }
}
