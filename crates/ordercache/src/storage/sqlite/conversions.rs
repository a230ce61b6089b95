//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and order types.
//! These are testable in isolation without a repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ordercache_core::order::{Delivery, Item, Order, Payment};
use rusqlite::Row;

/// Convert a joined `orders`/`deliveries`/`payments` row to an order without
/// its items.
///
/// Expected columns: see `schema::SELECT_ORDER_BY_UID`.
pub fn row_to_order_header(row: &Row) -> rusqlite::Result<Order> {
    let date_created: String = row.get(9)?;

    Ok(Order {
        order_uid: row.get(0)?,
        track_number: row.get(1)?,
        entry: row.get(2)?,
        locale: row.get(3)?,
        internal_signature: row.get(4)?,
        customer_id: row.get(5)?,
        delivery_service: row.get(6)?,
        shardkey: row.get(7)?,
        sm_id: row.get(8)?,
        date_created: parse_datetime(&date_created)?,
        oof_shard: row.get(10)?,
        delivery: Delivery {
            name: row.get(11)?,
            phone: row.get(12)?,
            zip: row.get(13)?,
            city: row.get(14)?,
            address: row.get(15)?,
            region: row.get(16)?,
            email: row.get(17)?,
        },
        payment: Payment {
            transaction: row.get(18)?,
            request_id: row.get(19)?,
            currency: row.get(20)?,
            provider: row.get(21)?,
            amount: row.get(22)?,
            payment_dt: row.get(23)?,
            bank: row.get(24)?,
            delivery_cost: row.get(25)?,
            goods_total: row.get(26)?,
            custom_fee: row.get(27)?,
        },
        items: Vec::new(),
    })
}

/// Convert an `items` row to the owning order uid and the item.
///
/// Expected columns: order_uid, chrt_id, track_number, price, rid, name, sale,
/// size, total_price, nm_id, brand, status
pub fn row_to_item(row: &Row) -> rusqlite::Result<(String, Item)> {
    let order_uid: String = row.get(0)?;

    Ok((
        order_uid,
        Item {
            chrt_id: row.get(1)?,
            track_number: row.get(2)?,
            price: row.get(3)?,
            rid: row.get(4)?,
            name: row.get(5)?,
            sale: row.get(6)?,
            size: row.get(7)?,
            total_price: row.get(8)?,
            nm_id: row.get(9)?,
            brand: row.get(10)?,
            status: row.get(11)?,
        },
    ))
}

/// Attach items to their order headers. Items whose order is missing are
/// dropped; item order within an order is preserved.
pub fn attach_items(orders: &mut [Order], items: Vec<(String, Item)>) {
    let mut by_uid: HashMap<String, Vec<Item>> = HashMap::new();
    for (order_uid, item) in items {
        by_uid.entry(order_uid).or_default().push(item);
    }

    for order in orders.iter_mut() {
        if let Some(items) = by_uid.remove(&order.order_uid) {
            order.items = items;
        }
    }
}

/// Parse an RFC 3339 datetime string.
pub fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
