//! Sample orders for tests, seeding and the CLI client.

use chrono::{TimeZone, Utc};

use super::types::{Delivery, Item, Order, Payment};

/// Builds a valid order with the given `order_uid`.
///
/// The payload mirrors the reference order the upstream producer emits, so
/// `validate_order` accepts it for any `now` after 2021-11-25.
///
/// ```
/// use ordercache_core::order::{sample_order, validate_order};
///
/// let order = sample_order("b563feb7b2b84b6test");
/// assert!(validate_order(&order, chrono::Utc::now()).is_ok());
/// ```
pub fn sample_order(order_uid: impl Into<String>) -> Order {
    let order_uid = order_uid.into();
    Order {
        track_number: "WBILMTESTTRACK".to_string(),
        entry: "WBIL".to_string(),
        delivery: Delivery {
            name: "Test Testov".to_string(),
            phone: "+9720000000".to_string(),
            zip: "2639809".to_string(),
            city: "Kiryat Mozkin".to_string(),
            address: "Ploshad Mira 15".to_string(),
            region: "Kraiot".to_string(),
            email: "test@gmail.com".to_string(),
        },
        payment: Payment {
            transaction: order_uid.clone(),
            request_id: String::new(),
            currency: "USD".to_string(),
            provider: "wbpay".to_string(),
            amount: 1817,
            payment_dt: 1637907727,
            bank: "alpha".to_string(),
            delivery_cost: 1500,
            goods_total: 317,
            custom_fee: 0,
        },
        items: vec![Item {
            chrt_id: 9934930,
            track_number: "WBILMTESTTRACK".to_string(),
            price: 453,
            rid: "ab4219087a764ae0btest".to_string(),
            name: "Mascaras".to_string(),
            sale: 30,
            size: "0".to_string(),
            total_price: 317,
            nm_id: 2389212,
            brand: "Vivienne Sabo".to_string(),
            status: 202,
        }],
        locale: "en".to_string(),
        internal_signature: String::new(),
        customer_id: "test".to_string(),
        delivery_service: "meest".to_string(),
        shardkey: "9".to_string(),
        sm_id: 99,
        date_created: Utc
            .with_ymd_and_hms(2021, 11, 26, 6, 22, 19)
            .single()
            .unwrap_or_default(),
        oof_shard: "1".to_string(),
        order_uid,
    }
}
