//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. An order is split over four tables: the header row in
//! `orders` and its one-to-one `deliveries`/`payments` rows plus the
//! one-to-many `items`.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Order header
CREATE TABLE IF NOT EXISTS orders (
    order_uid TEXT PRIMARY KEY,
    track_number TEXT NOT NULL,
    entry TEXT NOT NULL,
    locale TEXT NOT NULL,
    internal_signature TEXT NOT NULL,
    customer_id TEXT NOT NULL,
    delivery_service TEXT NOT NULL,
    shardkey TEXT NOT NULL,
    sm_id INTEGER NOT NULL,
    date_created TEXT NOT NULL,
    oof_shard TEXT NOT NULL
);

-- Delivery address (one per order)
CREATE TABLE IF NOT EXISTS deliveries (
    order_uid TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    phone TEXT NOT NULL,
    zip TEXT NOT NULL,
    city TEXT NOT NULL,
    address TEXT NOT NULL,
    region TEXT NOT NULL,
    email TEXT NOT NULL,
    FOREIGN KEY (order_uid) REFERENCES orders(order_uid) ON DELETE CASCADE
);

-- Payment (one per order)
CREATE TABLE IF NOT EXISTS payments (
    order_uid TEXT PRIMARY KEY,
    "transaction" TEXT NOT NULL,
    request_id TEXT NOT NULL,
    currency TEXT NOT NULL,
    provider TEXT NOT NULL,
    amount INTEGER NOT NULL,
    payment_dt INTEGER NOT NULL,
    bank TEXT NOT NULL,
    delivery_cost INTEGER NOT NULL,
    goods_total INTEGER NOT NULL,
    custom_fee INTEGER NOT NULL,
    FOREIGN KEY (order_uid) REFERENCES orders(order_uid) ON DELETE CASCADE
);

-- Line items (many per order, position keeps producer order)
CREATE TABLE IF NOT EXISTS items (
    order_uid TEXT NOT NULL,
    position INTEGER NOT NULL,
    chrt_id INTEGER NOT NULL,
    track_number TEXT NOT NULL,
    price INTEGER NOT NULL,
    rid TEXT NOT NULL,
    name TEXT NOT NULL,
    sale INTEGER NOT NULL,
    size TEXT NOT NULL,
    total_price INTEGER NOT NULL,
    nm_id INTEGER NOT NULL,
    brand TEXT NOT NULL,
    status INTEGER NOT NULL,
    PRIMARY KEY (order_uid, position),
    FOREIGN KEY (order_uid) REFERENCES orders(order_uid) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_orders_date_created ON orders(date_created);
"#;

// Inserts

pub const INSERT_ORDER: &str = r#"
INSERT INTO orders (order_uid, track_number, entry, locale, internal_signature,
                    customer_id, delivery_service, shardkey, sm_id, date_created, oof_shard)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const INSERT_DELIVERY: &str = r#"
INSERT INTO deliveries (order_uid, name, phone, zip, city, address, region, email)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const INSERT_PAYMENT: &str = r#"
INSERT INTO payments (order_uid, "transaction", request_id, currency, provider, amount,
                      payment_dt, bank, delivery_cost, goods_total, custom_fee)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (order_uid, position, chrt_id, track_number, price, rid, name,
                   sale, size, total_price, nm_id, brand, status)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
"#;

// Selects
//
// Column order of the joined header is shared by both selects and must match
// `row_to_order_header`.

pub const SELECT_ORDER_BY_UID: &str = r#"
SELECT o.order_uid, o.track_number, o.entry, o.locale, o.internal_signature,
       o.customer_id, o.delivery_service, o.shardkey, o.sm_id, o.date_created, o.oof_shard,
       d.name, d.phone, d.zip, d.city, d.address, d.region, d.email,
       p."transaction", p.request_id, p.currency, p.provider, p.amount, p.payment_dt,
       p.bank, p.delivery_cost, p.goods_total, p.custom_fee
FROM orders o
JOIN deliveries d ON d.order_uid = o.order_uid
JOIN payments p ON p.order_uid = o.order_uid
WHERE o.order_uid = ?1
"#;

pub const SELECT_ALL_ORDERS: &str = r#"
SELECT o.order_uid, o.track_number, o.entry, o.locale, o.internal_signature,
       o.customer_id, o.delivery_service, o.shardkey, o.sm_id, o.date_created, o.oof_shard,
       d.name, d.phone, d.zip, d.city, d.address, d.region, d.email,
       p."transaction", p.request_id, p.currency, p.provider, p.amount, p.payment_dt,
       p.bank, p.delivery_cost, p.goods_total, p.custom_fee
FROM orders o
JOIN deliveries d ON d.order_uid = o.order_uid
JOIN payments p ON p.order_uid = o.order_uid
"#;

pub const SELECT_ITEMS_BY_ORDER: &str = r#"
SELECT order_uid, chrt_id, track_number, price, rid, name, sale, size,
       total_price, nm_id, brand, status
FROM items
WHERE order_uid = ?1
ORDER BY position
"#;

pub const SELECT_ALL_ITEMS: &str = r#"
SELECT order_uid, chrt_id, track_number, price, rid, name, sale, size,
       total_price, nm_id, brand, status
FROM items
ORDER BY order_uid, position
"#;

pub const HEALTH_CHECK: &str = "SELECT 1";
