//! SQLite repository implementation.
//!
//! Implements `OrderRepository` from `ordercache_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::params;
use tokio_rusqlite::Connection;

use ordercache_core::order::{sort_newest_first, Order};
use ordercache_core::storage::{OrderRepository, RepositoryError, Result};

use super::conversions::{attach_items, format_datetime, row_to_item, row_to_order_header};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based order storage.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl OrderRepository for SqliteRepository {
    async fn save_order(&self, order: &Order) -> Result<()> {
        let order = order.clone();
        let order_uid = order.order_uid.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(
                    schema::INSERT_ORDER,
                    params![
                        order.order_uid,
                        order.track_number,
                        order.entry,
                        order.locale,
                        order.internal_signature,
                        order.customer_id,
                        order.delivery_service,
                        order.shardkey,
                        order.sm_id,
                        format_datetime(&order.date_created),
                        order.oof_shard,
                    ],
                )
                .map_err(wrap_err)?;

                let delivery = &order.delivery;
                tx.execute(
                    schema::INSERT_DELIVERY,
                    params![
                        order.order_uid,
                        delivery.name,
                        delivery.phone,
                        delivery.zip,
                        delivery.city,
                        delivery.address,
                        delivery.region,
                        delivery.email,
                    ],
                )
                .map_err(wrap_err)?;

                let payment = &order.payment;
                tx.execute(
                    schema::INSERT_PAYMENT,
                    params![
                        order.order_uid,
                        payment.transaction,
                        payment.request_id,
                        payment.currency,
                        payment.provider,
                        payment.amount,
                        payment.payment_dt,
                        payment.bank,
                        payment.delivery_cost,
                        payment.goods_total,
                        payment.custom_fee,
                    ],
                )
                .map_err(wrap_err)?;

                {
                    let mut stmt = tx.prepare(schema::INSERT_ITEM).map_err(wrap_err)?;
                    for (position, item) in order.items.iter().enumerate() {
                        stmt.execute(params![
                            order.order_uid,
                            position as i64,
                            item.chrt_id,
                            item.track_number,
                            item.price,
                            item.rid,
                            item.name,
                            item.sale,
                            item.size,
                            item.total_price,
                            item.nm_id,
                            item.brand,
                            item.status,
                        ])
                        .map_err(wrap_err)?;
                    }
                }

                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, order_uid))
    }

    async fn get_order(&self, order_uid: &str) -> Result<Order> {
        let uid = order_uid.to_string();

        self.conn
            .call(move |conn| {
                let mut order = conn
                    .query_row(schema::SELECT_ORDER_BY_UID, [&uid], row_to_order_header)
                    .map_err(wrap_err)?;

                let mut stmt = conn
                    .prepare(schema::SELECT_ITEMS_BY_ORDER)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([&uid], row_to_item).map_err(wrap_err)?;
                for row_result in rows {
                    let (_, item) = row_result.map_err(wrap_err)?;
                    order.items.push(item);
                }

                Ok(order)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, order_uid))
    }

    async fn get_all_orders(&self) -> Result<Vec<Order>> {
        let mut orders = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_ORDERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_order_header).map_err(wrap_err)?;
                let mut orders = Vec::new();
                for row_result in rows {
                    orders.push(row_result.map_err(wrap_err)?);
                }

                let mut stmt = conn.prepare(schema::SELECT_ALL_ITEMS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;
                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }

                attach_items(&mut orders, items);
                Ok(orders)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        sort_newest_first(&mut orders);
        Ok(orders)
    }

    async fn health_check(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::HEALTH_CHECK, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}
