//! Pure validation of incoming orders.
//!
//! The upstream producer is not trusted: every order is checked here before
//! it is handed to the storage layer. Validation never touches I/O; the
//! current time is passed in by the caller.

use chrono::{DateTime, Duration, Utc};

use super::error::OrderError;
use super::types::{Delivery, Item, Order, Payment};

/// How far into the future `date_created` may lie (clock skew allowance).
pub const MAX_FUTURE_SKEW_HOURS: i64 = 24;

/// Validates an order against structural and business rules.
///
/// Returns the first violation found.
pub fn validate_order(order: &Order, now: DateTime<Utc>) -> Result<(), OrderError> {
    require("order_uid", &order.order_uid)?;
    require("track_number", &order.track_number)?;
    require("entry", &order.entry)?;
    require("locale", &order.locale)?;
    require("customer_id", &order.customer_id)?;
    require("delivery_service", &order.delivery_service)?;
    require("shardkey", &order.shardkey)?;
    require("oof_shard", &order.oof_shard)?;
    at_least("sm_id", order.sm_id, 1)?;

    validate_delivery(&order.delivery)?;
    validate_payment(&order.payment)?;

    if order.items.is_empty() {
        return Err(OrderError::NoItems);
    }
    for item in &order.items {
        validate_item(item)?;
    }

    let items_total = order.items_total().ok_or(OrderError::ItemsTotalOverflow)?;
    if items_total != order.payment.goods_total {
        return Err(OrderError::GoodsTotalMismatch {
            goods_total: order.payment.goods_total,
            items_total,
        });
    }

    if order.date_created > now + Duration::hours(MAX_FUTURE_SKEW_HOURS) {
        return Err(OrderError::CreatedInFuture(order.date_created.to_rfc3339()));
    }

    Ok(())
}

fn validate_delivery(delivery: &Delivery) -> Result<(), OrderError> {
    require("delivery.name", &delivery.name)?;
    require("delivery.phone", &delivery.phone)?;
    require("delivery.zip", &delivery.zip)?;
    require("delivery.city", &delivery.city)?;
    require("delivery.address", &delivery.address)?;
    require("delivery.region", &delivery.region)?;
    require("delivery.email", &delivery.email)?;
    if !is_valid_email(&delivery.email) {
        return Err(OrderError::InvalidEmail(delivery.email.clone()));
    }
    Ok(())
}

fn validate_payment(payment: &Payment) -> Result<(), OrderError> {
    require("payment.transaction", &payment.transaction)?;
    require("payment.currency", &payment.currency)?;
    require("payment.provider", &payment.provider)?;
    require("payment.bank", &payment.bank)?;
    at_least("payment.amount", payment.amount, 0)?;
    at_least("payment.payment_dt", payment.payment_dt, 0)?;
    at_least("payment.delivery_cost", payment.delivery_cost, 0)?;
    at_least("payment.goods_total", payment.goods_total, 0)?;
    at_least("payment.custom_fee", payment.custom_fee, 0)
}

fn validate_item(item: &Item) -> Result<(), OrderError> {
    require("item.rid", &item.rid)?;
    require("item.name", &item.name)?;
    require("item.size", &item.size)?;
    require("item.brand", &item.brand)?;
    at_least("item.chrt_id", item.chrt_id, 1)?;
    at_least("item.price", item.price, 1)?;
    at_least("item.nm_id", item.nm_id, 1)?;
    at_least("item.sale", item.sale, 0)?;
    at_least("item.total_price", item.total_price, 0)?;
    at_least("item.status", item.status, 0)
}

fn require(field: &'static str, value: &str) -> Result<(), OrderError> {
    if value.trim().is_empty() {
        return Err(OrderError::MissingField(field));
    }
    Ok(())
}

fn at_least(field: &'static str, value: i64, min: i64) -> Result<(), OrderError> {
    if value < min {
        return Err(OrderError::OutOfRange { field, min, value });
    }
    Ok(())
}

/// Minimal shape check: exactly one `@` with a non-empty local part and a
/// dotted, non-empty domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
