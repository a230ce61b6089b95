use chrono::Utc;

use ordercache_core::order::{validate_order, Order};
use ordercache_core::storage::OrderRepository;

use super::IngestError;

/// Decodes a JSON payload and hands it to [`process_order`].
pub async fn process_order_json(
    repository: &dyn OrderRepository,
    payload: &[u8],
) -> Result<Order, IngestError> {
    let order: Order = serde_json::from_slice(payload)?;
    process_order(repository, order).await
}

/// Validates an order and writes it through the repository.
///
/// Nothing is written when validation fails.
pub async fn process_order(
    repository: &dyn OrderRepository,
    order: Order,
) -> Result<Order, IngestError> {
    validate_order(&order, Utc::now())?;

    repository.save_order(&order).await?;
    tracing::info!(order_uid = %order.order_uid, items = order.items.len(), "Order accepted");

    Ok(order)
}
