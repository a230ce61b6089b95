//! Order API operations.

use serde::{Deserialize, Serialize};

use super::OrdercacheClient;
use crate::error::{ClientError, Result};
use ordercache_core::order::Order;

/// Acknowledgement of a queued order.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueuedOrder {
    pub status: String,
}

impl OrdercacheClient {
    /// Get an order by uid.
    pub async fn get_order(&self, order_uid: &str) -> Result<Order> {
        if order_uid.trim().is_empty() {
            return Err(ClientError::InvalidInput("order uid is empty".to_string()));
        }

        let response = self
            .client
            .get(self.url(&format!("/api/orders/{}", order_uid)))
            .send()
            .await?;
        self.handle_response(response, &format!("order {order_uid}"))
            .await
    }

    /// Submit a JSON order and wait until it is stored.
    pub async fn send_order(&self, body: Vec<u8>) -> Result<Order> {
        let response = self
            .client
            .post(self.url("/api/orders"))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        self.handle_response(response, "orders").await
    }

    /// Hand a JSON order to the server's ingest queue.
    pub async fn queue_order(&self, body: Vec<u8>) -> Result<QueuedOrder> {
        let response = self
            .client
            .post(self.url("/api/orders/queue"))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        self.handle_response(response, "order queue").await
    }
}
