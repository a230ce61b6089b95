//! Order handlers.
//!
//! Reads go through the cached repository; writes go through the ingest
//! pipeline so validation is shared with the background worker.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use ordercache_core::order::Order;

use crate::{handlers::AppError, ingest::process_order_json, state::AppState};

/// Get a single order by uid (GET /order/{id}, GET /api/orders/{id}).
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_uid): Path<String>,
) -> Result<Json<Order>, Response> {
    if order_uid.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Order id is required").into_response());
    }

    let order = state
        .orders
        .get_order(&order_uid)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok(Json(order))
}

/// Accept one order synchronously (POST /api/orders).
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let order = process_order_json(state.orders.as_ref(), &body).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Queue one raw order for the background worker (POST /api/orders/queue).
pub async fn enqueue_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    state.ingest.enqueue(body.to_vec())?;
    tracing::debug!(
        bytes = body.len(),
        remaining = state.ingest.remaining_capacity(),
        "Order queued"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "status": "queued" })),
    ))
}
