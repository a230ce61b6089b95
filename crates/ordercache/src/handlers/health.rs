//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Storage probe through `OrderRepository::health_check`

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Storage health probe.
///
/// Returns 200 `OK` when the backing store answers, 503 otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> (StatusCode, String) {
    match state.orders.health_check().await {
        Ok(()) => (StatusCode::OK, "OK".to_string()),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Service Unavailable: {err}"),
            )
        }
    }
}
