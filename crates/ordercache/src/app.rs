use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        cache::cache_stats,
        health::{healthz, livez},
        orders::{create_order, enqueue_order, get_order},
        static_files::{index, serve_static},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/orders", post(create_order))
        .route("/orders/queue", post(enqueue_order))
        .route("/orders/{id}", get(get_order))
        .route("/cache/stats", get(cache_stats))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/", get(index))
        .route("/static/{filename}", get(serve_static))
        .route("/order/{id}", get(get_order))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .route("/health", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
