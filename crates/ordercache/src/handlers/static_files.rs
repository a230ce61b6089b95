//! Order lookup page and its assets.
//!
//! Assets are embedded at compile time, so the binary serves the page from
//! any working directory.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));

/// `(file name, content type, contents)` of every file under `/static/`.
const ASSETS: &[(&str, &str, &str)] = &[
    (
        "script.js",
        "application/javascript; charset=utf-8",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/script.js")),
    ),
    (
        "style.css",
        "text/css; charset=utf-8",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/style.css")),
    ),
];

/// Serve the order lookup page (GET /).
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Serve a lookup page asset (GET /static/{filename}).
pub async fn serve_static(Path(filename): Path<String>) -> Response {
    match ASSETS.iter().find(|(name, _, _)| *name == filename) {
        Some((_, content_type, contents)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, *content_type),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            *contents,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
