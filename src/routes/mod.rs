//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card menu is served at `/` and the fixed matrix at `/matriz`. The same
//! cells are exposed as JSON under `/api/cells` for other front ends. Every
//! response passes through request tracing and gzip compression.

pub mod menu;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(menu::cards_page))
        .route("/matriz", get(menu::matrix_page))
        .route("/api/cells", get(menu::list_cells))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
