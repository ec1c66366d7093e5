//! quill-web
//!
//! HTTP surface for Quill: the submission page, a JSON listing, and a health
//! probe, all backed by a [`TextPieceStore`](quill_storage::store::TextPieceStore).

use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;

pub mod config;
pub mod error;
pub mod form;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router over an already-initialized store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home::index).post(routes::home::submit))
        .route("/health", get(routes::health::health_check))
        .route("/api/text-pieces", get(routes::api::list_text_pieces))
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state)
}
