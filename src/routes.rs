//! Router assembly: meta routes at the root, item CRUD under /api, a JSON
//! 404 for everything else.

use crate::error::AppError;
use crate::handlers::{items, meta};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

async fn fallback() -> AppError {
    AppError::RouteNotFound
}

/// Build the full application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .route("/api/items", get(items::list).post(items::create))
        .route(
            "/api/items/:id",
            get(items::read).put(items::update).delete(items::delete),
        )
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
