use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;
use crate::middleware::batch_id::{batch_id_middleware, http_span};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/actions", post(handlers::process_actions))
        .route("/catalog/stats", get(handlers::catalog_stats))
        .layer(TraceLayer::new_for_http().make_span_with(http_span))
        .layer(middleware::from_fn(batch_id_middleware))
        .with_state(state)
}
