//! Route definitions.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/pools", get(handlers::search))
        .route("/pools/refresh", post(handlers::refresh))
        .route("/pools/top", get(handlers::top))
        .route("/pools/{address}", get(handlers::get_pool))
        .route("/pools/{address}/estimate", get(handlers::estimate))
        .route("/pools/{address}/health", get(handlers::pool_health))
        .route("/store", get(handlers::list_entries))
        .route(
            "/store/{key}",
            get(handlers::get_entry)
                .put(handlers::put_entry)
                .delete(handlers::delete_entry),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
