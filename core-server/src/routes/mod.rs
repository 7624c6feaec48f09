//! HTTP route handlers and router configuration

mod admin;
mod assets;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the main application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(admin::health))
        // Sync + grouped categories
        .route("/api/:kind/categories", get(assets::categories))
        // Records for one category (name in payload)
        .route("/api/:kind/category", post(assets::by_category))
        // Filtered search
        .route("/api/:kind/search", get(assets::search))
        // Full listing
        .route("/api/:kind/all", get(assets::all))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
