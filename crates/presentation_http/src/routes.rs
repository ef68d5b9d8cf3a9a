//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Search API (v1)
        .route("/v1/search", get(handlers::search::search))
        // Map scene API (v1)
        .route("/v1/map/scene", get(handlers::map::scene))
        // Featured catalog API (v1)
        .route("/v1/featured", get(handlers::featured::featured))
        // Reverse geocoding API (v1)
        .route("/v1/locate", get(handlers::locate::locate))
        // Attach state
        .with_state(state)
}
