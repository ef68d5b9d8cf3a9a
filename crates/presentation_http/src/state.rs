//! Application state shared across handlers

use std::sync::Arc;

use application::SearchService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Search orchestrator
    pub search_service: Arc<SearchService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
