//! PawFinder HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::SearchService;
use application::ports::{GeocoderPort, PoiSearchPort};
use infrastructure::{AppConfig, GeocoderAdapter, PoiSearchAdapter};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the log format knob can take effect
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize tracing
    let fmt_layer = if config.server.log_format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pawfinder_server=debug,tower_http=debug".into()),
        )
        .with(fmt_layer)
        .init();

    info!("🐾 PawFinder v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        environment = %config.environment,
        "Configuration loaded"
    );

    // Initialize adapters
    let geocoder = GeocoderAdapter::new(&config.nominatim, config.search.radius_deg)
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoder: {e}"))?;
    let poi_search = PoiSearchAdapter::new(&config.overpass)
        .map_err(|e| anyhow::anyhow!("Failed to initialize POI search: {e}"))?;

    let geocoder: Arc<dyn GeocoderPort> = Arc::new(geocoder);
    let poi_search: Arc<dyn PoiSearchPort> = Arc::new(poi_search);

    // Initialize services
    let search_service = SearchService::new(geocoder, poi_search);

    let state = AppState {
        search_service: Arc::new(search_service),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    let mut app = app.layer(TraceLayer::new_for_http());
    if config.server.cors_enabled {
        app = app.layer(cors_layer);
    }

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
