//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns the
//! application configuration.

pub mod adapters;
pub mod config;

pub use adapters::{GeocoderAdapter, PoiSearchAdapter};
pub use config::{AppConfig, Environment, SearchConfig, ServerConfig};
