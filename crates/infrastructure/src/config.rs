//! Application configuration

use std::fmt;

use domain::DEFAULT_RADIUS_DEG;
use integration_osm::{NominatimConfig, OverpassConfig};
use serde::{Deserialize, Serialize};

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Nominatim geocoding configuration
    #[serde(default)]
    pub nominatim: NominatimConfig,

    /// Overpass spatial query configuration
    #[serde(default)]
    pub overpass: OverpassConfig,

    /// Search behavior configuration
    #[serde(default)]
    pub search: SearchConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (empty = allow any)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
            allowed_origins: Vec::new(),
            log_format: default_log_format(),
        }
    }
}

/// Search behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Half-width in degrees of the region synthesized around a point
    #[serde(default = "default_radius_deg")]
    pub radius_deg: f64,
}

const fn default_radius_deg() -> f64 {
    DEFAULT_RADIUS_DEG
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_deg: default_radius_deg(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error when the file or environment contains values
    /// that do not deserialize into the configuration shape.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., PAWFINDER_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("PAWFINDER")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a human-readable description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.search.radius_deg <= 0.0 {
            return Err("search.radius_deg must be positive".to_string());
        }
        self.overpass.validate()?;
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        let format = self.server.log_format.to_ascii_lowercase();
        if format != "text" && format != "json" {
            return Err(format!(
                "server.log_format must be \"text\" or \"json\", got \"{}\"",
                self.server.log_format
            ));
        }
        Ok(())
    }
}
