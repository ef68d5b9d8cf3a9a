//! Nominatim geocoding client
//!
//! Resolves free-text place names to coordinates and bounding boxes using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap),
//! restricted to a fixed country scope.
//!
//! Implements rate limiting (max 1 request/second per Nominatim usage policy)
//! and result caching (24h TTL) to minimize API calls.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use moka::future::Cache;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::error::OsmError;
use crate::models::{PlaceBounds, PlaceCandidate};

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in hours (0 to disable)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,

    /// Country code filter (e.g. "au" for Australia)
    #[serde(default = "default_country_filter")]
    pub country_filter: String,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_cache_ttl_hours() -> u64 {
    24
}

fn default_country_filter() -> String {
    "au".to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_hours: default_cache_ttl_hours(),
            country_filter: default_country_filter(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            cache_ttl_hours: 0,
            ..Default::default()
        }
    }
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-text place name to the first matching candidate
    async fn geocode(&self, location: &str) -> Result<PlaceCandidate, OsmError>;

    /// Resolve coordinates to a human-readable address
    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, OsmError>;
}

/// Nominatim-based geocoding client with rate limiting and caching
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
    cache: Cache<String, PlaceCandidate>,
    last_request: Arc<Mutex<Instant>>,
}

impl NominatimClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, OsmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("PawFinder/1.0 (https://github.com/pawfinder/pawfinder)")
            .build()
            .map_err(|e| OsmError::ConnectionFailed(e.to_string()))?;

        let cache_ttl = if config.cache_ttl_hours > 0 {
            Duration::from_secs(config.cache_ttl_hours * 3600)
        } else {
            Duration::from_secs(1) // Minimal TTL when "disabled"
        };

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(cache_ttl)
            .build();

        Ok(Self {
            client,
            config: config.clone(),
            cache,
            last_request: Arc::new(Mutex::new(Instant::now() - Duration::from_secs(2))),
        })
    }

    /// Enforce Nominatim's rate limit (max 1 request per second)
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < Duration::from_millis(1100) {
            let wait = Duration::from_millis(1100).saturating_sub(elapsed);
            debug!(?wait, "Rate limiting geocoding request");
            tokio::time::sleep(wait).await;
        }
        *last = Instant::now();
    }

    fn candidate_from_result(result: &NominatimResult) -> Result<PlaceCandidate, OsmError> {
        let lat: f64 = result
            .lat
            .parse()
            .map_err(|_| OsmError::ParseError("Invalid latitude".to_string()))?;
        let lon: f64 = result
            .lon
            .parse()
            .map_err(|_| OsmError::ParseError("Invalid longitude".to_string()))?;

        let location =
            GeoLocation::new(lat, lon).map_err(|e| OsmError::ParseError(e.to_string()))?;

        // Nominatim's boundingbox is [south, north, west, east] as strings;
        // a malformed box is ignored rather than failing the geocode.
        let bounding_box = result.boundingbox.as_ref().and_then(|b| {
            if b.len() != 4 {
                return None;
            }
            let south = b[0].parse().ok()?;
            let north = b[1].parse().ok()?;
            let west = b[2].parse().ok()?;
            let east = b[3].parse().ok()?;
            Some(PlaceBounds {
                south,
                north,
                west,
                east,
            })
        });

        Ok(PlaceCandidate {
            display_name: result.display_name.clone().unwrap_or_default(),
            location,
            bounding_box,
        })
    }
}

#[async_trait]
impl GeocodingClient for NominatimClient {
    #[instrument(skip(self))]
    async fn geocode(&self, location: &str) -> Result<PlaceCandidate, OsmError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(OsmError::LocationNotFound(
                "location must not be empty".to_string(),
            ));
        }

        // Check cache first
        let cache_key = location.to_lowercase();
        if let Some(candidate) = self.cache.get(&cache_key).await {
            debug!(%location, "Geocoding cache hit");
            return Ok(candidate);
        }

        self.rate_limit().await;

        let url = format!("{}/search", self.config.base_url);
        let mut params = vec![
            ("q", location.to_string()),
            ("format", "jsonv2".to_string()),
            ("limit", "1".to_string()),
            ("accept-language", "en".to_string()),
        ];

        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.clone()));
        }

        debug!(%location, "Geocoding location");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OsmError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    OsmError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(OsmError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| OsmError::ParseError(e.to_string()))?;

        let result = results
            .first()
            .ok_or_else(|| OsmError::LocationNotFound(location.to_string()))?;

        let candidate = Self::candidate_from_result(result)?;
        debug!(%location, %candidate.location, "Geocoded location");

        self.cache.insert(cache_key, candidate.clone()).await;
        Ok(candidate)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, OsmError> {
        self.rate_limit().await;

        let url = format!("{}/reverse", self.config.base_url);
        let params = [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("format", "jsonv2".to_string()),
            ("accept-language", "en".to_string()),
        ];

        debug!(%latitude, %longitude, "Reverse geocoding");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OsmError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    OsmError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(OsmError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let result: NominatimResult = response
            .json()
            .await
            .map_err(|e| OsmError::ParseError(e.to_string()))?;

        result
            .display_name
            .ok_or_else(|| OsmError::LocationNotFound(format!("{latitude},{longitude}")))
    }
}

/// Raw Nominatim API response
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: Option<String>,
    boundingbox: Option<Vec<String>>,
}
