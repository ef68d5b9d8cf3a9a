//! Overpass POI search client
//!
//! Executes spatial queries against the Overpass API with a bounded
//! retry/backoff policy. The public Overpass instance is a shared,
//! rate-limited resource prone to transient overload (HTTP 504);
//! client-side exponential backoff keeps retries from stampeding it.
//! Attempts are strictly sequential: each retry waits for the prior
//! attempt's definitive failure before re-issuing.

use std::time::Duration;

use async_trait::async_trait;
use domain::{BoundingRegion, PlaceCategory, Poi};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::OverpassConfig;
use crate::error::OsmError;
use crate::models::OverpassElement;
use crate::normalize::{Enrichment, RandomEnrichment, normalize_elements};
use crate::query::build_query;

/// Trait for POI search clients
#[async_trait]
pub trait PoiClient: Send + Sync {
    /// Search a bounding region for POIs of a category, optionally widened
    /// by specialty keywords found in the free-text query
    async fn find_pois(
        &self,
        region: &BoundingRegion,
        category: PlaceCategory,
        query: Option<&str>,
    ) -> Result<Vec<Poi>, OsmError>;
}

/// Overpass-based POI search client with bounded retry
pub struct OverpassClient {
    client: Client,
    config: OverpassConfig,
    enrichment: Box<dyn Enrichment>,
}

impl std::fmt::Debug for OverpassClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverpassClient")
            .field("base_url", &self.config.base_url)
            .field("max_retries", &self.config.max_retries)
            .finish_non_exhaustive()
    }
}

impl OverpassClient {
    /// Create a new Overpass client with the randomized enrichment policy
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OverpassConfig) -> Result<Self, OsmError> {
        Self::with_enrichment(config, Box::new(RandomEnrichment))
    }

    /// Create a client with a custom enrichment source
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_enrichment(
        config: &OverpassConfig,
        enrichment: Box<dyn Enrichment>,
    ) -> Result<Self, OsmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("PawFinder/1.0 (https://github.com/pawfinder/pawfinder)")
            .build()
            .map_err(|e| OsmError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            enrichment,
        })
    }

    /// Backoff delay for a 0-indexed retry: `base * 2^retry`
    ///
    /// Both operands come from configuration, so the multiplication
    /// saturates instead of wrapping for pathological settings.
    #[must_use]
    pub fn retry_delay(&self, retry: u32) -> Duration {
        let factor = 1u64.checked_shl(retry).unwrap_or(u64::MAX);
        Duration::from_millis(self.config.retry_base_delay_ms.saturating_mul(factor))
    }

    /// Execute the query with bounded retry on transient failures
    async fn execute(&self, query: &str) -> Result<Vec<OverpassElement>, OsmError> {
        let mut retry = 0u32;
        loop {
            match self.try_execute(query).await {
                Ok(elements) => return Ok(elements),
                Err(err) if err.is_transient() => {
                    if retry >= self.config.max_retries {
                        warn!(
                            attempts = retry + 1,
                            %err,
                            "Overpass retries exhausted"
                        );
                        return Err(OsmError::ServiceUnavailable(
                            "Overpass API temporarily unavailable. Please try again in a few moments.".to_string(),
                        ));
                    }
                    let delay = self.retry_delay(retry);
                    warn!(
                        attempt = retry + 1,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        %err,
                        "Overpass attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                },
                Err(err) => return Err(err),
            }
        }
    }

    /// Single POST attempt against the Overpass interpreter
    async fn try_execute(&self, query: &str) -> Result<Vec<OverpassElement>, OsmError> {
        let url = format!("{}/api/interpreter", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "text/plain")
            .body(query.to_string())
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

        let status = response.status();
        if status == StatusCode::GATEWAY_TIMEOUT {
            return Err(OsmError::GatewayTimeout);
        }
        if !status.is_success() {
            return Err(OsmError::RequestFailed(format!(
                "Overpass API error {status}"
            )));
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| OsmError::ParseError(e.to_string()))?;

        Ok(body.elements)
    }
}

#[async_trait]
impl PoiClient for OverpassClient {
    #[instrument(skip(self, region), fields(bbox = %region))]
    async fn find_pois(
        &self,
        region: &BoundingRegion,
        category: PlaceCategory,
        query: Option<&str>,
    ) -> Result<Vec<Poi>, OsmError> {
        let payload = build_query(region, category, query);
        debug!(payload_len = payload.len(), "Executing Overpass query");

        let elements = self.execute(&payload).await?;
        let pois = normalize_elements(
            elements,
            category,
            self.enrichment.as_ref(),
            self.config.max_results,
        );

        debug!(count = pois.len(), "Overpass search complete");
        Ok(pois)
    }
}

/// Raw Overpass response envelope
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}
