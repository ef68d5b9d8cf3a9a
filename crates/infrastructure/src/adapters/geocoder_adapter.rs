//! Geocoder adapter - Implements GeocoderPort using integration_osm

use application::error::ApplicationError;
use application::ports::{GeocoderPort, ResolvedPlace};
use async_trait::async_trait;
use domain::GeoLocation;
use integration_osm::{GeocodingClient, NominatimClient, NominatimConfig};
use tracing::{debug, instrument};

use super::map_osm_error;

/// Adapter for geocoding via Nominatim
pub struct GeocoderAdapter {
    client: NominatimClient,
    radius_deg: f64,
}

impl std::fmt::Debug for GeocoderAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderAdapter")
            .field("client", &"NominatimClient")
            .field("radius_deg", &self.radius_deg)
            .finish()
    }
}

impl GeocoderAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &NominatimConfig, radius_deg: f64) -> Result<Self, ApplicationError> {
        let client =
            NominatimClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client, radius_deg })
    }
}

#[async_trait]
impl GeocoderPort for GeocoderAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, input: &str) -> Result<ResolvedPlace, ApplicationError> {
        let candidate = self.client.geocode(input).await.map_err(map_osm_error)?;
        let region = candidate.region(self.radius_deg);
        debug!(place = %candidate.display_name, "location resolved");
        Ok(ResolvedPlace {
            display_name: candidate.display_name,
            location: candidate.location,
            region,
        })
    }

    #[instrument(skip(self))]
    async fn describe(&self, location: GeoLocation) -> Result<String, ApplicationError> {
        self.client
            .reverse_geocode(location.latitude(), location.longitude())
            .await
            .map_err(map_osm_error)
    }
}
