//! POI search adapter - Implements PoiSearchPort using integration_osm

use application::error::ApplicationError;
use application::ports::PoiSearchPort;
use async_trait::async_trait;
use domain::{BoundingRegion, PlaceCategory, Poi};
use integration_osm::{OverpassClient, OverpassConfig, PoiClient};
use tracing::instrument;

use super::map_osm_error;

/// Adapter for spatial POI queries via Overpass
pub struct PoiSearchAdapter {
    client: OverpassClient,
}

impl std::fmt::Debug for PoiSearchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoiSearchAdapter")
            .field("client", &"OverpassClient")
            .finish()
    }
}

impl PoiSearchAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &OverpassConfig) -> Result<Self, ApplicationError> {
        let client =
            OverpassClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PoiSearchPort for PoiSearchAdapter {
    #[instrument(skip(self, region), fields(category = ?category))]
    async fn find_in_region<'a>(
        &self,
        region: &BoundingRegion,
        category: PlaceCategory,
        query: Option<&'a str>,
    ) -> Result<Vec<Poi>, ApplicationError> {
        self.client
            .find_pois(region, category, query)
            .await
            .map_err(map_osm_error)
    }
}
