//! Point-of-interest search port
//!
//! Defines the interface for spatial queries against the POI data source.

use async_trait::async_trait;
use domain::{BoundingRegion, PlaceCategory, Poi};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for finding points of interest within a region
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PoiSearchPort: Send + Sync {
    /// Find POIs of the given category inside the region
    ///
    /// The free-text query, when present, widens the search with
    /// specialty attributes. Results are normalized and capped by the
    /// implementation.
    ///
    /// # Errors
    ///
    /// Returns network/service variants for upstream failures; an empty
    /// result set is not an error.
    async fn find_in_region<'a>(
        &self,
        region: &BoundingRegion,
        category: PlaceCategory,
        query: Option<&'a str>,
    ) -> Result<Vec<Poi>, ApplicationError>;
}
