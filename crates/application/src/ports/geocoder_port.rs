//! Geocoding port
//!
//! Defines the interface for resolving free-text locations to
//! coordinates and a search region.

use async_trait::async_trait;
use domain::{BoundingRegion, GeoLocation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A geocoded place: display name, center point, and search region
///
/// The region is the geocoder's bounding box when one was returned,
/// otherwise a square synthesized around the center point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPlace {
    /// Human-readable name of the resolved place
    pub display_name: String,
    /// Center coordinates
    pub location: GeoLocation,
    /// Region to search within
    pub region: BoundingRegion,
}

/// Port for geocoding free-text locations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Resolve a free-text location to a place with a search region
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::LocationNotFound` when the input does
    /// not resolve to any place, and network/service variants for
    /// upstream failures.
    async fn resolve(&self, input: &str) -> Result<ResolvedPlace, ApplicationError>;

    /// Resolve coordinates to a human-readable address
    ///
    /// # Errors
    ///
    /// Returns an error if the reverse lookup fails.
    async fn describe(&self, location: GeoLocation) -> Result<String, ApplicationError>;
}
