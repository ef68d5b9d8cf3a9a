//! Typed models for the OSM backends

use std::collections::HashMap;

use domain::{BoundingRegion, GeoLocation};
use serde::Deserialize;

/// A geocoder bounding box, in Nominatim's south/north/west/east order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceBounds {
    /// Southern bound in degrees
    pub south: f64,
    /// Northern bound in degrees
    pub north: f64,
    /// Western bound in degrees
    pub west: f64,
    /// Eastern bound in degrees
    pub east: f64,
}

impl PlaceBounds {
    /// Convert to a validated bounding region
    ///
    /// Returns `None` when the bounds are inverted or degenerate; callers
    /// fall back to point+radius synthesis.
    #[must_use]
    pub fn to_region(&self) -> Option<BoundingRegion> {
        BoundingRegion::new(self.south, self.west, self.north, self.east).ok()
    }
}

/// A geocoding result: the first place matching a free-text query
///
/// Ephemeral, produced per geocode call and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    /// Human-readable place name
    pub display_name: String,
    /// Resolved point
    pub location: GeoLocation,
    /// Bounding box, when the place is an area rather than a point
    pub bounding_box: Option<PlaceBounds>,
}

impl PlaceCandidate {
    /// Derive the search region for this candidate
    ///
    /// Uses the bounding box when present and valid, otherwise synthesizes
    /// a square of `delta` degrees half-width around the point.
    #[must_use]
    pub fn region(&self, delta: f64) -> BoundingRegion {
        self.bounding_box
            .as_ref()
            .and_then(PlaceBounds::to_region)
            .unwrap_or_else(|| BoundingRegion::around(self.location, delta))
    }
}

/// A raw Overpass element: a node with `lat`/`lon`, or a way/area that
/// reports a `center` centroid instead
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    /// OSM element id
    pub id: i64,
    /// Point coordinates (nodes)
    pub lat: Option<f64>,
    /// Point coordinates (nodes)
    pub lon: Option<f64>,
    /// Centroid (ways/areas queried with `out center`)
    pub center: Option<OverpassCenter>,
    /// Attribute-tag dictionary
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OverpassElement {
    /// Best-effort coordinates: direct lat/lon, else the centroid
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => self.center.as_ref().map(|c| (c.lat, c.lon)),
        }
    }
}

/// Centroid of a way/area element
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCenter {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}
