//! Bounding region value object
//!
//! A rectangular latitude/longitude window used to scope spatial queries.
//! Regions come either from a geocoder's bounding box or are synthesized
//! as a fixed-radius square around a point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// Default half-width in degrees for synthesized regions (~8-9 km)
pub const DEFAULT_RADIUS_DEG: f64 = 0.08;

/// A rectangular search window in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl BoundingRegion {
    /// Create a region with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRegion` unless `south < north` and
    /// `west < east`.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Result<Self, DomainError> {
        if south >= north || west >= east {
            return Err(DomainError::InvalidRegion {
                south,
                west,
                north,
                east,
            });
        }
        Ok(Self {
            south,
            west,
            north,
            east,
        })
    }

    /// Synthesize a square region of `delta` degrees half-width around a point
    #[must_use]
    pub fn around(center: GeoLocation, delta: f64) -> Self {
        Self {
            south: center.latitude() - delta,
            west: center.longitude() - delta,
            north: center.latitude() + delta,
            east: center.longitude() + delta,
        }
    }

    /// Smallest region enclosing all given locations
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn enclosing(locations: &[GeoLocation]) -> Option<Self> {
        let first = locations.first()?;
        let mut south = first.latitude();
        let mut north = first.latitude();
        let mut west = first.longitude();
        let mut east = first.longitude();
        for loc in &locations[1..] {
            south = south.min(loc.latitude());
            north = north.max(loc.latitude());
            west = west.min(loc.longitude());
            east = east.max(loc.longitude());
        }
        Some(Self {
            south,
            west,
            north,
            east,
        })
    }

    /// Southern bound in degrees
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Western bound in degrees
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Northern bound in degrees
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Eastern bound in degrees
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// Check whether a location falls inside this region
    #[must_use]
    pub fn contains(&self, location: &GeoLocation) -> bool {
        (self.south..=self.north).contains(&location.latitude())
            && (self.west..=self.east).contains(&location.longitude())
    }
}

impl fmt::Display for BoundingRegion {
    /// Overpass bbox form: `south,west,north,east`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_region() {
        let region = BoundingRegion::new(-34.0, 150.5, -33.5, 151.5).expect("valid");
        assert!((region.south() - -34.0).abs() < f64::EPSILON);
        assert!((region.east() - 151.5).abs() < f64::EPSILON);
    }

    #[test]
    fn inverted_latitude_is_rejected() {
        assert!(BoundingRegion::new(-33.5, 150.5, -34.0, 151.5).is_err());
    }

    #[test]
    fn inverted_longitude_is_rejected() {
        assert!(BoundingRegion::new(-34.0, 151.5, -33.5, 150.5).is_err());
    }

    #[test]
    fn degenerate_region_is_rejected() {
        assert!(BoundingRegion::new(-34.0, 150.5, -34.0, 151.5).is_err());
    }

    #[test]
    fn around_point_uses_half_width() {
        let center = GeoLocation::new_unchecked(-33.8688, 151.2093);
        let region = BoundingRegion::around(center, DEFAULT_RADIUS_DEG);
        assert!((region.south() - (-33.8688 - 0.08)).abs() < 1e-9);
        assert!((region.north() - (-33.8688 + 0.08)).abs() < 1e-9);
        assert!((region.west() - (151.2093 - 0.08)).abs() < 1e-9);
        assert!((region.east() - (151.2093 + 0.08)).abs() < 1e-9);
    }

    #[test]
    fn enclosing_spans_all_points() {
        let locations = [
            GeoLocation::new_unchecked(-33.8688, 151.2093),
            GeoLocation::new_unchecked(-37.8136, 144.9631),
            GeoLocation::new_unchecked(-27.4710, 153.0234),
        ];
        let region = BoundingRegion::enclosing(&locations).expect("non-empty");
        for loc in &locations {
            assert!(region.contains(loc));
        }
        assert!((region.south() - -37.8136).abs() < f64::EPSILON);
        assert!((region.east() - 153.0234).abs() < f64::EPSILON);
    }

    #[test]
    fn enclosing_empty_is_none() {
        assert!(BoundingRegion::enclosing(&[]).is_none());
    }

    #[test]
    fn display_is_overpass_bbox_order() {
        let region = BoundingRegion::new(-34.0, 150.5, -33.5, 151.5).expect("valid");
        assert_eq!(region.to_string(), "-34,150.5,-33.5,151.5");
    }
}
