//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Bounding region with inverted or degenerate bounds
    #[error("Invalid bounding region: south={south}, west={west}, north={north}, east={east}")]
    InvalidRegion {
        /// Southern bound in degrees
        south: f64,
        /// Western bound in degrees
        west: f64,
        /// Northern bound in degrees
        north: f64,
        /// Eastern bound in degrees
        east: f64,
    },

    /// POI identifier was empty or malformed
    #[error("Invalid POI id: {0}")]
    InvalidPoiId(String),

    /// Unknown place category string
    #[error("Unknown place category: {0}")]
    UnknownCategory(String),
}
