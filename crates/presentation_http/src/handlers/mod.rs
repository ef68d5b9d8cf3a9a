//! HTTP request handlers

pub mod featured;
pub mod health;
pub mod locate;
pub mod map;
pub mod search;

use domain::PlaceCategory;
use serde::Deserialize;

/// Common query parameters for search-backed endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Free-text location, or a raw `"lat, lon"` pair
    #[serde(default)]
    pub location: String,
    /// Free-text query for keyword widening
    #[serde(default)]
    pub query: String,
    /// Category to search for
    #[serde(default = "default_category")]
    pub category: PlaceCategory,
}

const fn default_category() -> PlaceCategory {
    PlaceCategory::Veterinary
}
