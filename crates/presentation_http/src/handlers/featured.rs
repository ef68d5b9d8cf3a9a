//! Featured catalog handler

use application::featured_pois;
use axum::{Json, extract::Query};
use domain::{PlaceCategory, Poi};
use serde::Deserialize;

/// Query parameters for the featured endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedParams {
    /// Category to list
    #[serde(default = "default_category")]
    pub category: PlaceCategory,
}

const fn default_category() -> PlaceCategory {
    PlaceCategory::Veterinary
}

/// List the curated featured entries for a category
pub async fn featured(Query(params): Query<FeaturedParams>) -> Json<Vec<Poi>> {
    Json(featured_pois(params.category))
}
