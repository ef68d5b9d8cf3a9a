//! Current-location handler
//!
//! Reverse-geocodes raw browser coordinates into a display name the
//! client can put in the location field.

use axum::{
    Json,
    extract::{Query, State},
};
use domain::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

/// Query parameters for the locate endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LocateParams {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Reverse-geocoded place description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocateResponse {
    /// Human-readable name for the coordinates
    pub display_name: String,
}

/// Describe the place at the given coordinates
pub async fn locate(
    State(state): State<AppState>,
    Query(params): Query<LocateParams>,
) -> Result<Json<LocateResponse>, ApiError> {
    let location = GeoLocation::new(params.latitude, params.longitude)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let display_name = state.search_service.describe_location(location).await?;
    Ok(Json(LocateResponse { display_name }))
}
