//! Map scene handler

use application::{MapScene, SearchInput, build_scene};
use axum::{
    Json,
    extract::{Query, State},
};
use domain::PoiId;
use serde::Deserialize;
use tracing::instrument;

use super::SearchParams;
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the scene endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SceneParams {
    #[serde(flatten)]
    pub search: SearchParams,
    /// Id of the POI the host has selected, if any
    #[serde(default)]
    pub selected: Option<String>,
}

/// Run a search and return the renderable map scene
#[instrument(skip(state))]
pub async fn scene(
    State(state): State<AppState>,
    Query(params): Query<SceneParams>,
) -> Result<Json<MapScene>, ApiError> {
    let selected = params
        .selected
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(PoiId::parse)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let snapshot = state
        .search_service
        .search(&SearchInput {
            location: params.search.location,
            query: params.search.query,
            category: params.search.category,
        })
        .await;

    if let (Some(message), Some(kind)) = (snapshot.error, snapshot.error_kind) {
        return Err(match kind {
            application::ErrorKind::LocationNotFound => ApiError::NotFound(message),
            application::ErrorKind::ServiceUnavailable => ApiError::ServiceUnavailable(message),
            application::ErrorKind::Network => ApiError::BadGateway(message),
            application::ErrorKind::Other => ApiError::Internal(message),
        });
    }

    Ok(Json(build_scene(&snapshot.results, selected.as_ref())))
}
