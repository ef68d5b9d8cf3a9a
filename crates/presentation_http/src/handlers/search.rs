//! Search handler

use application::{SearchInput, SearchSnapshot};
use axum::{Json, extract::Query, extract::State, http::StatusCode};
use tracing::instrument;

use super::SearchParams;
use crate::error::status_for_kind;
use crate::state::AppState;

/// Run a search and return the resulting snapshot
///
/// A failed search still returns the snapshot body; the status code
/// reflects the error classification (404 for an unresolvable location,
/// 503/502 for upstream trouble) so clients can branch without parsing
/// the message text.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<SearchSnapshot>) {
    let snapshot = state
        .search_service
        .search(&SearchInput {
            location: params.location,
            query: params.query,
            category: params.category,
        })
        .await;

    let status = snapshot
        .error_kind
        .map_or(StatusCode::OK, status_for_kind);

    (status, Json(snapshot))
}
