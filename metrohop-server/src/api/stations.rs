//! Station lookup and line listing handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use metrohop_core::Error;
use metrohop_core::admin::{AdminLine, project_lines};
use metrohop_core::model::Station;

use super::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    q: String,
}

/// GET /stations?q=
pub(crate) async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Station>> {
    let network = state.network.read().await;
    let matches = network
        .search_stations(&params.q)
        .into_iter()
        .cloned()
        .collect();
    Json(matches)
}

/// GET /stations/{id}
pub(crate) async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Station>, ApiError> {
    let network = state.network.read().await;
    let station = network
        .station(&id)
        .cloned()
        .ok_or(Error::NotFound("station", id))?;
    Ok(Json(station))
}

/// GET /lines
pub(crate) async fn lines(State(state): State<AppState>) -> Json<Vec<AdminLine>> {
    let network = state.network.read().await;
    Json(project_lines(&network))
}
