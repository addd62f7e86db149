//! Network editing handlers
//!
//! Every mutation goes through the core network facade, so a response
//! is only sent after the derived directory and graph have been
//! rebuilt.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use metrohop_core::Error;
use metrohop_core::admin::{AdminLine, AdminStation, project_lines, station_order};
use metrohop_core::import::{ImportFormat, ImportReport, preview};
use metrohop_core::model::{InsertPosition, Station, station_slug};

use super::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct LineInsertion {
    line: String,
    position: InsertPosition,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddStationRequest {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    line_insertions: Vec<LineInsertion>,
}

impl AddStationRequest {
    /// An omitted or blank ID falls back to the slug of the name, the
    /// same rule the seed data follows.
    fn station_id(&self) -> String {
        match &self.id {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => station_slug(&self.name),
        }
    }
}

/// POST /admin/stations
pub(crate) async fn add_station(
    State(state): State<AppState>,
    Json(request): Json<AddStationRequest>,
) -> Result<(StatusCode, Json<Station>), ApiError> {
    let id = request.station_id();
    let insertions: Vec<(String, InsertPosition)> = request
        .line_insertions
        .into_iter()
        .map(|insertion| (insertion.line, insertion.position))
        .collect();

    let mut network = state.network.write().await;
    network.add_station(&id, request.name.trim(), &insertions)?;
    let station = network
        .station(&id)
        .cloned()
        .ok_or(Error::NotFound("station", id))?;
    Ok((StatusCode::CREATED, Json(station)))
}

/// DELETE /admin/stations/{id}
pub(crate) async fn remove_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.network.write().await.remove_station(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReplaceStationsRequest {
    stations: Vec<AdminStation>,
}

/// PUT /admin/lines/{id}/stations
pub(crate) async fn replace_stations(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReplaceStationsRequest>,
) -> Result<Json<AdminLine>, ApiError> {
    let order = station_order(&request.stations);
    let mut network = state.network.write().await;
    network.replace_line_stations(&id, order)?;
    let line = project_lines(&network)
        .into_iter()
        .find(|line| line.id == id)
        .ok_or(Error::NotFound("line", id))?;
    Ok(Json(line))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImportRequest {
    format: ImportFormat,
    data: String,
}

/// POST /admin/import/preview
///
/// Parses and validates without touching the network; applying an
/// import is a separate admin decision.
pub(crate) async fn import_preview(
    Json(request): Json<ImportRequest>,
) -> Result<Json<ImportReport>, ApiError> {
    let report = preview(request.format, &request.data)?;
    Ok(Json(report))
}
