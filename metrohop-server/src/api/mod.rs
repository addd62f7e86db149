//! HTTP surface of the journey planner
//!
//! Thin handlers over the core crate: extract, call, serialize. Core
//! errors map onto statuses here and nowhere else.

mod admin;
mod bookings;
mod routes;
mod stations;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use serde_json::json;

use crate::state::AppState;

/// Wrapper that turns a core error into a JSON error response
pub(crate) struct ApiError(metrohop_core::Error);

impl From<metrohop_core::Error> for ApiError {
    fn from(error: metrohop_core::Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            metrohop_core::Error::NotFound(..) => StatusCode::NOT_FOUND,
            metrohop_core::Error::Validation(_)
            | metrohop_core::Error::Csv(_)
            | metrohop_core::Error::Json(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(stations::search))
        .route("/stations/{id}", get(stations::by_id))
        .route("/lines", get(stations::lines))
        .route("/routes", get(routes::find))
        .route("/history", get(routes::history))
        .route("/admin/stations", post(admin::add_station))
        .route("/admin/stations/{id}", delete(admin::remove_station))
        .route("/admin/lines/{id}/stations", put(admin::replace_stations))
        .route("/admin/import/preview", post(admin::import_preview))
        .route("/bookings", post(bookings::create).get(bookings::list))
        .with_state(state)
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "time": chrono::Utc::now(),
    }))
}
