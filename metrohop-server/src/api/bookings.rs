//! Ticket booking handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use metrohop_core::Error;
use metrohop_core::booking::Booking;

use super::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingRequest {
    source: String,
    destination: String,
    /// Index into the ranked route options, defaulting to the fastest
    #[serde(default)]
    route_index: usize,
}

/// POST /bookings
pub(crate) async fn create(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let booking = {
        let network = state.network.read().await;
        let source = network
            .station(&request.source)
            .cloned()
            .ok_or_else(|| Error::NotFound("station", request.source.clone()))?;
        let destination = network
            .station(&request.destination)
            .cloned()
            .ok_or_else(|| Error::NotFound("station", request.destination.clone()))?;
        let route = network
            .find_routes(&request.source, &request.destination)
            .into_iter()
            .nth(request.route_index)
            .ok_or_else(|| Error::Validation("No route available for this journey.".to_string()))?;
        Booking::create(source, destination, route)
    };

    state.bookings.lock().await.push(booking.clone());
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /bookings
pub(crate) async fn list(State(state): State<AppState>) -> Json<Vec<Booking>> {
    Json(state.bookings.lock().await.clone())
}
