//! Journey search handlers

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use metrohop_core::history::SearchEntry;
use metrohop_core::routing::Route;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct RouteQuery {
    from: String,
    to: String,
}

/// GET /routes?from=&to=
///
/// Unknown endpoints and unreachable pairs both answer with an empty
/// list; the search box treats those the same as "no match".
pub(crate) async fn find(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Json<Vec<Route>> {
    let (routes, endpoints_known) = {
        let network = state.network.read().await;
        let routes = network.find_routes(&query.from, &query.to);
        let known = network.station(&query.from).is_some() && network.station(&query.to).is_some();
        (routes, known)
    };
    if endpoints_known {
        state.history.lock().await.record(&query.from, &query.to);
    }
    Json(routes)
}

/// GET /history
pub(crate) async fn history(State(state): State<AppState>) -> Json<Vec<SearchEntry>> {
    Json(state.history.lock().await.entries().to_vec())
}
