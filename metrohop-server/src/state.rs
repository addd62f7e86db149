//! Shared server state
//!
//! The network behaves as one shared resource: searches take the read
//! lock, admin edits take the write lock, so a request never sees a
//! half-rebuilt graph.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use metrohop_core::booking::Booking;
use metrohop_core::history::SearchHistory;
use metrohop_core::model::MetroNetwork;

#[derive(Clone)]
pub struct AppState {
    pub network: Arc<RwLock<MetroNetwork>>,
    pub history: Arc<Mutex<SearchHistory>>,
    pub bookings: Arc<Mutex<Vec<Booking>>>,
}

impl AppState {
    pub fn new(network: MetroNetwork) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
            history: Arc::new(Mutex::new(SearchHistory::new())),
            bookings: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn seeded() -> Self {
        Self::new(MetroNetwork::seeded())
    }
}
