//! Core of the MetroHop journey planner
//!
//! Models a metro network as an editable line topology with two derived
//! views (station directory and transit graph) and runs a transfer-aware
//! multi-route search over it. Admin edits, bulk-import previews, search
//! history and bookings round out the library; serving it over a
//! protocol is left to the caller.

pub mod admin;
pub mod booking;
pub mod error;
pub mod history;
pub mod import;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{LineId, StationId};

/// Minutes charged by the search when a hop changes lines
pub const TRANSFER_PENALTY: u32 = 5;

/// Minutes added per transfer to the rider-facing duration estimate
pub const TRANSFER_BUFFER: u32 = 3;

/// Most route options a single query returns
pub const MAX_ROUTE_OPTIONS: usize = 3;

/// Most stations a name search returns
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Most entries the recent-search log keeps
pub const MAX_RECENT_SEARCHES: usize = 5;
