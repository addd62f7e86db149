//! Transit network data model
//!
//! The editable [`NetworkDefinition`] is the single source of truth;
//! the station directory and transit graph are derivations rebuilt
//! from it after every edit.

// Re-export of main modules
pub mod definition;
pub mod directory;
pub mod graph;
pub mod network;
pub mod seed;
pub mod types;

// Re-export of the assembled network structure
pub use network::MetroNetwork;

// Re-export of basic types for convenience
pub use definition::{InsertPosition, Line, NetworkDefinition, station_slug};
pub use directory::{StationDirectory, humanize_station_id, station_facilities};
pub use graph::{LineMeta, TransitGraph, station_pair_duration};
pub use types::{DEFAULT_POSITION, Facility, LineId, LineStop, Position, Station, StationId};
