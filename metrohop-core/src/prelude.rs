pub use crate::{
    MAX_RECENT_SEARCHES, MAX_ROUTE_OPTIONS, MAX_SEARCH_RESULTS, TRANSFER_BUFFER, TRANSFER_PENALTY,
};

// Re-export key components
pub use crate::admin::{AdminLine, AdminStation, project_lines, station_order};
pub use crate::booking::{Booking, generate_booking_reference};
pub use crate::history::{SearchEntry, SearchHistory};
pub use crate::import::{ImportFormat, ImportIssue, ImportRecord, ImportReport, Severity, preview};
pub use crate::model::{MetroNetwork, NetworkDefinition, seed::default_network};
pub use crate::routing::{
    Route, RouteLabel, Segment, SegmentStop, calculate_fare, find_route_options,
};

// Core model types
pub use crate::model::{Facility, InsertPosition, Line, LineStop, Position, Station};
pub use crate::{Error, LineId, StationId};
