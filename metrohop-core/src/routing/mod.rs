//! Route search over the transit graph
//!
//! Splits into the raw shortest-path search and the rider-facing layer
//! that runs it repeatedly, folds paths into segments and labels the
//! results.

pub(crate) mod dijkstra;
pub mod fare;
pub mod itinerary;

pub use fare::calculate_fare;
pub use itinerary::{Route, RouteLabel, Segment, SegmentStop, find_route_options};
