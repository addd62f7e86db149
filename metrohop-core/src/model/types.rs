//! Core identifier and record types for the metro network

use serde::{Deserialize, Serialize};

/// Identity slug of a station, derived from its display name at creation
/// time and never renamed afterwards
pub type StationId = String;

/// Identity key of a line
pub type LineId = String;

/// Schematic display coordinate of a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Coordinate used for stations without an entry in the position table
pub const DEFAULT_POSITION: Position = Position { x: 700, y: 550 };

/// Amenity tag attached to a station record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facility {
    Accessibility,
    Parking,
    Elevator,
    Exits,
}

/// Membership of a station on one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStop {
    pub line_id: LineId,
    pub line_name: String,
    pub line_color: String,
    pub index_on_line: usize,
}

/// Derived station record, rebuilt whenever the network definition changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub lines: Vec<LineStop>,
    pub is_interchange: bool,
    pub facilities: Vec<Facility>,
    pub position: Position,
}
