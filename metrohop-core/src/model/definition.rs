//! Source-of-truth line topology and the edits applied to it
//!
//! Everything else in the model (station directory, transit graph) is
//! derived from a [`NetworkDefinition`] and rebuilt after each edit.

use std::{fmt, str::FromStr};

use hashbrown::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize, de};

use super::types::{DEFAULT_POSITION, LineId, Position, StationId};
use crate::Error;

/// Horizontal offset applied when a new station is placed next to its
/// predecessor on the map
const AUTO_POSITION_X_OFFSET: i32 = 50;

/// A named, colored, ordered sequence of stations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationId>,
}

/// Where to splice a new station into a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertPosition {
    Start,
    End,
    After(StationId),
}

impl FromStr for InsertPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            other => match other.strip_prefix("after:") {
                Some(id) if !id.is_empty() => Ok(Self::After(id.to_string())),
                _ => Err(Error::Validation(format!("Unknown insert position: {other}"))),
            },
        }
    }
}

impl fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
            Self::After(id) => write!(f, "after:{id}"),
        }
    }
}

impl Serialize for InsertPosition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for InsertPosition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Normalize a display name into a station id slug
pub fn station_slug(name: &str) -> StationId {
    name.trim().to_lowercase().split_whitespace().join("-")
}

/// The editable description the whole network is derived from: the lines
/// and the display position table, updated together
#[derive(Debug, Clone, Default)]
pub struct NetworkDefinition {
    lines: Vec<Line>,
    positions: HashMap<StationId, Position>,
}

impl NetworkDefinition {
    pub fn new(lines: Vec<Line>, positions: HashMap<StationId, Position>) -> Self {
        Self { lines, positions }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Display position for a station, falling back to the default center
    /// for ids absent from the table
    pub fn position(&self, id: &str) -> Position {
        self.positions.get(id).copied().unwrap_or(DEFAULT_POSITION)
    }

    pub fn has_position(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Splice a new station into the targeted lines.
    ///
    /// The whole insertion is validated up front and applied all-or-nothing.
    /// An `After` target that is not on the line falls back to appending at
    /// the end. If the id has no display position yet, one is assigned from
    /// the station preceding the insertion point on the first targeted line.
    ///
    /// # Errors
    ///
    /// Rejects an empty name or id, an empty target list, an unknown or
    /// repeated target line, and an id already present on a targeted line.
    pub fn insert_station(
        &mut self,
        id: &str,
        name: &str,
        insertions: &[(LineId, InsertPosition)],
    ) -> Result<(), Error> {
        if name.trim().is_empty() || id.trim().is_empty() {
            return Err(Error::Validation(
                "Station name and ID are required.".to_string(),
            ));
        }
        if insertions.is_empty() {
            return Err(Error::Validation(
                "Please select at least one line.".to_string(),
            ));
        }

        let mut targets: Vec<(usize, &InsertPosition)> = Vec::with_capacity(insertions.len());
        for (line_id, position) in insertions {
            let index = self
                .lines
                .iter()
                .position(|line| &line.id == line_id)
                .ok_or_else(|| Error::NotFound("line", line_id.clone()))?;
            if targets.iter().any(|(seen, _)| *seen == index) {
                return Err(Error::Validation(format!(
                    "Line {line_id} is targeted more than once."
                )));
            }
            if self.lines[index].stations.iter().any(|s| s == id) {
                return Err(Error::Validation(
                    "Station already exists on one of the selected lines.".to_string(),
                ));
            }
            targets.push((index, position));
        }

        // The first targeted line decides the auto-assigned position
        let (first_index, first_position) = targets[0];
        let first_stations = &self.lines[first_index].stations;
        let predecessor = match first_position {
            InsertPosition::Start => None,
            InsertPosition::End => first_stations.last().cloned(),
            InsertPosition::After(after) => {
                if first_stations.iter().any(|s| s == after) {
                    Some(after.clone())
                } else {
                    first_stations.last().cloned()
                }
            }
        };

        for (index, position) in &targets {
            let stations = &mut self.lines[*index].stations;
            match position {
                InsertPosition::Start => stations.insert(0, id.to_string()),
                InsertPosition::End => stations.push(id.to_string()),
                InsertPosition::After(after) => {
                    match stations.iter().position(|s| s == after) {
                        Some(at) => stations.insert(at + 1, id.to_string()),
                        None => stations.push(id.to_string()),
                    }
                }
            }
        }

        if !self.positions.contains_key(id) {
            let assigned = match predecessor {
                Some(prev) => {
                    let base = self.position(&prev);
                    Position {
                        x: base.x + AUTO_POSITION_X_OFFSET,
                        y: base.y,
                    }
                }
                None => DEFAULT_POSITION,
            };
            self.positions.insert(id.to_string(), assigned);
        }

        Ok(())
    }

    /// Remove a station from every line it appears on.
    ///
    /// Lines that do not carry the id are untouched, as is the position
    /// table entry.
    pub fn remove_station(&mut self, id: &str) {
        for line in &mut self.lines {
            line.stations.retain(|s| s != id);
        }
    }

    /// Replace a line's station order with a permutation of itself.
    ///
    /// # Errors
    ///
    /// Rejects an order that adds, drops or repeats ids, and an unknown
    /// line.
    pub fn reorder_line(&mut self, line_id: &str, order: &[StationId]) -> Result<(), Error> {
        let index = self
            .lines
            .iter()
            .position(|line| line.id == line_id)
            .ok_or_else(|| Error::NotFound("line", line_id.to_string()))?;

        // Ids are unique within a line, so sorted comparison suffices
        let mut want = order.to_vec();
        want.sort();
        let mut have = self.lines[index].stations.clone();
        have.sort();
        if want != have {
            return Err(Error::Validation(
                "Reordered stations must match the line's current stations.".to_string(),
            ));
        }

        self.lines[index].stations = order.to_vec();
        Ok(())
    }

    /// Replace a line's station sequence wholesale.
    ///
    /// Unlike [`Self::reorder_line`] the new sequence may add or drop
    /// stations; only duplicates within the sequence are rejected.
    ///
    /// # Errors
    ///
    /// Rejects an unknown line and a sequence repeating an id.
    pub fn replace_line_stations(
        &mut self,
        line_id: &str,
        stations: Vec<StationId>,
    ) -> Result<(), Error> {
        let index = self
            .lines
            .iter()
            .position(|line| line.id == line_id)
            .ok_or_else(|| Error::NotFound("line", line_id.to_string()))?;

        if let Some(duplicate) = stations.iter().duplicates().next() {
            return Err(Error::Validation(format!(
                "Station {duplicate} appears more than once on line {line_id}."
            )));
        }

        self.lines[index].stations = stations;
        Ok(())
    }
}
