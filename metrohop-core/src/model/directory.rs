//! Station records derived from the line topology
//!
//! The directory is a pure derivation: station names, line memberships,
//! interchange flags and facility tags all come from the definition, so
//! it is rebuilt from scratch after every edit.

use indexmap::IndexMap;
use itertools::Itertools;

use super::definition::NetworkDefinition;
use super::types::{Facility, LineStop, Station, StationId};
use crate::MAX_SEARCH_RESULTS;

/// Title-case the hyphen-separated words of a station id.
///
/// Display-only; ids are never re-derived from the result.
pub fn humanize_station_id(id: &str) -> String {
    id.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}

/// Deterministic facility tags for a station id.
///
/// Every station gets the accessibility and exits tags; parking and
/// elevator depend on a hash of the id's length and first byte.
pub fn station_facilities(id: &str) -> Vec<Facility> {
    let mut facilities = vec![Facility::Accessibility];
    let hash = id.len() + usize::from(id.bytes().next().unwrap_or(0));
    if hash % 3 == 0 {
        facilities.push(Facility::Parking);
    }
    if hash % 2 == 0 {
        facilities.push(Facility::Elevator);
    }
    facilities.push(Facility::Exits);
    facilities
}

/// Station id to record mapping, in first-encounter order over the lines
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: IndexMap<StationId, Station>,
}

impl StationDirectory {
    pub fn build(definition: &NetworkDefinition) -> Self {
        let mut stations: IndexMap<StationId, Station> = IndexMap::new();

        for line in definition.lines() {
            for (index, id) in line.stations.iter().enumerate() {
                let station = stations.entry(id.clone()).or_insert_with(|| Station {
                    id: id.clone(),
                    name: humanize_station_id(id),
                    lines: Vec::new(),
                    is_interchange: false,
                    facilities: station_facilities(id),
                    position: definition.position(id),
                });
                station.lines.push(LineStop {
                    line_id: line.id.clone(),
                    line_name: line.name.clone(),
                    line_color: line.color.clone(),
                    index_on_line: index,
                });
                station.is_interchange = station.lines.len() > 1;
            }
        }

        Self { stations }
    }

    pub fn get(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Case-insensitive substring match on station names, capped at
    /// [`MAX_SEARCH_RESULTS`]. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Station> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.stations
            .values()
            .filter(|station| station.name.to_lowercase().contains(&needle))
            .take(MAX_SEARCH_RESULTS)
            .collect()
    }

    pub fn interchanges(&self) -> impl Iterator<Item = &Station> {
        self.stations.values().filter(|station| station.is_interchange)
    }
}
