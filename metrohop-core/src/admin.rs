//! Admin-facing projection of the network
//!
//! The line editor works with stations expanded to `{id, name,
//! isInterchange}` records instead of bare ids. Both directions of the
//! mapping live here so the canonical model never carries a second
//! representation.

use serde::{Deserialize, Serialize};

use crate::model::{LineId, MetroNetwork, StationId};

/// A station as shown in the admin line editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStation {
    pub id: StationId,
    pub name: String,
    pub is_interchange: bool,
}

/// A line with its stations expanded for the admin panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLine {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<AdminStation>,
}

/// Expand every line into its admin representation.
///
/// A station id without a directory record falls back to the id as its
/// name and a cleared interchange flag.
pub fn project_lines(network: &MetroNetwork) -> Vec<AdminLine> {
    network
        .lines()
        .iter()
        .map(|line| AdminLine {
            id: line.id.clone(),
            name: line.name.clone(),
            color: line.color.clone(),
            stations: line
                .stations
                .iter()
                .map(|id| match network.station(id) {
                    Some(station) => AdminStation {
                        id: id.clone(),
                        name: station.name.clone(),
                        is_interchange: station.is_interchange,
                    },
                    None => AdminStation {
                        id: id.clone(),
                        name: id.clone(),
                        is_interchange: false,
                    },
                })
                .collect(),
        })
        .collect()
}

/// Collapse an admin station list back into the id sequence the model
/// stores
pub fn station_order(stations: &[AdminStation]) -> Vec<StationId> {
    stations.iter().map(|station| station.id.clone()).collect()
}
