//! The assembled network: source definition plus its derived views
//!
//! All edits funnel through here so the station directory and transit
//! graph are rebuilt before anything else can observe the change. A
//! search always runs against one consistent build.

use log::{debug, info};

use super::definition::{InsertPosition, Line, NetworkDefinition};
use super::directory::StationDirectory;
use super::graph::TransitGraph;
use super::seed;
use super::types::{LineId, Station, StationId};
use crate::Error;
use crate::routing::{Route, find_route_options};

#[derive(Debug, Clone)]
pub struct MetroNetwork {
    definition: NetworkDefinition,
    directory: StationDirectory,
    transit: TransitGraph,
    version: u64,
}

impl MetroNetwork {
    pub fn new(definition: NetworkDefinition) -> Self {
        let directory = StationDirectory::build(&definition);
        let transit = TransitGraph::build(&definition);
        debug!(
            "built network views: {} stations, {} edges",
            directory.len(),
            transit.edge_count()
        );
        Self {
            definition,
            directory,
            transit,
            version: 0,
        }
    }

    /// The bundled demo network
    pub fn seeded() -> Self {
        Self::new(seed::default_network())
    }

    fn rebuild(&mut self) {
        self.directory = StationDirectory::build(&self.definition);
        self.transit = TransitGraph::build(&self.definition);
        self.version += 1;
        debug!(
            "rebuilt network views (version {}): {} stations, {} edges",
            self.version,
            self.directory.len(),
            self.transit.edge_count()
        );
    }

    /// Bumped once per applied mutation; rejected edits leave it alone
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn lines(&self) -> &[Line] {
        self.definition.lines()
    }

    pub fn definition(&self) -> &NetworkDefinition {
        &self.definition
    }

    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.transit
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.directory.get(id)
    }

    pub fn search_stations(&self, query: &str) -> Vec<&Station> {
        self.directory.search(query)
    }

    pub fn find_routes(&self, source_id: &str, destination_id: &str) -> Vec<Route> {
        find_route_options(&self.transit, source_id, destination_id)
    }

    /// Splice a station into the targeted lines and rebuild.
    ///
    /// # Errors
    ///
    /// Passes through the validation errors of the underlying edit; the
    /// network is untouched when one fires.
    pub fn add_station(
        &mut self,
        id: &str,
        name: &str,
        insertions: &[(LineId, InsertPosition)],
    ) -> Result<(), Error> {
        self.definition.insert_station(id, name, insertions)?;
        self.rebuild();
        info!("added station {id} to {} line(s)", insertions.len());
        Ok(())
    }

    /// Drop a station from every line it is on and rebuild.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an id no line carries.
    pub fn remove_station(&mut self, id: &str) -> Result<(), Error> {
        if !self.directory.contains(id) {
            return Err(Error::NotFound("station", id.to_string()));
        }
        self.definition.remove_station(id);
        self.rebuild();
        info!("removed station {id}");
        Ok(())
    }

    /// Apply a drag-reorder of one line's stations and rebuild.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown line and a validation error when
    /// the new order is not a permutation of the current stations.
    pub fn reorder_line(&mut self, line_id: &str, order: &[StationId]) -> Result<(), Error> {
        self.definition.reorder_line(line_id, order)?;
        self.rebuild();
        info!("reordered line {line_id}");
        Ok(())
    }

    /// Replace one line's station sequence wholesale and rebuild.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown line and a validation error when
    /// the sequence repeats a station.
    pub fn replace_line_stations(
        &mut self,
        line_id: &str,
        stations: Vec<StationId>,
    ) -> Result<(), Error> {
        let count = stations.len();
        self.definition.replace_line_stations(line_id, stations)?;
        self.rebuild();
        info!("replaced stations of line {line_id} ({count} stations)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;

    use super::*;
    use crate::routing::RouteLabel;

    fn line(id: &str, stations: &[&str]) -> Line {
        Line {
            id: id.to_string(),
            name: format!("{id} line"),
            color: "#888888".to_string(),
            stations: stations.iter().map(ToString::to_string).collect(),
        }
    }

    fn single_line_network() -> MetroNetwork {
        MetroNetwork::new(NetworkDefinition::new(
            vec![line("y", &["s1", "s2", "s3"])],
            HashMap::new(),
        ))
    }

    fn two_line_network() -> MetroNetwork {
        MetroNetwork::new(NetworkDefinition::new(
            vec![line("y", &["s1", "s2", "s3"]), line("b", &["s4", "s2", "s5"])],
            HashMap::new(),
        ))
    }

    fn assert_interchange_invariant(network: &MetroNetwork) {
        for station in network.directory().iter() {
            assert_eq!(
                station.is_interchange,
                station.lines.len() > 1,
                "station {}",
                station.id
            );
        }
    }

    #[test]
    fn added_station_shows_up_in_routes() {
        let mut network = single_line_network();
        network
            .add_station(
                "new-stn",
                "New Stn",
                &[("y".to_string(), InsertPosition::After("s1".to_string()))],
            )
            .unwrap();

        assert_eq!(
            network.lines()[0].stations,
            vec!["s1", "new-stn", "s2", "s3"]
        );

        let routes = network.find_routes("s1", "s3");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].total_stops, 3);
        let stops: Vec<&str> = routes[0].segments[0]
            .stations
            .iter()
            .map(|stop| stop.station_id.as_str())
            .collect();
        assert_eq!(stops, vec!["s1", "new-stn", "s2", "s3"]);
    }

    #[test]
    fn added_station_is_searchable_and_positioned() {
        let mut network = single_line_network();
        network
            .add_station(
                "new-stn",
                "New Stn",
                &[("y".to_string(), InsertPosition::End)],
            )
            .unwrap();

        let station = network.station("new-stn").unwrap();
        assert_eq!(station.name, "New Stn");
        assert!(
            network
                .search_stations("new")
                .iter()
                .any(|s| s.id == "new-stn")
        );
    }

    #[test]
    fn removing_an_interchange_disconnects_the_fixture() {
        let mut network = two_line_network();
        assert!(!network.find_routes("s1", "s5").is_empty());

        network.remove_station("s2").unwrap();

        assert_eq!(network.lines()[0].stations, vec!["s1", "s3"]);
        assert_eq!(network.lines()[1].stations, vec!["s4", "s5"]);
        assert!(network.find_routes("s1", "s5").is_empty());
        assert!(network.station("s2").is_none());
    }

    #[test]
    fn removing_an_unknown_station_is_rejected() {
        let mut network = single_line_network();
        assert!(matches!(
            network.remove_station("ghost"),
            Err(Error::NotFound("station", _))
        ));
        assert_eq!(network.version(), 0);
    }

    #[test]
    fn interchange_flags_survive_mutations() {
        let mut network = two_line_network();
        assert_interchange_invariant(&network);

        // Adding s5 (currently only on b) to y makes it an interchange
        network
            .add_station("s5", "S5", &[("y".to_string(), InsertPosition::End)])
            .unwrap();
        assert!(network.station("s5").unwrap().is_interchange);
        assert_interchange_invariant(&network);

        network.remove_station("s2").unwrap();
        assert_interchange_invariant(&network);

        let order: Vec<String> = ["s3", "s1", "s5"].iter().map(ToString::to_string).collect();
        network.reorder_line("y", &order).unwrap();
        assert_interchange_invariant(&network);
    }

    #[test]
    fn version_counts_applied_edits_only() {
        let mut network = two_line_network();
        assert_eq!(network.version(), 0);

        network
            .add_station("n1", "N1", &[("y".to_string(), InsertPosition::End)])
            .unwrap();
        assert_eq!(network.version(), 1);

        // Rejected edit: no lines selected
        assert!(network.add_station("n2", "N2", &[]).is_err());
        assert_eq!(network.version(), 1);

        network.remove_station("n1").unwrap();
        assert_eq!(network.version(), 2);
    }

    #[test]
    fn reorder_changes_adjacency() {
        let mut network = single_line_network();
        let order: Vec<String> = ["s2", "s1", "s3"].iter().map(ToString::to_string).collect();
        network.reorder_line("y", &order).unwrap();

        // s1 now sits between s2 and s3
        let routes = network.find_routes("s2", "s3");
        assert_eq!(routes[0].total_stops, 2);
        let stops: Vec<&str> = routes[0].segments[0]
            .stations
            .iter()
            .map(|stop| stop.station_id.as_str())
            .collect();
        assert_eq!(stops, vec!["s2", "s1", "s3"]);
    }

    #[test]
    fn replace_can_extend_a_line() {
        let mut network = two_line_network();
        let stations: Vec<String> = ["s1", "s2", "s3", "s6"]
            .iter()
            .map(ToString::to_string)
            .collect();
        network.replace_line_stations("y", stations).unwrap();

        assert!(network.station("s6").is_some());
        let routes = network.find_routes("s6", "s5");
        assert!(!routes.is_empty());
        assert_eq!(routes[0].label, RouteLabel::Fastest);
    }

    #[test]
    fn seeded_network_is_fully_routable_from_the_hub() {
        let network = MetroNetwork::seeded();
        for line in network.lines() {
            // The green corridor shares no interchange with the rest of
            // the seed network.
            if line.id == "green" {
                continue;
            }
            let terminus = line.stations.last().unwrap();
            if terminus == "kashmere-gate" {
                continue;
            }
            assert!(
                !network.find_routes("kashmere-gate", terminus).is_empty(),
                "no route to {terminus}"
            );
        }
        assert!(
            network
                .find_routes("kashmere-gate", "brigadier-hoshiar-singh")
                .is_empty()
        );
    }
}
