//! Route options: diversity search, segment assembly, ranking and labels

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::dijkstra::{SearchPath, shortest_path};
use super::fare::calculate_fare;
use crate::model::TransitGraph;
use crate::{MAX_ROUTE_OPTIONS, TRANSFER_BUFFER};

/// How a route stands out among the returned options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteLabel {
    Fastest,
    #[serde(rename = "Fewest Transfers")]
    FewestTransfers,
    #[serde(rename = "Fewest Stops")]
    FewestStops,
    Alternative,
}

/// One stop within a segment, with the minutes from the previous stop.
///
/// The first stop of every segment carries duration 0; at a transfer it
/// repeats the station the previous segment ended on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStop {
    pub station_id: String,
    pub duration: u32,
}

/// A maximal run of the journey on a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub line: String,
    pub line_name: String,
    pub line_color: String,
    pub stations: Vec<SegmentStop>,
    pub duration: u32,
}

/// A complete journey option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub segments: Vec<Segment>,
    pub total_stops: usize,
    pub total_duration: u32,
    pub transfers: usize,
    pub fare: u32,
    pub label: RouteLabel,
}

impl Route {
    fn line_sequence(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|segment| segment.line.as_str())
    }
}

/// Up to three distinct labeled routes between two stations, fastest
/// first.
///
/// Returns an empty list when the endpoints are equal, either id is
/// unknown, or no path exists.
pub fn find_route_options(
    transit: &TransitGraph,
    source_id: &str,
    destination_id: &str,
) -> Vec<Route> {
    if source_id == destination_id {
        return Vec::new();
    }
    let (Some(source), Some(destination)) =
        (transit.node(source_id), transit.node(destination_id))
    else {
        return Vec::new();
    };

    let mut routes: Vec<Route> = Vec::new();
    let mut excluded = FixedBitSet::with_capacity(transit.edge_count());

    for _ in 0..MAX_ROUTE_OPTIONS {
        let Some(path) = shortest_path(transit, source, destination, &excluded) else {
            break;
        };
        let route = assemble_route(transit, &path);

        // Two routes with the same line sequence are the same option
        let is_duplicate = routes
            .iter()
            .any(|accepted| accepted.line_sequence().eq(route.line_sequence()));
        if !is_duplicate {
            routes.push(route);
        }

        // Block the interior of this path, duplicate or not, so the next
        // search is pushed onto different track while the endpoints stay
        // reachable
        let interior = path.hops.len().saturating_sub(2);
        for hop in path.hops.iter().skip(1).take(interior) {
            excluded.insert(hop.index());
        }
    }

    rank_and_label(&mut routes);
    routes
}

/// Fold a raw search path into line segments and route totals
fn assemble_route(transit: &TransitGraph, path: &SearchPath) -> Route {
    let mut segments: Vec<Segment> = Vec::new();

    for (line_index, hops) in &path
        .hops
        .iter()
        .copied()
        .enumerate()
        .chunk_by(|(_, hop)| transit.edge_info(*hop).line)
    {
        let meta = transit.line_meta(line_index);
        let mut stations: Vec<SegmentStop> = Vec::new();
        let mut duration = 0;

        for (step, hop) in hops {
            if stations.is_empty() {
                stations.push(SegmentStop {
                    station_id: transit.station_id(path.stations[step]).to_string(),
                    duration: 0,
                });
            }
            let hop_duration = transit.edge_info(hop).duration;
            stations.push(SegmentStop {
                station_id: transit.station_id(path.stations[step + 1]).to_string(),
                duration: hop_duration,
            });
            duration += hop_duration;
        }

        segments.push(Segment {
            line: meta.id.clone(),
            line_name: meta.name.clone(),
            line_color: meta.color.clone(),
            stations,
            duration,
        });
    }

    let total_stops = path.stations.len() - 1;
    let transfers = segments.len().saturating_sub(1);
    let line_total: u32 = segments.iter().map(|segment| segment.duration).sum();
    // A flat per-transfer buffer for the rider-facing estimate, distinct
    // from the search-time penalty
    let total_duration = line_total + TRANSFER_BUFFER * transfers as u32;

    Route {
        segments,
        total_stops,
        total_duration,
        transfers,
        fare: calculate_fare(total_stops),
        label: RouteLabel::Alternative,
    }
}

/// Sort routes by duration then transfers and hand out one label each,
/// first match wins: Fastest, Fewest Transfers, Fewest Stops,
/// Alternative.
fn rank_and_label(routes: &mut [Route]) {
    if routes.is_empty() {
        return;
    }
    routes.sort_by_key(|route| (route.total_duration, route.transfers));

    let mut labels: Vec<Option<RouteLabel>> = vec![None; routes.len()];
    labels[0] = Some(RouteLabel::Fastest);

    if routes.len() > 1 {
        if let Some(index) = routes.iter().position_min_by_key(|route| route.transfers) {
            if labels[index].is_none() {
                labels[index] = Some(RouteLabel::FewestTransfers);
            }
        }
        if let Some(index) = routes.iter().position_min_by_key(|route| route.total_stops) {
            if labels[index].is_none() {
                labels[index] = Some(RouteLabel::FewestStops);
            }
        }
    }

    for (route, label) in routes.iter_mut().zip(labels) {
        route.label = label.unwrap_or(RouteLabel::Alternative);
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;

    use super::*;
    use crate::model::definition::{Line, NetworkDefinition};
    use crate::model::seed::default_network;

    fn graph_of(lines: &[(&str, &[&str])]) -> TransitGraph {
        let lines = lines
            .iter()
            .map(|(id, stations)| Line {
                id: (*id).to_string(),
                name: format!("{id} line"),
                color: "#888888".to_string(),
                stations: stations.iter().map(ToString::to_string).collect(),
            })
            .collect();
        TransitGraph::build(&NetworkDefinition::new(lines, HashMap::new()))
    }

    fn stop_ids(segment: &Segment) -> Vec<&str> {
        segment
            .stations
            .iter()
            .map(|stop| stop.station_id.as_str())
            .collect()
    }

    fn line_ids(route: &Route) -> Vec<&str> {
        route.line_sequence().collect()
    }

    #[test]
    fn single_line_journey_is_one_segment() {
        let transit = graph_of(&[("y", &["s1", "s2", "s3"])]);
        let routes = find_route_options(&transit, "s1", "s3");

        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.total_stops, 2);
        assert_eq!(route.transfers, 0);
        assert_eq!(route.fare, 10);
        assert_eq!(route.label, RouteLabel::Fastest);
        assert_eq!(route.segments.len(), 1);

        let segment = &route.segments[0];
        assert_eq!(segment.line, "y");
        assert_eq!(stop_ids(segment), vec!["s1", "s2", "s3"]);
        assert_eq!(segment.stations[0].duration, 0);
        // s1-s2 hashes to 2 minutes, s2-s3 to 4
        assert_eq!(segment.duration, 6);
        assert_eq!(route.total_duration, 6);
    }

    #[test]
    fn transfer_splits_the_journey_into_segments() {
        let transit = graph_of(&[("y", &["s1", "s2", "s3"]), ("b", &["s4", "s2", "s5"])]);
        let routes = find_route_options(&transit, "s1", "s5");

        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.transfers, 1);
        assert_eq!(route.segments.len(), 2);
        assert_eq!(line_ids(route), vec!["y", "b"]);

        // The interchange station closes one segment and opens the next
        assert_eq!(stop_ids(&route.segments[0]), vec!["s1", "s2"]);
        assert_eq!(stop_ids(&route.segments[1]), vec!["s2", "s5"]);
        assert_eq!(route.segments[1].stations[0].duration, 0);

        // Line minutes 2 + 3, plus one transfer buffer
        assert_eq!(route.total_duration, 8);
        assert_eq!(route.total_stops, 2);
        assert_eq!(route.fare, 10);
    }

    #[test]
    fn diversity_search_returns_the_detour_too() {
        // Two ways from a to d: change at b (9 min displayed) or ride
        // l3 around (10 min). The search-time transfer penalty makes the
        // detour cheaper for the first search.
        let transit = graph_of(&[
            ("l1", &["a", "b"]),
            ("l2", &["b", "d"]),
            ("l3", &["a", "x", "y", "d"]),
        ]);
        let routes = find_route_options(&transit, "a", "d");

        assert_eq!(routes.len(), 2);

        assert_eq!(routes[0].label, RouteLabel::Fastest);
        assert_eq!(line_ids(&routes[0]), vec!["l1", "l2"]);
        assert_eq!(routes[0].total_duration, 9);
        assert_eq!(routes[0].transfers, 1);
        assert_eq!(routes[0].total_stops, 2);
        assert_eq!(routes[0].fare, 10);

        assert_eq!(routes[1].label, RouteLabel::FewestTransfers);
        assert_eq!(line_ids(&routes[1]), vec!["l3"]);
        assert_eq!(routes[1].total_duration, 10);
        assert_eq!(routes[1].transfers, 0);
        assert_eq!(routes[1].total_stops, 3);
        assert_eq!(routes[1].fare, 20);
        assert_eq!(stop_ids(&routes[1].segments[0]), vec!["a", "x", "y", "d"]);
    }

    #[test]
    fn same_station_and_unknown_ids_return_nothing() {
        let transit = graph_of(&[("y", &["s1", "s2"])]);
        assert!(find_route_options(&transit, "s1", "s1").is_empty());
        assert!(find_route_options(&transit, "s1", "ghost").is_empty());
        assert!(find_route_options(&transit, "ghost", "s1").is_empty());
    }

    #[test]
    fn disconnected_network_returns_nothing() {
        let transit = graph_of(&[("l1", &["a", "b"]), ("l2", &["c", "d"])]);
        assert!(find_route_options(&transit, "a", "c").is_empty());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let transit = TransitGraph::build(&default_network());
        let first = find_route_options(&transit, "samaypur-badli", "dwarka");
        let second = find_route_options(&transit, "samaypur-badli", "dwarka");
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn seed_routes_hold_the_ordering_contract() {
        let transit = TransitGraph::build(&default_network());
        let pairs = [
            ("samaypur-badli", "dwarka"),
            ("rithala", "botanical-garden"),
            ("kashmere-gate", "huda-city-centre"),
        ];

        for (from, to) in pairs {
            let routes = find_route_options(&transit, from, to);
            assert!(!routes.is_empty(), "{from} -> {to}");
            assert!(routes.len() <= MAX_ROUTE_OPTIONS);
            assert_eq!(routes[0].label, RouteLabel::Fastest);

            for window in routes.windows(2) {
                let earlier = (window[0].total_duration, window[0].transfers);
                let later = (window[1].total_duration, window[1].transfers);
                assert!(earlier <= later, "{from} -> {to} out of order");
            }

            for pair in routes.iter().tuple_combinations::<(_, _)>() {
                assert!(
                    !pair.0.line_sequence().eq(pair.1.line_sequence()),
                    "{from} -> {to} returned duplicate line sequences"
                );
            }

            for route in &routes {
                let first_segment = route.segments.first().unwrap();
                let last_segment = route.segments.last().unwrap();
                assert_eq!(first_segment.stations.first().unwrap().station_id, from);
                assert_eq!(last_segment.stations.last().unwrap().station_id, to);
            }
        }
    }

    mod labeling {
        use super::*;

        fn route(line: &str, duration: u32, transfers: usize, stops: usize) -> Route {
            let segments = (0..=transfers)
                .map(|index| Segment {
                    line: format!("{line}{index}"),
                    line_name: String::new(),
                    line_color: String::new(),
                    stations: Vec::new(),
                    duration: 0,
                })
                .collect();
            Route {
                segments,
                total_stops: stops,
                total_duration: duration,
                transfers,
                fare: calculate_fare(stops),
                label: RouteLabel::Alternative,
            }
        }

        fn labels_of(routes: &[Route]) -> Vec<RouteLabel> {
            routes.iter().map(|route| route.label).collect()
        }

        #[test]
        fn sorts_by_duration_then_transfers() {
            let mut routes = vec![route("a", 10, 2, 4), route("b", 9, 1, 4), route("c", 10, 1, 4)];
            rank_and_label(&mut routes);
            let order: Vec<(u32, usize)> = routes
                .iter()
                .map(|route| (route.total_duration, route.transfers))
                .collect();
            assert_eq!(order, vec![(9, 1), (10, 1), (10, 2)]);
        }

        #[test]
        fn lone_route_is_simply_fastest() {
            let mut routes = vec![route("a", 12, 1, 6)];
            rank_and_label(&mut routes);
            assert_eq!(labels_of(&routes), vec![RouteLabel::Fastest]);
        }

        #[test]
        fn fewest_stops_goes_to_the_shortest_remaining_route() {
            // Transfers tie everywhere, so no Fewest Transfers label; the
            // middle route wins on stops
            let mut routes = vec![route("a", 10, 1, 5), route("b", 12, 1, 3), route("c", 15, 1, 8)];
            rank_and_label(&mut routes);
            assert_eq!(
                labels_of(&routes),
                vec![
                    RouteLabel::Fastest,
                    RouteLabel::FewestStops,
                    RouteLabel::Alternative
                ]
            );
        }

        #[test]
        fn one_route_never_gets_two_labels() {
            // The second route has both the fewest transfers and the
            // fewest stops; it keeps the transfers label and nobody gets
            // the stops one
            let mut routes = vec![route("a", 10, 2, 5), route("b", 12, 1, 3), route("c", 15, 2, 8)];
            rank_and_label(&mut routes);
            assert_eq!(
                labels_of(&routes),
                vec![
                    RouteLabel::Fastest,
                    RouteLabel::FewestTransfers,
                    RouteLabel::Alternative
                ]
            );
        }

        #[test]
        fn ties_on_a_metric_resolve_to_the_earlier_route() {
            // Both alternatives tie on transfers; the earlier one takes
            // the label
            let mut routes = vec![route("a", 10, 2, 5), route("b", 12, 1, 6), route("c", 15, 1, 4)];
            rank_and_label(&mut routes);
            assert_eq!(
                labels_of(&routes),
                vec![
                    RouteLabel::Fastest,
                    RouteLabel::FewestTransfers,
                    RouteLabel::FewestStops
                ]
            );
        }

        #[test]
        fn label_serialization_uses_display_names() {
            let json = serde_json::to_string(&RouteLabel::FewestTransfers).unwrap();
            assert_eq!(json, "\"Fewest Transfers\"");
            let json = serde_json::to_string(&RouteLabel::Fastest).unwrap();
            assert_eq!(json, "\"Fastest\"");
        }
    }
}
