//! Directed weighted adjacency graph derived from the line topology

use hashbrown::HashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::definition::NetworkDefinition;
use super::types::StationId;

/// Travel time in minutes between two adjacent stations.
///
/// Hashes the lexically ordered id pair into the 2..=4 range, so the
/// value is symmetric in its arguments and stable across rebuilds.
pub fn station_pair_duration(a: &str, b: &str) -> u32 {
    let key = if a < b {
        format!("{a}|{b}")
    } else {
        format!("{b}|{a}")
    };
    let mut hash: i32 = 0;
    for byte in key.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(byte));
    }
    2 + hash.unsigned_abs() % 3
}

/// Display metadata for one line, addressed by its interned index
#[derive(Debug, Clone)]
pub struct LineMeta {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Edge payload: interned line index plus travel minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeInfo {
    pub line: usize,
    pub duration: u32,
}

/// One outgoing connection of a station, as seen by the search
#[derive(Debug, Clone, Copy)]
pub struct Connection {
    pub edge: EdgeIndex,
    pub to: NodeIndex,
    pub info: EdgeInfo,
}

/// The searchable network: one node per station, one directed edge per
/// line adjacency in each direction. Stations adjacent on two lines get
/// two parallel edge pairs, one per line.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    pub(crate) graph: DiGraph<StationId, EdgeInfo>,
    station_nodes: HashMap<StationId, NodeIndex>,
    lines: Vec<LineMeta>,
}

impl TransitGraph {
    pub fn build(definition: &NetworkDefinition) -> Self {
        let station_estimate: usize = definition
            .lines()
            .iter()
            .map(|line| line.stations.len())
            .sum();
        let edge_estimate = station_estimate * 2;

        let mut graph = DiGraph::with_capacity(station_estimate, edge_estimate);
        let mut station_nodes: HashMap<StationId, NodeIndex> =
            HashMap::with_capacity(station_estimate);
        let mut lines = Vec::with_capacity(definition.lines().len());

        for line in definition.lines() {
            let line_index = lines.len();
            lines.push(LineMeta {
                id: line.id.clone(),
                name: line.name.clone(),
                color: line.color.clone(),
            });

            for id in &line.stations {
                if !station_nodes.contains_key(id) {
                    let node = graph.add_node(id.clone());
                    station_nodes.insert(id.clone(), node);
                }
            }

            for pair in line.stations.windows(2) {
                let from = station_nodes[&pair[0]];
                let to = station_nodes[&pair[1]];
                let duration = station_pair_duration(&pair[0], &pair[1]);
                let info = EdgeInfo {
                    line: line_index,
                    duration,
                };
                graph.add_edge(from, to, info);
                graph.add_edge(to, from, info);
            }
        }

        Self {
            graph,
            station_nodes,
            lines,
        }
    }

    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.station_nodes.get(id).copied()
    }

    pub fn station_id(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    pub fn line_meta(&self, index: usize) -> &LineMeta {
        &self.lines[index]
    }

    pub fn lines(&self) -> &[LineMeta] {
        &self.lines
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing connections of a node, in an order that is stable for a
    /// given build
    pub(crate) fn connections(&self, node: NodeIndex) -> impl Iterator<Item = Connection> + '_ {
        self.graph.edges(node).map(|edge| Connection {
            edge: edge.id(),
            to: edge.target(),
            info: *edge.weight(),
        })
    }

    pub(crate) fn edge_info(&self, edge: EdgeIndex) -> EdgeInfo {
        self.graph[edge]
    }
}
