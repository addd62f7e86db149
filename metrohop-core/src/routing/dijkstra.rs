//! Weighted shortest-path search with line-transfer penalties
//!
//! The search runs over `(station, line)` states rather than bare
//! stations: the cost of a hop depends on whether it stays on the line
//! the state arrived on. `line` is `None` only for the synthetic start
//! state, which never charges a transfer.

use std::{cmp::Ordering, collections::BinaryHeap};

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::TRANSFER_PENALTY;
use crate::model::TransitGraph;

/// A station reached on a particular line
type LineState = (NodeIndex, Option<usize>);

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u32,
    seq: u64,
    node: NodeIndex,
    line: Option<usize>,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // earlier discoveries first among equal costs
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A found path: the stations visited in order and the hops between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchPath {
    pub stations: Vec<NodeIndex>,
    pub hops: Vec<EdgeIndex>,
    pub cost: u32,
}

/// Cheapest path from `source` to `destination`, if one exists.
///
/// Hops whose edge index is set in `excluded` are treated as absent.
/// Terminates on the first pop of the destination station regardless of
/// the line it was reached on.
pub(crate) fn shortest_path(
    transit: &TransitGraph,
    source: NodeIndex,
    destination: NodeIndex,
    excluded: &FixedBitSet,
) -> Option<SearchPath> {
    let mut distances: HashMap<LineState, u32> = HashMap::new();
    let mut predecessors: HashMap<LineState, (LineState, EdgeIndex)> = HashMap::new();
    let mut heap = BinaryHeap::new();
    let mut seq: u64 = 0;

    distances.insert((source, None), 0);
    heap.push(State {
        cost: 0,
        seq,
        node: source,
        line: None,
    });

    while let Some(State { cost, node, line, .. }) = heap.pop() {
        let state = (node, line);

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&state) {
            if cost > best {
                continue;
            }
        }

        if node == destination {
            return Some(reconstruct(state, cost, &predecessors));
        }

        for connection in transit.connections(node) {
            if excluded.contains(connection.edge.index()) {
                continue;
            }

            let transfer = match line {
                Some(current) if current != connection.info.line => TRANSFER_PENALTY,
                _ => 0,
            };
            let next_cost = cost + connection.info.duration + transfer;
            let next_state = (connection.to, Some(connection.info.line));

            // Add or update distance if better using Entry API
            match distances.entry(next_state) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next_state, (state, connection.edge));
                    seq += 1;
                    heap.push(State {
                        cost: next_cost,
                        seq,
                        node: connection.to,
                        line: next_state.1,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next_state, (state, connection.edge));
                        seq += 1;
                        heap.push(State {
                            cost: next_cost,
                            seq,
                            node: connection.to,
                            line: next_state.1,
                        });
                    }
                }
            }
        }
    }

    None
}

fn reconstruct(
    terminal: LineState,
    cost: u32,
    predecessors: &HashMap<LineState, (LineState, EdgeIndex)>,
) -> SearchPath {
    let mut stations = Vec::new();
    let mut hops = Vec::new();

    let mut current = terminal;
    while let Some(&(previous, edge)) = predecessors.get(&current) {
        stations.push(current.0);
        hops.push(edge);
        current = previous;
    }
    stations.push(current.0);
    stations.reverse();
    hops.reverse();

    SearchPath {
        stations,
        hops,
        cost,
    }
}
