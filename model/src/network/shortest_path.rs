// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::collections::{HashMap, HashSet};
use std::fmt;

use itertools::Itertools;
use rs_graph::adjacencies::{Adjacencies, Neighbors};
use rs_graph::linkedlistgraph::{Edge as RsEdge, Node as RsNode};
use rs_graph::shortestpath::dijkstra;
use rs_graph::traits::{FiniteGraph, Undirected};
use rs_graph::{Buildable, Builder, LinkedListGraph};
use time::duration::Milliseconds;

use crate::base_types::{Duration, NodeId};

/// A road path given as node sequence together with the travel time of each edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadPath {
    nodes: Vec<NodeId>,
    edge_durations: Vec<Duration>,
}

impl RoadPath {
    pub(crate) fn new(nodes: Vec<NodeId>, edge_durations: Vec<Duration>) -> RoadPath {
        debug_assert_eq!(nodes.len(), edge_durations.len() + 1);
        RoadPath {
            nodes,
            edge_durations,
        }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn first(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn last(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn number_of_edges(&self) -> usize {
        self.edge_durations.len()
    }

    /// (from, to, travel_time) for each edge of the path
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Duration)> + '_ {
        self.nodes
            .iter()
            .tuple_windows()
            .zip(self.edge_durations.iter())
            .map(|((&from, &to), &duration)| (from, to, duration))
    }

    pub fn total_duration(&self) -> Duration {
        self.edge_durations.iter().copied().sum()
    }
}

impl fmt::Display for RoadPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.nodes.iter().map(|n| n.to_string()).join("-"),
            self.total_duration()
        )
    }
}

/// Undirected road graph on top of rs-graph. Nodes are added in id order and roads in
/// (from, to) order, so searches on equal inputs settle nodes in the same order.
pub(crate) struct RoadGraph {
    graph: LinkedListGraph<u32>,
    rs_nodes: HashMap<NodeId, RsNode>,
    node_ids: HashMap<RsNode, NodeId>,
    travel_times: HashMap<RsEdge, Milliseconds>,
}

impl RoadGraph {
    /// node_ids must be distinct. Self loops and roads of infinite duration are skipped,
    /// parallel roads are collapsed to the fastest one.
    pub(crate) fn new(
        node_ids: impl Iterator<Item = NodeId>,
        roads: impl Iterator<Item = (NodeId, NodeId, Duration)>,
    ) -> RoadGraph {
        let mut builder = LinkedListGraph::<u32>::new_builder();

        let mut rs_nodes: HashMap<NodeId, RsNode> = HashMap::new();
        let mut node_ids_of_graph: HashMap<RsNode, NodeId> = HashMap::new();
        for id in node_ids.sorted() {
            let rs_node = builder.add_node();
            rs_nodes.insert(id, rs_node);
            node_ids_of_graph.insert(rs_node, id);
        }

        let mut fastest: HashMap<(NodeId, NodeId), Milliseconds> = HashMap::new();
        for (from, to, duration) in roads {
            let Duration::Length(ms) = duration else {
                continue;
            };
            if from == to {
                continue;
            }
            fastest
                .entry((from.min(to), from.max(to)))
                .and_modify(|d| *d = (*d).min(ms))
                .or_insert(ms);
        }

        let mut travel_times: HashMap<RsEdge, Milliseconds> = HashMap::new();
        for ((from, to), ms) in fastest.into_iter().sorted() {
            if let (Some(&u), Some(&v)) = (rs_nodes.get(&from), rs_nodes.get(&to)) {
                travel_times.insert(builder.add_edge(u, v), ms);
            }
        }

        RoadGraph {
            graph: builder.into_graph(),
            rs_nodes,
            node_ids: node_ids_of_graph,
            travel_times,
        }
    }

    pub(crate) fn number_of_roads(&self) -> usize {
        self.travel_times.len()
    }

    fn travel_time(&self, edge: RsEdge) -> Milliseconds {
        self.travel_times[&edge]
    }

    /// neighbors together with the travel time of the connecting road, sorted by id.
    pub(crate) fn neighbors(&self, id: NodeId) -> Vec<(NodeId, Duration)> {
        let Some(&rs_node) = self.rs_nodes.get(&id) else {
            return Vec::new();
        };
        self.graph
            .neighs(rs_node)
            .map(|(edge, neighbor)| {
                (
                    self.node_ids[&neighbor],
                    Duration::from_millis(self.travel_time(edge)),
                )
            })
            .sorted()
            .collect()
    }

    /// Road time from source to every reachable node (source included).
    pub(crate) fn distances_from(&self, source: NodeId) -> HashMap<NodeId, Duration> {
        let mut distances: HashMap<NodeId, Duration> = HashMap::new();
        let Some(&src) = self.rs_nodes.get(&source) else {
            return distances;
        };
        distances.insert(source, Duration::ZERO);
        for (node, _, ms) in dijkstra::start_undirected(&self.graph, src, |e| self.travel_time(e)) {
            distances.insert(self.node_ids[&node], Duration::from_millis(ms));
        }
        distances
    }

    /// Dijkstra from source to target that never enters a node of excluded (the source
    /// itself is always allowed). None if target cannot be reached.
    pub(crate) fn find_path(
        &self,
        source: NodeId,
        target: NodeId,
        excluded: &HashSet<NodeId>,
    ) -> Option<RoadPath> {
        let src = *self.rs_nodes.get(&source)?;
        let snk = *self.rs_nodes.get(&target)?;
        if src == snk {
            return Some(RoadPath::new(vec![source], vec![]));
        }

        let blocked: HashSet<RsNode> = excluded
            .iter()
            .filter_map(|id| self.rs_nodes.get(id).copied())
            .collect();
        let open_roads =
            Neighbors(&self.graph).filter(|(_, v): &(RsEdge, RsNode)| !blocked.contains(v));

        let mut incoming: HashMap<RsNode, RsEdge> = HashMap::new();
        for (node, edge, _) in dijkstra::start(open_roads, src, |e| self.travel_time(e)) {
            incoming.insert(node, edge);
            if node == snk {
                break;
            }
        }

        let mut nodes = vec![target];
        let mut edge_durations = Vec::new();
        let mut current = snk;
        while current != src {
            let edge = *incoming.get(&current)?;
            let (u, v) = self.graph.enodes(edge);
            current = if u == current { v } else { u };
            nodes.push(self.node_ids[&current]);
            edge_durations.push(Duration::from_millis(self.travel_time(edge)));
        }
        nodes.reverse();
        edge_durations.reverse();
        Some(RoadPath::new(nodes, edge_durations))
    }
}
