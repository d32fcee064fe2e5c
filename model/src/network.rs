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

pub mod nodes;
pub mod shortest_path;

use std::collections::{HashMap, HashSet};
use std::fmt;

use itertools::Itertools;
use nodes::Node;
use shortest_path::{RoadGraph, RoadPath};

use crate::base_types::{Demand, Duration, NodeId};
use crate::drone_times::DroneTimes;
use crate::error::{InstanceError, NetworkError};

/// Read-only oracle of travel times and demands used by the planner and the schedule builder.
pub trait TimeModel {
    fn road_time(&self, from: NodeId, to: NodeId) -> Result<Duration, NetworkError>;

    fn drone_time(&self, from: NodeId, to: NodeId) -> Result<Duration, NetworkError>;

    fn demand(&self, node: NodeId) -> Result<Demand, NetworkError>;
}

/// Undirected road graph with exactly one deposit.
/// Road times between the deposit and the demand nodes are precomputed.
pub struct Network {
    nodes: HashMap<NodeId, Node>,
    roads: RoadGraph,
    deposit: NodeId,
    demand_nodes: Vec<NodeId>, // sorted by id
    drone_times: DroneTimes,

    road_times: HashMap<NodeId, HashMap<NodeId, Duration>>,
}

// static functions
impl Network {
    pub fn new(
        nodes: Vec<Node>,
        roads: Vec<(NodeId, NodeId, Duration)>,
        drone_times: DroneTimes,
    ) -> Result<Network, InstanceError> {
        let deposits: Vec<NodeId> = nodes
            .iter()
            .filter(|n| n.is_deposit())
            .map(|n| n.id())
            .collect();
        if deposits.len() != 1 {
            return Err(InstanceError::Inconsistent(format!(
                "exactly one deposit expected, found {}",
                deposits.len()
            )));
        }
        let deposit = deposits[0];

        let mut node_map: HashMap<NodeId, Node> = HashMap::new();
        for node in nodes.into_iter() {
            let id = node.id();
            if node_map.insert(id, node).is_some() {
                return Err(InstanceError::Inconsistent(format!(
                    "node {} is defined twice",
                    id
                )));
            }
        }

        for (from, to, _) in roads.iter() {
            for endpoint in [from, to] {
                if !node_map.contains_key(endpoint) {
                    return Err(InstanceError::Inconsistent(format!(
                        "road {}-{} uses unknown node {}",
                        from, to, endpoint
                    )));
                }
            }
        }
        let road_graph = RoadGraph::new(node_map.keys().copied(), roads.into_iter());

        let demand_nodes: Vec<NodeId> = node_map
            .values()
            .filter(|n| n.is_demand_node() && !n.is_deposit())
            .map(|n| n.id())
            .sorted()
            .collect();

        let road_times = std::iter::once(deposit)
            .chain(demand_nodes.iter().copied())
            .map(|source| (source, road_graph.distances_from(source)))
            .collect();

        Ok(Network {
            nodes: node_map,
            roads: road_graph,
            deposit,
            demand_nodes,
            drone_times,
            road_times,
        })
    }
}

// methods
impl Network {
    pub fn node(&self, id: NodeId) -> Result<&Node, NetworkError> {
        self.nodes.get(&id).ok_or(NetworkError::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// number of nodes in the road graph.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_roads(&self) -> usize {
        self.roads.number_of_roads()
    }

    pub fn deposit(&self) -> NodeId {
        self.deposit
    }

    pub fn is_deposit(&self, id: NodeId) -> bool {
        id == self.deposit
    }

    /// nodes with positive demand (the deposit excluded), sorted by id.
    pub fn demand_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.demand_nodes.iter().copied()
    }

    pub fn number_of_demand_nodes(&self) -> usize {
        self.demand_nodes.len()
    }

    pub fn total_demand(&self) -> Demand {
        self.nodes.values().map(|n| n.demand()).sum()
    }

    pub fn is_super_node(&self, id: NodeId) -> bool {
        self.nodes.get(&id).map(|n| n.is_super_node()).unwrap_or(false)
    }

    /// neighbors of a node together with the road travel time, sorted by neighbor id.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Duration)> + '_ {
        self.roads.neighbors(id).into_iter()
    }

    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> Result<RoadPath, NetworkError> {
        self.shortest_path_avoiding(from, to, &HashSet::new())
    }

    /// Shortest road path that does not pass through any excluded node.
    /// The endpoints themselves are never excluded.
    pub fn shortest_path_avoiding(
        &self,
        from: NodeId,
        to: NodeId,
        excluded: &HashSet<NodeId>,
    ) -> Result<RoadPath, NetworkError> {
        self.node(from)?;
        self.node(to)?;
        let excluded: HashSet<NodeId> = excluded
            .iter()
            .copied()
            .filter(|&n| n != from && n != to)
            .collect();
        self.roads
            .find_path(from, to, &excluded)
            .ok_or(NetworkError::NoPath { from, to })
    }
}

impl TimeModel for Network {
    fn road_time(&self, from: NodeId, to: NodeId) -> Result<Duration, NetworkError> {
        if let Some(distances) = self.road_times.get(&from) {
            self.node(to)?;
            return distances
                .get(&to)
                .copied()
                .ok_or(NetworkError::NoPath { from, to });
        }
        Ok(self.shortest_path(from, to)?.total_duration())
    }

    fn drone_time(&self, from: NodeId, to: NodeId) -> Result<Duration, NetworkError> {
        self.drone_times.travel_time(self.node(from)?, self.node(to)?)
    }

    fn demand(&self, node: NodeId) -> Result<Demand, NetworkError> {
        Ok(self.node(node)?.demand())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Network with {} nodes and {} roads (deposit: {})",
            self.size(),
            self.number_of_roads(),
            self.deposit
        )?;
        for id in self.demand_nodes.iter() {
            writeln!(f, "  {}", self.nodes[id])?;
        }
        Ok(())
    }
}
