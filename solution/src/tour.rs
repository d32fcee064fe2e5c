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

#[cfg(test)]
#[path = "tour/tests.rs"]
mod tests;

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use model::base_types::NodeId;
use model::network::Network;

use crate::error::TourError;

pub type Position = usize; // the position within the tour from 0 to len()-1

/// The visiting order of the demand nodes. The following holds at all times:
///
/// The tour starts and ends at the deposit.
/// Every demand node of the network appears exactly once.
/// Apart from the demand nodes only the deposit may appear (a revisit of the deposit is allowed
/// here, the feasibility check decides whether it is accepted).
///
/// It is an immutable object, shared between all schedules built from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    nodes: Vec<NodeId>,
}

// static functions
impl Tour {
    pub fn new(nodes: Vec<NodeId>, network: &Network) -> Result<Tour, TourError> {
        if nodes.len() < 2 {
            return Err(TourError::TooShort(nodes.len()));
        }
        let deposit = network.deposit();
        if nodes[0] != deposit {
            return Err(TourError::NotStartingAtDeposit(nodes[0]));
        }
        if nodes[nodes.len() - 1] != deposit {
            return Err(TourError::NotEndingAtDeposit(nodes[nodes.len() - 1]));
        }

        let mut visited: HashSet<NodeId> = HashSet::new();
        for &node in nodes.iter().filter(|&&n| n != deposit) {
            let demand = network
                .node(node)
                .map_err(|_| TourError::UnknownNode(node))?
                .demand();
            if demand == 0 {
                return Err(TourError::NotADemandNode(node));
            }
            if !visited.insert(node) {
                return Err(TourError::DuplicateNode(node));
            }
        }
        if let Some(missing) = network.demand_nodes().find(|n| !visited.contains(n)) {
            return Err(TourError::MissingNode(missing));
        }

        Ok(Tour { nodes })
    }
}

// methods
impl Tour {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn all_nodes_iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn nth_node(&self, pos: Position) -> Option<NodeId> {
        self.nodes.get(pos).copied()
    }

    pub fn first_node(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn last_node(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// position of the first occurrence of the node.
    pub fn position_of(&self, node: NodeId) -> Option<Position> {
        self.nodes.iter().position(|&n| n == node)
    }

    pub fn is_last_position(&self, pos: Position) -> bool {
        pos + 1 == self.nodes.len()
    }

    /// pairs of consecutive nodes together with the position of the first one.
    pub fn consecutive_pairs(&self) -> impl Iterator<Item = (Position, NodeId, NodeId)> + '_ {
        self.nodes
            .iter()
            .copied()
            .tuple_windows()
            .enumerate()
            .map(|(pos, (n1, n2))| (pos, n1, n2))
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.nodes.iter().map(|n| n.to_string()).join(" -> "))
    }
}
