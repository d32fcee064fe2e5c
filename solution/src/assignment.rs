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

use std::fmt;

use im::OrdMap;
use itertools::Itertools;
use model::base_types::{NodeId, VehicleId};

/// Which vehicle serves which node of the tour.
/// Copy-on-write: every modification returns a new assignment sharing the unchanged parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleAssignment {
    vehicles: OrdMap<NodeId, VehicleId>,
}

impl VehicleAssignment {
    pub fn new() -> VehicleAssignment {
        VehicleAssignment {
            vehicles: OrdMap::new(),
        }
    }

    pub fn vehicle_of(&self, node: NodeId) -> Option<VehicleId> {
        self.vehicles.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// all (node, vehicle) pairs sorted by node.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, VehicleId)> + '_ {
        self.vehicles.iter().map(|(&n, &v)| (n, v))
    }

    /// nodes served by the given vehicle, sorted by node.
    pub fn nodes_of(&self, vehicle: VehicleId) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter(move |(_, v)| *v == vehicle).map(|(n, _)| n)
    }

    pub fn assign(&self, node: NodeId, vehicle: VehicleId) -> VehicleAssignment {
        VehicleAssignment {
            vehicles: self.vehicles.update(node, vehicle),
        }
    }

    /// Exchanges the vehicles of the two nodes. Nodes without vehicle stay unassigned.
    pub fn swap(&self, node1: NodeId, node2: NodeId) -> VehicleAssignment {
        let mut vehicles = self.vehicles.clone();
        match (self.vehicle_of(node1), self.vehicle_of(node2)) {
            (Some(v1), Some(v2)) => {
                vehicles.insert(node1, v2);
                vehicles.insert(node2, v1);
            }
            (Some(v1), None) => {
                vehicles.remove(&node1);
                vehicles.insert(node2, v1);
            }
            (None, Some(v2)) => {
                vehicles.insert(node1, v2);
                vehicles.remove(&node2);
            }
            (None, None) => {}
        }
        VehicleAssignment { vehicles }
    }
}

impl FromIterator<(NodeId, VehicleId)> for VehicleAssignment {
    fn from_iter<I: IntoIterator<Item = (NodeId, VehicleId)>>(iter: I) -> Self {
        VehicleAssignment {
            vehicles: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for VehicleAssignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter().map(|(n, v)| format!("{}: {}", n, v)).join(", ")
        )
    }
}
