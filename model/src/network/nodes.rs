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

use crate::base_types::{Coordinates, Demand, NodeId};

/// A node of the road network. Demand is 0 for transit-only nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    coordinates: Coordinates,
    demand: Demand,
    is_deposit: bool,
}

// static functions
impl Node {
    pub fn new(id: NodeId, coordinates: Coordinates, demand: Demand, is_deposit: bool) -> Node {
        Node {
            id,
            coordinates,
            demand,
            is_deposit,
        }
    }
}

// methods
impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn demand(&self) -> Demand {
        self.demand
    }

    pub fn is_deposit(&self) -> bool {
        self.is_deposit
    }

    pub fn is_demand_node(&self) -> bool {
        self.demand > 0
    }

    /// A drone carries exactly one unit, so nodes with more demand must be served by the truck.
    pub fn is_super_node(&self) -> bool {
        self.demand > 1
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_deposit {
            write!(f, "{} (deposit)", self.id)
        } else if self.demand > 0 {
            write!(f, "{} (demand: {})", self.id, self.demand)
        } else {
            write!(f, "{}", self.id)
        }
    }
}
