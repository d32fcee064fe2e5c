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

use std::sync::Arc;

use itertools::Itertools;
use model::base_types::{DroneIdx, VehicleId, Verbosity};
use model::network::Network;
use solution::{Tour, VehicleAssignment};
use tracing::info;

/// Splits the tour into truck anchors and drone targets.
///
/// The deposit and every super node are served by the truck. The remaining demand nodes are
/// dealt round-robin to drone_1, ..., drone_K; the node after drone_K goes to the truck and the
/// round starts again at drone_1. A truck node always restarts the round, so every drone has at
/// most one target between two consecutive truck nodes.
pub struct AssignmentPlanner {
    network: Arc<Network>,
    number_of_drones: DroneIdx,
    verbosity: Verbosity,
}

impl AssignmentPlanner {
    pub fn new(
        network: Arc<Network>,
        number_of_drones: DroneIdx,
        verbosity: Verbosity,
    ) -> AssignmentPlanner {
        AssignmentPlanner {
            network,
            number_of_drones,
            verbosity,
        }
    }

    pub fn plan(&self, tour: &Tour) -> VehicleAssignment {
        let mut next_drone: DroneIdx = 1;
        let mut assignment = VehicleAssignment::new();
        for node in tour.all_nodes_iter() {
            let truck_required = self.network.is_deposit(node) || self.network.is_super_node(node);
            let vehicle = if truck_required || next_drone > self.number_of_drones {
                next_drone = 1;
                VehicleId::Truck
            } else {
                next_drone += 1;
                VehicleId::Drone(next_drone - 1)
            };
            assignment = assignment.assign(node, vehicle);
        }

        if self.verbosity.summary() {
            let counts = VehicleId::all(self.number_of_drones)
                .map(|v| format!("{}: {}", v, assignment.nodes_of(v).count()))
                .join(", ");
            info!(nodes_per_vehicle = %counts, "assignment planned");
        }
        assignment
    }
}

#[cfg(test)]
#[path = "planner/tests.rs"]
mod tests;
