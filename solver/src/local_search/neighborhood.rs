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

use heuristic_framework::Neighborhood;
use model::base_types::{NodeId, VehicleId, Verbosity};
use solution::tour::Position;
use solution::{Schedule, ScheduleError};
use tracing::debug;

use super::ScheduleWithInfo;

/// Exchanges the drones of two adjacent single-unit demand nodes of the tour. Only positions
/// behind the last accepted swap are considered, so the search passes the tour once from left
/// to right. Candidates failing the feasibility check are skipped.
pub struct DroneSwaps {
    verbosity: Verbosity,
}

impl DroneSwaps {
    pub fn new(verbosity: Verbosity) -> DroneSwaps {
        DroneSwaps { verbosity }
    }

    fn swap_drones(
        &self,
        schedule: &Schedule,
        position: Position,
        node1: NodeId,
        node2: NodeId,
    ) -> Option<Result<ScheduleWithInfo, ScheduleError>> {
        let assignment = schedule.assignment();
        let drone1 = assignment.vehicle_of(node1).filter(VehicleId::is_drone)?;
        let drone2 = assignment.vehicle_of(node2).filter(VehicleId::is_drone)?;
        if drone1 == drone2 || !self.single_unit(schedule, node1) || !self.single_unit(schedule, node2)
        {
            return None;
        }

        let new_schedule =
            match schedule.with_assignment(assignment.swap(node1, node2), Verbosity::Quiet) {
                Ok(new_schedule) => new_schedule,
                Err(error) => return Some(Err(error)),
            };

        let report = new_schedule.check_feasibility();
        if !report.is_feasible() {
            if self.verbosity.detailed() {
                debug!(position, node1 = %node1, node2 = %node2, report = %report, "swap rejected");
            }
            return None;
        }

        Some(Ok(ScheduleWithInfo::new(
            new_schedule,
            Some(position),
            format!(
                "{} ({} -> {}) <-> {} ({} -> {})",
                node1, drone1, drone2, node2, drone2, drone1
            ),
        )))
    }

    fn single_unit(&self, schedule: &Schedule, node: NodeId) -> bool {
        schedule
            .network()
            .node(node)
            .map(|n| n.demand() == 1)
            .unwrap_or(false)
    }
}

impl Neighborhood<ScheduleWithInfo, ScheduleError> for DroneSwaps {
    fn neighbors_of<'a>(
        &'a self,
        schedule_with_info: &'a ScheduleWithInfo,
    ) -> Box<dyn Iterator<Item = Result<ScheduleWithInfo, ScheduleError>> + Send + Sync + 'a> {
        let schedule = schedule_with_info.schedule();
        let first_position = schedule_with_info.last_swap().map_or(0, |p| p + 1);
        Box::new(
            schedule
                .tour()
                .consecutive_pairs()
                .filter(move |&(position, _, _)| position >= first_position)
                .filter_map(move |(position, node1, node2)| {
                    self.swap_drones(schedule, position, node1, node2)
                }),
        )
    }
}
