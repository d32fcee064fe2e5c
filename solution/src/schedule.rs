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

mod builder;
pub mod feasibility;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use model::base_types::{Demand, NodeId, VehicleId, Verbosity};
use model::config::Config;
use model::network::Network;
use time::Duration;

use crate::assignment::VehicleAssignment;
use crate::error::ScheduleError;
use crate::timeline::Timeline;
use crate::tour::Tour;
use builder::ScheduleBuilder;
use feasibility::FeasibilityReport;

/// A multi-vehicle schedule: one timeline for the truck and one for each drone, built from a
/// tour and a vehicle assignment.
/// It is an immutable object. A different assignment leads to a newly built schedule.
#[derive(Clone)]
pub struct Schedule {
    truck: Timeline,
    drones: Vec<Timeline>, // drones[i] belongs to drone i+1

    tour: Arc<Tour>,
    assignment: VehicleAssignment,

    network: Arc<Network>,
    config: Arc<Config>,
}

// static functions
impl Schedule {
    /// Builds the timelines of all vehicles segment by segment.
    /// Fails if the assignment violates the planner invariants or a segment is unreachable.
    pub fn build(
        tour: Arc<Tour>,
        assignment: VehicleAssignment,
        network: Arc<Network>,
        config: Arc<Config>,
        verbosity: Verbosity,
    ) -> Result<Schedule, ScheduleError> {
        let (truck, drones) =
            ScheduleBuilder::new(&tour, &assignment, &network, &config, verbosity).build()?;
        Ok(Schedule {
            truck,
            drones,
            tour,
            assignment,
            network,
            config,
        })
    }
}

// methods
impl Schedule {
    /// Builds a new schedule with the same tour but a different assignment.
    pub fn with_assignment(
        &self,
        assignment: VehicleAssignment,
        verbosity: Verbosity,
    ) -> Result<Schedule, ScheduleError> {
        Schedule::build(
            self.tour.clone(),
            assignment,
            self.network.clone(),
            self.config.clone(),
            verbosity,
        )
    }

    pub fn truck_timeline(&self) -> &Timeline {
        &self.truck
    }

    pub fn drone_timelines(&self) -> &[Timeline] {
        &self.drones
    }

    pub fn timeline_of(&self, vehicle: VehicleId) -> Option<&Timeline> {
        match vehicle {
            VehicleId::Truck => Some(&self.truck),
            VehicleId::Drone(idx) => self.drones.get((idx as usize).checked_sub(1)?),
        }
    }

    /// truck first, then the drones in increasing order.
    pub fn timelines(&self) -> impl Iterator<Item = &Timeline> + '_ {
        std::iter::once(&self.truck).chain(self.drones.iter())
    }

    /// Sum of the durations of all truck events. As the truck absorbs the drone delays by
    /// waiting, this is the return time of the truck to the deposit.
    pub fn makespan(&self) -> Duration {
        self.truck.total_duration()
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn shared_tour(&self) -> Arc<Tour> {
        self.tour.clone()
    }

    pub fn assignment(&self) -> &VehicleAssignment {
        &self.assignment
    }

    pub fn network(&self) -> Arc<Network> {
        self.network.clone()
    }

    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// delivered units per node over all vehicles.
    pub fn delivered_units(&self) -> HashMap<NodeId, Demand> {
        let mut delivered: HashMap<NodeId, Demand> = HashMap::new();
        for event in self.timelines().flat_map(|t| t.events_iter()) {
            let units = event.delivered_units();
            if units > 0 {
                *delivered.entry(event.to()).or_insert(0) += units;
            }
        }
        delivered
    }

    /// units of demand that are not delivered by any vehicle.
    pub fn unserved_demand(&self) -> Demand {
        let delivered = self.delivered_units();
        std::iter::once(self.network.deposit())
            .chain(self.network.demand_nodes())
            .filter_map(|node| self.network.node(node).ok())
            .map(|node| {
                node.demand()
                    .saturating_sub(delivered.get(&node.id()).copied().unwrap_or(0))
            })
            .sum()
    }

    pub fn check_feasibility(&self) -> FeasibilityReport {
        feasibility::check(self)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "tour: {}", self.tour)?;
        writeln!(f, "assignment: {}", self.assignment)?;
        for timeline in self.timelines() {
            write!(f, "{}", timeline)?;
        }
        writeln!(f, "makespan: {}", self.makespan())
    }
}
