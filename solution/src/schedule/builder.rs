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

use std::collections::BTreeMap;

use itertools::Itertools;
use model::base_types::{Demand, DroneIdx, NodeId, VehicleId, Verbosity};
use model::config::{Config, LaunchPolicy};
use model::network::shortest_path::RoadPath;
use model::network::{Network, TimeModel};
use time::Duration;
use tracing::debug;

use crate::assignment::VehicleAssignment;
use crate::error::ScheduleError;
use crate::event::Event;
use crate::timeline::Timeline;
use crate::tour::{Position, Tour};

/// A drone flight within one segment: launched from the truck at path[launch_index], delivering
/// one unit at target and recovered at the end of the segment.
struct Mission {
    drone: DroneIdx,
    target: NodeId,
    launch_index: usize,
    go_time: Duration,
    back_time: Duration,
}

impl Mission {
    fn flight_time(&self) -> Duration {
        self.go_time + self.back_time
    }
}

pub(super) struct ScheduleBuilder<'a> {
    tour: &'a Tour,
    assignment: &'a VehicleAssignment,
    network: &'a Network,
    config: &'a Config,
    verbosity: Verbosity,

    truck: Timeline,
    drones: Vec<Timeline>,
    clock: Duration, // current time of the truck
}

impl<'a> ScheduleBuilder<'a> {
    pub(super) fn new(
        tour: &'a Tour,
        assignment: &'a VehicleAssignment,
        network: &'a Network,
        config: &'a Config,
        verbosity: Verbosity,
    ) -> ScheduleBuilder<'a> {
        ScheduleBuilder {
            tour,
            assignment,
            network,
            config,
            verbosity,
            truck: Timeline::new(VehicleId::Truck),
            drones: (1..=config.number_of_drones)
                .map(|idx| Timeline::new(VehicleId::Drone(idx)))
                .collect(),
            clock: Duration::ZERO,
        }
    }

    pub(super) fn build(mut self) -> Result<(Timeline, Vec<Timeline>), ScheduleError> {
        let anchors = self.truck_anchors()?;
        for (start, end) in anchors.into_iter().tuple_windows() {
            self.add_segment(start, end)?;
        }
        Ok((self.truck, self.drones))
    }

    /// Positions of the tour served by the truck. Also checks that every node has an existing
    /// vehicle and that the deposit and super nodes are served by the truck.
    fn truck_anchors(&self) -> Result<Vec<Position>, ScheduleError> {
        let mut anchors = Vec::new();
        for (pos, node) in self.tour.all_nodes_iter().enumerate() {
            let vehicle = self
                .assignment
                .vehicle_of(node)
                .ok_or(ScheduleError::Unassigned(node))?;
            match vehicle {
                VehicleId::Truck => anchors.push(pos),
                VehicleId::Drone(idx) => {
                    if idx == 0 || idx > self.config.number_of_drones {
                        return Err(ScheduleError::UnknownVehicle { node, vehicle });
                    }
                    if self.network.is_deposit(node) || self.network.is_super_node(node) {
                        return Err(ScheduleError::TruckRequired(node));
                    }
                }
            }
        }
        Ok(anchors)
    }

    /// Appends the events of the segment between the truck anchors at start and end.
    fn add_segment(&mut self, start: Position, end: Position) -> Result<(), ScheduleError> {
        let from = self.node_at(start);
        let to = self.node_at(end);
        let path = self.network.shortest_path(from, to)?;

        let missions = self.missions_of_segment(start, end, &path)?;
        let launched = self.add_truck_route(&path, missions);

        let quantity = self.residual_truck_demand(end)?;
        if quantity > 0 {
            let delivery = self.config.durations.delivery;
            self.truck
                .push(Event::deliver(to, quantity, self.clock, delivery));
            self.clock = self.clock + delivery;
        }

        let truck_wait = self.synchronize(&path, &launched)?;
        if !truck_wait.is_zero() {
            self.truck.push(Event::wait(to, self.clock, truck_wait));
            self.clock = self.clock + truck_wait;
        }

        if self.verbosity.detailed() {
            debug!(
                from = %from,
                to = %to,
                path = %path,
                drones = launched.len(),
                truck_wait = %truck_wait,
                clock = %self.clock,
                "segment"
            );
        }
        Ok(())
    }

    /// The drone targets strictly between start and end, sorted by drone.
    fn missions_of_segment(
        &self,
        start: Position,
        end: Position,
        path: &RoadPath,
    ) -> Result<BTreeMap<DroneIdx, Mission>, ScheduleError> {
        let rendezvous = path.last();
        let mut missions: BTreeMap<DroneIdx, Mission> = BTreeMap::new();
        for pos in start + 1..end {
            let target = self.node_at(pos);
            let drone = match self.assignment.vehicle_of(target) {
                Some(VehicleId::Drone(idx)) => idx,
                _ => continue,
            };
            if missions.contains_key(&drone) {
                return Err(ScheduleError::DroneOverbooked {
                    drone,
                    from: path.first(),
                    to: rendezvous,
                });
            }
            let launch_index = self.launch_index(path, target)?;
            missions.insert(
                drone,
                Mission {
                    drone,
                    target,
                    launch_index,
                    go_time: self
                        .network
                        .drone_time(path.nodes()[launch_index], target)?,
                    back_time: self.network.drone_time(target, rendezvous)?,
                },
            );
        }
        Ok(missions)
    }

    /// Index of the launch node on the path. The rendezvous itself is never a launch node
    /// (unless the path consists of a single node).
    fn launch_index(&self, path: &RoadPath, target: NodeId) -> Result<usize, ScheduleError> {
        match self.config.launch_policy {
            LaunchPolicy::SegmentStart => Ok(0),
            LaunchPolicy::BestLaunchNode => {
                let rendezvous = path.last();
                let back_time = self.network.drone_time(target, rendezvous)?;
                let candidates = path.number_of_edges().max(1);
                let mut best: Option<(Duration, usize)> = None;
                for (index, &node) in path.nodes()[..candidates].iter().enumerate() {
                    let flight = self.network.drone_time(node, target)? + back_time;
                    // strict comparison keeps the earliest node on ties
                    if best.map_or(true, |(best_flight, _)| flight < best_flight) {
                        best = Some((flight, index));
                    }
                }
                Ok(best.map(|(_, index)| index).unwrap_or(0))
            }
        }
    }

    /// Walks along the path: at each node first the launches (PREP) happen, then the truck moves
    /// on. Each mission is returned together with the time its PREP ends (its launch time).
    fn add_truck_route(
        &mut self,
        path: &RoadPath,
        missions: BTreeMap<DroneIdx, Mission>,
    ) -> Vec<(Mission, Duration)> {
        let preparation = self.config.durations.preparation;
        let edges: Vec<(NodeId, NodeId, Duration)> = path.edges().collect();
        let mut pending: Vec<Mission> = missions.into_values().collect();
        let mut launched: Vec<(Mission, Duration)> = Vec::with_capacity(pending.len());

        for (index, &node) in path.nodes().iter().enumerate() {
            let (launching, later): (Vec<Mission>, Vec<Mission>) =
                pending.into_iter().partition(|m| m.launch_index == index);
            pending = later;
            for mission in launching {
                self.truck
                    .push(Event::prep(node, mission.drone, self.clock, preparation));
                self.clock = self.clock + preparation;
                launched.push((mission, self.clock));
            }
            if let Some(&(from, to, travel_time)) = edges.get(index) {
                self.truck
                    .push(Event::movement(from, to, self.clock, travel_time));
                self.clock = self.clock + travel_time;
            }
        }
        // launch indices always lie on the path
        debug_assert!(pending.is_empty());
        launched
    }

    /// Adds the flights of the drones (and their waits) and returns the time the truck has to
    /// wait for the slowest drone at the rendezvous.
    fn synchronize(
        &mut self,
        path: &RoadPath,
        launched: &[(Mission, Duration)],
    ) -> Result<Duration, ScheduleError> {
        let rendezvous = path.last();
        let mut truck_wait = Duration::ZERO;

        for (mission, launch_end) in launched {
            let launch_end = *launch_end;
            let negative_wait = ScheduleError::NegativeWait {
                vehicle: VehicleId::Drone(mission.drone),
                node: rendezvous,
            };
            let timeline = &mut self.drones[mission.drone as usize - 1];
            if timeline.end_time() > launch_end {
                return Err(ScheduleError::DroneOverbooked {
                    drone: mission.drone,
                    from: path.first(),
                    to: rendezvous,
                });
            }

            let launch_node = path.nodes()[mission.launch_index];
            timeline.push(Event::delivery_flight(
                launch_node,
                mission.target,
                launch_end,
                mission.go_time,
            ));
            timeline.push(Event::movement(
                mission.target,
                rendezvous,
                launch_end + mission.go_time,
                mission.back_time,
            ));

            let truck_elapsed = self
                .clock
                .checked_sub(launch_end)
                .ok_or_else(|| negative_wait.clone())?;
            let drone_elapsed = mission.flight_time();
            match truck_elapsed.checked_sub(drone_elapsed) {
                Some(drone_wait) => {
                    if !drone_wait.is_zero() {
                        timeline.push(Event::wait(
                            rendezvous,
                            launch_end + drone_elapsed,
                            drone_wait,
                        ));
                    }
                }
                None => {
                    let wait = drone_elapsed
                        .checked_sub(truck_elapsed)
                        .ok_or(negative_wait)?;
                    truck_wait = truck_wait.max(wait);
                }
            }
        }
        Ok(truck_wait)
    }

    /// Demand the truck still has to deliver at the anchor. The demand of the deposit is
    /// delivered on the final arrival.
    fn residual_truck_demand(&self, pos: Position) -> Result<Demand, ScheduleError> {
        let node = self.node_at(pos);
        if self.network.is_deposit(node) && !self.tour.is_last_position(pos) {
            return Ok(0);
        }
        Ok(self.network.demand(node)?)
    }

    fn node_at(&self, pos: Position) -> NodeId {
        self.tour.nodes()[pos]
    }
}
