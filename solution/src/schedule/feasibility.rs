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

use std::collections::HashSet;
use std::fmt;

use derive_more::Display;
use itertools::Itertools;
use model::base_types::{Demand, NodeId, VehicleId};
use model::config::DepositRevisitPolicy;
use time::Duration;

use crate::event::Event;
use crate::timeline::Timeline;

use super::Schedule;

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[display(fmt = "node {} misses {} unit(s) of demand", node, missing)]
    UnservedDemand { node: NodeId, missing: Demand },
    #[display(fmt = "node {} receives {} unit(s) more than demanded", node, surplus)]
    OverservedDemand { node: NodeId, surplus: Demand },
    #[display(fmt = "truck starts at {} instead of the deposit", _0)]
    TruckNotStartingAtDeposit(NodeId),
    #[display(fmt = "truck ends at {} instead of the deposit", _0)]
    TruckNotEndingAtDeposit(NodeId),
    #[display(
        fmt = "truck event {} starts at node {} but the truck is at node {}",
        position,
        found,
        expected
    )]
    TruckDiscontinuous {
        position: usize,
        expected: NodeId,
        found: NodeId,
    },
    #[display(fmt = "truck event {} does not start when its predecessor ends", position)]
    TruckTimeGap { position: usize },
    #[display(fmt = "truck revisits the deposit {} time(s)", _0)]
    DepositRevisited(usize),
    #[display(fmt = "event {} of {} starts before its predecessor ends", position, vehicle)]
    OverlappingEvents { vehicle: VehicleId, position: usize },
    #[display(fmt = "event {} of {} has no finite duration", position, vehicle)]
    UnboundedDuration { vehicle: VehicleId, position: usize },
}

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[display(fmt = "truck revisits the deposit {} time(s)", _0)]
    DepositRevisited(usize),
}

/// Result of the feasibility check. The schedule is feasible iff there are no violations,
/// warnings do not affect feasibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeasibilityReport {
    violations: Vec<Violation>,
    warnings: Vec<Warning>,
}

impl FeasibilityReport {
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

impl fmt::Display for FeasibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_feasible() {
            write!(f, "feasible")?;
        } else {
            write!(
                f,
                "infeasible: {}",
                self.violations.iter().map(|v| v.to_string()).join("; ")
            )?;
        }
        if !self.warnings.is_empty() {
            write!(
                f,
                " (warnings: {})",
                self.warnings.iter().map(|w| w.to_string()).join("; ")
            )?;
        }
        Ok(())
    }
}

pub(super) fn check(schedule: &Schedule) -> FeasibilityReport {
    let mut report = FeasibilityReport::default();
    check_demand(schedule, &mut report);
    check_truck_route(schedule, &mut report);
    check_deposit_revisits(schedule, &mut report);
    for timeline in schedule.timelines() {
        check_durations(timeline, &mut report);
    }
    for timeline in schedule.drone_timelines() {
        check_no_overlap(timeline, &mut report);
    }
    report
}

/// Every unit of demand is delivered exactly once.
fn check_demand(schedule: &Schedule, report: &mut FeasibilityReport) {
    let network = schedule.network();
    let delivered = schedule.delivered_units();

    let nodes: HashSet<NodeId> = std::iter::once(network.deposit())
        .chain(network.demand_nodes())
        .chain(delivered.keys().copied())
        .collect();

    for node in nodes.into_iter().sorted() {
        let demand = network.node(node).map(|n| n.demand()).unwrap_or(0);
        let units = delivered.get(&node).copied().unwrap_or(0);
        if units < demand {
            report.violations.push(Violation::UnservedDemand {
                node,
                missing: demand - units,
            });
        } else if units > demand {
            report.violations.push(Violation::OverservedDemand {
                node,
                surplus: units - demand,
            });
        }
    }
}

/// The truck starts and ends at the deposit and its events form a contiguous path in space
/// and time.
fn check_truck_route(schedule: &Schedule, report: &mut FeasibilityReport) {
    let truck = schedule.truck_timeline();
    let deposit = schedule.network().deposit();

    if let Some(first) = truck.first_node() {
        if first != deposit {
            report
                .violations
                .push(Violation::TruckNotStartingAtDeposit(first));
        }
    }
    if let Some(last) = truck.last_node() {
        if last != deposit {
            report.violations.push(Violation::TruckNotEndingAtDeposit(last));
        }
    }
    if let Some(first_event) = truck.events().first() {
        if first_event.start() != Duration::ZERO {
            report
                .violations
                .push(Violation::TruckTimeGap { position: 0 });
        }
    }

    for (position, (previous, event)) in truck.events().iter().tuple_windows().enumerate() {
        if previous.to() != event.from() {
            report.violations.push(Violation::TruckDiscontinuous {
                position: position + 1,
                expected: previous.to(),
                found: event.from(),
            });
        }
        if previous.end() != event.start() {
            report.violations.push(Violation::TruckTimeGap {
                position: position + 1,
            });
        }
    }
}

/// Counts the arrivals of the truck at the deposit before its final arrival.
fn check_deposit_revisits(schedule: &Schedule, report: &mut FeasibilityReport) {
    let deposit = schedule.network().deposit();
    let arrivals = schedule
        .truck_timeline()
        .events_iter()
        .filter(|e| e.is_move() && e.to() == deposit)
        .count();
    let revisits = arrivals.saturating_sub(1);
    if revisits == 0 {
        return;
    }
    match schedule.config().deposit_revisit {
        DepositRevisitPolicy::Warn => report.warnings.push(Warning::DepositRevisited(revisits)),
        DepositRevisitPolicy::Reject => report
            .violations
            .push(Violation::DepositRevisited(revisits)),
    }
}

fn check_durations(timeline: &Timeline, report: &mut FeasibilityReport) {
    for (position, event) in timeline.events().iter().enumerate() {
        if event.duration().is_infinite() || event.start().is_infinite() {
            report.violations.push(Violation::UnboundedDuration {
                vehicle: timeline.vehicle(),
                position,
            });
        }
    }
}

/// A drone performs one action at a time.
fn check_no_overlap(timeline: &Timeline, report: &mut FeasibilityReport) {
    for (position, (previous, event)) in timeline.events().iter().tuple_windows().enumerate() {
        if starts_before_end_of(event, previous) {
            report.violations.push(Violation::OverlappingEvents {
                vehicle: timeline.vehicle(),
                position: position + 1,
            });
        }
    }
}

fn starts_before_end_of(event: &Event, previous: &Event) -> bool {
    event.start() < previous.end()
}
