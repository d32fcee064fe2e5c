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

use derive_more::{Display, From};

use model::base_types::{DroneIdx, NodeId, VehicleId};
use model::NetworkError;

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    #[display(fmt = "a tour needs at least two nodes, got {}", _0)]
    TooShort(usize),
    #[display(fmt = "tour must start at the deposit, starts at {}", _0)]
    NotStartingAtDeposit(NodeId),
    #[display(fmt = "tour must end at the deposit, ends at {}", _0)]
    NotEndingAtDeposit(NodeId),
    #[display(fmt = "tour contains unknown node {}", _0)]
    UnknownNode(NodeId),
    #[display(fmt = "tour contains node {} without demand", _0)]
    NotADemandNode(NodeId),
    #[display(fmt = "tour visits demand node {} more than once", _0)]
    DuplicateNode(NodeId),
    #[display(fmt = "tour misses demand node {}", _0)]
    MissingNode(NodeId),
}

impl std::error::Error for TourError {}

/// Errors of the schedule builder. All of them are defects of the input or of the caller, they
/// are never a regular outcome of the construction.
#[derive(Display, From, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[display(fmt = "{}", _0)]
    Network(NetworkError),
    #[display(fmt = "node {} of the tour has no vehicle assigned", _0)]
    #[from(ignore)]
    Unassigned(NodeId),
    #[display(fmt = "node {} is assigned to {}, which does not exist", node, vehicle)]
    #[from(ignore)]
    UnknownVehicle { node: NodeId, vehicle: VehicleId },
    #[display(fmt = "node {} must be served by the truck", _0)]
    #[from(ignore)]
    TruckRequired(NodeId),
    #[display(
        fmt = "drone_{} has more than one target between {} and {}",
        drone,
        from,
        to
    )]
    #[from(ignore)]
    DroneOverbooked {
        drone: DroneIdx,
        from: NodeId,
        to: NodeId,
    },
    #[display(fmt = "negative wait computed for {} at node {}", vehicle, node)]
    #[from(ignore)]
    NegativeWait { vehicle: VehicleId, node: NodeId },
}

impl std::error::Error for ScheduleError {}
