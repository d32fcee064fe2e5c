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

use derive_more::Display;
use derive_more::From;

pub mod coordinates;

pub use coordinates::Coordinates;
pub use time::Duration;

pub type Id = u32;
pub type DroneIdx = u8; // drones are numbered from 1
pub type Demand = u32;

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub Id);

impl NodeId {
    pub fn raw(&self) -> Id {
        self.0
    }
}

/// The truck or one of the drones. The truck is ordered before all drones.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VehicleId {
    #[display(fmt = "truck")]
    Truck,
    #[display(fmt = "drone_{}", _0)]
    Drone(DroneIdx),
}

impl VehicleId {
    pub fn is_truck(&self) -> bool {
        matches!(self, VehicleId::Truck)
    }

    pub fn is_drone(&self) -> bool {
        matches!(self, VehicleId::Drone(_))
    }

    /// Truck followed by Drone(1), ..., Drone(number_of_drones).
    pub fn all(number_of_drones: DroneIdx) -> impl Iterator<Item = VehicleId> {
        std::iter::once(VehicleId::Truck).chain((1..=number_of_drones).map(VehicleId::Drone))
    }
}

/// Explicit logging level handed to each component.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    #[display(fmt = "quiet")]
    Quiet,
    #[default]
    #[display(fmt = "normal")]
    Normal,
    #[display(fmt = "detailed")]
    Detailed,
}

impl Verbosity {
    pub fn summary(&self) -> bool {
        *self >= Verbosity::Normal
    }

    pub fn detailed(&self) -> bool {
        *self >= Verbosity::Detailed
    }
}
