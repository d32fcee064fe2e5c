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

use std::collections::HashMap;

use crate::base_types::{Duration, NodeId};
use crate::error::NetworkError;
use crate::network::nodes::Node;

/// Point-to-point flight times of the drones. Either given as a matrix (e.g. precomputed by an
/// external tool) or derived from the great-circle distance and a constant drone speed.
#[derive(Debug, Clone)]
pub enum DroneTimes {
    Geodesic { speed_in_meter_per_second: f64 },
    Matrix(HashMap<NodeId, HashMap<NodeId, Duration>>),
}

impl DroneTimes {
    pub fn geodesic(speed_in_meter_per_second: f64) -> DroneTimes {
        DroneTimes::Geodesic {
            speed_in_meter_per_second,
        }
    }

    pub fn from_matrix(matrix: HashMap<NodeId, HashMap<NodeId, Duration>>) -> DroneTimes {
        DroneTimes::Matrix(matrix)
    }

    pub fn travel_time(&self, from: &Node, to: &Node) -> Result<Duration, NetworkError> {
        if from.id() == to.id() {
            return Ok(Duration::ZERO);
        }
        match self {
            DroneTimes::Geodesic {
                speed_in_meter_per_second,
            } => {
                let meter = from.coordinates().distance_in_meter(&to.coordinates());
                Duration::from_seconds(meter / speed_in_meter_per_second).map_err(|_| {
                    NetworkError::NoDroneTime {
                        from: from.id(),
                        to: to.id(),
                    }
                })
            }
            DroneTimes::Matrix(matrix) => matrix
                .get(&from.id())
                .and_then(|row| row.get(&to.id()))
                .copied()
                .ok_or(NetworkError::NoDroneTime {
                    from: from.id(),
                    to: to.id(),
                }),
        }
    }
}
