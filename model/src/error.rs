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

use crate::base_types::NodeId;

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[display(fmt = "node {} is not part of the road network", _0)]
    UnknownNode(NodeId),
    #[display(fmt = "no road path from node {} to node {}", from, to)]
    NoPath { from: NodeId, to: NodeId },
    #[display(fmt = "no drone travel time from node {} to node {}", from, to)]
    NoDroneTime { from: NodeId, to: NodeId },
}

impl std::error::Error for NetworkError {}

#[derive(Display, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[display(fmt = "invalid number of drones: {} (allowed: 0..={})", given, max)]
    InvalidDroneCount { given: i64, max: u8 },
    #[display(fmt = "invalid {} policy: '{}' (available: {})", kind, given, available)]
    InvalidPolicy {
        kind: &'static str,
        given: String,
        available: String,
    },
    #[display(fmt = "invalid value for {}: {}", parameter, value)]
    InvalidValue { parameter: &'static str, value: f64 },
}

impl std::error::Error for ConfigError {}

#[derive(Display, From, Debug)]
pub enum InstanceError {
    #[display(fmt = "malformed instance: {}", _0)]
    Json(serde_json::Error),
    #[display(fmt = "{}", _0)]
    Config(ConfigError),
    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    Inconsistent(String),
}

impl std::error::Error for InstanceError {}
