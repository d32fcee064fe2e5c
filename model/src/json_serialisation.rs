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

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::base_types::{Coordinates, Demand, Duration, Id, NodeId};
use crate::config::{
    Config, DepositRevisitPolicy, ImproverKind, LaunchPolicy, SequencerKind,
    DEFAULT_DELIVERY_TIME_IN_SECONDS, DEFAULT_DRONE_SPEED_IN_KMH, DEFAULT_NUMBER_OF_DRONES,
    DEFAULT_PREPARATION_TIME_IN_SECONDS,
};
use crate::drone_times::DroneTimes;
use crate::error::InstanceError;
use crate::network::nodes::Node;
use crate::network::Network;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonNode {
    id: Id,
    lat: f64,
    lon: f64,
    #[serde(default)]
    demand: Demand,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Road {
    from: Id,
    to: Id,
    travel_time_in_seconds: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DroneTravelTimes {
    indices: Vec<Id>,
    travel_times_in_seconds: Vec<Vec<f64>>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    number_of_drones: Option<i64>,
    preparation_time_in_seconds: Option<f64>,
    delivery_time_in_seconds: Option<f64>,
    drone_speed_in_kmh: Option<f64>,
    launch_policy: Option<String>,
    improver: Option<String>,
    sequencer: Option<String>,
    deposit_revisit: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    nodes: Vec<JsonNode>,
    deposit: Id,
    roads: Vec<Road>,
    drone_travel_times: Option<DroneTravelTimes>,
    tour: Option<Vec<Id>>,
    #[serde(default)]
    parameters: Parameters,
}

/// Network, config and (if present) the tour given in the instance.
pub type Instance = (Arc<Network>, Arc<Config>, Option<Vec<NodeId>>);

pub fn load_instance_from_json(input_data: serde_json::Value) -> Result<Instance, InstanceError> {
    let json_input: JsonInput = serde_json::from_value(input_data)?;
    let config = create_config(&json_input.parameters)?;
    let network = create_network(&json_input, &config)?;
    let tour = json_input
        .tour
        .as_ref()
        .map(|tour| tour.iter().map(|&id| NodeId::from(id)).collect());
    Ok((Arc::new(network), Arc::new(config), tour))
}

fn create_config(parameters: &Parameters) -> Result<Config, InstanceError> {
    let config = Config::new(
        parameters
            .number_of_drones
            .unwrap_or(DEFAULT_NUMBER_OF_DRONES as i64),
        parameters
            .preparation_time_in_seconds
            .unwrap_or(DEFAULT_PREPARATION_TIME_IN_SECONDS),
        parameters
            .delivery_time_in_seconds
            .unwrap_or(DEFAULT_DELIVERY_TIME_IN_SECONDS),
        parameters
            .drone_speed_in_kmh
            .unwrap_or(DEFAULT_DRONE_SPEED_IN_KMH),
        parse_or(&parameters.launch_policy, LaunchPolicy::SegmentStart)?,
        parse_or(&parameters.improver, ImproverKind::TakeFirst)?,
        parse_or(&parameters.sequencer, SequencerKind::NearestNeighbor)?,
        parse_or(&parameters.deposit_revisit, DepositRevisitPolicy::Warn)?,
    )?;
    Ok(config)
}

fn parse_or<T>(name: &Option<String>, default: T) -> Result<T, InstanceError>
where
    T: std::str::FromStr<Err = crate::error::ConfigError>,
{
    match name {
        Some(name) => Ok(name.parse::<T>()?),
        None => Ok(default),
    }
}

fn create_network(json_input: &JsonInput, config: &Config) -> Result<Network, InstanceError> {
    let deposit = NodeId::from(json_input.deposit);
    let nodes: Vec<Node> = json_input
        .nodes
        .iter()
        .map(|node| {
            let id = NodeId::from(node.id);
            Node::new(
                id,
                Coordinates::new(node.lat, node.lon),
                node.demand,
                id == deposit,
            )
        })
        .collect();
    if !nodes.iter().any(|n| n.is_deposit()) {
        return Err(InstanceError::Inconsistent(format!(
            "deposit {} is not among the nodes",
            deposit
        )));
    }

    let roads = json_input
        .roads
        .iter()
        .map(|road| {
            let duration = seconds_to_duration(road.travel_time_in_seconds, "travelTimeInSeconds")?;
            Ok((NodeId::from(road.from), NodeId::from(road.to), duration))
        })
        .collect::<Result<Vec<_>, InstanceError>>()?;

    let drone_times = match &json_input.drone_travel_times {
        Some(matrix) => create_drone_time_matrix(matrix)?,
        None => DroneTimes::geodesic(config.drone_speed_in_meter_per_second),
    };

    Network::new(nodes, roads, drone_times)
}

fn create_drone_time_matrix(matrix: &DroneTravelTimes) -> Result<DroneTimes, InstanceError> {
    let size = matrix.indices.len();
    if matrix.travel_times_in_seconds.len() != size
        || matrix.travel_times_in_seconds.iter().any(|row| row.len() != size)
    {
        return Err(InstanceError::Inconsistent(format!(
            "drone travel time matrix must be {}x{}",
            size, size
        )));
    }

    let mut travel_times: HashMap<NodeId, HashMap<NodeId, Duration>> = HashMap::new();
    for (i, origin) in matrix.indices.iter().enumerate() {
        let mut destination_map: HashMap<NodeId, Duration> = HashMap::new();
        for (j, destination) in matrix.indices.iter().enumerate() {
            destination_map.insert(
                NodeId::from(*destination),
                seconds_to_duration(matrix.travel_times_in_seconds[i][j], "travelTimesInSeconds")?,
            );
        }
        travel_times.insert(NodeId::from(*origin), destination_map);
    }
    Ok(DroneTimes::from_matrix(travel_times))
}

fn seconds_to_duration(seconds: f64, field: &str) -> Result<Duration, InstanceError> {
    Duration::from_seconds(seconds)
        .map_err(|err| InstanceError::Inconsistent(format!("{}: {}", field, err)))
}

#[cfg(test)]
#[path = "json_serialisation/tests.rs"]
mod tests;
