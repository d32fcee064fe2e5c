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

use serde_json::json;

use crate::base_types::{Duration, NodeId};
use crate::config::{DepositRevisitPolicy, ImproverKind, LaunchPolicy, SequencerKind};
use crate::error::{ConfigError, InstanceError};
use crate::json_serialisation::load_instance_from_json;
use crate::network::TimeModel;

fn instance(parameters: serde_json::Value) -> serde_json::Value {
    json!({
        "nodes": [
            {"id": 0, "lat": 47.3769, "lon": 8.5417},
            {"id": 1, "lat": 47.3800, "lon": 8.5450, "demand": 1},
            {"id": 2, "lat": 47.3850, "lon": 8.5400, "demand": 3},
            {"id": 3, "lat": 47.3700, "lon": 8.5300}
        ],
        "deposit": 0,
        "roads": [
            {"from": 0, "to": 1, "travelTimeInSeconds": 60.5},
            {"from": 1, "to": 2, "travelTimeInSeconds": 45},
            {"from": 0, "to": 3, "travelTimeInSeconds": 30},
            {"from": 3, "to": 2, "travelTimeInSeconds": 90}
        ],
        "tour": [0, 2, 1, 0],
        "parameters": parameters
    })
}

#[test]
fn test_load_from_json_with_defaults() {
    // ACT
    let (network, config, tour) = load_instance_from_json(instance(json!({}))).unwrap();

    // ASSERT
    assert_eq!(network.size(), 4);
    assert_eq!(network.deposit(), NodeId(0));
    assert_eq!(
        network.demand_nodes().collect::<Vec<_>>(),
        vec![NodeId(1), NodeId(2)]
    );
    assert!(network.is_super_node(NodeId(2)));
    assert_eq!(
        network.road_time(NodeId(0), NodeId(2)).unwrap(),
        Duration::from_millis(105_500)
    );
    assert_eq!(
        tour,
        Some(vec![NodeId(0), NodeId(2), NodeId(1), NodeId(0)])
    );

    assert_eq!(config.number_of_drones, 2);
    assert_eq!(config.durations.preparation, Duration::from_whole_seconds(30));
    assert_eq!(config.durations.delivery, Duration::from_whole_seconds(60));
    assert_eq!(config.launch_policy, LaunchPolicy::SegmentStart);
    assert_eq!(config.improver, ImproverKind::TakeFirst);
    assert_eq!(config.sequencer, SequencerKind::NearestNeighbor);
    assert_eq!(config.deposit_revisit, DepositRevisitPolicy::Warn);
}

#[test]
fn test_load_from_json_with_parameters() {
    let parameters = json!({
        "numberOfDrones": 4,
        "preparationTimeInSeconds": 12.25,
        "deliveryTimeInSeconds": 0,
        "droneSpeedInKmh": 72,
        "launchPolicy": "bestLaunchNode",
        "improver": "minimizer",
        "sequencer": "given",
        "depositRevisit": "reject"
    });

    let (_, config, _) = load_instance_from_json(instance(parameters)).unwrap();

    assert_eq!(config.number_of_drones, 4);
    assert_eq!(config.durations.preparation, Duration::from_millis(12_250));
    assert_eq!(config.durations.delivery, Duration::ZERO);
    assert!((config.drone_speed_in_meter_per_second - 20.0).abs() < 1e-9);
    assert_eq!(config.launch_policy, LaunchPolicy::BestLaunchNode);
    assert_eq!(config.improver, ImproverKind::Minimizer);
    assert_eq!(config.sequencer, SequencerKind::Given);
    assert_eq!(config.deposit_revisit, DepositRevisitPolicy::Reject);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let too_many = load_instance_from_json(instance(json!({"numberOfDrones": 33})));
    assert!(matches!(
        too_many,
        Err(InstanceError::Config(ConfigError::InvalidDroneCount { given: 33, max: 32 }))
    ));

    let negative = load_instance_from_json(instance(json!({"numberOfDrones": -1})));
    assert!(matches!(
        negative,
        Err(InstanceError::Config(ConfigError::InvalidDroneCount { .. }))
    ));

    match load_instance_from_json(instance(json!({"improver": "hillClimbing"}))) {
        Err(InstanceError::Config(ConfigError::InvalidPolicy {
            kind, available, ..
        })) => {
            assert_eq!(kind, "improver");
            assert_eq!(available, "takeFirst, minimizer");
        }
        _ => panic!("unknown improver must be rejected"),
    }

    let slow_drone = load_instance_from_json(instance(json!({"droneSpeedInKmh": 0})));
    assert!(matches!(
        slow_drone,
        Err(InstanceError::Config(ConfigError::InvalidValue { .. }))
    ));

    let negative_prep =
        load_instance_from_json(instance(json!({"preparationTimeInSeconds": -3.0})));
    assert!(matches!(
        negative_prep,
        Err(InstanceError::Config(ConfigError::InvalidValue { .. }))
    ));
}

#[test]
fn test_drone_travel_time_matrix() {
    let mut input = instance(json!({}));
    input["droneTravelTimes"] = json!({
        "indices": [0, 1, 2, 3],
        "travelTimesInSeconds": [
            [0, 10, 20, 30],
            [10, 0, 15, 25],
            [20, 15, 0, 5],
            [30, 25, 5, 0]
        ]
    });

    let (network, _, _) = load_instance_from_json(input).unwrap();

    assert_eq!(
        network.drone_time(NodeId(1), NodeId(2)).unwrap(),
        Duration::from_whole_seconds(15)
    );

    let mut malformed = instance(json!({}));
    malformed["droneTravelTimes"] = json!({
        "indices": [0, 1],
        "travelTimesInSeconds": [[0, 10]]
    });
    assert!(matches!(
        load_instance_from_json(malformed),
        Err(InstanceError::Inconsistent(_))
    ));
}

#[test]
fn test_malformed_instances() {
    let mut unknown_deposit = instance(json!({}));
    unknown_deposit["deposit"] = json!(17);
    assert!(matches!(
        load_instance_from_json(unknown_deposit),
        Err(InstanceError::Inconsistent(_))
    ));

    let mut negative_road = instance(json!({}));
    negative_road["roads"][0]["travelTimeInSeconds"] = json!(-1);
    assert!(matches!(
        load_instance_from_json(negative_road),
        Err(InstanceError::Inconsistent(_))
    ));

    let missing_roads = json!({"nodes": [], "deposit": 0});
    assert!(matches!(
        load_instance_from_json(missing_roads),
        Err(InstanceError::Json(_))
    ));
}
