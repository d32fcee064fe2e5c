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

use std::sync::Arc;

use model::base_types::{NodeId, VehicleId, Verbosity};
use model::json_serialisation::load_instance_from_json;
use solution::test_utilities::{default_assignment, init_test_data};
use solution::{Tour, VehicleAssignment};

use super::AssignmentPlanner;

#[test]
fn round_robin_restarts_after_truck() {
    // ARRANGE
    let d = init_test_data();
    let planner = AssignmentPlanner::new(d.network.clone(), 2, Verbosity::Quiet);

    // ACT
    let assignment = planner.plan(&d.tour);

    // ASSERT
    assert_eq!(assignment, default_assignment(&d));
}

#[test]
fn small_example_with_one_super_node() {
    let input = serde_json::json!({
        "nodes": [
            {"id": 0, "lat": 0.0, "lon": 0.0},
            {"id": 1, "lat": 0.0, "lon": 0.01, "demand": 1},
            {"id": 2, "lat": 0.01, "lon": 0.01, "demand": 1},
            {"id": 3, "lat": 0.01, "lon": 0.0, "demand": 2}
        ],
        "deposit": 0,
        "roads": [
            {"from": 0, "to": 3, "travelTimeInSeconds": 60},
            {"from": 3, "to": 2, "travelTimeInSeconds": 60},
            {"from": 2, "to": 1, "travelTimeInSeconds": 60},
            {"from": 1, "to": 0, "travelTimeInSeconds": 60}
        ]
    });
    let (network, _, _) = load_instance_from_json(input).unwrap();
    let tour = Tour::new(
        vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(0)],
        &network,
    )
    .unwrap();

    let assignment = AssignmentPlanner::new(network, 2, Verbosity::Quiet).plan(&tour);

    assert_eq!(
        assignment,
        VehicleAssignment::from_iter([
            (NodeId(0), VehicleId::Truck),
            (NodeId(1), VehicleId::Drone(1)),
            (NodeId(2), VehicleId::Drone(2)),
            (NodeId(3), VehicleId::Truck),
        ])
    );
}

#[test]
fn node_after_last_drone_goes_to_truck() {
    let d = init_test_data();
    // with a single drone every second node of a run goes to the truck
    let tour = Tour::new(
        [0, 4, 5, 1, 2, 3, 0].iter().map(|&i| NodeId(i)).collect(),
        &d.network,
    )
    .unwrap();

    let one_drone = AssignmentPlanner::new(d.network.clone(), 1, Verbosity::Quiet).plan(&tour);

    assert_eq!(one_drone.vehicle_of(d.n4), Some(VehicleId::Drone(1)));
    assert_eq!(one_drone.vehicle_of(d.n5), Some(VehicleId::Truck));
    assert_eq!(one_drone.vehicle_of(d.n1), Some(VehicleId::Drone(1)));
    assert_eq!(one_drone.vehicle_of(d.n2), Some(VehicleId::Truck));
    assert_eq!(one_drone.vehicle_of(d.n3), Some(VehicleId::Truck));
}

#[test]
fn without_drones_everything_goes_to_truck() {
    let d = init_test_data();

    let assignment = AssignmentPlanner::new(d.network.clone(), 0, Verbosity::Quiet).plan(&d.tour);

    assert_eq!(assignment.len(), 6);
    assert!(assignment.iter().all(|(_, v)| v == VehicleId::Truck));
}

#[test]
fn super_nodes_and_deposit_never_on_drones() {
    let d = init_test_data();
    let network = Arc::clone(&d.network);

    for number_of_drones in 0..=4 {
        let assignment =
            AssignmentPlanner::new(network.clone(), number_of_drones, Verbosity::Quiet)
                .plan(&d.tour);
        for (node, vehicle) in assignment.iter() {
            if network.is_super_node(node) || network.is_deposit(node) {
                assert_eq!(vehicle, VehicleId::Truck);
            }
            if let VehicleId::Drone(idx) = vehicle {
                assert!(idx >= 1 && idx <= number_of_drones);
            }
        }
    }
}
