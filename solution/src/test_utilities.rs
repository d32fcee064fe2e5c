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

use std::{fs::File, io::Read, sync::Arc};

use model::{
    base_types::{NodeId, VehicleId, Verbosity},
    config::Config,
    json_serialisation::load_instance_from_json,
    network::Network,
};

use crate::{Schedule, Tour, VehicleAssignment};

/// Instance of resources/test_instance.json:
///
/// deposit n0, demand nodes n1, n2, n4, n5 (one unit each) and the super node n3 (two units),
/// transit node n6. Shortest road paths n0 -> n3 and n3 -> n0 pass n6 (90 seconds).
/// Two drones, preparation 10 seconds, delivery 20 seconds.
pub struct TestData {
    pub network: Arc<Network>,
    pub config: Arc<Config>,
    pub tour: Arc<Tour>,
    pub n0: NodeId,
    pub n1: NodeId,
    pub n2: NodeId,
    pub n3: NodeId,
    pub n4: NodeId,
    pub n5: NodeId,
    pub n6: NodeId,
}

pub fn init_test_data() -> TestData {
    // load file from json
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/test_instance.json");

    let mut file = File::open(path).unwrap();
    let mut input_data = String::new();
    file.read_to_string(&mut input_data).unwrap();
    let input_data: serde_json::Value = serde_json::from_str(&input_data).unwrap();
    let (network, config, tour) = load_instance_from_json(input_data).unwrap();
    let tour = Arc::new(Tour::new(tour.unwrap(), &network).unwrap());

    TestData {
        network,
        config,
        tour,
        n0: NodeId(0),
        n1: NodeId(1),
        n2: NodeId(2),
        n3: NodeId(3),
        n4: NodeId(4),
        n5: NodeId(5),
        n6: NodeId(6),
    }
}

/// {n0: truck, n1: drone_1, n2: drone_2, n3: truck, n4: drone_1, n5: drone_2}
pub fn default_assignment(d: &TestData) -> VehicleAssignment {
    VehicleAssignment::from_iter([
        (d.n0, VehicleId::Truck),
        (d.n1, VehicleId::Drone(1)),
        (d.n2, VehicleId::Drone(2)),
        (d.n3, VehicleId::Truck),
        (d.n4, VehicleId::Drone(1)),
        (d.n5, VehicleId::Drone(2)),
    ])
}

pub fn default_schedule(d: &TestData) -> Schedule {
    Schedule::build(
        d.tour.clone(),
        default_assignment(d),
        d.network.clone(),
        d.config.clone(),
        Verbosity::Quiet,
    )
    .unwrap()
}
