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

use model::base_types::{NodeId, Verbosity};
use solution::test_utilities::init_test_data;
use solution::TourError;

use super::{GivenTour, NearestNeighbor, Sequencer};
use crate::error::SolverError;

fn ids(tour: &[u32]) -> Vec<NodeId> {
    tour.iter().map(|&id| NodeId(id)).collect()
}

#[test]
fn nearest_neighbor_follows_road_times() {
    // ARRANGE
    let d = init_test_data();
    let sequencer = NearestNeighbor::new(Verbosity::Quiet);

    // ACT
    let tour = sequencer.solve(&d.network).unwrap();

    // ASSERT
    assert_eq!(tour.nodes(), ids(&[0, 1, 2, 3, 4, 5, 0]).as_slice());
}

#[test]
fn nearest_neighbor_with_only_deposit() {
    let input = serde_json::json!({
        "nodes": [{"id": 7, "lat": 0.0, "lon": 0.0}],
        "deposit": 7,
        "roads": []
    });
    let (network, _, _) = model::json_serialisation::load_instance_from_json(input).unwrap();

    let tour = NearestNeighbor::new(Verbosity::Quiet)
        .solve(&network)
        .unwrap();

    assert_eq!(tour.nodes(), ids(&[7, 7]).as_slice());
}

#[test]
fn given_tour_is_validated() {
    let d = init_test_data();

    let valid = GivenTour::new(ids(&[0, 5, 4, 3, 2, 1, 0])).solve(&d.network);
    let missing = GivenTour::new(ids(&[0, 1, 2, 3, 4, 0])).solve(&d.network);

    assert_eq!(valid.unwrap().nodes(), ids(&[0, 5, 4, 3, 2, 1, 0]).as_slice());
    assert!(matches!(
        missing,
        Err(SolverError::Tour(TourError::MissingNode(NodeId(5))))
    ));
}
