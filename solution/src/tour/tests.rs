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

use model::base_types::NodeId;

use crate::error::TourError;
use crate::test_utilities::init_test_data;
use crate::tour::Tour;

fn ids(ids: &[u32]) -> Vec<NodeId> {
    ids.iter().map(|&i| NodeId(i)).collect()
}

#[test]
fn valid_tour() {
    // ARRANGE
    let d = init_test_data();

    // ACT
    let tour = Tour::new(ids(&[0, 5, 4, 3, 2, 1, 0]), &d.network).unwrap();

    // ASSERT
    assert_eq!(tour.len(), 7);
    assert_eq!(tour.first_node(), d.n0);
    assert_eq!(tour.last_node(), d.n0);
    assert_eq!(tour.position_of(d.n3), Some(3));
    assert_eq!(tour.nth_node(1), Some(d.n5));
    assert!(tour.is_last_position(6));
    assert_eq!(
        tour.consecutive_pairs().nth(2),
        Some((2, d.n4, d.n3))
    );
    assert_eq!(tour.to_string(), "0 -> 5 -> 4 -> 3 -> 2 -> 1 -> 0");
}

#[test]
fn deposit_revisits_are_allowed() {
    let d = init_test_data();

    let tour = Tour::new(ids(&[0, 1, 2, 0, 3, 4, 5, 0]), &d.network);

    assert!(tour.is_ok());
}

#[test]
fn invalid_tours() {
    let d = init_test_data();
    let new = |nodes: &[u32]| Tour::new(ids(nodes), &d.network);

    assert_eq!(new(&[0]), Err(TourError::TooShort(1)));
    assert_eq!(
        new(&[1, 2, 3, 4, 5, 0]),
        Err(TourError::NotStartingAtDeposit(d.n1))
    );
    assert_eq!(
        new(&[0, 1, 2, 3, 4, 5]),
        Err(TourError::NotEndingAtDeposit(d.n5))
    );
    assert_eq!(
        new(&[0, 1, 2, 3, 4, 5, 9, 0]),
        Err(TourError::UnknownNode(NodeId(9)))
    );
    assert_eq!(
        new(&[0, 1, 6, 2, 3, 4, 5, 0]),
        Err(TourError::NotADemandNode(d.n6))
    );
    assert_eq!(
        new(&[0, 1, 2, 3, 4, 5, 1, 0]),
        Err(TourError::DuplicateNode(d.n1))
    );
    assert_eq!(
        new(&[0, 1, 2, 3, 5, 0]),
        Err(TourError::MissingNode(d.n4))
    );
}
