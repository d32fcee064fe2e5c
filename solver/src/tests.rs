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

use model::base_types::{NodeId, Verbosity};
use model::ConfigError;
use model::config::{Config, DepositRevisitPolicy, ImproverKind, LaunchPolicy, SequencerKind};
use solution::test_utilities::init_test_data;
use solution::{TourError, Violation};
use time::Duration;

use crate::error::SolverError;
use crate::TruckDroneSolver;

fn test_tour() -> Option<Vec<NodeId>> {
    Some([0, 1, 2, 3, 4, 5, 0].iter().map(|&i| NodeId(i)).collect())
}

#[test]
fn solve_test_instance_with_given_tour() {
    // ARRANGE
    let d = init_test_data();
    let solver = TruckDroneSolver::initialize(d.network.clone(), d.config.clone(), Verbosity::Quiet);

    // ACT
    let solution = solver.solve(test_tour()).unwrap();

    // ASSERT
    assert_eq!(solution.solution().makespan(), Duration::from_whole_seconds(270));
    assert!(solution.solution().check_feasibility().is_feasible());
    assert_eq!(solution.solution().unserved_demand(), 0);
}

#[test]
fn nearest_neighbor_sequencer_needs_no_tour() {
    let d = init_test_data();
    let mut config = (*d.config).clone();
    config.sequencer = SequencerKind::NearestNeighbor;
    let solver = TruckDroneSolver::initialize(d.network.clone(), Arc::new(config), Verbosity::Quiet);

    let solution = solver.solve(None).unwrap();

    assert_eq!(solution.solution().tour(), d.tour.as_ref());
    assert_eq!(solution.solution().makespan(), Duration::from_whole_seconds(270));
}

#[test]
fn given_sequencer_without_tour_fails() {
    let d = init_test_data();
    let solver = TruckDroneSolver::initialize(d.network.clone(), d.config.clone(), Verbosity::Quiet);

    let result = solver.solve(None);

    assert!(matches!(result, Err(SolverError::MissingTour)));
}

#[test]
fn invalid_given_tour_is_a_tour_error() {
    let d = init_test_data();
    let solver = TruckDroneSolver::initialize(d.network.clone(), d.config.clone(), Verbosity::Quiet);
    let tour = Some([0, 1, 9, 0].iter().map(|&i| NodeId(i)).collect());

    let result = solver.solve(tour);

    assert!(matches!(
        result,
        Err(SolverError::Tour(TourError::UnknownNode(NodeId(9))))
    ));
}

#[test]
fn wrapped_errors_convert_into_solver_error() {
    fn check_drones(given: i64) -> Result<(), SolverError> {
        Err(ConfigError::InvalidDroneCount { given, max: 8 })?
    }

    let error = check_drones(12).unwrap_err();

    assert!(matches!(
        error,
        SolverError::Config(ConfigError::InvalidDroneCount { given: 12, max: 8 })
    ));
    assert_eq!(
        error.to_string(),
        "invalid number of drones: 12 (allowed: 0..=8)"
    );
}

#[test]
fn local_search_never_worsens_the_schedule() {
    let d = init_test_data();
    for number_of_drones in 0..=3 {
        for launch_policy in [LaunchPolicy::SegmentStart, LaunchPolicy::BestLaunchNode] {
            for improver in [ImproverKind::TakeFirst, ImproverKind::Minimizer] {
                let mut config: Config = (*d.config)
                    .clone()
                    .set_launch_policy(launch_policy)
                    .set_improver(improver);
                config.number_of_drones = number_of_drones;
                let solver =
                    TruckDroneSolver::initialize(d.network.clone(), Arc::new(config), Verbosity::Quiet);

                let initial = solver.initial_schedule(test_tour()).unwrap();
                let solution = solver.solve(test_tour()).unwrap();

                assert!(solution.solution().makespan() <= initial.makespan());
                assert!(solution.solution().check_feasibility().is_feasible());
                for (node, vehicle) in solution.solution().assignment().iter() {
                    if d.network.is_super_node(node) {
                        assert!(vehicle.is_truck());
                    }
                }
            }
        }
    }
}

#[test]
fn rejected_deposit_revisit_is_infeasible() {
    let d = init_test_data();
    let mut config = (*d.config)
        .clone()
        .set_deposit_revisit(DepositRevisitPolicy::Reject);
    config.number_of_drones = 0;
    let solver = TruckDroneSolver::initialize(d.network.clone(), Arc::new(config), Verbosity::Quiet);
    let tour = Some([0, 1, 2, 0, 3, 4, 5, 0].iter().map(|&i| NodeId(i)).collect());

    let result = solver.solve(tour);

    match result {
        Err(SolverError::Infeasible(report)) => {
            assert_eq!(report.violations(), &[Violation::DepositRevisited(1)]);
        }
        _ => panic!("deposit revisit must be rejected"),
    }
}

#[test]
fn objective_has_two_levels() {
    let d = init_test_data();
    let solver = TruckDroneSolver::initialize(d.network.clone(), d.config.clone(), Verbosity::Quiet);

    let objective = solver.objective();

    assert_eq!(objective.number_of_levels(), 2);
    assert_eq!(
        objective.to_string(),
        "level 1: unservedDemand\nlevel 2: makespan\n"
    );
}
