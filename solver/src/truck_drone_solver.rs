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
use std::time as stdtime;

use model::base_types::{NodeId, Verbosity};
use model::config::{Config, SequencerKind};
use model::network::Network;
use objective_framework::{EvaluatedSolution, Objective};
use solution::{FeasibilityReport, Schedule};
use tracing::{info, warn};

use crate::error::SolverError;
use crate::local_search::{build_local_search_solver, ScheduleWithInfo};
use crate::objective;
use crate::planner::AssignmentPlanner;
use crate::sequencer::{GivenTour, NearestNeighbor, Sequencer};

/// Sequencer -> planner -> builder -> feasibility check -> local search.
pub struct TruckDroneSolver {
    network: Arc<Network>,
    config: Arc<Config>,
    verbosity: Verbosity,
}

impl TruckDroneSolver {
    pub fn initialize(
        network: Arc<Network>,
        config: Arc<Config>,
        verbosity: Verbosity,
    ) -> TruckDroneSolver {
        TruckDroneSolver {
            network,
            config,
            verbosity,
        }
    }

    pub fn objective(&self) -> Objective<ScheduleWithInfo> {
        objective::build()
    }

    /// Builds the initial schedule for the tour of the configured sequencer and improves it.
    /// given_tour is used by the 'given' sequencer.
    pub fn solve(
        &self,
        given_tour: Option<Vec<NodeId>>,
    ) -> Result<EvaluatedSolution<Schedule>, SolverError> {
        let start_time = stdtime::Instant::now();

        let initial_schedule = self.initial_schedule(given_tour)?;
        let local_search_solver = build_local_search_solver(&self.config, self.verbosity);
        if self.verbosity.summary() {
            info!(
                makespan = %initial_schedule.makespan(),
                "initial schedule built, starting local search"
            );
        }

        let final_solution = local_search_solver
            .solve(ScheduleWithInfo::new(
                initial_schedule,
                None,
                String::from("initial"),
            ))?
            .map(ScheduleWithInfo::into_schedule);

        let report = final_solution.solution().check_feasibility();
        if !report.is_feasible() {
            return Err(SolverError::Infeasible(report));
        }
        if self.verbosity.summary() {
            info!(
                makespan = %final_solution.solution().makespan(),
                elapsed_sec = start_time.elapsed().as_secs_f32(),
                "local search finished"
            );
        }
        Ok(final_solution)
    }

    /// The schedule of the planner's assignment, before any swap.
    pub fn initial_schedule(&self, given_tour: Option<Vec<NodeId>>) -> Result<Schedule, SolverError> {
        let sequencer: Box<dyn Sequencer> = match self.config.sequencer {
            SequencerKind::NearestNeighbor => {
                if given_tour.is_some() && self.verbosity.summary() {
                    info!("tour of the instance ignored by the nearest neighbor sequencer");
                }
                Box::new(NearestNeighbor::new(self.verbosity))
            }
            SequencerKind::Given => {
                Box::new(GivenTour::new(given_tour.ok_or(SolverError::MissingTour)?))
            }
        };
        let tour = Arc::new(sequencer.solve(&self.network)?);

        let assignment =
            AssignmentPlanner::new(self.network.clone(), self.config.number_of_drones, self.verbosity)
                .plan(&tour);

        let schedule = Schedule::build(
            tour,
            assignment,
            self.network.clone(),
            self.config.clone(),
            self.verbosity,
        )?;
        let report = schedule.check_feasibility();
        self.log_warnings(&report);
        if !report.is_feasible() {
            return Err(SolverError::Infeasible(report));
        }
        Ok(schedule)
    }

    fn log_warnings(&self, report: &FeasibilityReport) {
        if !self.verbosity.summary() {
            return;
        }
        for warning in report.warnings() {
            warn!(%warning, "feasibility warning");
        }
    }
}
