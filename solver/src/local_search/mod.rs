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

mod neighborhood;

use std::cmp::Ordering;
use std::sync::Arc;
use std::time as stdtime;

use heuristic_framework::local_search::local_improver::{LocalImprover, Minimizer, TakeFirst};
use heuristic_framework::local_search::FunctionBetweenSteps;
use heuristic_framework::{LocalSearchSolver, Neighborhood};
use model::base_types::Verbosity;
use model::config::{Config, ImproverKind};
use objective_framework::{EvaluatedSolution, Objective};
use solution::tour::Position;
use solution::{Schedule, ScheduleError};
use tracing::info;

use crate::objective;
pub use neighborhood::DroneSwaps;

/// A schedule together with the tour position of the swap that produced it. The neighborhood
/// only proposes swaps behind this position.
#[derive(Clone)]
pub struct ScheduleWithInfo {
    schedule: Schedule,
    last_swap: Option<Position>,
    print_text: String,
}

impl ScheduleWithInfo {
    pub fn new(
        schedule: Schedule,
        last_swap: Option<Position>,
        print_text: String,
    ) -> ScheduleWithInfo {
        ScheduleWithInfo {
            schedule,
            last_swap,
            print_text,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    pub fn last_swap(&self) -> Option<Position> {
        self.last_swap
    }

    pub fn print_text(&self) -> &str {
        &self.print_text
    }
}

// earlier swaps first, then by assignment
impl Ord for ScheduleWithInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.last_swap
            .cmp(&other.last_swap)
            .then_with(|| self.schedule.assignment().cmp(other.schedule.assignment()))
    }
}

impl PartialOrd for ScheduleWithInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduleWithInfo {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduleWithInfo {}

pub fn build_local_search_solver(
    config: &Config,
    verbosity: Verbosity,
) -> LocalSearchSolver<ScheduleWithInfo, ScheduleError> {
    let objective = Arc::new(objective::build());
    let neighborhood: Arc<dyn Neighborhood<ScheduleWithInfo, ScheduleError>> =
        Arc::new(DroneSwaps::new(verbosity));

    let local_improver: Box<dyn LocalImprover<ScheduleWithInfo, ScheduleError>> =
        match config.improver {
            ImproverKind::TakeFirst => Box::new(TakeFirst::new(
                neighborhood.clone(),
                objective.clone(),
            )),
            ImproverKind::Minimizer => Box::new(Minimizer::new(
                neighborhood.clone(),
                objective.clone(),
            )),
        };

    let function_between_steps: FunctionBetweenSteps<ScheduleWithInfo> = if verbosity.summary()
    {
        Box::new(log_accepted_swap)
    } else {
        Box::new(ignore_step)
    };

    LocalSearchSolver::with_local_improver_and_function(
        neighborhood,
        objective,
        Some(local_improver),
        Some(function_between_steps),
    )
}

fn log_accepted_swap(
    iteration: u32,
    new_solution: &EvaluatedSolution<ScheduleWithInfo>,
    previous_solution: &EvaluatedSolution<ScheduleWithInfo>,
    objective: &Objective<ScheduleWithInfo>,
    start_time: stdtime::Instant,
) {
    info!(
        iteration,
        swap = new_solution.solution().print_text(),
        elapsed_sec = start_time.elapsed().as_secs_f32(),
        "swap accepted"
    );
    objective.log_objective_value_with_comparison(
        new_solution.objective_value(),
        previous_solution.objective_value(),
    );
}

fn ignore_step(
    _: u32,
    _: &EvaluatedSolution<ScheduleWithInfo>,
    _: &EvaluatedSolution<ScheduleWithInfo>,
    _: &Objective<ScheduleWithInfo>,
    _: stdtime::Instant,
) {
}
