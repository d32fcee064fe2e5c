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

pub mod local_improver;

use std::sync::Arc;
use std::time as stdtime;

use local_improver::{LocalImprover, TakeFirst};
use objective_framework::{EvaluatedSolution, Objective};
use tracing::info;

/// Defines the neighbors of a solution. A neighbor that cannot be constructed for a regular
/// reason is simply not yielded, an error stops the whole search.
pub trait Neighborhood<S, E>: Send + Sync {
    fn neighbors_of<'a>(
        &'a self,
        solution: &'a S,
    ) -> Box<dyn Iterator<Item = Result<S, E>> + Send + Sync + 'a>;
}

/// Called after each improving step with
/// (iteration, new solution, previous solution, objective, start time of the search).
pub type FunctionBetweenSteps<S> = Box<
    dyn Fn(u32, &EvaluatedSolution<S>, &EvaluatedSolution<S>, &Objective<S>, stdtime::Instant)
        + Send
        + Sync,
>;

/// Repeats improving steps of the local improver until no improvement is found.
pub struct LocalSearchSolver<S, E> {
    objective: Arc<Objective<S>>,
    local_improver: Box<dyn LocalImprover<S, E>>,
    function_between_steps: FunctionBetweenSteps<S>,
}

impl<S, E> LocalSearchSolver<S, E>
where
    S: Send + Sync + 'static,
    E: Send + 'static,
{
    /// TakeFirst improver, the objective is logged after each step.
    pub fn initialize(
        neighborhood: Arc<dyn Neighborhood<S, E>>,
        objective: Arc<Objective<S>>,
    ) -> Self {
        Self::with_local_improver_and_function(neighborhood, objective, None, None)
    }

    pub fn with_local_improver_and_function(
        neighborhood: Arc<dyn Neighborhood<S, E>>,
        objective: Arc<Objective<S>>,
        local_improver: Option<Box<dyn LocalImprover<S, E>>>,
        function_between_steps: Option<FunctionBetweenSteps<S>>,
    ) -> Self {
        let local_improver = local_improver
            .unwrap_or_else(|| Box::new(TakeFirst::new(neighborhood, objective.clone())));
        let function_between_steps =
            function_between_steps.unwrap_or_else(|| Box::new(default_function_between_steps::<S>));
        Self {
            objective,
            local_improver,
            function_between_steps,
        }
    }

    pub fn objective(&self) -> Arc<Objective<S>> {
        self.objective.clone()
    }

    pub fn solve(&self, initial_solution: S) -> Result<EvaluatedSolution<S>, E> {
        let start_time = stdtime::Instant::now();
        let mut current = self.objective.evaluate(initial_solution);
        let mut iteration: u32 = 0;
        while let Some(new_solution) = self.local_improver.improve(&current)? {
            iteration += 1;
            (self.function_between_steps)(
                iteration,
                &new_solution,
                &current,
                &self.objective,
                start_time,
            );
            current = new_solution;
        }
        Ok(current)
    }
}

fn default_function_between_steps<S>(
    iteration: u32,
    new_solution: &EvaluatedSolution<S>,
    previous_solution: &EvaluatedSolution<S>,
    objective: &Objective<S>,
    start_time: stdtime::Instant,
) {
    info!(
        iteration,
        elapsed_sec = start_time.elapsed().as_secs_f32(),
        "local search step"
    );
    objective.log_objective_value_with_comparison(
        new_solution.objective_value(),
        previous_solution.objective_value(),
    );
}
