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

use objective_framework::{EvaluatedSolution, Objective};

use super::LocalImprover;
use crate::local_search::Neighborhood;

/// Walks through the neighborhood in its given order and takes the first improving neighbor.
/// As there is no parallelization this improver is fully deterministic.
pub struct TakeFirst<S, E> {
    neighborhood: Arc<dyn Neighborhood<S, E>>,
    objective: Arc<Objective<S>>,
}

impl<S, E> TakeFirst<S, E> {
    pub fn new(
        neighborhood: Arc<dyn Neighborhood<S, E>>,
        objective: Arc<Objective<S>>,
    ) -> TakeFirst<S, E> {
        TakeFirst {
            neighborhood,
            objective,
        }
    }
}

impl<S: Send + Sync, E> LocalImprover<S, E> for TakeFirst<S, E> {
    fn improve(&self, solution: &EvaluatedSolution<S>) -> Result<Option<EvaluatedSolution<S>>, E> {
        for neighbor in self.neighborhood.neighbors_of(solution.solution()) {
            let evaluated = self.objective.evaluate(neighbor?);
            if evaluated.objective_value() < solution.objective_value() {
                return Ok(Some(evaluated));
            }
        }
        Ok(None)
    }
}
