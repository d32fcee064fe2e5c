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
use rayon::iter::{ParallelBridge, ParallelIterator};

use super::LocalImprover;
use crate::local_search::Neighborhood;

/// Evaluates the whole neighborhood in parallel and takes the best neighbor if it improves.
/// Ties are broken by the order of the solutions, so the result does not depend on the
/// scheduling of the threads.
pub struct Minimizer<S, E> {
    neighborhood: Arc<dyn Neighborhood<S, E>>,
    objective: Arc<Objective<S>>,
}

impl<S, E> Minimizer<S, E> {
    pub fn new(
        neighborhood: Arc<dyn Neighborhood<S, E>>,
        objective: Arc<Objective<S>>,
    ) -> Minimizer<S, E> {
        Minimizer {
            neighborhood,
            objective,
        }
    }
}

impl<S, E> LocalImprover<S, E> for Minimizer<S, E>
where
    S: Send + Sync + Ord,
    E: Send,
{
    fn improve(&self, solution: &EvaluatedSolution<S>) -> Result<Option<EvaluatedSolution<S>>, E> {
        let best_neighbor_opt = self
            .neighborhood
            .neighbors_of(solution.solution())
            .par_bridge()
            .map(|neighbor| neighbor.map(|n| self.objective.evaluate(n)))
            .try_reduce_with(|s1, s2| Ok(s1.better_of(s2)));

        match best_neighbor_opt {
            Some(best_neighbor) => {
                let best_neighbor = best_neighbor?;
                if best_neighbor.objective_value() < solution.objective_value() {
                    Ok(Some(best_neighbor))
                } else {
                    Ok(None) // no improvement found
                }
            }
            None => Ok(None),
        }
    }
}
