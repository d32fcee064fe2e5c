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

mod minimizer;
mod take_first;

pub use minimizer::Minimizer;
pub use take_first::TakeFirst;

use objective_framework::EvaluatedSolution;

/// Computes for a given solution a neighbor with strictly better objective value.
/// Returns Ok(None) if there is no better solution in the neighborhood.
pub trait LocalImprover<S, E>: Send + Sync {
    fn improve(&self, solution: &EvaluatedSolution<S>) -> Result<Option<EvaluatedSolution<S>>, E>;
}
