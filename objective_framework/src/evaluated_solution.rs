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

use std::cmp::Ordering;

use crate::ObjectiveValue;

#[derive(Debug, Clone)]
pub struct EvaluatedSolution<S> {
    solution: S,
    objective_value: ObjectiveValue,
}

impl<S> EvaluatedSolution<S> {
    pub fn new(solution: S, objective_value: ObjectiveValue) -> EvaluatedSolution<S> {
        EvaluatedSolution {
            solution,
            objective_value,
        }
    }

    pub fn solution(&self) -> &S {
        &self.solution
    }

    pub fn objective_value(&self) -> &ObjectiveValue {
        &self.objective_value
    }

    /// Replaces the solution by an equivalent one (same objective value).
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> EvaluatedSolution<T> {
        EvaluatedSolution {
            solution: f(self.solution),
            objective_value: self.objective_value,
        }
    }
}

impl<S: Ord> EvaluatedSolution<S> {
    /// Smaller objective value wins, ties are broken by the order of the solutions.
    pub fn better_of(self, other: Self) -> Self {
        match self
            .objective_value
            .cmp(&other.objective_value)
            .then_with(|| self.solution.cmp(&other.solution))
        {
            Ordering::Greater => other,
            _ => self,
        }
    }
}

impl<S> Ord for EvaluatedSolution<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.objective_value.cmp(&other.objective_value)
    }
}

impl<S> PartialOrd for EvaluatedSolution<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for EvaluatedSolution<S> {
    fn eq(&self, other: &Self) -> bool {
        self.objective_value == other.objective_value
    }
}

impl<S> Eq for EvaluatedSolution<S> {}
