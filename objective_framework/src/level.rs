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

use std::fmt;

use crate::{base_value::BaseValue, coefficient::Coefficient, indicator::Indicator};

/// A level of the objective hierarchy: a weighted sum of indicators.
pub struct Level<S> {
    summands: Vec<(Coefficient, Box<dyn Indicator<S>>)>,
}

impl<S> Level<S> {
    pub fn new(summands: Vec<(Coefficient, Box<dyn Indicator<S>>)>) -> Level<S> {
        Level { summands }
    }

    pub fn evaluate(&self, solution: &S) -> BaseValue {
        self.summands
            .iter()
            .map(|(coefficient, indicator)| coefficient * indicator.evaluate(solution))
            .sum()
    }
}

impl<S> fmt::Display for Level<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summands = self
            .summands
            .iter()
            .map(|(coefficient, indicator)| {
                if coefficient.is_one() {
                    indicator.name()
                } else {
                    format!("{}*{}", coefficient, indicator.name())
                }
            })
            .collect::<Vec<String>>()
            .join(" + ");
        write!(f, "{}", summands)
    }
}
