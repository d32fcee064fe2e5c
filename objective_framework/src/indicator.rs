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

use crate::base_value::BaseValue;

/// A measurable quantity of a solution, e.g., the makespan of a schedule.
pub trait Indicator<S>: Send + Sync {
    fn evaluate(&self, solution: &S) -> BaseValue;

    fn name(&self) -> String;
}
