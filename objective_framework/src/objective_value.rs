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

use std::{cmp::Ordering, slice::Iter};

use crate::base_value::BaseValue;

/// The hierarchical objective value of a solution, compared lexicographically.
#[derive(Debug, Clone)]
pub struct ObjectiveValue {
    objective_vector: Vec<BaseValue>,
}

impl ObjectiveValue {
    pub fn new(objective_vector: Vec<BaseValue>) -> ObjectiveValue {
        ObjectiveValue { objective_vector }
    }

    pub fn iter(&self) -> Iter<BaseValue> {
        self.objective_vector.iter()
    }

    pub fn level(&self, index: usize) -> Option<BaseValue> {
        self.objective_vector.get(index).copied()
    }
}

impl Ord for ObjectiveValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.objective_vector
            .iter()
            .zip(other.objective_vector.iter())
            .fold(Ordering::Equal, |acc, (value, other_value)| {
                acc.then_with(|| value.cmp(other_value))
            })
    }
}

impl PartialOrd for ObjectiveValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ObjectiveValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for ObjectiveValue {}
