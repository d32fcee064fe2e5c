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

use std::{fmt, ops::Mul};

use time::Duration;

use super::base_value::BaseValue;

/// Non-negative integral weight of an indicator within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coefficient(u32);

impl Coefficient {
    pub fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl From<u32> for Coefficient {
    fn from(value: u32) -> Coefficient {
        Coefficient(value)
    }
}

impl Mul<BaseValue> for Coefficient {
    type Output = BaseValue;

    fn mul(self, other: BaseValue) -> BaseValue {
        match other {
            BaseValue::Integer(b) => BaseValue::Integer(self.0 as u64 * b),
            BaseValue::Duration(Duration::Infinity) => BaseValue::Duration(Duration::Infinity),
            BaseValue::Duration(b) => {
                BaseValue::Duration(Duration::from_millis(self.0 as u64 * b.in_millis()))
            }
            BaseValue::Maximum => BaseValue::Maximum,
            BaseValue::Zero => BaseValue::Zero,
        }
    }
}

// also for references, so '*' can be used while iterating over summands.
impl Mul<BaseValue> for &Coefficient {
    type Output = BaseValue;
    fn mul(self, other: BaseValue) -> BaseValue {
        (*self).mul(other)
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
