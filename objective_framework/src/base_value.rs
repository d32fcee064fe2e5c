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

use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    ops::Add,
};

use time::Duration;

/// A single value of an indicator, e.g., a count of unserved demand units or a makespan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseValue {
    Integer(u64),
    Duration(Duration),
    Maximum,
    Zero,
}

impl BaseValue {
    /// "+x" or "-x" relative to other, empty if equal or not comparable.
    pub fn difference_to(self, other: BaseValue) -> String {
        if self == other {
            return String::new();
        }
        match (self, other) {
            (BaseValue::Integer(a), BaseValue::Integer(b)) => signed_difference(a, b, |x, y| x - y),
            (BaseValue::Duration(a), BaseValue::Duration(b)) => {
                if a.is_infinite() || b.is_infinite() {
                    String::new()
                } else {
                    signed_difference(a, b, |x, y| x - y)
                }
            }
            (BaseValue::Maximum, _) | (_, BaseValue::Maximum) => String::new(),
            (new_value, BaseValue::Zero) => format!("(+{})", new_value),
            (BaseValue::Zero, old_value) => format!("(-{})", old_value),
            _ => String::new(),
        }
    }

    fn rank(&self) -> u64 {
        match self {
            BaseValue::Zero => 0,
            BaseValue::Integer(i) => *i,
            _ => 0,
        }
    }
}

fn signed_difference<V, D>(value: V, value_for_comparison: V, sub: impl Fn(V, V) -> D) -> String
where
    V: PartialOrd + Copy,
    D: fmt::Display,
{
    if value > value_for_comparison {
        format!("(+{})", sub(value, value_for_comparison))
    } else if value < value_for_comparison {
        format!("(-{})", sub(value_for_comparison, value))
    } else {
        String::new()
    }
}

impl Ord for BaseValue {
    /// Zero equals Integer(0) and Duration(0); Maximum is larger than everything else.
    /// Integers and durations are not meant to be compared with each other.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (BaseValue::Maximum, BaseValue::Maximum) => Ordering::Equal,
            (BaseValue::Maximum, _) => Ordering::Greater,
            (_, BaseValue::Maximum) => Ordering::Less,
            (BaseValue::Duration(a), BaseValue::Duration(b)) => a.cmp(b),
            (BaseValue::Duration(a), BaseValue::Zero) => a.cmp(&Duration::ZERO),
            (BaseValue::Zero, BaseValue::Duration(b)) => Duration::ZERO.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl PartialOrd for BaseValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for BaseValue {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (BaseValue::Integer(a), BaseValue::Integer(b)) => BaseValue::Integer(a + b),
            (BaseValue::Duration(a), BaseValue::Duration(b)) => BaseValue::Duration(a + b),
            (BaseValue::Maximum, _) => BaseValue::Maximum,
            (_, BaseValue::Maximum) => BaseValue::Maximum,
            (BaseValue::Zero, value) => value,
            (value, BaseValue::Zero) => value,
            _ => panic!("Cannot add {:?} and {:?}", self, other),
        }
    }
}

impl Sum<Self> for BaseValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BaseValue::Zero, |a, b| a + b)
    }
}

impl fmt::Display for BaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseValue::Integer(i) => write!(f, "{}", i),
            BaseValue::Duration(d) => write!(f, "{}", d),
            BaseValue::Maximum => write!(f, "MAX"),
            BaseValue::Zero => write!(f, "0"),
        }
    }
}
