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
use std::iter::Sum;
use std::ops::Add;
use std::ops::Sub;

pub type Milliseconds = u64;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)] // care the ordering of the variants is important
pub enum Duration {
    Length(Milliseconds),
    Infinity, // always longer than all other Durations
}

////////////////////////////////////////////////////////////////////
////////////////////////// Duration ////////////////////////////////
////////////////////////////////////////////////////////////////////

impl Duration {
    pub const ZERO: Duration = Duration::Length(0);

    pub fn in_millis(&self) -> Milliseconds {
        match self {
            Duration::Infinity => panic!("Cannot get milliseconds of Duration::Infinity."),
            Duration::Length(ms) => *ms,
        }
    }

    pub fn in_sec(&self) -> f64 {
        match self {
            Duration::Infinity => f64::INFINITY,
            Duration::Length(ms) => *ms as f64 / 1000.0,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Duration::Infinity)
    }

    pub fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    /// Returns None if other is longer than self (the difference would be negative).
    /// Infinity - finite is Infinity, anything - Infinity is None.
    pub fn checked_sub(self, other: Duration) -> Option<Duration> {
        match (self, other) {
            (_, Duration::Infinity) => None,
            (Duration::Infinity, _) => Some(Duration::Infinity),
            (Duration::Length(l1), Duration::Length(l2)) => l1.checked_sub(l2).map(Duration::Length),
        }
    }
}

impl Duration {
    /// Seconds are rounded to the millisecond. Negative or NaN input is rejected.
    pub fn from_seconds(seconds: f64) -> Result<Duration, String> {
        if seconds.is_nan() || seconds < 0.0 {
            return Err(format!("Invalid duration: {} seconds.", seconds));
        }
        if seconds.is_infinite() {
            return Ok(Duration::Infinity);
        }
        Ok(Duration::Length((seconds * 1000.0).round() as Milliseconds))
    }

    pub fn from_millis(ms: Milliseconds) -> Duration {
        Duration::Length(ms)
    }

    pub fn from_whole_seconds(seconds: u32) -> Duration {
        Duration::Length(seconds as Milliseconds * 1000)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match self {
            Duration::Infinity => Duration::Infinity,
            Duration::Length(l1) => match other {
                Duration::Infinity => Duration::Infinity,
                Duration::Length(l2) => Duration::Length(l1 + l2),
            },
        }
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(other).unwrap_or_else(|| {
            panic!(
                "Cannot subtract a longer duration ({}) from a shorter duration ({}).",
                other, self
            )
        })
    }
}

impl Sum for Duration {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Duration::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Duration::Length(ms) => {
                let millis = ms % 1000;
                let seconds = (ms / 1000) % 60;
                let minutes = (ms / 60_000) % 60;
                let hours = ms / 3_600_000;
                if millis > 0 {
                    write!(f, "{:02}:{:02}:{:02}.{:03}h", hours, minutes, seconds, millis)
                } else {
                    write!(f, "{:02}:{:02}:{:02}h", hours, minutes, seconds)
                }
            }
            Duration::Infinity => write!(f, "Inf"),
        }
    }
}
