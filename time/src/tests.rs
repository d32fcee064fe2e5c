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

#[cfg(test)]
use super::*;

#[test]
fn sum_up_duration() {
    let dur1 = Duration::from_whole_seconds(5000 * 3600 + 40 * 60 + 31);
    let dur2 = Duration::from_whole_seconds(46 * 60 + 30);
    let sum = Duration::from_whole_seconds(5001 * 3600 + 27 * 60 + 1);
    assert!(
        dur1 + dur2 == sum,
        "Duration does not sum up correctly. dur1: {} + dur2: {} is {}; but should be {}",
        dur1,
        dur2,
        dur1 + dur2,
        sum
    );
}

#[test]
fn seconds_are_rounded_to_millis() {
    let dur = Duration::from_seconds(12.0004).unwrap();
    assert_eq!(dur, Duration::from_millis(12000));
    let dur = Duration::from_seconds(0.0016).unwrap();
    assert_eq!(dur, Duration::from_millis(2));
    assert_eq!(Duration::from_seconds(90.5).unwrap(), Duration::from_millis(90_500));
}

#[test]
fn negative_seconds_are_rejected() {
    assert!(Duration::from_seconds(-0.5).is_err());
    assert!(Duration::from_seconds(f64::NAN).is_err());
    assert_eq!(
        Duration::from_seconds(f64::INFINITY).unwrap(),
        Duration::Infinity
    );
}

#[test]
fn checked_sub_detects_negative_difference() {
    let long = Duration::from_whole_seconds(42);
    let short = Duration::from_whole_seconds(30);
    assert_eq!(long.checked_sub(short), Some(Duration::from_whole_seconds(12)));
    assert_eq!(short.checked_sub(long), None);
    assert_eq!(short.checked_sub(short), Some(Duration::ZERO));
    assert_eq!(Duration::Infinity.checked_sub(short), Some(Duration::Infinity));
    assert_eq!(short.checked_sub(Duration::Infinity), None);
}

#[test]
fn infinity_is_absorbing_and_largest() {
    let dur = Duration::from_whole_seconds(10);
    assert_eq!(dur + Duration::Infinity, Duration::Infinity);
    assert_eq!(Duration::Infinity + dur, Duration::Infinity);
    assert!(Duration::Infinity > Duration::from_whole_seconds(u32::MAX));
}

#[test]
fn sum_of_durations() {
    let durations = vec![
        Duration::from_seconds(1.5).unwrap(),
        Duration::from_seconds(2.25).unwrap(),
        Duration::from_whole_seconds(60),
    ];
    let sum: Duration = durations.into_iter().sum();
    assert_eq!(sum, Duration::from_millis(63_750));
    assert_eq!(sum.in_sec(), 63.75);
}

#[test]
fn display_of_duration() {
    assert_eq!(Duration::from_whole_seconds(3725).to_string(), "01:02:05h");
    assert_eq!(Duration::from_millis(61_250).to_string(), "00:01:01.250h");
    assert_eq!(Duration::Infinity.to_string(), "Inf");
}

#[test]
#[should_panic]
fn subtracting_longer_duration_panics() {
    let _ = Duration::from_whole_seconds(1) - Duration::from_whole_seconds(2);
}

#[test]
fn empty_sum_is_zero() {
    let sum: Duration = Vec::<Duration>::new().into_iter().sum();
    assert_eq!(sum, Duration::ZERO);
    assert!(sum.is_zero());
}
