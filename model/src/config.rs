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
use std::str::FromStr;

use crate::base_types::{DroneIdx, Duration};
use crate::error::ConfigError;

pub const MAX_NUMBER_OF_DRONES: DroneIdx = 32;

pub const DEFAULT_NUMBER_OF_DRONES: DroneIdx = 2;
pub const DEFAULT_PREPARATION_TIME_IN_SECONDS: f64 = 30.0;
pub const DEFAULT_DELIVERY_TIME_IN_SECONDS: f64 = 60.0;
pub const DEFAULT_DRONE_SPEED_IN_KMH: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub number_of_drones: DroneIdx,
    pub durations: ConfigDurations,
    pub drone_speed_in_meter_per_second: f64,
    pub launch_policy: LaunchPolicy,
    pub improver: ImproverKind,
    pub sequencer: SequencerKind,
    pub deposit_revisit: DepositRevisitPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigDurations {
    pub preparation: Duration, // truck-side PREP per launched drone
    pub delivery: Duration,    // truck-side DELIVER per stop
}

/// Where along the road path of a segment a drone is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPolicy {
    /// always at the first node of the segment
    SegmentStart,
    /// at the path node minimizing drone_time(launch, target) + drone_time(target, rendezvous)
    BestLaunchNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImproverKind {
    TakeFirst,
    Minimizer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerKind {
    NearestNeighbor,
    Given,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositRevisitPolicy {
    Warn,
    Reject,
}

// static functions
impl Config {
    /// Validates all parameters; durations in seconds, speed in km/h.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number_of_drones: i64,
        preparation_time_in_seconds: f64,
        delivery_time_in_seconds: f64,
        drone_speed_in_kmh: f64,
        launch_policy: LaunchPolicy,
        improver: ImproverKind,
        sequencer: SequencerKind,
        deposit_revisit: DepositRevisitPolicy,
    ) -> Result<Config, ConfigError> {
        if number_of_drones < 0 || number_of_drones > MAX_NUMBER_OF_DRONES as i64 {
            return Err(ConfigError::InvalidDroneCount {
                given: number_of_drones,
                max: MAX_NUMBER_OF_DRONES,
            });
        }
        let preparation = Duration::from_seconds(preparation_time_in_seconds).map_err(|_| {
            ConfigError::InvalidValue {
                parameter: "preparationTimeInSeconds",
                value: preparation_time_in_seconds,
            }
        })?;
        let delivery = Duration::from_seconds(delivery_time_in_seconds).map_err(|_| {
            ConfigError::InvalidValue {
                parameter: "deliveryTimeInSeconds",
                value: delivery_time_in_seconds,
            }
        })?;
        if preparation.is_infinite() || delivery.is_infinite() {
            return Err(ConfigError::InvalidValue {
                parameter: "durations",
                value: f64::INFINITY,
            });
        }
        if !(drone_speed_in_kmh.is_finite() && drone_speed_in_kmh > 0.0) {
            return Err(ConfigError::InvalidValue {
                parameter: "droneSpeedInKmh",
                value: drone_speed_in_kmh,
            });
        }
        Ok(Config {
            number_of_drones: number_of_drones as DroneIdx,
            durations: ConfigDurations {
                preparation,
                delivery,
            },
            drone_speed_in_meter_per_second: drone_speed_in_kmh / 3.6,
            launch_policy,
            improver,
            sequencer,
            deposit_revisit,
        })
    }

    /// Default parameters with the given number of drones.
    pub fn with_drones(number_of_drones: DroneIdx) -> Result<Config, ConfigError> {
        Config::new(
            number_of_drones as i64,
            DEFAULT_PREPARATION_TIME_IN_SECONDS,
            DEFAULT_DELIVERY_TIME_IN_SECONDS,
            DEFAULT_DRONE_SPEED_IN_KMH,
            LaunchPolicy::SegmentStart,
            ImproverKind::TakeFirst,
            SequencerKind::NearestNeighbor,
            DepositRevisitPolicy::Warn,
        )
    }
}

// methods
impl Config {
    pub fn set_launch_policy(mut self, launch_policy: LaunchPolicy) -> Config {
        self.launch_policy = launch_policy;
        self
    }

    pub fn set_improver(mut self, improver: ImproverKind) -> Config {
        self.improver = improver;
        self
    }

    pub fn set_deposit_revisit(mut self, deposit_revisit: DepositRevisitPolicy) -> Config {
        self.deposit_revisit = deposit_revisit;
        self
    }
}

/// Parses camelCase policy names, listing the available names on failure.
macro_rules! policy_from_str {
    ($policy:ty, $kind:expr, $( $name:literal => $variant:expr ),+ $(,)?) => {
        impl FromStr for $policy {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok($variant), )+
                    _ => Err(ConfigError::InvalidPolicy {
                        kind: $kind,
                        given: s.to_string(),
                        available: [$( $name ),+].join(", "),
                    }),
                }
            }
        }

        impl fmt::Display for $policy {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                $( if *self == $variant { return write!(f, "{}", $name); } )+
                Ok(())
            }
        }
    };
}

policy_from_str!(LaunchPolicy, "launch",
    "segmentStart" => LaunchPolicy::SegmentStart,
    "bestLaunchNode" => LaunchPolicy::BestLaunchNode,
);

policy_from_str!(ImproverKind, "improver",
    "takeFirst" => ImproverKind::TakeFirst,
    "minimizer" => ImproverKind::Minimizer,
);

policy_from_str!(SequencerKind, "sequencer",
    "nearestNeighbor" => SequencerKind::NearestNeighbor,
    "given" => SequencerKind::Given,
);

policy_from_str!(DepositRevisitPolicy, "deposit revisit",
    "warn" => DepositRevisitPolicy::Warn,
    "reject" => DepositRevisitPolicy::Reject,
);
