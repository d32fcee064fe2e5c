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

use derive_more::{Display, From};

use model::{ConfigError, InstanceError, NetworkError};
use solution::{FeasibilityReport, ScheduleError, TourError};

/// Every fatal outcome of a solver run. Infeasible candidates of the local search never end
/// up here.
#[derive(Display, From, Debug)]
pub enum SolverError {
    #[display(fmt = "{}", _0)]
    Instance(InstanceError),
    #[display(fmt = "{}", _0)]
    Config(ConfigError),
    #[display(fmt = "{}", _0)]
    Network(NetworkError),
    #[display(fmt = "invalid tour: {}", _0)]
    Tour(TourError),
    #[display(fmt = "schedule construction failed: {}", _0)]
    Schedule(ScheduleError),
    #[display(fmt = "sequencer 'given' needs a tour in the instance")]
    #[from(ignore)]
    MissingTour,
    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    Infeasible(FeasibilityReport),
}

impl std::error::Error for SolverError {}
