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

use std::time as stdtime;

use model::base_types::Verbosity;
use model::json_serialisation::load_instance_from_json;
use solution::json_serialisation::schedule_to_json;
use solver::{SolverError, TruckDroneSolver};
use tracing::info;

/// Loads the instance, solves it and returns schedule, objective value and run information
/// as json.
pub fn solve_instance(
    input_data: serde_json::Value,
    verbosity: Verbosity,
) -> Result<serde_json::Value, SolverError> {
    let start_time = stdtime::Instant::now();
    let (network, config, tour) = load_instance_from_json(input_data)?;
    if verbosity.summary() {
        info!(
            nodes = network.size(),
            demand_nodes = network.number_of_demand_nodes(),
            total_demand = network.total_demand(),
            drones = config.number_of_drones,
            "instance loaded"
        );
    }

    let solver = TruckDroneSolver::initialize(network.clone(), config.clone(), verbosity);
    let final_solution = solver.solve(tour)?;
    let objective = solver.objective();
    if verbosity.summary() {
        objective.log_objective_value(final_solution.objective_value());
    }

    let running_time = start_time.elapsed().as_secs_f64();
    if verbosity.summary() {
        info!(running_time_sec = running_time, "finished");
    }

    Ok(serde_json::json!({
        "info": {
            "runningTimeInSeconds": running_time,
            "numberOfNodes": network.size(),
            "numberOfDemandNodes": network.number_of_demand_nodes(),
            "totalDemand": network.total_demand(),
            "numberOfDrones": config.number_of_drones,
        },
        "objectiveValue": objective.objective_value_to_json(final_solution.objective_value()),
        "schedule": schedule_to_json(final_solution.solution()),
    }))
}

#[cfg(test)]
mod tests;
