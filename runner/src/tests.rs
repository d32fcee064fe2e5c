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

use std::fs;

use model::base_types::Verbosity;
use solver::SolverError;

use super::solve_instance;

fn test_instance() -> serde_json::Value {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../solution/resources/test_instance.json"
    );
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn solve_test_instance() {
    // ARRANGE
    let input_data = test_instance();

    // ACT
    let output = solve_instance(input_data, Verbosity::Quiet).unwrap();

    // ASSERT
    assert_eq!(output["schedule"]["makespanInSeconds"], serde_json::json!(270.0));
    assert_eq!(output["info"]["numberOfDrones"], 2);
    assert_eq!(output["info"]["totalDemand"], 6);
    assert_eq!(output["objectiveValue"][0]["value"], 0);
    assert_eq!(output["objectiveValue"][1]["value"], serde_json::json!(270.0));
}

#[test]
fn invalid_parameters_are_reported() {
    let mut input_data = test_instance();
    input_data["parameters"]["numberOfDrones"] = serde_json::json!(33);

    let result = solve_instance(input_data, Verbosity::Quiet);

    assert!(matches!(result, Err(SolverError::Instance(_))));
}
