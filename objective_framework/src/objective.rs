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

use tracing::info;

use crate::{BaseValue, EvaluatedSolution, Level, ObjectiveValue};

/// Hierarchical objective: the first level is most important, later levels only break ties.
pub struct Objective<S> {
    hierarchy_levels: Vec<Level<S>>,
}

// static
impl<S> Objective<S> {
    pub fn new(hierarchy_levels: Vec<Level<S>>) -> Objective<S> {
        Objective { hierarchy_levels }
    }
}

// methods
impl<S> Objective<S> {
    pub fn evaluate(&self, solution: S) -> EvaluatedSolution<S> {
        let objective_value = self.objective_value_of(&solution);
        EvaluatedSolution::new(solution, objective_value)
    }

    pub fn objective_value_of(&self, solution: &S) -> ObjectiveValue {
        ObjectiveValue::new(
            self.hierarchy_levels
                .iter()
                .map(|level| level.evaluate(solution))
                .collect(),
        )
    }

    pub fn number_of_levels(&self) -> usize {
        self.hierarchy_levels.len()
    }

    pub fn objective_value_to_json(&self, objective_value: &ObjectiveValue) -> serde_json::Value {
        let levels: Vec<serde_json::Value> = self
            .hierarchy_levels
            .iter()
            .zip(objective_value.iter())
            .map(|(level, value)| {
                serde_json::json!({
                    "level": level.to_string(),
                    "value": value_to_json(value),
                })
            })
            .collect();
        serde_json::Value::Array(levels)
    }

    pub fn log_objective_value(&self, objective_value: &ObjectiveValue) {
        for (level, value) in self.hierarchy_levels.iter().zip(objective_value.iter()) {
            info!(level = %level, value = %value, "objective");
        }
    }

    pub fn log_objective_value_with_comparison(
        &self,
        objective_value: &ObjectiveValue,
        comparison: &ObjectiveValue,
    ) {
        for ((level, value), comparison_value) in self
            .hierarchy_levels
            .iter()
            .zip(objective_value.iter())
            .zip(comparison.iter())
        {
            info!(
                level = %level,
                value = %value,
                difference = %value.difference_to(*comparison_value),
                "objective"
            );
        }
    }
}

fn value_to_json(value: &BaseValue) -> serde_json::Value {
    match value {
        BaseValue::Integer(i) => serde_json::json!(i),
        BaseValue::Duration(d) if d.is_infinite() => serde_json::json!("Inf"),
        BaseValue::Duration(d) => serde_json::json!(d.in_sec()),
        BaseValue::Maximum => serde_json::json!("MAX"),
        BaseValue::Zero => serde_json::json!(0),
    }
}

impl<S> fmt::Display for Objective<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.hierarchy_levels.iter().enumerate() {
            writeln!(f, "level {}: {}", i + 1, level)?;
        }
        Ok(())
    }
}
