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

use time::Duration;

use crate::{BaseValue, Coefficient, Indicator, Level, Objective};

// a toy solution: (number of unserved units, makespan in seconds)
type Toy = (u64, u32);

struct Unserved;

impl Indicator<Toy> for Unserved {
    fn evaluate(&self, solution: &Toy) -> BaseValue {
        BaseValue::Integer(solution.0)
    }

    fn name(&self) -> String {
        String::from("unservedDemand")
    }
}

struct Makespan;

impl Indicator<Toy> for Makespan {
    fn evaluate(&self, solution: &Toy) -> BaseValue {
        BaseValue::Duration(Duration::from_whole_seconds(solution.1))
    }

    fn name(&self) -> String {
        String::from("makespan")
    }
}

fn toy_objective() -> Objective<Toy> {
    Objective::new(vec![
        Level::new(vec![(Coefficient::from(1), Box::new(Unserved))]),
        Level::new(vec![(Coefficient::from(1), Box::new(Makespan))]),
    ])
}

#[test]
fn first_level_dominates() {
    let objective = toy_objective();

    let feasible_but_slow = objective.evaluate((0, 1000));
    let fast_but_unserved = objective.evaluate((1, 10));

    assert!(feasible_but_slow < fast_but_unserved);
    assert!(objective.evaluate((0, 999)) < feasible_but_slow);
    assert_eq!(objective.evaluate((0, 1000)), feasible_but_slow);
}

#[test]
fn coefficients_scale_values() {
    let level: Level<Toy> = Level::new(vec![
        (Coefficient::from(3), Box::new(Makespan)),
        (Coefficient::from(1), Box::new(Makespan)),
    ]);

    assert_eq!(
        level.evaluate(&(0, 5)),
        BaseValue::Duration(Duration::from_whole_seconds(20))
    );
    assert_eq!(level.to_string(), "3*makespan + makespan");
}

#[test]
fn zero_and_maximum_are_ordered() {
    assert_eq!(
        BaseValue::Zero,
        Vec::<BaseValue>::new().into_iter().sum::<BaseValue>()
    );
    assert!(BaseValue::Zero < BaseValue::Integer(1));
    assert!(BaseValue::Zero < BaseValue::Duration(Duration::from_millis(1)));
    assert!(BaseValue::Duration(Duration::Infinity) < BaseValue::Maximum);
    assert_eq!(
        BaseValue::Integer(4) + BaseValue::Maximum,
        BaseValue::Maximum
    );
}

#[test]
fn difference_is_signed() {
    assert_eq!(
        BaseValue::Integer(7).difference_to(BaseValue::Integer(4)),
        "(+3)"
    );
    assert_eq!(
        BaseValue::Duration(Duration::from_whole_seconds(10))
            .difference_to(BaseValue::Duration(Duration::from_whole_seconds(22))),
        "(-00:00:12h)"
    );
    assert_eq!(BaseValue::Integer(2).difference_to(BaseValue::Integer(2)), "");
}

#[test]
fn better_of_breaks_ties_by_solution_order() {
    let objective = toy_objective();

    let a = objective.evaluate((0, 50));
    let b = objective.evaluate((0, 50));
    let c = objective.evaluate((0, 40));

    assert_eq!(a.clone().better_of(b.clone()).solution(), &(0, 50));
    assert_eq!(a.better_of(c).solution(), &(0, 40));
}

#[test]
fn objective_value_as_json() {
    let objective = toy_objective();
    let evaluated = objective.evaluate((0, 90));

    let json = objective.objective_value_to_json(evaluated.objective_value());

    assert_eq!(
        json,
        serde_json::json!([
            {"level": "unservedDemand", "value": 0},
            {"level": "makespan", "value": 90.0},
        ])
    );
}
