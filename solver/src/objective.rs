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

use crate::local_search::ScheduleWithInfo;
use objective_framework::{BaseValue, Coefficient, Indicator, Level, Objective};

/// Units of demand not delivered by any vehicle. Zero for every feasible schedule.
struct UnservedDemandIndicator;

impl Indicator<ScheduleWithInfo> for UnservedDemandIndicator {
    fn evaluate(&self, schedule_with_info: &ScheduleWithInfo) -> BaseValue {
        BaseValue::Integer(schedule_with_info.schedule().unserved_demand() as u64)
    }

    fn name(&self) -> String {
        String::from("unservedDemand")
    }
}

/// Sum of the durations of all truck events, i.e., the return time of the truck.
struct MakespanIndicator;

impl Indicator<ScheduleWithInfo> for MakespanIndicator {
    fn evaluate(&self, schedule_with_info: &ScheduleWithInfo) -> BaseValue {
        BaseValue::Duration(schedule_with_info.schedule().makespan())
    }

    fn name(&self) -> String {
        String::from("makespan")
    }
}

pub fn build() -> Objective<ScheduleWithInfo> {
    let unserved_demand = Level::new(vec![(
        Coefficient::from(1),
        Box::new(UnservedDemandIndicator) as Box<dyn Indicator<ScheduleWithInfo>>,
    )]);

    let makespan = Level::new(vec![(
        Coefficient::from(1),
        Box::new(MakespanIndicator) as Box<dyn Indicator<ScheduleWithInfo>>,
    )]);

    Objective::new(vec![unserved_demand, makespan])
}
