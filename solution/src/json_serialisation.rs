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

use serde::{Deserialize, Serialize};

use model::base_types::{Demand, DroneIdx, Id};
use time::Duration;

use crate::event::{Event, EventKind};
use crate::timeline::Timeline;
use crate::Schedule;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonEvent {
    kind: String,
    from: Id,
    to: Id,
    start_in_seconds: f64,
    end_in_seconds: f64,
    duration_in_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<Demand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drone: Option<DroneIdx>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonTimeline {
    vehicle: String,
    end_in_seconds: f64,
    events: Vec<JsonEvent>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonAssignment {
    node: Id,
    vehicle: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonSchedule {
    tour: Vec<Id>,
    assignment: Vec<JsonAssignment>,
    makespan_in_seconds: f64,
    timelines: Vec<JsonTimeline>,
}

pub fn schedule_to_json(schedule: &Schedule) -> serde_json::Value {
    let json_schedule = JsonSchedule {
        tour: schedule.tour().all_nodes_iter().map(|n| n.raw()).collect(),
        assignment: schedule
            .assignment()
            .iter()
            .map(|(node, vehicle)| JsonAssignment {
                node: node.raw(),
                vehicle: vehicle.to_string(),
            })
            .collect(),
        makespan_in_seconds: seconds(schedule.makespan()),
        timelines: schedule.timelines().map(timeline_to_json).collect(),
    };
    serde_json::json!(json_schedule)
}

fn timeline_to_json(timeline: &Timeline) -> JsonTimeline {
    JsonTimeline {
        vehicle: timeline.vehicle().to_string(),
        end_in_seconds: seconds(timeline.end_time()),
        events: timeline.events_iter().map(event_to_json).collect(),
    }
}

fn event_to_json(event: &Event) -> JsonEvent {
    let (quantity, drone) = match event.kind() {
        EventKind::Move { payload } if payload > 0 => (Some(payload), None),
        EventKind::Deliver { quantity } => (Some(quantity), None),
        EventKind::Prep { drone } => (None, Some(drone)),
        _ => (None, None),
    };
    JsonEvent {
        kind: event.kind().to_string(),
        from: event.from().raw(),
        to: event.to().raw(),
        start_in_seconds: seconds(event.start()),
        end_in_seconds: seconds(event.end()),
        duration_in_seconds: seconds(event.duration()),
        quantity,
        drone,
    }
}

fn seconds(duration: Duration) -> f64 {
    duration.in_sec()
}

#[cfg(test)]
#[path = "json_serialisation/tests.rs"]
mod tests;
