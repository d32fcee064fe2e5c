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

use crate::test_utilities::{default_schedule, init_test_data};

use super::schedule_to_json;

#[test]
fn default_schedule_to_json() {
    // ARRANGE
    let d = init_test_data();
    let schedule = default_schedule(&d);

    // ACT
    let json = schedule_to_json(&schedule);

    // ASSERT
    assert_eq!(json["tour"], serde_json::json!([0, 1, 2, 3, 4, 5, 0]));
    assert_eq!(json["makespanInSeconds"], serde_json::json!(280.0));
    assert_eq!(
        json["assignment"][1],
        serde_json::json!({"node": 1, "vehicle": "drone_1"})
    );
    assert_eq!(json["assignment"].as_array().unwrap().len(), 6);

    let timelines = json["timelines"].as_array().unwrap();
    assert_eq!(timelines.len(), 3);
    assert_eq!(timelines[0]["vehicle"], "truck");
    assert_eq!(timelines[2]["vehicle"], "drone_2");
    assert_eq!(timelines[2]["endInSeconds"], serde_json::json!(280.0));

    let truck_events = timelines[0]["events"].as_array().unwrap();
    assert_eq!(truck_events.len(), 10);
    assert_eq!(
        truck_events[1],
        serde_json::json!({
            "kind": "prep",
            "from": 0,
            "to": 0,
            "startInSeconds": 10.0,
            "endInSeconds": 20.0,
            "durationInSeconds": 10.0,
            "drone": 2
        })
    );
    assert_eq!(truck_events[4]["kind"], "deliver");
    assert_eq!(truck_events[4]["quantity"], 2);
    // plain moves carry neither quantity nor drone
    assert!(truck_events[2].get("quantity").is_none());
    assert!(truck_events[2].get("drone").is_none());

    let delivery_flight = &timelines[1]["events"][0];
    assert_eq!(delivery_flight["kind"], "move");
    assert_eq!(delivery_flight["to"], 1);
    assert_eq!(delivery_flight["quantity"], 1);
}
