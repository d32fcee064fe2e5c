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

use model::base_types::{NodeId, VehicleId};
use time::Duration;

use crate::event::Event;

/// The events of a single vehicle in chronological order.
/// For the truck the events are contiguous (each event starts when its predecessor ends).
/// Drone events are grouped into legs (launch, delivery, return, wait) that may be separated by
/// idle time on the truck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    vehicle: VehicleId,
    events: Vec<Event>,
}

impl Timeline {
    pub fn new(vehicle: VehicleId) -> Timeline {
        Timeline {
            vehicle,
            events: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn vehicle(&self) -> VehicleId {
        self.vehicle
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first_node(&self) -> Option<NodeId> {
        self.events.first().map(|e| e.from())
    }

    pub fn last_node(&self) -> Option<NodeId> {
        self.events.last().map(|e| e.to())
    }

    /// end of the last event (zero for an empty timeline).
    pub fn end_time(&self) -> Duration {
        self.events.last().map(|e| e.end()).unwrap_or(Duration::ZERO)
    }

    /// sum of all event durations.
    pub fn total_duration(&self) -> Duration {
        self.events.iter().map(|e| e.duration()).sum()
    }

    pub fn number_of_waits(&self) -> usize {
        self.events.iter().filter(|e| e.is_wait()).count()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}:", self.vehicle)?;
        for event in self.events.iter() {
            writeln!(f, "  {}", event)?;
        }
        Ok(())
    }
}
