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

use model::base_types::{Demand, DroneIdx, NodeId};
use time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Travel from one node to another. payload is the number of units dropped at the
    /// destination (1 for the delivery flight of a drone, 0 otherwise).
    Move { payload: Demand },
    /// The truck prepares the launch of a drone.
    Prep { drone: DroneIdx },
    /// The truck delivers at its current node.
    Deliver { quantity: Demand },
    Wait,
}

/// A timed action of a single vehicle. Times are measured from the departure of the truck at
/// the deposit. For all kinds except Move, from == to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    kind: EventKind,
    from: NodeId,
    to: NodeId,
    start: Duration,
    duration: Duration,
}

// static functions
impl Event {
    pub fn movement(from: NodeId, to: NodeId, start: Duration, duration: Duration) -> Event {
        Event {
            kind: EventKind::Move { payload: 0 },
            from,
            to,
            start,
            duration,
        }
    }

    pub fn delivery_flight(from: NodeId, to: NodeId, start: Duration, duration: Duration) -> Event {
        Event {
            kind: EventKind::Move { payload: 1 },
            from,
            to,
            start,
            duration,
        }
    }

    pub fn prep(node: NodeId, drone: DroneIdx, start: Duration, duration: Duration) -> Event {
        Event::stationary(EventKind::Prep { drone }, node, start, duration)
    }

    pub fn deliver(node: NodeId, quantity: Demand, start: Duration, duration: Duration) -> Event {
        Event::stationary(EventKind::Deliver { quantity }, node, start, duration)
    }

    pub fn wait(node: NodeId, start: Duration, duration: Duration) -> Event {
        Event::stationary(EventKind::Wait, node, start, duration)
    }

    fn stationary(kind: EventKind, node: NodeId, start: Duration, duration: Duration) -> Event {
        Event {
            kind,
            from: node,
            to: node,
            start,
            duration,
        }
    }
}

// methods
impl Event {
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn start(&self) -> Duration {
        self.start
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    pub fn is_move(&self) -> bool {
        matches!(self.kind, EventKind::Move { .. })
    }

    pub fn is_wait(&self) -> bool {
        matches!(self.kind, EventKind::Wait)
    }

    /// units of demand this event satisfies at its destination.
    pub fn delivered_units(&self) -> Demand {
        match self.kind {
            EventKind::Move { payload } => payload,
            EventKind::Deliver { quantity } => quantity,
            _ => 0,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventKind::Move { .. } => write!(f, "move"),
            EventKind::Prep { .. } => write!(f, "prep"),
            EventKind::Deliver { .. } => write!(f, "deliver"),
            EventKind::Wait => write!(f, "wait"),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} - {}] ", self.start, self.end())?;
        match self.kind {
            EventKind::Move { payload: 0 } => write!(f, "move {} -> {}", self.from, self.to),
            EventKind::Move { payload } => {
                write!(f, "move {} -> {} (drop {})", self.from, self.to, payload)
            }
            EventKind::Prep { drone } => write!(f, "prep drone_{} at {}", drone, self.from),
            EventKind::Deliver { quantity } => write!(f, "deliver {} at {}", quantity, self.from),
            EventKind::Wait => write!(f, "wait at {}", self.from),
        }
    }
}
