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

use std::collections::BTreeSet;

use model::base_types::{NodeId, Verbosity};
use model::network::{Network, TimeModel};
use model::NetworkError;
use solution::Tour;
use time::Duration;
use tracing::info;

use crate::error::SolverError;

/// Produces the visiting order of the demand nodes.
pub trait Sequencer {
    fn solve(&self, network: &Network) -> Result<Tour, SolverError>;
}

/// Greedy tour: from the current node always drive to the unvisited demand node with the
/// shortest road time (smallest id on ties), finally return to the deposit.
pub struct NearestNeighbor {
    verbosity: Verbosity,
}

impl NearestNeighbor {
    pub fn new(verbosity: Verbosity) -> NearestNeighbor {
        NearestNeighbor { verbosity }
    }
}

impl Sequencer for NearestNeighbor {
    fn solve(&self, network: &Network) -> Result<Tour, SolverError> {
        let deposit = network.deposit();
        let mut unvisited: BTreeSet<NodeId> = network.demand_nodes().collect();
        let mut nodes = vec![deposit];
        let mut current = deposit;

        while !unvisited.is_empty() {
            let mut nearest: Option<(Duration, NodeId)> = None;
            for &candidate in unvisited.iter() {
                let road_time = match network.road_time(current, candidate) {
                    Ok(road_time) => road_time,
                    Err(NetworkError::NoPath { .. }) => Duration::Infinity,
                    Err(error) => return Err(error.into()),
                };
                if nearest.map_or(true, |(best, _)| road_time < best) {
                    nearest = Some((road_time, candidate));
                }
            }
            let Some((_, next)) = nearest else { break };
            unvisited.remove(&next);
            nodes.push(next);
            current = next;
        }
        nodes.push(deposit);

        let tour = Tour::new(nodes, network)?;
        if self.verbosity.summary() {
            info!(tour = %tour, "nearest neighbor tour");
        }
        Ok(tour)
    }
}

/// The tour given in the instance, validated against the network.
pub struct GivenTour {
    nodes: Vec<NodeId>,
}

impl GivenTour {
    pub fn new(nodes: Vec<NodeId>) -> GivenTour {
        GivenTour { nodes }
    }
}

impl Sequencer for GivenTour {
    fn solve(&self, network: &Network) -> Result<Tour, SolverError> {
        Ok(Tour::new(self.nodes.clone(), network)?)
    }
}

#[cfg(test)]
#[path = "sequencer/tests.rs"]
mod tests;
