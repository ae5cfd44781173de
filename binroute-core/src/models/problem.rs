#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::{Coordinate, LocationTable, TrafficLookup};
use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Defines a single collection run: a depot, a disposal site and the stops to visit in between.
///
/// Positions of the route skeleton are `0` for the depot, `1..=n` for the stops in the order they
/// were given, and `n + 1` for the disposal site.
#[derive(Clone, Debug)]
pub struct Problem {
    /// Known locations.
    pub locations: Arc<LocationTable>,
    /// Depot id, the start of every route.
    pub depot: String,
    /// Disposal site id, the end of every route.
    pub disposal: String,
    /// Stops to visit.
    pub stops: Vec<String>,
    /// Traffic conditions, present only when traffic should be considered.
    pub traffic: Option<Arc<TrafficLookup>>,
}

impl Problem {
    /// Creates a new instance of `Problem`. Fails when any id cannot be resolved to a location,
    /// when a stop is listed twice or when a stop has the same id as one of the route endpoints.
    pub fn new(
        locations: Arc<LocationTable>,
        depot: &str,
        disposal: &str,
        stops: Vec<String>,
        traffic: Option<Arc<TrafficLookup>>,
    ) -> GenericResult<Self> {
        if depot == disposal {
            return Err(format!("depot and disposal site must differ, got '{depot}' for both").into());
        }

        if let Some(endpoint) = [depot, disposal].into_iter().find(|id| !locations.contains(id)) {
            return Err(format!("unknown location of route endpoint: '{endpoint}'").into());
        }

        let mut visited = FxHashSet::default();
        let errors = stops
            .iter()
            .filter_map(|stop| {
                if !locations.contains(stop) {
                    Some(GenericError::from(format!("unknown location of stop: '{stop}'")))
                } else if stop == depot || stop == disposal {
                    Some(GenericError::from(format!("stop '{stop}' has the same id as a route endpoint")))
                } else if !visited.insert(stop.as_str()) {
                    Some(GenericError::from(format!("stop '{stop}' is listed more than once")))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            return Err(GenericError::join_many(&errors, ", ").into());
        }

        Ok(Self { locations, depot: depot.to_string(), disposal: disposal.to_string(), stops, traffic })
    }

    /// Returns amount of stops to visit.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Returns id of the skeleton position.
    pub fn id_at(&self, position: usize) -> &str {
        match position {
            0 => self.depot.as_str(),
            position if position <= self.stops.len() => self.stops[position - 1].as_str(),
            _ => self.disposal.as_str(),
        }
    }

    /// Returns ids of the route skeleton: depot, stops in given order, disposal site.
    pub fn skeleton(&self) -> Vec<&str> {
        (0..self.stops.len() + 2).map(|position| self.id_at(position)).collect()
    }

    /// Returns coordinates of the route skeleton positions.
    pub fn skeleton_coordinates(&self) -> GenericResult<Vec<Coordinate>> {
        self.skeleton()
            .into_iter()
            .map(|id| self.locations.get(id).ok_or_else(|| GenericError::from(format!("unknown location: '{id}'"))))
            .collect()
    }

    /// Materializes the full route of stop positions permutation into skeleton positions.
    pub fn materialize(&self, individual: &[usize]) -> Vec<usize> {
        std::iter::once(0).chain(individual.iter().copied()).chain(std::iter::once(self.stops.len() + 1)).collect()
    }
}
