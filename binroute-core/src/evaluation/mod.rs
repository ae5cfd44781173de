//! Route evaluation: per segment metrics and route totals which are the basis of fitness.

#[cfg(test)]
#[path = "../../tests/unit/evaluation/evaluation_test.rs"]
mod evaluation_test;

use crate::geo::{distance, segment_time, DistanceMatrix};
use crate::models::{LocationTable, Problem, Segment, TrafficLevel, TrafficLookup};
use crate::utils::{round_one_decimal, GenericError, GenericResult};
use std::sync::Arc;

/// Metrics of a realized route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteMetrics {
    /// Segments between consecutive route locations.
    pub segments: Vec<Segment>,
    /// Total distance in kilometers, rounded to one decimal.
    pub total_distance_km: f64,
    /// Total travel time in minutes, rounded to one decimal.
    pub total_duration_min: f64,
}

/// Evaluates a route given as ordered location ids. Traffic is applied only when lookup is passed.
///
/// Totals are accumulated from unrounded values, only reported numbers are rounded.
pub fn evaluate_route(
    locations: &LocationTable,
    route: &[&str],
    traffic: Option<&TrafficLookup>,
) -> GenericResult<RouteMetrics> {
    let coordinates = route
        .iter()
        .map(|id| locations.get(id).ok_or_else(|| GenericError::from(format!("unknown location: '{id}'"))))
        .collect::<GenericResult<Vec<_>>>()?;

    let legs = route.windows(2).zip(coordinates.windows(2)).map(|(ids, points)| {
        (ids[0], ids[1], distance(&points[0], &points[1]))
    });

    Ok(create_metrics(legs, traffic))
}

/// Returns fitness of a route with given total distance: the shorter the better.
pub fn fitness(total_distance: f64) -> f64 {
    if total_distance > 0. { 1. / total_distance } else { f64::INFINITY }
}

/// Evaluates permutations of stop positions of the specific problem.
pub struct RouteEvaluator {
    problem: Arc<Problem>,
    matrix: DistanceMatrix,
}

impl RouteEvaluator {
    /// Creates a new instance of `RouteEvaluator` precomputing skeleton distances.
    pub fn new(problem: Arc<Problem>) -> GenericResult<Self> {
        let matrix = DistanceMatrix::new(problem.skeleton_coordinates()?.as_slice());

        Ok(Self { problem, matrix })
    }

    /// Returns the problem.
    pub fn problem(&self) -> &Problem {
        self.problem.as_ref()
    }

    /// Returns unrounded total distance of the route: depot, stops in individual's order, disposal site.
    pub fn total_distance(&self, individual: &[usize]) -> f64 {
        let last = self.problem.stop_count() + 1;

        // NOTE accumulates legs in route order to match `evaluate` bit by bit
        let (total, _) = individual
            .iter()
            .copied()
            .chain(std::iter::once(last))
            .fold((0., 0), |(total, from), to| (total + self.matrix.distance(from, to), to));

        total
    }

    /// Returns full metrics of the route defined by individual.
    pub fn evaluate(&self, individual: &[usize]) -> RouteMetrics {
        let route = self.problem.materialize(individual);
        let traffic = self.problem.traffic.as_deref();

        let legs = route.windows(2).map(|pair| {
            (self.problem.id_at(pair[0]), self.problem.id_at(pair[1]), self.matrix.distance(pair[0], pair[1]))
        });

        create_metrics(legs, traffic)
    }
}

fn create_metrics<'a>(
    legs: impl Iterator<Item = (&'a str, &'a str, f64)>,
    traffic: Option<&TrafficLookup>,
) -> RouteMetrics {
    let (segments, total_distance, total_duration) = legs.fold(
        (Vec::new(), 0., 0.),
        |(mut segments, total_distance, total_duration), (from, to, distance_km)| {
            let traffic_level = traffic.map_or(TrafficLevel::Light, |traffic| traffic.level(from, to));
            let duration = segment_time(distance_km, traffic_level);

            segments.push(Segment {
                from: from.to_string(),
                to: to.to_string(),
                distance_km: round_one_decimal(distance_km),
                traffic_level,
                estimated_time_minutes: round_one_decimal(duration),
            });

            (segments, total_distance + distance_km, total_duration + duration)
        },
    );

    RouteMetrics {
        segments,
        total_distance_km: round_one_decimal(total_distance),
        total_duration_min: round_one_decimal(total_duration),
    }
}
