use crate::models::TrafficLevel;
use serde::{Deserialize, Serialize};

/// Metrics of one directed edge of a realized route. Reported values are rounded to one decimal.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Segment {
    /// Start location id.
    pub from: String,
    /// End location id.
    pub to: String,
    /// Great-circle distance in kilometers.
    pub distance_km: f64,
    /// Traffic level applied to the travel time.
    pub traffic_level: TrafficLevel,
    /// Estimated travel time in minutes.
    pub estimated_time_minutes: f64,
}

/// The best route found by the solver.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptimizationResult {
    /// Route segments in visiting order.
    pub segments: Vec<Segment>,
    /// Visited location ids: depot first, disposal site last. Empty when there is nothing to visit.
    pub route: Vec<String>,
    /// Total distance in kilometers, rounded to one decimal.
    pub total_distance_km: f64,
    /// Total travel time in minutes, rounded to one decimal.
    pub estimated_total_minutes: f64,
    /// Amount of generations run to find the route.
    pub generations: usize,
}

impl OptimizationResult {
    /// Creates a result for a run without stops: no segments and zero totals.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the result has no route.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
