//! Geo distance model: great-circle distances, travel times and a distance matrix.

#[cfg(test)]
#[path = "../../tests/unit/geo/geo_test.rs"]
mod geo_test;

use crate::models::{Coordinate, TrafficLevel};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Average vehicle speed assumed for travel time estimation.
pub const AVERAGE_SPEED_KMH: f64 = 30.;

/// Gets great-circle distance in kilometers between two points using haversine formula.
pub fn distance(p1: &Coordinate, p2: &Coordinate) -> f64 {
    let d_lat = degree_rad(p1.lat - p2.lat);
    let d_lng = degree_rad(p1.lng - p2.lng);

    let lat1 = degree_rad(p1.lat);
    let lat2 = degree_rad(p2.lat);

    let a = (d_lat / 2.).sin().powi(2) + (d_lng / 2.).sin().powi(2) * (lat1.cos() * lat2.cos());
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Estimates travel time in minutes for given distance and traffic level.
pub fn segment_time(distance_km: f64, traffic_level: TrafficLevel) -> f64 {
    distance_km * (60. / AVERAGE_SPEED_KMH) * traffic_level.factor()
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.
}

/// A matrix of great-circle distances between given points.
///
/// Every directed pair is computed with [`distance`] in that direction, so matrix lookups are
/// bit-identical to direct calls.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates a new instance of `DistanceMatrix`.
    pub fn new(points: &[Coordinate]) -> Self {
        let size = points.len();
        let values = points.iter().flat_map(|from| points.iter().map(move |to| distance(from, to))).collect();

        Self { size, values }
    }

    /// Returns distance between two points by their indices.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    /// Returns amount of points.
    pub fn size(&self) -> usize {
        self.size
    }
}
