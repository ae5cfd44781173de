#[cfg(test)]
#[path = "../../tests/unit/models/location_test.rs"]
mod location_test;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if both components are finite and within valid degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90. ..=90.).contains(&self.lat)
            && (-180. ..=180.).contains(&self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lat={}, lng={}", self.lat, self.lng)
    }
}

/// Maps location identifiers to their coordinates. Read only while the solver runs.
#[derive(Clone, Debug, Default)]
pub struct LocationTable {
    locations: FxHashMap<String, Coordinate>,
}

impl LocationTable {
    /// Adds or replaces a location.
    pub fn insert(&mut self, id: impl Into<String>, coordinate: Coordinate) {
        self.locations.insert(id.into(), coordinate);
    }

    /// Returns coordinate of the location with given id.
    pub fn get(&self, id: &str) -> Option<Coordinate> {
        self.locations.get(id).copied()
    }

    /// Returns true if location with given id is known.
    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Returns amount of known locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if there is no location.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Coordinate)> for LocationTable {
    fn from_iter<T: IntoIterator<Item = (S, Coordinate)>>(iter: T) -> Self {
        Self { locations: iter.into_iter().map(|(id, coordinate)| (id.into(), coordinate)).collect() }
    }
}
