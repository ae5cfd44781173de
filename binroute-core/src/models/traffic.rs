#[cfg(test)]
#[path = "../../tests/unit/models/traffic_test.rs"]
mod traffic_test;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A categorical traffic condition on a directed segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TrafficLevel {
    /// Free flow, baseline travel time.
    #[default]
    Light,
    /// Travel time is 20% longer.
    Moderate,
    /// Travel time is 50% longer.
    Heavy,
}

impl TrafficLevel {
    /// Returns travel time multiplier.
    pub fn factor(&self) -> f64 {
        match self {
            TrafficLevel::Light => 1.,
            TrafficLevel::Moderate => 1.2,
            TrafficLevel::Heavy => 1.5,
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TrafficLevel::Light => "Light",
            TrafficLevel::Moderate => "Moderate",
            TrafficLevel::Heavy => "Heavy",
        };

        write!(f, "{name}")
    }
}

/// Traffic conditions keyed by `"{from_id}-{to_id}"` of a directed pair.
///
/// The lookup is filled by the caller before the solver starts, missing pairs are considered as
/// [`TrafficLevel::Light`].
#[derive(Clone, Debug, Default)]
pub struct TrafficLookup {
    levels: FxHashMap<String, TrafficLevel>,
}

impl TrafficLookup {
    /// Returns the key used for a directed pair.
    pub fn key(from: &str, to: &str) -> String {
        format!("{from}-{to}")
    }

    /// Sets traffic level for a directed pair.
    pub fn insert(&mut self, from: &str, to: &str, level: TrafficLevel) {
        self.levels.insert(Self::key(from, to), level);
    }

    /// Returns traffic level for a directed pair, `Light` if it is not known.
    pub fn level(&self, from: &str, to: &str) -> TrafficLevel {
        self.levels.get(&Self::key(from, to)).copied().unwrap_or_default()
    }

    /// Returns amount of known pairs.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if no pair is known.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, TrafficLevel)> for TrafficLookup {
    fn from_iter<T: IntoIterator<Item = (S, TrafficLevel)>>(iter: T) -> Self {
        Self { levels: iter.into_iter().map(|(key, level)| (key.into(), level)).collect() }
    }
}
