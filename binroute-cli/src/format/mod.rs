//! This module defines logic to read route requests from json input and to write route responses
//! in json and geo json formats.

use binroute_core::models::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod problem;
pub mod solution;

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

/// A named location.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Site {
    /// A unique location id.
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Site {
    /// Creates a new instance of `Site`.
    pub fn new(name: &str, lat: f64, lng: f64) -> Self {
        Self { name: name.to_string(), lat, lng }
    }

    /// Returns site coordinate.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Static sites known before any request: route endpoints and the catalog of collection points
/// which can be referenced by id.
#[derive(Clone, Debug, PartialEq)]
pub struct Sites {
    /// A depot where every route starts.
    pub depot: Site,
    /// A disposal site where every route ends.
    pub disposal: Site,
    /// Collection points available for status based requests.
    pub catalog: Vec<Site>,
}

impl Sites {
    /// Returns catalog site by its name.
    pub fn find_in_catalog(&self, name: &str) -> Option<&Site> {
        self.catalog.iter().find(|site| site.name == name)
    }

    /// Returns true if name belongs to the depot or the disposal site.
    pub fn is_endpoint(&self, name: &str) -> bool {
        self.depot.name == name || self.disposal.name == name
    }
}

impl Default for Sites {
    fn default() -> Self {
        Self {
            depot: Site::new("DEPO", -6.94898612340884, 107.6878271549783),
            disposal: Site::new("TPA_SARIMUKTI", -6.800449378428952, 107.34929092078416),
            catalog: vec![
                Site::new("TPS_DAGO", -6.883993, 107.613144),
                Site::new("TPS_CIHAMPELAS", -6.893537, 107.604953),
                Site::new("TPS_BUAHBATU", -6.950251, 107.634587),
                Site::new("TPS_KOPO", -6.948347, 107.573116),
                Site::new("TPS_ANTAPANI", -6.903444, 107.66),
                Site::new("TPS_GEDEBAGE", -6.95, 107.7),
                Site::new("TPS_CIBADUYUT", -6.978889, 107.589722),
                Site::new("TPS_KIARACONDONG", -6.927222, 107.646944),
                Site::new("TPS_CICADAS", -6.903889, 107.646389),
                Site::new("TPS_CICAHEUM", -6.9, 107.66),
            ],
        }
    }
}

/// A format error.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|err| format!("cannot serialize error: '{err}'"))
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

/// A collection of format errors.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Returns error codes in their original order.
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|err| err.code.as_str()).collect()
    }

    /// Formats errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|err| format!("cannot serialize errors: '{err}'"))
    }
}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        Self { errors: vec![error] }
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl std::error::Error for MultiFormatError {}
