//! This module provides functionality to validate route request for logical correctness.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::format::problem::Request;
use crate::format::{FormatError, MultiFormatError, Site, Sites};
use std::collections::HashSet;
use std::hash::Hash;

mod request;
use self::request::validate_request;

mod stops;
use self::stops::validate_stops;

mod traffic;
use self::traffic::validate_traffic;

/// Keeps data needed for request validation.
pub struct ValidationContext<'a> {
    /// An original request.
    pub request: &'a Request,
    /// Known static sites.
    pub sites: &'a Sites,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(request: &'a Request, sites: &'a Sites) -> Self {
        Self { request, sites }
    }

    /// Validates request on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_request(self)
            .err()
            .into_iter()
            .chain(validate_stops(self).err())
            .chain(validate_traffic(self).err())
            .flatten()
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    /// Returns explicit stops of the request.
    fn stops(&self) -> impl Iterator<Item = &Site> + '_ {
        self.request.stops.iter().flatten()
    }

    /// Returns ids of all locations which can be part of the route.
    fn known_ids(&self) -> HashSet<&str> {
        let candidates: Box<dyn Iterator<Item = &Site> + '_> = match &self.request.stops {
            Some(stops) => Box::new(stops.iter()),
            None => Box::new(self.sites.catalog.iter()),
        };

        [&self.sites.depot, &self.sites.disposal].into_iter().chain(candidates).map(|site| site.name.as_str()).collect()
    }
}

/// Returns duplicates in order of their first repetition.
fn get_duplicates<'a, T: Eq + Hash + ?Sized>(items: impl Iterator<Item = &'a T>) -> Option<Vec<&'a T>> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    let duplicates = items.filter(|&item| !seen.insert(item) && reported.insert(item)).collect::<Vec<_>>();

    if duplicates.is_empty() { None } else { Some(duplicates) }
}

fn combine_error_results(results: &[Result<(), FormatError>]) -> Result<(), Vec<FormatError>> {
    let errors = results.iter().cloned().flat_map(|result| result.err()).collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
