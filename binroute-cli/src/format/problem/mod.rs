//! Specifies logic to read route request from json input and map it to the core problem.

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::*;
use crate::validation::ValidationContext;
use binroute_core::models::{LocationTable, Problem as CoreProblem, TrafficLookup};
use std::io::{BufReader, Read};
use std::sync::Arc;

mod model;
pub use self::model::*;

/// Reads route problem from various sources.
pub trait RouteProblem {
    /// Reads route problem resolving referenced stops against known sites.
    fn read_route(self, sites: &Sites) -> Result<CoreProblem, MultiFormatError>;
}

impl<R: Read> RouteProblem for BufReader<R> {
    fn read_route(self, sites: &Sites) -> Result<CoreProblem, MultiFormatError> {
        deserialize_request(self)?.read_route(sites)
    }
}

impl RouteProblem for Request {
    fn read_route(self, sites: &Sites) -> Result<CoreProblem, MultiFormatError> {
        map_to_problem(&self, sites)
    }
}

impl RouteProblem for String {
    fn read_route(self, sites: &Sites) -> Result<CoreProblem, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_route(sites)
    }
}

fn map_to_problem(request: &Request, sites: &Sites) -> Result<CoreProblem, MultiFormatError> {
    ValidationContext::new(request, sites).validate()?;

    let endpoints = [&sites.depot, &sites.disposal];

    let (locations, stops) = match (&request.stops, &request.status) {
        (Some(stops), None) => (
            create_location_table(endpoints.into_iter().chain(stops.iter())),
            stops.iter().map(|stop| stop.name.clone()).collect::<Vec<_>>(),
        ),
        (None, Some(status)) => (
            create_location_table(endpoints.into_iter().chain(sites.catalog.iter())),
            // status is ordered by id which defines skeleton order
            status.iter().filter(|&(_, is_full)| *is_full).map(|(name, _)| name.clone()).collect::<Vec<_>>(),
        ),
        _ => {
            return Err(FormatError::new(
                "E1000".to_string(),
                "ambiguous request".to_string(),
                "specify either 'stops' or 'status'".to_string(),
            )
            .into());
        }
    };

    let traffic = request.consider_traffic.then(|| {
        Arc::new(request.traffic.iter().map(|(key, level)| (key.as_str(), *level)).collect::<TrafficLookup>())
    });

    CoreProblem::new(Arc::new(locations), sites.depot.name.as_str(), sites.disposal.name.as_str(), stops, traffic)
        .map_err(|err| {
            FormatError::new_with_details(
                "E0002".to_string(),
                "cannot create problem".to_string(),
                "check request and location configuration".to_string(),
                err.to_string(),
            )
            .into()
        })
}

fn create_location_table<'a>(sites: impl Iterator<Item = &'a Site>) -> LocationTable {
    sites.map(|site| (site.name.as_str(), site.coordinate())).collect()
}
