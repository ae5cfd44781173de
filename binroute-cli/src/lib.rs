//! A command line interface to the waste collection route optimizer.
//!
//! The crate contains the boundary layer of the solver: json request and config formats,
//! request validation with coded errors and writers of the found route.
//!
//! # Example
//!
//! ```
//! use binroute_cli::extensions::solve::config::Config;
//! use binroute_cli::solve_route;
//! use std::io::BufReader;
//!
//! let request = r#"{ "status": { "TPS_DAGO": true, "TPS_KOPO": false, "TPS_GEDEBAGE": true } }"#;
//! let mut config = Config::default();
//! config.environment_mut().seed = Some(42);
//! config.termination_mut().max_generations = Some(10);
//!
//! let solved = solve_route(BufReader::new(request.as_bytes()), &config).expect("cannot solve");
//!
//! assert_eq!(solved.result.route.first().map(String::as_str), Some("DEPO"));
//! assert_eq!(solved.result.route.last().map(String::as_str), Some("TPA_SARIMUKTI"));
//! assert_eq!(solved.result.segments.len(), 3);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

pub mod extensions;
pub mod format;
pub mod validation;

use crate::extensions::solve::config::{create_builder_from_config, create_sites_from_config, Config};
use crate::format::problem::RouteProblem;
use crate::format::{FormatError, MultiFormatError};
use binroute_core::models::{OptimizationResult, Problem};
use binroute_core::solver::TelemetryMetrics;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A route found for the request.
pub struct SolvedRoute {
    /// A problem created from the request.
    pub problem: Arc<Problem>,
    /// The best found route.
    pub result: OptimizationResult,
    /// Algorithm metrics if metrics collection is enabled.
    pub metrics: Option<TelemetryMetrics>,
}

/// Reads the request, validates it and runs the solver configured by `config`.
pub fn solve_route<R: Read>(reader: BufReader<R>, config: &Config) -> Result<SolvedRoute, MultiFormatError> {
    let sites = create_sites_from_config(config).map_err(to_config_error)?;
    let problem = Arc::new(reader.read_route(&sites)?);

    let (result, metrics) = create_builder_from_config(problem.clone(), config)
        .map_err(to_config_error)?
        .build()
        .map_err(|err| to_config_error(err.to_string()))?
        .solve()
        .map_err(|err| {
            MultiFormatError::from(FormatError::new_with_details(
                "E0002".to_string(),
                "cannot find route".to_string(),
                "check request and solver configuration".to_string(),
                err.to_string(),
            ))
        })?;

    Ok(SolvedRoute { problem, result, metrics })
}

fn to_config_error(err: String) -> MultiFormatError {
    FormatError::new_with_details(
        "E0001".to_string(),
        "invalid configuration".to_string(),
        "check configuration file".to_string(),
        err,
    )
    .into()
}
