//! Core crate contains building blocks of a genetic algorithm which finds a short visiting order
//! for a single waste collection vehicle.
//!
//! The vehicle always departs from a fixed depot, visits every requested stop exactly once, and
//! finishes its run at a fixed disposal site. Only the interior order of stops is evolved.
//!
//! # Example
//!
//! ```
//! use binroute_core::prelude::*;
//! use std::sync::Arc;
//!
//! let locations = LocationTable::from_iter([
//!     ("DEPO", Coordinate::new(0., 0.)),
//!     ("A", Coordinate::new(0., 1.)),
//!     ("B", Coordinate::new(1., 0.)),
//!     ("TPA", Coordinate::new(1., 1.)),
//! ]);
//! let problem = Problem::new(Arc::new(locations), "DEPO", "TPA", vec!["A".into(), "B".into()], None)?;
//!
//! let (result, _) = Builder::new(Arc::new(problem))
//!     .with_environment(Environment::new_with_seed(42))
//!     .with_max_generations(10)
//!     .build()?
//!     .solve()?;
//!
//! assert_eq!(result.route.len(), 4);
//! assert_eq!(result.route.first().map(String::as_str), Some("DEPO"));
//! assert_eq!(result.route.last().map(String::as_str), Some("TPA"));
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evaluation;
pub mod genetic;
pub mod geo;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
