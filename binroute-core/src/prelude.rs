//! This module reimports commonly used types.

pub use crate::evaluation::{evaluate_route, RouteEvaluator};

pub use crate::models::{Coordinate, LocationTable, OptimizationResult, Problem, Segment};
pub use crate::models::{TrafficLevel, TrafficLookup};

pub use crate::solver::{Builder, Solver, SolverConfig};
pub use crate::solver::{Telemetry, TelemetryMetrics, TelemetryMode};

pub use crate::genetic::Selection;

pub use crate::utils::{compare_floats, DefaultRandom, Environment, InfoLogger, Random};
pub use crate::utils::{GenericError, GenericResult};
