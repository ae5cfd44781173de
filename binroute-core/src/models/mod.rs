//! A collection of models to represent the problem and its solution.

mod location;
pub use self::location::{Coordinate, LocationTable};

mod problem;
pub use self::problem::Problem;

mod solution;
pub use self::solution::{OptimizationResult, Segment};

mod traffic;
pub use self::traffic::{TrafficLevel, TrafficLookup};
