//! The termination module contains logic which defines when the evolution stops.

#[cfg(test)]
#[path = "../../tests/unit/solver/termination_test.rs"]
mod termination_test;

use crate::solver::EvolutionState;
use crate::utils::compare_floats_refs;

/// A trait which specifies criteria when the evolution should stop searching for improved route.
pub trait Termination: Send + Sync {
    /// Returns true if termination condition is met.
    fn is_termination(&self, state: &EvolutionState) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, state: &EvolutionState) -> f64;
}

/// A termination criteria which is in terminated state when maximum amount of generations is run.
pub struct MaxGeneration {
    limit: usize,
}

impl MaxGeneration {
    /// Creates a new instance of `MaxGeneration`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxGeneration {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        state.generation >= self.limit
    }

    fn estimate(&self, state: &EvolutionState) -> f64 {
        if self.limit == 0 { 1. } else { (state.generation as f64 / self.limit as f64).min(1.) }
    }
}

/// A termination criteria which stops the evolution when the best route has not been improved
/// during given amount of consecutive generations.
pub struct MaxStall {
    limit: usize,
}

impl MaxStall {
    /// Creates a new instance of `MaxStall`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxStall {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        state.stall() >= self.limit
    }

    fn estimate(&self, state: &EvolutionState) -> f64 {
        if self.limit == 0 { 1. } else { (state.stall() as f64 / self.limit as f64).min(1.) }
    }
}

/// Encapsulates multiple termination criteria, terminates when any of them does.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        self.terminations.iter().any(|t| t.is_termination(state))
    }

    fn estimate(&self, state: &EvolutionState) -> f64 {
        self.terminations.iter().map(|t| t.estimate(state)).max_by(compare_floats_refs).unwrap_or(0.)
    }
}
