//! The solver module contains the optimization driver: a generational loop which evolves stop
//! orderings and keeps the best route seen so far.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod builder;
pub use self::builder::Builder;

mod evolution;
pub use self::evolution::{BestRecord, EvolutionState};

mod telemetry;
pub use self::telemetry::{Telemetry, TelemetryGeneration, TelemetryMetrics, TelemetryMode};

pub mod termination;

use crate::evaluation::RouteEvaluator;
use crate::genetic::GeneticOperators;
use crate::models::{OptimizationResult, Problem};
use crate::utils::{get_cpus, Environment, GenericResult};
use std::sync::Arc;

/// Default amount of individuals in every generation.
pub const DEFAULT_POPULATION_SIZE: usize = 100;
/// Default amount of generations.
pub const DEFAULT_GENERATIONS: usize = 300;

/// A validated solver configuration.
#[derive(Clone)]
pub struct SolverConfig {
    /// Amount of individuals in every generation.
    pub population_size: usize,
    /// Amount of generations to run.
    pub max_generations: usize,
    /// Stops evolution earlier when the best route is not improved during this amount of
    /// generations. Not set by default: the evolution always runs `max_generations`.
    pub max_stall: Option<usize>,
    /// Genetic operators parameters.
    pub operators: GeneticOperators,
    /// Telemetry mode.
    pub telemetry: TelemetryMode,
    /// An environment.
    pub environment: Environment,
}

/// Finds a short route for the problem using genetic algorithm.
pub struct Solver {
    problem: Arc<Problem>,
    config: SolverConfig,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(problem: Arc<Problem>, config: SolverConfig) -> Self {
        Self { problem, config }
    }

    /// Runs the evolution and returns the best found route with collected metrics, if enabled.
    /// A problem without stops gives an empty route without running any generation.
    pub fn solve(self) -> GenericResult<(OptimizationResult, Option<TelemetryMetrics>)> {
        let mut telemetry = Telemetry::new(self.config.telemetry.clone());

        if self.problem.stop_count() == 0 {
            telemetry.log("no stops to visit, evolution is skipped");
            let result = OptimizationResult::empty();
            telemetry.on_result(&result);

            return Ok((result, telemetry.take_metrics()));
        }

        telemetry.log(
            format!(
                "configured to use population size={}, generations={}, crossover rate={}, mutation rate={}, \
                 elitism={}, selection={:?}, max stall={:?}, threads={}",
                self.config.population_size,
                self.config.max_generations,
                self.config.operators.crossover_rate,
                self.config.operators.mutation_rate,
                self.config.operators.elitism_count,
                self.config.operators.selection,
                self.config.max_stall,
                self.config.environment.parallelism.unwrap_or_else(get_cpus),
            )
            .as_str(),
        );

        let evaluator = RouteEvaluator::new(self.problem.clone())?;
        let state = evolution::run_evolution(&evaluator, &self.config, &mut telemetry)?;

        let best = state.best.ok_or_else(|| "cannot find any route".to_string())?;
        let metrics = evaluator.evaluate(best.individual.as_slice());
        let route = self
            .problem
            .materialize(best.individual.as_slice())
            .into_iter()
            .map(|position| self.problem.id_at(position).to_string())
            .collect();

        let result = OptimizationResult {
            segments: metrics.segments,
            route,
            total_distance_km: metrics.total_distance_km,
            estimated_total_minutes: metrics.total_duration_min,
            generations: state.generation,
        };

        telemetry.on_result(&result);

        Ok((result, telemetry.take_metrics()))
    }
}
