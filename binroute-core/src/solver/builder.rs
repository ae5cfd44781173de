#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use super::*;
use crate::genetic::Selection;
use crate::utils::GenericError;

/// Provides configurable way to build solver.
pub struct Builder {
    problem: Arc<Problem>,
    config: SolverConfig,
}

impl Builder {
    /// Creates a new instance of `Builder` with default parameters.
    pub fn new(problem: Arc<Problem>) -> Self {
        Self {
            problem,
            config: SolverConfig {
                population_size: DEFAULT_POPULATION_SIZE,
                max_generations: DEFAULT_GENERATIONS,
                max_stall: None,
                operators: GeneticOperators::default(),
                telemetry: TelemetryMode::None,
                environment: Environment::default(),
            },
        }
    }

    /// Sets population size.
    /// Default is 100.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Sets max generations to be run.
    /// Default is 300.
    pub fn with_max_generations(mut self, limit: usize) -> Self {
        self.config.max_generations = limit;
        self
    }

    /// Sets amount of generations without improvement after which the evolution stops.
    /// Default is None.
    pub fn with_max_stall(mut self, limit: Option<usize>) -> Self {
        self.config.max_stall = limit;
        self
    }

    /// Sets crossover probability.
    /// Default is 0.85.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.config.operators.crossover_rate = rate;
        self
    }

    /// Sets mutation probability.
    /// Default is 0.05.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.config.operators.mutation_rate = rate;
        self
    }

    /// Sets amount of elite individuals.
    /// Default is 2.
    pub fn with_elitism_count(mut self, count: usize) -> Self {
        self.config.operators.elitism_count = count;
        self
    }

    /// Sets parent selection strategy.
    /// Default is tournament of 5.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.config.operators.selection = selection;
        self
    }

    /// Sets telemetry mode.
    /// Default is no telemetry.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.config.telemetry = mode;
        self
    }

    /// Sets environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Builds solver with parameters specified.
    pub fn build(self) -> GenericResult<Solver> {
        let errors = validate_config(&self.config);

        if !errors.is_empty() {
            return Err(GenericError::join_many(&errors, ", ").into());
        }

        Ok(Solver::new(self.problem, self.config))
    }
}

fn validate_config(config: &SolverConfig) -> Vec<GenericError> {
    let operators = &config.operators;
    let is_rate = |rate: f64| (0. ..=1.).contains(&rate);

    [
        (config.population_size == 0, "population size must be positive".to_string()),
        (config.max_generations == 0, "max generations must be positive".to_string()),
        (config.max_stall == Some(0), "max stall must be positive when set".to_string()),
        (!is_rate(operators.crossover_rate), format!("crossover rate must be in [0, 1], got {}", operators.crossover_rate)),
        (!is_rate(operators.mutation_rate), format!("mutation rate must be in [0, 1], got {}", operators.mutation_rate)),
        (
            operators.elitism_count > config.population_size,
            format!(
                "elitism count {} cannot exceed population size {}",
                operators.elitism_count, config.population_size
            ),
        ),
        (
            matches!(operators.selection, Selection::Tournament { size: 0 }),
            "tournament size must be positive".to_string(),
        ),
        (config.environment.parallelism == Some(0), "parallelism must be positive when set".to_string()),
    ]
    .into_iter()
    .filter_map(|(is_invalid, message)| is_invalid.then(|| GenericError::from(message)))
    .collect()
}
