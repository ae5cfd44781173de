#[cfg(test)]
#[path = "../../tests/unit/solver/evolution_test.rs"]
mod evolution_test;

use super::termination::*;
use super::*;
use crate::evaluation::fitness;
use crate::genetic::{Individual, Population};
use crate::utils::{parallel_collect, ThreadPool, Timer};

/// The best individual observed so far.
#[derive(Clone, Debug, PartialEq)]
pub struct BestRecord {
    /// Stop positions in visiting order.
    pub individual: Individual,
    /// Unrounded total distance.
    pub distance: f64,
}

/// Keeps track of the evolution progress.
#[derive(Clone, Debug, Default)]
pub struct EvolutionState {
    /// Amount of completed generations.
    pub generation: usize,
    /// Amount of completed generations at the moment of the last improvement.
    pub last_improvement: usize,
    /// The best individual observed so far.
    pub best: Option<BestRecord>,
}

impl EvolutionState {
    /// Returns amount of consecutive generations without improvement.
    pub fn stall(&self) -> usize {
        self.generation - self.last_improvement
    }

    /// Returns best known distance or infinity.
    pub fn best_distance(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, |best| best.distance)
    }

    /// Scans evaluated individuals in population order and replaces the best record when an
    /// individual is strictly shorter. Returns true if the record was replaced.
    pub fn accept(&mut self, individuals: &[Individual], distances: &[f64]) -> bool {
        let candidate = individuals.iter().zip(distances.iter().copied()).fold(
            None,
            |best: Option<(&Individual, f64)>, (individual, distance)| match best {
                Some((_, best_distance)) if distance >= best_distance => best,
                _ => Some((individual, distance)),
            },
        );

        match candidate {
            Some((individual, distance)) if distance < self.best_distance() => {
                self.best = Some(BestRecord { individual: individual.clone(), distance });
                true
            }
            _ => false,
        }
    }

    /// Finishes current generation.
    pub fn complete_generation(&mut self, is_improved: bool) {
        self.generation += 1;
        if is_improved {
            self.last_improvement = self.generation;
        }
    }
}

/// Runs the generational loop until termination and returns the final state.
pub(crate) fn run_evolution(
    evaluator: &RouteEvaluator,
    config: &SolverConfig,
    telemetry: &mut Telemetry,
) -> GenericResult<EvolutionState> {
    let random = config.environment.random.as_ref();
    let termination = create_termination(config);
    let pool = config.environment.parallelism.map(ThreadPool::new).transpose()?;

    let mut population = Population::new_random(config.population_size, evaluator.problem().stop_count(), random);
    let mut state = EvolutionState::default();

    telemetry.on_initial(population.size(), evaluator.problem().stop_count());

    while !termination.is_termination(&state) {
        let generation_time = Timer::start();

        let distances = evaluate_population(evaluator, &population, pool.as_ref());
        let fitness_values = distances.iter().map(|&distance| fitness(distance)).collect::<Vec<_>>();

        let is_improved = state.accept(population.individuals(), distances.as_slice());
        telemetry.on_generation(state.generation, state.best_distance(), generation_time, is_improved);
        state.complete_generation(is_improved);

        population = population.next_generation(fitness_values.as_slice(), &config.operators, random);
    }

    Ok(state)
}

fn evaluate_population(evaluator: &RouteEvaluator, population: &Population, pool: Option<&ThreadPool>) -> Vec<f64> {
    let evaluate = || parallel_collect(population.individuals(), |individual| evaluator.total_distance(individual));

    match pool {
        Some(pool) => pool.execute(evaluate),
        None => evaluate(),
    }
}

fn create_termination(config: &SolverConfig) -> Box<dyn Termination> {
    let max_generation: Box<dyn Termination> = Box::new(MaxGeneration::new(config.max_generations));

    match config.max_stall {
        Some(limit) => Box::new(CompositeTermination::new(vec![max_generation, Box::new(MaxStall::new(limit))])),
        None => max_generation,
    }
}
