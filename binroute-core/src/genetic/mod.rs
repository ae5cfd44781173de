//! Permutation encoding and genetic operators.
//!
//! An individual is a permutation of stop positions `1..=n`. The depot (position `0`) and the
//! disposal site (position `n + 1`) are implicit and never touched by operators.

#[cfg(test)]
#[path = "../../tests/unit/genetic/genetic_test.rs"]
mod genetic_test;

mod crossover;
pub use self::crossover::order_crossover;

mod elitism;
pub use self::elitism::select_elite;

mod mutation;
pub use self::mutation::swap_mutation;

mod population;
pub use self::population::Population;

mod selection;
pub use self::selection::Selection;

/// A candidate interior ordering of stops.
pub type Individual = Vec<usize>;

/// Default probability of crossover.
pub const DEFAULT_CROSSOVER_RATE: f64 = 0.85;
/// Default probability of mutation.
pub const DEFAULT_MUTATION_RATE: f64 = 0.05;
/// Default amount of individuals copied unchanged into the next generation.
pub const DEFAULT_ELITISM_COUNT: usize = 2;
/// Default tournament size.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;

/// Parameters of operators which produce the next generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneticOperators {
    /// Parent selection strategy.
    pub selection: Selection,
    /// Probability of crossover, otherwise child is a copy of the first parent.
    pub crossover_rate: f64,
    /// Probability of swap mutation applied once per child.
    pub mutation_rate: f64,
    /// Amount of best individuals copied unchanged.
    pub elitism_count: usize,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            selection: Selection::Tournament { size: DEFAULT_TOURNAMENT_SIZE },
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            elitism_count: DEFAULT_ELITISM_COUNT,
        }
    }
}

/// Checks that individual is a permutation of `1..=size`.
pub fn is_permutation(individual: &[usize], size: usize) -> bool {
    let mut seen = vec![false; size + 1];

    individual.len() == size
        && individual.iter().all(|&gene| {
            let is_new = (1..=size).contains(&gene) && !seen[gene];
            if is_new {
                seen[gene] = true;
            }
            is_new
        })
}
