#[cfg(test)]
#[path = "../../tests/unit/genetic/population_test.rs"]
mod population_test;

use super::*;
use crate::utils::Random;

/// A generation of candidate orderings. Replaced wholesale on every generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a new instance of `Population` from given individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Creates a population of `size` independently shuffled permutations of `1..=stops`.
    pub fn new_random(size: usize, stops: usize, random: &dyn Random) -> Self {
        let individuals = (0..size)
            .map(|_| {
                let mut individual = (1..=stops).collect::<Individual>();
                random.shuffle(individual.as_mut_slice());
                individual
            })
            .collect();

        Self { individuals }
    }

    /// Returns individuals.
    pub fn individuals(&self) -> &[Individual] {
        self.individuals.as_slice()
    }

    /// Returns population size.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Returns true if population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Produces the next generation of the same size: elite individuals are copied first, the rest
    /// are children of selected parents. Fitness must be known for every individual.
    pub fn next_generation(&self, fitness: &[f64], operators: &GeneticOperators, random: &dyn Random) -> Population {
        assert_eq!(fitness.len(), self.size());

        if self.is_empty() {
            return Population::default();
        }

        let size = self.size();
        let mut next = select_elite(fitness, operators.elitism_count.min(size))
            .into_iter()
            .map(|idx| self.individuals[idx].clone())
            .collect::<Vec<_>>();

        while next.len() < size {
            let first = self.individuals[operators.selection.select(fitness, random)].clone();
            let second = self.individuals[operators.selection.select(fitness, random)].clone();

            let mut child = order_crossover(first.as_slice(), second.as_slice(), operators.crossover_rate, random);
            swap_mutation(child.as_mut_slice(), operators.mutation_rate, random);

            next.push(child);
        }

        Population::new(next)
    }
}
