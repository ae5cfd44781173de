#[cfg(test)]
#[path = "../../tests/unit/genetic/selection_test.rs"]
mod selection_test;

use crate::utils::{compare_floats, Random};

/// Specifies how parents are picked from the current population.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    /// Any individual is picked with the same probability.
    Uniform,
    /// The fittest of `size` distinct, uniformly sampled individuals is picked.
    Tournament {
        /// Amount of competitors.
        size: usize,
    },
}

impl Selection {
    /// Returns index of selected individual. Fitness vector must not be empty.
    pub fn select(&self, fitness: &[f64], random: &dyn Random) -> usize {
        match self {
            Selection::Uniform => random.uniform_index(fitness.len()),
            Selection::Tournament { size } => random
                .sample_distinct(fitness.len(), (*size).max(1))
                .into_iter()
                .reduce(|best, candidate| {
                    // keeps the earlier sampled competitor on ties
                    if compare_floats(fitness[candidate], fitness[best]).is_gt() { candidate } else { best }
                })
                .unwrap_or(0),
        }
    }
}
