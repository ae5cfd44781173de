#[cfg(test)]
#[path = "../../tests/unit/genetic/elitism_test.rs"]
mod elitism_test;

use crate::utils::compare_floats;

/// Returns indices of `count` fittest individuals, best first. Ties keep population order.
pub fn select_elite(fitness: &[f64], count: usize) -> Vec<usize> {
    let mut indices = (0..fitness.len()).collect::<Vec<_>>();
    indices.sort_by(|&a, &b| compare_floats(fitness[b], fitness[a]));
    indices.truncate(count);

    indices
}
