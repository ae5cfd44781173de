#[cfg(test)]
#[path = "../../tests/unit/genetic/mutation_test.rs"]
mod mutation_test;

use crate::utils::Random;

/// With probability `rate` swaps two distinct random positions. Returns true if mutation happened.
pub fn swap_mutation(individual: &mut [usize], rate: f64, random: &dyn Random) -> bool {
    if individual.len() < 2 || !random.is_hit(rate) {
        return false;
    }

    match random.sample_distinct(individual.len(), 2).as_slice() {
        &[first, second] => {
            individual.swap(first, second);
            true
        }
        _ => false,
    }
}
