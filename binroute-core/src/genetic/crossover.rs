#[cfg(test)]
#[path = "../../tests/unit/genetic/crossover_test.rs"]
mod crossover_test;

use super::Individual;
use crate::utils::Random;

/// Single point order preserving crossover.
///
/// With probability `rate` the child takes the first parent's genes before a random cut point in
/// `[1, n - 1]` and then the second parent's genes in their order, skipping already placed ones.
/// Otherwise, or when there is no valid cut point, the child is a copy of the first parent.
pub fn order_crossover(first: &[usize], second: &[usize], rate: f64, random: &dyn Random) -> Individual {
    debug_assert_eq!(first.len(), second.len());

    if first.len() < 2 || !random.is_hit(rate) {
        return first.to_vec();
    }

    let cut = random.uniform_int(1, first.len() as i32 - 1) as usize;

    let mut placed = vec![false; first.len() + 1];
    let mut child = Vec::with_capacity(first.len());

    first[..cut].iter().for_each(|&gene| {
        placed[gene] = true;
        child.push(gene);
    });

    child.extend(second.iter().filter(|&&gene| !placed[gene]));

    child
}
