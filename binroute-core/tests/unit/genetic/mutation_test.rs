use super::*;
use crate::genetic::is_permutation;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;

parameterized_test! {can_swap_two_positions, (individual, reals, ints, expected_mutated, expected), {
    let random = FakeRandom::new(ints, reals);
    let mut individual = individual;

    let is_mutated = swap_mutation(individual.as_mut_slice(), 0.05, &random);

    assert_eq!(is_mutated, expected_mutated);
    assert_eq!(individual, expected);
}}

can_swap_two_positions! {
    // samples [3, 0]
    case_01_hit: (vec![1, 2, 3, 4], vec![0.01], vec![3, 3], true, vec![4, 2, 3, 1]),
    // samples [1, 2]
    case_02_adjacent: (vec![1, 2, 3, 4], vec![0.04], vec![1, 2], true, vec![1, 3, 2, 4]),
    case_03_no_hit: (vec![1, 2, 3, 4], vec![0.5], vec![], false, vec![1, 2, 3, 4]),
    case_04_single_gene: (vec![1], vec![], vec![], false, vec![1]),
    case_05_empty: (vec![], vec![], vec![], false, vec![]),
}

#[test]
fn can_keep_permutation_after_many_mutations() {
    let random = DefaultRandom::new_with_seed(5);
    let mut individual = (1..=10).collect::<Vec<_>>();

    let mutations = (0..100).filter(|_| swap_mutation(individual.as_mut_slice(), 1., &random)).count();

    assert_eq!(mutations, 100);
    assert!(is_permutation(individual.as_slice(), 10));
}
