use super::*;
use crate::genetic::is_permutation;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;
use proptest::prelude::*;

parameterized_test! {can_combine_parents, (first, second, reals, ints, expected), {
    let random = FakeRandom::new(ints, reals);

    let child = order_crossover(first, second, 0.85, &random);

    assert_eq!(child, expected);
}}

can_combine_parents! {
    case_01_cut_in_middle: (&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1], vec![0.1], vec![2], vec![1, 2, 5, 4, 3]),
    case_02_cut_at_start: (&[1, 2, 3, 4, 5], &[3, 5, 1, 4, 2], vec![0.1], vec![1], vec![1, 3, 5, 4, 2]),
    case_03_cut_at_end: (&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1], vec![0.1], vec![4], vec![1, 2, 3, 4, 5]),
    case_04_two_genes: (&[2, 1], &[1, 2], vec![0.5], vec![1], vec![2, 1]),
    case_05_no_hit: (&[1, 2, 3], &[3, 2, 1], vec![0.9], vec![], vec![1, 2, 3]),
}

#[test]
fn can_copy_single_gene_without_randomness() {
    // any random call would panic as nothing is scripted
    let random = FakeRandom::new(vec![], vec![]);

    assert_eq!(order_crossover(&[1], &[1], 1., &random), vec![1]);
    assert_eq!(order_crossover(&[], &[], 1., &random), Vec::<usize>::new());
}

#[test]
fn can_copy_first_parent_with_zero_rate() {
    let random = FakeRandom::new(vec![], vec![]);

    assert_eq!(order_crossover(&[3, 1, 2], &[1, 2, 3], 0., &random), vec![3, 1, 2]);
}

fn permutation(size: usize, seed: u64) -> Vec<usize> {
    let mut values = (1..=size).collect::<Vec<_>>();
    DefaultRandom::new_with_seed(seed).shuffle(values.as_mut_slice());
    values
}

proptest! {
    #[test]
    fn can_always_produce_permutation(size in 0_usize..40, first_seed in any::<u64>(), second_seed in any::<u64>()) {
        let first = permutation(size, first_seed);
        let second = permutation(size, second_seed);
        let random = DefaultRandom::new_with_seed(first_seed ^ second_seed);

        let child = order_crossover(first.as_slice(), second.as_slice(), 1., &random);

        prop_assert!(is_permutation(child.as_slice(), size));
    }
}
