use super::*;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;

#[test]
fn can_select_uniformly() {
    let random = FakeRandom::new(vec![3], vec![]);

    assert_eq!(Selection::Uniform.select(&[0.1, 0.2, 0.3, 0.4], &random), 3);
}

parameterized_test! {can_select_fittest_competitor, (fitness, size, ints, expected), {
    let random = FakeRandom::new(ints, vec![]);

    assert_eq!(Selection::Tournament { size }.select(fitness, &random), expected);
}}

can_select_fittest_competitor! {
    // samples [2, 1, 4]
    case_01_best_in_middle: (&[0.1, 0.5, 0.3, 0.9, 0.2], 3, vec![2, 1, 4], 1),
    // samples [2, 0], equal fitness keeps the first sampled
    case_02_tie_keeps_first: (&[1., 1., 1.], 2, vec![2, 2], 2),
    // samples [3]
    case_03_single_competitor: (&[0.1, 0.5, 0.3, 0.9], 1, vec![3], 3),
    // zero size is treated as one
    case_04_zero_size: (&[0.1, 0.5], 0, vec![0], 0),
    // size is limited by population, samples [1, 0]
    case_05_big_tournament: (&[0.1, 0.5], 5, vec![1, 1], 1),
}

#[test]
fn can_prefer_fitter_individuals_in_tournament() {
    let random = DefaultRandom::new_with_seed(0);
    let fitness = (1..=20).map(|value| value as f64).collect::<Vec<_>>();
    let selection = Selection::Tournament { size: 5 };

    let average = (0..1000).map(|_| selection.select(fitness.as_slice(), &random)).sum::<usize>() as f64 / 1000.;

    // uniform choice would give about 9.5
    assert!(average > 13., "unexpected average index: {average}");
}

#[test]
fn can_select_any_individual_uniformly() {
    let random = DefaultRandom::new_with_seed(0);
    let fitness = vec![1.; 5];

    let mut counts = vec![0; 5];
    (0..1000).for_each(|_| counts[Selection::Uniform.select(fitness.as_slice(), &random)] += 1);

    assert!(counts.iter().all(|&count| count > 100), "unexpected counts: {counts:?}");
}
