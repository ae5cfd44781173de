use super::*;

fn create_state(generation: usize, last_improvement: usize) -> EvolutionState {
    EvolutionState { generation, last_improvement, best: None }
}

parameterized_test! {can_detect_max_generation, (limit, generation, expected, estimate), {
    let termination = MaxGeneration::new(limit);
    let state = create_state(generation, 0);

    assert_eq!(termination.is_termination(&state), expected);
    assert_eq!(termination.estimate(&state), estimate);
}}

can_detect_max_generation! {
    case_01_start: (10, 0, false, 0.),
    case_02_middle: (10, 5, false, 0.5),
    case_03_limit: (10, 10, true, 1.),
    case_04_over: (10, 12, true, 1.),
}

parameterized_test! {can_detect_max_stall, (limit, generation, last_improvement, expected), {
    let termination = MaxStall::new(limit);

    assert_eq!(termination.is_termination(&create_state(generation, last_improvement)), expected);
}}

can_detect_max_stall! {
    case_01_improved_recently: (3, 10, 9, false),
    case_02_just_reached: (3, 10, 7, true),
    case_03_no_improvement_at_all: (3, 2, 0, false),
}

#[test]
fn can_terminate_when_any_criteria_is_met() {
    let termination = CompositeTermination::new(vec![Box::new(MaxGeneration::new(10)), Box::new(MaxStall::new(3))]);

    assert!(!termination.is_termination(&create_state(5, 4)));
    assert!(termination.is_termination(&create_state(5, 2)));
    assert!(termination.is_termination(&create_state(10, 10)));
    assert_eq!(termination.estimate(&create_state(5, 4)), 0.5);
}
