use super::*;
use crate::helpers::models::*;
use crate::models::TrafficLevel;

fn create_problem(depot: &str, disposal: &str, stops: &[&str]) -> GenericResult<Problem> {
    Problem::new(
        Arc::new(create_square_locations()),
        depot,
        disposal,
        stops.iter().map(|stop| stop.to_string()).collect(),
        None,
    )
}

#[test]
fn can_create_problem_with_skeleton() {
    let problem = create_test_problem(&["B", "A"]);

    assert_eq!(problem.stop_count(), 2);
    assert_eq!(problem.skeleton(), vec!["DEPO", "B", "A", "TPA"]);
    assert_eq!(
        problem.skeleton_coordinates().expect("cannot get coordinates"),
        vec![Coordinate::new(0., 0.), Coordinate::new(1., 0.), Coordinate::new(0., 1.), Coordinate::new(1., 1.)]
    );
}

#[test]
fn can_create_problem_without_stops() {
    let problem = create_test_problem(&[]);

    assert_eq!(problem.stop_count(), 0);
    assert_eq!(problem.skeleton(), vec!["DEPO", "TPA"]);
    assert_eq!(problem.materialize(&[]), vec![0, 1]);
}

#[test]
fn can_materialize_individual() {
    let problem = create_test_problem(&["A", "B"]);

    assert_eq!(problem.materialize(&[2, 1]), vec![0, 2, 1, 3]);
    assert_eq!(problem.id_at(0), "DEPO");
    assert_eq!(problem.id_at(2), "B");
    assert_eq!(problem.id_at(3), "TPA");
}

#[test]
fn can_keep_traffic_lookup() {
    let traffic = TrafficLookup::from_iter([("DEPO-A", TrafficLevel::Heavy)]);

    let problem = create_test_problem_with_traffic(&["A"], Some(traffic));

    assert_eq!(problem.traffic.as_ref().map(|traffic| traffic.level("DEPO", "A")), Some(TrafficLevel::Heavy));
}

parameterized_test! {can_detect_invalid_problem, (depot, disposal, stops, expected), {
    let result = create_problem(depot, disposal, stops);

    assert_eq!(result.err(), Some(GenericError::from(expected)));
}}

can_detect_invalid_problem! {
    case_01_same_endpoints: ("DEPO", "DEPO", &["A"], "depot and disposal site must differ, got 'DEPO' for both"),
    case_02_unknown_depot: ("X", "TPA", &["A"], "unknown location of route endpoint: 'X'"),
    case_03_unknown_disposal: ("DEPO", "Y", &["A"], "unknown location of route endpoint: 'Y'"),
    case_04_unknown_stop: ("DEPO", "TPA", &["A", "C"], "unknown location of stop: 'C'"),
    case_05_duplicate_stop: ("DEPO", "TPA", &["A", "A"], "stop 'A' is listed more than once"),
    case_06_endpoint_as_stop: ("DEPO", "TPA", &["TPA"], "stop 'TPA' has the same id as a route endpoint"),
    case_07_many: ("DEPO", "TPA", &["C", "DEPO"],
        "unknown location of stop: 'C', stop 'DEPO' has the same id as a route endpoint"),
}
