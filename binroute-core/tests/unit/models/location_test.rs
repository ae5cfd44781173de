use super::*;

parameterized_test! {can_validate_coordinate, (lat, lng, expected), {
    assert_eq!(Coordinate::new(lat, lng).is_valid(), expected);
}}

can_validate_coordinate! {
    case_01_regular: (-6.94898612340884, 107.6878271549783, true),
    case_02_bounds: (-90., 180., true),
    case_03_lat_out_of_range: (90.5, 0., false),
    case_04_lng_out_of_range: (0., -180.1, false),
    case_05_nan: (f64::NAN, 0., false),
    case_06_infinite: (0., f64::INFINITY, false),
}

#[test]
fn can_lookup_locations() {
    let mut table = LocationTable::from_iter([("DEPO", Coordinate::new(1., 2.))]);
    table.insert("A", Coordinate::new(3., 4.));

    assert_eq!(table.len(), 2);
    assert!(table.contains("A"));
    assert!(!table.contains("B"));
    assert_eq!(table.get("DEPO"), Some(Coordinate::new(1., 2.)));
    assert_eq!(table.get("B"), None);
}

#[test]
fn can_create_empty_table() {
    let table = LocationTable::default();

    assert!(table.is_empty());
}
