use super::*;
use binroute_core::models::{LocationTable, Segment, TrafficLevel};
use std::sync::Arc;

fn create_test_problem() -> Problem {
    let locations = vec![
        ("DEPO", Coordinate::new(0., 0.)),
        ("A", Coordinate::new(0., 1.)),
        ("TPA", Coordinate::new(1., 1.)),
    ]
    .into_iter()
    .collect::<LocationTable>();

    Problem::new(Arc::new(locations), "DEPO", "TPA", vec!["A".to_string()], None).unwrap()
}

fn create_test_result(route: &[&str]) -> OptimizationResult {
    let segments = route
        .windows(2)
        .map(|pair| Segment {
            from: pair[0].to_string(),
            to: pair[1].to_string(),
            distance_km: 111.2,
            traffic_level: TrafficLevel::Light,
            estimated_time_minutes: 222.4,
        })
        .collect::<Vec<_>>();
    let total = segments.len() as f64;

    OptimizationResult {
        segments,
        route: route.iter().map(|id| id.to_string()).collect(),
        total_distance_km: 111.2 * total,
        estimated_total_minutes: 222.4 * total,
        generations: 1,
    }
}

#[test]
fn can_create_features_for_route() {
    let problem = create_test_problem();
    let result = create_test_result(&["DEPO", "A", "TPA"]);

    let collection = create_geojson_result(&problem, &result).unwrap();

    assert_eq!(collection.features.len(), 4);
    assert_eq!(collection.features[0].geometry, Geometry::Point { coordinates: (0., 0.) });
    assert_eq!(collection.features[0].properties["marker-symbol"], "warehouse");
    assert_eq!(collection.features[1].geometry, Geometry::Point { coordinates: (1., 0.) });
    assert_eq!(collection.features[1].properties["marker-symbol"], "marker");
    assert_eq!(collection.features[1].properties["name"], "A");
    assert_eq!(collection.features[1].properties["stop_idx"], "1");
    assert_eq!(collection.features[2].properties["marker-symbol"], "waste-basket");
    assert_eq!(
        collection.features[3].geometry,
        Geometry::LineString { coordinates: vec![(0., 0.), (1., 0.), (1., 1.)] }
    );
    assert_eq!(collection.features[3].properties["distance"], "222.4");
}

#[test]
fn can_create_no_features_for_empty_route() {
    let problem = create_test_problem();

    let collection = create_geojson_result(&problem, &OptimizationResult::empty()).unwrap();

    assert!(collection.features.is_empty());
}

#[test]
fn can_fail_on_unknown_route_location() {
    let problem = create_test_problem();
    let result = create_test_result(&["DEPO", "B", "TPA"]);

    let error = create_geojson_result(&problem, &result).err().unwrap();

    assert_eq!(error.kind(), ErrorKind::InvalidData);
}

#[test]
fn can_serialize_feature_collection() {
    let problem = create_test_problem();
    let result = create_test_result(&["DEPO", "A", "TPA"]);
    let mut buffer = Vec::new();

    serialize_result_as_geojson(BufWriter::new(&mut buffer), &problem, &result).unwrap();
    let json: serde_json::Value = serde_json::from_slice(buffer.as_slice()).unwrap();

    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"][0]["type"], "Feature");
    assert_eq!(json["features"][0]["geometry"]["type"], "Point");
    assert_eq!(json["features"][0]["geometry"]["coordinates"], serde_json::json!([0., 0.]));
    assert_eq!(json["features"][3]["geometry"]["type"], "LineString");
}
