#[cfg(test)]
#[path = "../../../tests/unit/format/solution/geo_serializer_test.rs"]
mod geo_serializer_test;

use binroute_core::models::{Coordinate, OptimizationResult, Problem};
use binroute_core::utils::compare_floats;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{BufWriter, Error, ErrorKind, Write};

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: (f64, f64) },
    LineString { coordinates: Vec<(f64, f64)> },
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
struct Feature {
    pub properties: BTreeMap<String, String>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        let compare_pair = |l_coord: &(f64, f64), r_coord: &(f64, f64)| {
            compare_floats(l_coord.0, r_coord.0).is_eq() && compare_floats(l_coord.1, r_coord.1).is_eq()
        };

        match (self, other) {
            (Geometry::Point { coordinates: l_coord }, Geometry::Point { coordinates: r_coord }) => {
                compare_pair(l_coord, r_coord)
            }
            (Geometry::LineString { coordinates: l_coords }, Geometry::LineString { coordinates: r_coords }) => {
                l_coords.len() == r_coords.len()
                    && l_coords.iter().zip(r_coords.iter()).all(|(l_coord, r_coord)| compare_pair(l_coord, r_coord))
            }
            _ => false,
        }
    }
}

/// Serializes route result into geo json format.
pub fn serialize_result_as_geojson<W: Write>(
    writer: BufWriter<W>,
    problem: &Problem,
    result: &OptimizationResult,
) -> Result<(), Error> {
    let geo_json = create_geojson_result(problem, result)?;

    serde_json::to_writer_pretty(writer, &geo_json).map_err(Error::from)
}

fn create_geojson_result(problem: &Problem, result: &OptimizationResult) -> Result<FeatureCollection, Error> {
    let coordinates = result
        .route
        .iter()
        .map(|id| {
            problem
                .locations
                .get(id)
                .map(get_lng_lat)
                .ok_or_else(|| Error::new(ErrorKind::InvalidData, format!("unknown route location: '{id}'")))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let points = result.route.iter().zip(coordinates.iter()).enumerate().map(|(stop_idx, (id, &lng_lat))| Feature {
        properties: slice_to_map(&[
            ("marker-color", get_marker_color(problem, id)),
            ("marker-size", "medium"),
            ("marker-symbol", get_marker_symbol(problem, id)),
            ("name", id.as_str()),
            ("stop_idx", stop_idx.to_string().as_str()),
        ]),
        geometry: Geometry::Point { coordinates: lng_lat },
    });

    let line = (coordinates.len() > 1).then(|| Feature {
        properties: slice_to_map(&[
            ("stroke", "#1f78b4"),
            ("stroke-width", "4"),
            ("distance", result.total_distance_km.to_string().as_str()),
            ("duration", result.estimated_total_minutes.to_string().as_str()),
        ]),
        geometry: Geometry::LineString { coordinates: coordinates.clone() },
    });

    Ok(FeatureCollection { features: points.chain(line).collect() })
}

fn slice_to_map(vec: &[(&str, &str)]) -> BTreeMap<String, String> {
    vec.iter().map(|&(key, value)| (key.to_string(), value.to_string())).collect()
}

fn get_lng_lat(coordinate: Coordinate) -> (f64, f64) {
    (coordinate.lng, coordinate.lat)
}

fn get_marker_symbol(problem: &Problem, id: &str) -> &'static str {
    if id == problem.depot {
        "warehouse"
    } else if id == problem.disposal {
        "waste-basket"
    } else {
        "marker"
    }
}

fn get_marker_color(problem: &Problem, id: &str) -> &'static str {
    if id == problem.depot || id == problem.disposal { "#e31a1c" } else { "#33a02c" }
}
