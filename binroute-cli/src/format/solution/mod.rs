//! Specifies logic to write the found route.

use binroute_core::models::{OptimizationResult, Problem};
use binroute_core::solver::TelemetryMetrics;
use std::io::{BufWriter, Error, Write};

mod model;
pub use self::model::*;

mod geo_serializer;
pub use self::geo_serializer::serialize_result_as_geojson;

/// Writes route result in supported formats.
pub trait RouteSolution {
    /// Writes route response in json format.
    fn write_json<W: Write>(&self, writer: BufWriter<W>) -> Result<(), Error>;

    /// Writes route in geo json format.
    fn write_geo_json<W: Write>(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), Error>;
}

impl RouteSolution for OptimizationResult {
    fn write_json<W: Write>(&self, writer: BufWriter<W>) -> Result<(), Error> {
        serialize_response(writer, &Response::new(self, None))
    }

    fn write_geo_json<W: Write>(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), Error> {
        serialize_result_as_geojson(writer, problem, self)
    }
}

impl RouteSolution for (OptimizationResult, TelemetryMetrics) {
    fn write_json<W: Write>(&self, writer: BufWriter<W>) -> Result<(), Error> {
        serialize_response(writer, &Response::new(&self.0, Some(&self.1)))
    }

    fn write_geo_json<W: Write>(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), Error> {
        self.0.write_geo_json(problem, writer)
    }
}
