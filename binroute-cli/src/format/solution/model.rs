use binroute_core::models::{OptimizationResult, Segment};
use binroute_core::solver::TelemetryMetrics;
use serde::Serialize;
use std::io::{BufWriter, Error, Write};

/// A route response.
#[derive(Clone, Debug, Serialize)]
pub struct Response<'a> {
    /// Route segments in visiting order.
    pub segments: &'a [Segment],
    /// Visited location ids.
    pub route: &'a [String],
    /// Total distance in kilometers.
    pub total_distance_km: f64,
    /// Total travel time in minutes.
    pub estimated_total_minutes: f64,
    /// Algorithm metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<&'a TelemetryMetrics>,
}

impl<'a> Response<'a> {
    /// Creates a new instance of `Response`.
    pub fn new(result: &'a OptimizationResult, metrics: Option<&'a TelemetryMetrics>) -> Self {
        Self {
            segments: result.segments.as_slice(),
            route: result.route.as_slice(),
            total_distance_km: result.total_distance_km,
            estimated_total_minutes: result.estimated_total_minutes,
            metrics,
        }
    }
}

/// Serializes response in json format into `BufWriter`.
pub fn serialize_response<W: Write>(writer: BufWriter<W>, response: &Response) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, response).map_err(Error::from)
}
