use super::*;
use binroute_core::models::TrafficLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A route request: stops to visit between the depot and the disposal site.
///
/// Exactly one of `stops` and `status` is expected.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Request {
    /// Explicit stops with their coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<Site>>,

    /// Fill status of catalog stops keyed by their id, only full stops are visited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BTreeMap<String, bool>>,

    /// Specifies whether traffic conditions are applied to travel times.
    #[serde(default)]
    pub consider_traffic: bool,

    /// Traffic conditions keyed by `{from}-{to}` pair of location ids.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub traffic: BTreeMap<String, TrafficLevel>,
}

/// Deserializes request in json format from `BufReader`.
pub fn deserialize_request<R: Read>(reader: BufReader<R>) -> Result<Request, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0000".to_string(),
            "cannot deserialize request".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

/// Serializes request in json format into `BufWriter`.
pub fn serialize_request<W: Write>(writer: BufWriter<W>, request: &Request) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, request).map_err(Error::from)
}
