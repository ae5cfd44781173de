use super::*;

/// Checks that request has exactly one way to define stops.
fn check_e1000_single_stop_source(ctx: &ValidationContext) -> Result<(), FormatError> {
    match (&ctx.request.stops, &ctx.request.status) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        (stops, _) => Err(FormatError::new(
            "E1000".to_string(),
            if stops.is_some() { "both stops and status are specified" } else { "no stops are specified" }.to_string(),
            "specify either 'stops' with coordinates or 'status' of known stops".to_string(),
        )),
    }
}

/// Checks that explicit stop list is not empty.
fn check_e1001_non_empty_stops(ctx: &ValidationContext) -> Result<(), FormatError> {
    match &ctx.request.stops {
        Some(stops) if stops.is_empty() => Err(FormatError::new(
            "E1001".to_string(),
            "empty list of stops".to_string(),
            "add at least one stop or use 'status' instead".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Checks that status refers only to catalog stops.
fn check_e1005_known_status_stops(ctx: &ValidationContext) -> Result<(), FormatError> {
    let unknown = ctx
        .request
        .status
        .iter()
        .flat_map(|status| status.keys())
        .filter(|name| ctx.sites.find_in_catalog(name).is_none())
        .cloned()
        .collect::<Vec<_>>();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1005".to_string(),
            format!("status refers to unknown stops: '{}'", unknown.join(", ")),
            "remove unknown stops from status or add them to the catalog".to_string(),
        ))
    }
}

/// Validates the way stops are specified.
pub fn validate_request(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1000_single_stop_source(ctx),
        check_e1001_non_empty_stops(ctx),
        check_e1005_known_status_stops(ctx),
    ])
}
