use super::*;

/// Checks that stop names are unique.
fn check_e1002_no_duplicate_stops(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.stops().map(|stop| stop.name.as_str())).map_or(Ok(()), |names| {
        Err(FormatError::new(
            "E1002".to_string(),
            format!("duplicated stop names: '{}'", names.join(", ")),
            "make sure that every stop has a unique name".to_string(),
        ))
    })
}

/// Checks that stop coordinates are valid.
fn check_e1003_valid_coordinates(ctx: &ValidationContext) -> Result<(), FormatError> {
    let names =
        ctx.stops().filter(|stop| !stop.coordinate().is_valid()).map(|stop| stop.name.as_str()).collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1003".to_string(),
            format!("invalid coordinates of stops: '{}'", names.join(", ")),
            "use finite latitude in [-90, 90] and longitude in [-180, 180]".to_string(),
        ))
    }
}

/// Checks that no stop reuses an id of the depot or the disposal site.
fn check_e1004_no_endpoint_stops(ctx: &ValidationContext) -> Result<(), FormatError> {
    let names = ctx
        .stops()
        .filter(|stop| ctx.sites.is_endpoint(stop.name.as_str()))
        .map(|stop| stop.name.as_str())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1004".to_string(),
            format!("stop names clash with route endpoints: '{}'", names.join(", ")),
            format!("rename stops, '{}' and '{}' are reserved", ctx.sites.depot.name, ctx.sites.disposal.name),
        ))
    }
}

/// Validates explicit stops.
pub fn validate_stops(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1002_no_duplicate_stops(ctx),
        check_e1003_valid_coordinates(ctx),
        check_e1004_no_endpoint_stops(ctx),
    ])
}
