use super::*;

/// Checks that every traffic key is a `{from}-{to}` pair of known location ids.
fn check_e1006_traffic_keys(ctx: &ValidationContext) -> Result<(), FormatError> {
    if !ctx.request.consider_traffic {
        return Ok(());
    }

    let known_ids = ctx.known_ids();
    let is_valid_key = |key: &str| {
        key.match_indices('-').any(|(idx, _)| known_ids.contains(&key[..idx]) && known_ids.contains(&key[idx + 1..]))
    };

    let keys = ctx.request.traffic.keys().filter(|key| !is_valid_key(key)).cloned().collect::<Vec<_>>();

    if keys.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1006".to_string(),
            format!("malformed traffic keys: '{}'", keys.join(", ")),
            "use '{from}-{to}' keys where both ids are route locations".to_string(),
        ))
    }
}

/// Validates traffic conditions.
pub fn validate_traffic(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[check_e1006_traffic_keys(ctx)])
}
