use super::*;

#[test]
fn can_find_catalog_sites_and_endpoints() {
    let sites = Sites::default();

    assert_eq!(sites.catalog.len(), 10);
    assert_eq!(
        sites.find_in_catalog("TPS_KOPO").map(|site| site.coordinate()),
        Some(Coordinate::new(-6.948347, 107.573116))
    );
    assert!(sites.find_in_catalog("DEPO").is_none());
    assert!(sites.is_endpoint("DEPO"));
    assert!(sites.is_endpoint("TPA_SARIMUKTI"));
    assert!(!sites.is_endpoint("TPS_KOPO"));
}

#[test]
fn can_serialize_format_error_without_details() {
    let error = FormatError::new("E1001".to_string(), "empty list of stops".to_string(), "add stops".to_string());

    let json: serde_json::Value = serde_json::from_str(error.to_json().as_str()).unwrap();

    assert_eq!(json["code"], "E1001");
    assert_eq!(json["cause"], "empty list of stops");
    assert!(json.get("details").is_none());
    assert_eq!(error.to_string(), "E1001, cause: 'empty list of stops', action: 'add stops'.");
}

#[test]
fn can_serialize_multiple_errors_in_order() {
    let errors = MultiFormatError::from(vec![
        FormatError::new("E1000".to_string(), "cause1".to_string(), "action1".to_string()),
        FormatError::new_with_details("E0002".to_string(), "cause2".to_string(), "action2".to_string(), "x".to_string()),
    ]);

    let json: serde_json::Value = serde_json::from_str(errors.to_json().as_str()).unwrap();

    assert_eq!(errors.codes(), vec!["E1000", "E0002"]);
    assert_eq!(json.as_array().map(|errors| errors.len()), Some(2));
    assert_eq!(json[1]["details"], "x");
    assert_eq!(errors.to_string().lines().count(), 2);
}
