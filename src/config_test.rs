use super::*;

#[test]
fn defaults_match_documented_values() {
    let config = ConsoleConfig::default();
    assert_eq!(config.graphql_endpoint, "/graphql");
    assert_eq!(config.session_poll_period, Duration::from_millis(5000));
    assert_eq!(config.token_storage_key, "jwt");
}

#[test]
fn from_values_without_overrides_equals_default() {
    assert_eq!(ConsoleConfig::from_values(None, None, None), Ok(ConsoleConfig::default()));
}

#[test]
fn from_values_applies_overrides() {
    let config = ConsoleConfig::from_values(Some("https://console.example/graphql/"), Some(" 1500 "), Some("token"))
        .expect("valid config");
    assert_eq!(config.graphql_endpoint, "https://console.example/graphql");
    assert_eq!(config.session_poll_period, Duration::from_millis(1500));
    assert_eq!(config.token_storage_key, "token");
}

#[test]
fn blank_endpoint_is_rejected() {
    assert_eq!(
        ConsoleConfig::from_values(Some("   "), None, None),
        Err(ConfigError::Empty { var: "TRAVELR_GRAPHQL_URL" })
    );
}

#[test]
fn blank_storage_key_is_rejected() {
    assert_eq!(
        ConsoleConfig::from_values(None, None, Some("")),
        Err(ConfigError::Empty { var: "TRAVELR_TOKEN_STORAGE_KEY" })
    );
}

#[test]
fn zero_poll_period_is_rejected() {
    assert!(matches!(
        ConsoleConfig::from_values(None, Some("0"), None),
        Err(ConfigError::InvalidNumber { var: "TRAVELR_SESSION_POLL_MS", .. })
    ));
}

#[test]
fn non_numeric_poll_period_is_rejected() {
    let err = ConsoleConfig::from_values(None, Some("soon"), None).unwrap_err();
    assert_eq!(err.to_string(), "TRAVELR_SESSION_POLL_MS must be a positive integer, got \"soon\"");
}
