use super::*;

#[test]
fn latency_defaults_when_unset_or_invalid() {
    assert_eq!(parse_latency(None), DEFAULT_LATENCY);
    assert_eq!(parse_latency(Some("soon")), DEFAULT_LATENCY);
    assert_eq!(parse_latency(Some("-1")), DEFAULT_LATENCY);
}

#[test]
fn latency_parses_milliseconds() {
    assert_eq!(parse_latency(Some("0")), Duration::ZERO);
    assert_eq!(parse_latency(Some(" 1500 ")), Duration::from_millis(1500));
}

#[test]
fn failure_rate_defaults_to_disabled() {
    assert!(parse_failure_rate(None).abs() < f64::EPSILON);
    assert!(parse_failure_rate(Some("often")).abs() < f64::EPSILON);
    assert!(parse_failure_rate(Some("NaN")).abs() < f64::EPSILON);
    assert!(parse_failure_rate(Some("inf")).abs() < f64::EPSILON);
}

#[test]
fn failure_rate_is_clamped_to_probability() {
    assert!((parse_failure_rate(Some("0.25")) - 0.25).abs() < f64::EPSILON);
    assert!((parse_failure_rate(Some("3")) - 1.0).abs() < f64::EPSILON);
    assert!(parse_failure_rate(Some("-0.5")).abs() < f64::EPSILON);
}

#[test]
fn server_side_config_uses_fixed_seed() {
    let config = catalog_config();
    assert_eq!(config.seed, catalog::mock::DEFAULT_SEED);
    assert_eq!(config.product_count, catalog::mock::DEFAULT_PRODUCT_COUNT);
}
