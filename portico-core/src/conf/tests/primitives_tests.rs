use crate::conf::ErrorKind;
use crate::conf::types::{ApiType, parse_duration};
use std::time::Duration;

#[test]
fn parse_duration_accepts_single_units() {
    assert_eq!(parse_duration("t", "60s").unwrap(), Duration::from_secs(60));
    assert_eq!(parse_duration("t", "250ms").unwrap(), Duration::from_millis(250));
    assert_eq!(parse_duration("t", "2us").unwrap(), Duration::from_micros(2));
    assert_eq!(parse_duration("t", "3µs").unwrap(), Duration::from_micros(3));
    assert_eq!(parse_duration("t", "7ns").unwrap(), Duration::from_nanos(7));
    assert_eq!(parse_duration("t", "5m").unwrap(), Duration::from_secs(300));
    assert_eq!(parse_duration("t", "1h").unwrap(), Duration::from_secs(3600));
}

#[test]
fn parse_duration_accepts_compound_and_fractional_values() {
    assert_eq!(parse_duration("t", "1m30s").unwrap(), Duration::from_secs(90));
    assert_eq!(parse_duration("t", "1.5h").unwrap(), Duration::from_secs(5400));
    assert_eq!(
        parse_duration("t", "1s500ms").unwrap(),
        Duration::from_millis(1500)
    );
}

#[test]
fn parse_duration_accepts_bare_zero() {
    assert_eq!(parse_duration("t", "0").unwrap(), Duration::ZERO);
}

#[test]
fn parse_duration_rejects_malformed_values() {
    for raw in ["", "10", "s", "5x", "-5s", "1..2s", "ten seconds"] {
        let err = parse_duration("shutdown_config.timeout", raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeFailure, "input {raw:?}");
    }
}

#[test]
fn parse_duration_error_names_field_and_value() {
    // Act
    let err = parse_duration("step_timeout", "5x").unwrap_err();

    // Assert
    let msg = err.to_string();
    assert!(msg.contains("step_timeout"));
    assert!(msg.contains("'5x'"));
    assert!(msg.contains("unknown unit"));
}

#[test]
fn api_type_resolves_known_codes() {
    assert_eq!(ApiType::try_from(0).unwrap(), ApiType::Grpc);
    assert_eq!(ApiType::try_from(1).unwrap(), ApiType::Http);
    assert_eq!(ApiType::Grpc.code(), 0);
    assert_eq!(ApiType::Http.code(), 1);
}

#[test]
fn api_type_rejects_unknown_codes() {
    for code in [2, -1, i32::MAX] {
        let err = ApiType::try_from(code).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnum);
    }
}

#[test]
fn api_type_display() {
    assert_eq!(ApiType::Grpc.to_string(), "GRPC");
    assert_eq!(ApiType::Http.to_string(), "HTTP");
}

#[test]
fn parse_duration_rejects_out_of_range_component() {
    // Act
    let err = parse_duration("shutdown_config.timeout", "99999999999999999999h").unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    assert!(err.to_string().contains("duration out of range"));
}

#[test]
fn parse_duration_accepts_large_in_range_value() {
    assert_eq!(
        parse_duration("t", "100000h").unwrap(),
        Duration::from_secs(360_000_000)
    );
}
