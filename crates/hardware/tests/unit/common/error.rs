//! # Error Tests
//!
//! This module contains unit tests for the decimal, token and detection error
//! types.

use rvhwcap_core::common::{DecimalError, HwcapError, ParseXlenError, TokenError};

#[test]
fn test_decimal_error_display() {
    assert_eq!(
        format!("{}", DecimalError::InvalidDigit),
        "expected a decimal digit"
    );
    assert!(format!("{}", DecimalError::Overflow).contains("32 bits"));
}

#[test]
fn test_token_error_from_decimal_error() {
    let err: TokenError = DecimalError::Overflow.into();
    assert_eq!(err, TokenError::Version(DecimalError::Overflow));
    assert!(format!("{}", err).contains("invalid extension version"));
}

#[test]
fn test_token_error_malformed_display() {
    assert_eq!(
        format!("{}", TokenError::Malformed),
        "malformed extension token"
    );
}

#[test]
fn test_missing_hart_description_display() {
    let err = HwcapError::MissingHartDescription { hartid: 3 };
    let msg = format!("{}", err);
    assert!(msg.contains("hart 3"));
    assert!(msg.contains("riscv,isa"));
}

#[test]
fn test_hart_unavailable_display() {
    let err = HwcapError::HartUnavailable { hartid: 7 };
    assert_eq!(format!("{}", err), "hart 7: not available");
}

#[test]
fn test_already_initialized_display() {
    assert!(format!("{}", HwcapError::AlreadyInitialized).contains("already initialized"));
}

#[test]
fn test_platform_error_from_serde_json() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: HwcapError = json_err.into();
    assert!(matches!(err, HwcapError::Platform(_)));
    assert!(format!("{}", err).starts_with("invalid platform description"));
}

#[test]
fn test_config_error_display() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = HwcapError::Config(json_err);
    assert!(format!("{}", err).starts_with("invalid detection configuration"));
}

#[test]
fn test_parse_xlen_error_display() {
    let err = ParseXlenError("rv128".to_string());
    assert_eq!(
        err.to_string(),
        "unknown register width 'rv128', expected rv32 or rv64"
    );
}

#[test]
fn test_io_error_display_includes_path() {
    let err = HwcapError::Io {
        path: "/no/such/platform.json".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    let msg = format!("{}", err);
    assert!(msg.contains("/no/such/platform.json"));
    assert!(msg.contains("missing"));
}
