//! # Platform Description Tests
//!
//! Tests for hart descriptors, JSON platform descriptions and file loading.

use std::io::Write;

use pretty_assertions::assert_eq;
use rvhwcap_core::common::HwcapError;
use rvhwcap_core::platform::{HartDescriptor, HartSource, HartStatus, Platform};

#[test]
fn test_descriptor_new_is_okay() {
    let hart = HartDescriptor::new(4, "rv64imac");
    assert_eq!(hart.hartid, 4);
    assert_eq!(hart.status, HartStatus::Okay);
    assert_eq!(hart.isa().unwrap(), "rv64imac");
}

#[test]
fn test_descriptor_missing_isa() {
    let hart = HartDescriptor {
        hartid: 2,
        status: HartStatus::Okay,
        isa: None,
    };
    assert!(matches!(
        hart.isa(),
        Err(HwcapError::MissingHartDescription { hartid: 2 })
    ));
}

#[test]
fn test_descriptor_unavailable_takes_precedence() {
    let hart = HartDescriptor {
        hartid: 1,
        status: HartStatus::Disabled,
        isa: None,
    };
    assert!(matches!(
        hart.isa(),
        Err(HwcapError::HartUnavailable { hartid: 1 })
    ));
}

#[test]
fn test_from_isa_strings_numbers_harts() {
    let platform = Platform::from_isa_strings(["rv64imafdc", "rv64imac"]);
    assert_eq!(
        platform.harts(),
        vec![
            HartDescriptor::new(0, "rv64imafdc"),
            HartDescriptor::new(1, "rv64imac"),
        ]
    );
}

#[test]
fn test_from_json_defaults() {
    let platform = Platform::from_json(r#"{"harts": [{"hartid": 9}]}"#).unwrap();
    assert_eq!(
        platform.harts,
        vec![HartDescriptor {
            hartid: 9,
            status: HartStatus::Okay,
            isa: None,
        }]
    );
    assert_eq!(Platform::from_json("{}").unwrap(), Platform::default());
}

#[test]
fn test_from_json_statuses() {
    let platform = Platform::from_json(
        r#"{"harts": [
            {"hartid": 0, "status": "okay", "isa": "rv64i"},
            {"hartid": 1, "status": "disabled"},
            {"hartid": 2, "status": "fail"}
        ]}"#,
    )
    .unwrap();
    let statuses: Vec<_> = platform.harts.iter().map(|h| h.status).collect();
    assert_eq!(
        statuses,
        vec![HartStatus::Okay, HartStatus::Disabled, HartStatus::Fail]
    );
}

#[test]
fn test_from_json_accepts_ok_spelling() {
    let platform = Platform::from_json(
        r#"{"harts": [{"hartid": 0, "status": "ok", "isa": "rv64imac"}]}"#,
    )
    .unwrap();
    assert_eq!(platform.harts[0].status, HartStatus::Okay);
    assert_eq!(platform.harts[0].isa().unwrap(), "rv64imac");
}

#[test]
fn test_from_json_rejects_unknown_status() {
    let err = Platform::from_json(r#"{"harts": [{"hartid": 0, "status": "broken"}]}"#)
        .unwrap_err();
    assert!(matches!(err, HwcapError::Platform(_)));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"harts": [{"hartid": 0, "isa": "rv64imafdc"}]}"#)
        .unwrap();
    let platform = Platform::from_file(file.path()).unwrap();
    assert_eq!(platform.harts, vec![HartDescriptor::new(0, "rv64imafdc")]);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Platform::from_file(&path).unwrap_err();
    match err {
        HwcapError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected I/O error, got {other:?}"),
    }
}
