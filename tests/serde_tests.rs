#![cfg(all(feature = "serde", feature = "decorator"))]

//! Integration tests for serde support in taipan.
//!
//! Only plain data types are serializable: kinds, target sets, call shapes
//! and decorator metadata.

use rstest::rstest;
use taipan::ErrorKind;
use taipan::decorator::{CallShape, Metadata, Targets};
use taipan::functional::TargetKind;

// =============================================================================
// Enum Round Trips
// =============================================================================

#[rstest]
#[case(Targets::FunctionsOrClasses, "\"FunctionsOrClasses\"")]
#[case(Targets::Functions, "\"Functions\"")]
#[case(Targets::Classes, "\"Classes\"")]
fn test_targets_json(#[case] targets: Targets, #[case] expected: &str) {
    let json = serde_json::to_string(&targets).unwrap();
    assert_eq!(json, expected);

    let restored: Targets = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, targets);
}

#[rstest]
fn test_kinds_json_roundtrip() {
    for kind in [
        TargetKind::Function,
        TargetKind::Class,
        TargetKind::Callable,
        TargetKind::Value,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        let restored: TargetKind = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, kind);
    }

    for kind in [
        ErrorKind::Configuration,
        ErrorKind::Type,
        ErrorKind::Value,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        let restored: ErrorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, kind);
    }

    let json = serde_json::to_string(&CallShape::Bare).unwrap();
    assert_eq!(serde_json::from_str::<CallShape>(&json).unwrap(), CallShape::Bare);
}

// =============================================================================
// Metadata
// =============================================================================

#[rstest]
fn test_metadata_json_fields() {
    let metadata = Metadata::new("repeat", Some("Repeats a call.".to_string()));
    let value = serde_json::to_value(&metadata).unwrap();

    assert_eq!(value["name"], "repeat");
    assert_eq!(value["doc"], "Repeats a call.");

    let restored: Metadata = serde_json::from_value(value).unwrap();
    assert_eq!(restored, metadata);
}

#[rstest]
fn test_metadata_without_doc() {
    let metadata: Metadata = serde_json::from_str(r#"{"name":"bare","doc":null}"#).unwrap();
    assert_eq!(metadata.name(), "bare");
    assert_eq!(metadata.doc(), None);
}
