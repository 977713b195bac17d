//! Tests for open enums

use super::*;
use crate::open_enum;
use crate::record::{FieldKind, FieldType, StructuralHash};
use pretty_assertions::assert_eq;
use test_case::test_case;

open_enum! {
    /// Enum under test
    pub enum Mode {
        Fast => "FAST",
        Safe => "SAFE",
    }
}

// ============================================================================
// Conversions
// ============================================================================

#[test_case("FAST", Mode::Fast ; "fast")]
#[test_case("SAFE", Mode::Safe ; "safe")]
fn test_from_known_string(value: &str, expected: Mode) {
    assert_eq!(Mode::from(value), expected);
    assert_eq!(Mode::from(value.to_string()), expected);
    assert_eq!(value.parse::<Mode>().unwrap(), expected);
}

#[test]
fn test_from_unknown_string_is_kept() {
    let mode = Mode::from("TURBO");
    assert_eq!(mode, Mode::Unknown("TURBO".to_string()));
    assert_eq!(mode.as_str(), "TURBO");
    assert!(!mode.is_known());
}

#[test]
fn test_matching_is_case_sensitive() {
    assert_eq!(Mode::from("fast"), Mode::Unknown("fast".to_string()));
}

#[test]
fn test_variant_and_string_agree() {
    for value in Mode::KNOWN_VALUES {
        let parsed = Mode::from(*value);
        assert!(parsed.is_known());
        assert_eq!(parsed.as_str(), *value);
        assert_eq!(parsed.to_string(), *value);
        assert_eq!(parsed.to_wire_string(), *value);
    }
}

#[test]
fn test_known_values_in_declaration_order() {
    assert_eq!(Mode::known_values(), &["FAST", "SAFE"]);
    assert_eq!(Mode::from(""), Mode::Unknown(String::new()));
}

#[test]
fn test_unknown_holding_known_string_equals_variant() {
    let decoded = Mode::Unknown("FAST".to_string());
    assert_eq!(decoded, Mode::Fast);
    assert!(decoded.is_known());
    assert!(matches!(decoded.normalized(), Mode::Fast));
    assert_ne!(Mode::Unknown("fast".to_string()), Mode::Fast);
    assert_eq!(
        crate::record::leaf_hash(&Mode::Unknown("SAFE".to_string())),
        crate::record::leaf_hash(&Mode::Safe)
    );
    assert_eq!(
        Mode::Unknown("FAST".to_string()).structural_hash(),
        Mode::Fast.structural_hash()
    );
}

// ============================================================================
// Strict Parsing
// ============================================================================

#[test]
fn test_parse_known_rejects_empty() {
    let err = Mode::parse_known("").unwrap_err();
    assert!(matches!(err, Error::EmptyEnumValue { type_name: "Mode" }));
    assert_eq!(err.to_string(), "Value cannot be null or empty for Mode");
}

#[test]
fn test_parse_known_rejects_unknown() {
    let err = "TURBO".parse::<Mode>().unwrap_err();
    assert_eq!(err.to_string(), "Cannot create Mode from TURBO value");
    assert!(err.is_caller_bug());
}

// ============================================================================
// Record Integration
// ============================================================================

#[test]
fn test_field_type_metadata() {
    assert_eq!(Mode::TYPE_NAME, "Mode");
    assert_eq!(Mode::KIND, FieldKind::Enum("Mode"));
    assert_eq!(Mode::TYPE_LABEL, "Mode");
}

#[test]
fn test_structural_hash_follows_string_form() {
    assert_eq!(
        Mode::Fast.structural_hash(),
        Mode::from("FAST").structural_hash()
    );
    assert_ne!(Mode::Fast.structural_hash(), Mode::Safe.structural_hash());
}
