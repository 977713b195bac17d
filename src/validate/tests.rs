//! Tests for constraint validation

use super::*;
use crate::model::{Column, Connection, StorageDescriptor, Table};
use crate::model_record;
use crate::record::ModelRecord;
use crate::types::ConnectionType;
use crate::validate::patterns::{GLUE_VERSION, ROLE_ARN, SINGLE_LINE};
use crate::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

model_record! {
    /// One constraint of every class
    pub struct Limits {
        code: string => "Code" [Length(2, 4)],
        slug: string => "Slug" [Pattern("[a-z]+")],
        broken: string => "Broken" [Pattern("[unclosed")],
        ratio: value(f64) => "Ratio" [Range(0.0, 1.0)],
        retries: value(i32) => "Retries" [Min(0.0)],
        total: value(i64) => "Total" [Range(1.0, 10.0)],
        offset: value(i64) => "Offset" [Range(0.0, 9_007_199_254_740_992.0)],
        batch: value(i32) => "Batch" [Min(0.5)],
        items: list(String) => "Items" [MinLength(1)],
        labels: map => "Labels" [Length(0, 1)],
    }
}

use Constraint::{Length, Min, MinLength, Pattern, Range};

fn paths(violations: &[ConstraintViolation]) -> Vec<&str> {
    violations.iter().map(|v| v.path.as_str()).collect()
}

// ============================================================================
// Pattern Matching
// ============================================================================

#[test_case(SINGLE_LINE, "sales_db", true ; "single line plain")]
#[test_case(SINGLE_LINE, "tab\tseparated", true ; "single line tab")]
#[test_case(SINGLE_LINE, "two\nlines", false ; "single line newline")]
#[test_case(GLUE_VERSION, "2.0", true ; "glue version")]
#[test_case(GLUE_VERSION, "2", false ; "glue version without dot")]
#[test_case(ROLE_ARN, "arn:aws:iam::123456789012:role/etl", true ; "role arn")]
#[test_case(ROLE_ARN, "arn:aws:iam::1234:role/etl", false ; "role arn short account")]
fn test_matches_pattern(pattern: &'static str, value: &str, expected: bool) {
    assert_eq!(matches_pattern(pattern, value), expected);
}

#[test]
fn test_pattern_must_match_whole_value() {
    assert!(matches_pattern("[a-z]+", "abc"));
    assert!(!matches_pattern("[a-z]+", "abc1"));
}

#[test]
fn test_invalid_pattern_matches_everything() {
    assert!(matches_pattern("[unclosed", "anything"));
    // Cached result is reused
    assert!(matches_pattern("[unclosed", "again"));
}

#[test]
fn test_field_path() {
    assert_eq!(field_path("", "Name"), "Name");
    assert_eq!(field_path("StorageDescriptor", "Location"), "StorageDescriptor.Location");
}

// ============================================================================
// Constraint Classes
// ============================================================================

#[test]
fn test_valid_record_has_no_violations() {
    let mut limits = Limits::new();
    limits
        .with_code("abc")
        .with_slug("ok")
        .with_broken("whatever")
        .with_ratio(0.5)
        .with_retries(0)
        .with_total(10)
        .extend_items(["one"])
        .add_labels_entry("k", "v")
        .unwrap();
    assert!(limits.validate(&ValidationOptions::default()).is_empty());
}

#[test]
fn test_absent_fields_are_not_checked() {
    assert!(Limits::new().validate(&ValidationOptions::strict()).is_empty());
}

#[test]
fn test_length_bounds_count_characters() {
    let mut limits = Limits::new();
    limits.with_code("é");
    assert_eq!(
        limits.validate(&ValidationOptions::default()),
        vec![ConstraintViolation::new("Code", "length 1 is outside 2..=4")]
    );

    limits.with_code("éééé");
    assert!(limits.validate(&ValidationOptions::default()).is_empty());
}

#[test]
fn test_pattern_violation() {
    let mut limits = Limits::new();
    limits.with_slug("Not-Ok");
    assert_eq!(
        limits.validate(&ValidationOptions::default()),
        vec![ConstraintViolation::new("Slug", "value does not match pattern [a-z]+")]
    );
}

#[test]
fn test_numeric_violations() {
    let mut limits = Limits::new();
    limits.with_ratio(1.5).with_retries(-1).with_total(0);
    assert_eq!(
        limits.validate(&ValidationOptions::default()),
        vec![
            ConstraintViolation::new("Ratio", "value 1.5 is outside 0..=1"),
            ConstraintViolation::new("Retries", "value -1 is below minimum 0"),
            ConstraintViolation::new("Total", "value 0 is outside 1..=10"),
        ]
    );
}

#[test]
fn test_large_integers_compare_exactly() {
    let limit = 1_i64 << 53;
    let mut limits = Limits::new();
    limits.with_offset(limit);
    assert!(limits.validate(&ValidationOptions::default()).is_empty());

    // limit + 1 rounds to limit as an f64
    limits.with_offset(limit + 1);
    assert_eq!(
        limits.validate(&ValidationOptions::default()),
        vec![ConstraintViolation::new(
            "Offset",
            "value 9007199254740993 is outside 0..=9007199254740992"
        )]
    );
}

#[test]
fn test_fractional_bound_on_integer() {
    let mut limits = Limits::new();
    limits.with_batch(1);
    assert!(limits.validate(&ValidationOptions::default()).is_empty());

    limits.with_batch(0);
    assert_eq!(
        limits.validate(&ValidationOptions::default()),
        vec![ConstraintViolation::new("Batch", "value 0 is below minimum 0.5")]
    );
}

#[test]
fn test_collection_lengths() {
    let mut limits = Limits::new();
    limits
        .with_items(Vec::new())
        .with_labels(crate::types::string_map([("a", "1"), ("b", "2")]));
    assert_eq!(
        limits.validate(&ValidationOptions::default()),
        vec![
            ConstraintViolation::new("Items", "length 0 is below minimum 1"),
            ConstraintViolation::new("Labels", "length 2 is outside 0..=1"),
        ]
    );
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_disabled_classes_are_skipped() {
    let mut limits = Limits::new();
    limits.with_code("x").with_slug("UPPER").with_ratio(9.0);

    let options = ValidationOptions {
        enforce_lengths: false,
        enforce_patterns: false,
        enforce_ranges: false,
        ..ValidationOptions::default()
    };
    assert!(limits.validate(&options).is_empty());

    let only_ranges = ValidationOptions {
        enforce_lengths: false,
        enforce_patterns: false,
        ..ValidationOptions::default()
    };
    assert_eq!(paths(&limits.validate(&only_ranges)), vec!["Ratio"]);
}

#[test]
fn test_unknown_enum_allowed_by_default() {
    let mut connection = Connection::new();
    connection.with_connection_type("NETWORK");
    assert!(connection.validate(&ValidationOptions::default()).is_empty());
}

#[test]
fn test_unknown_enum_rejected_when_strict() {
    let mut connection = Connection::new();
    connection.with_connection_type("NETWORK");
    assert_eq!(
        connection.validate(&ValidationOptions::strict()),
        vec![ConstraintViolation::new(
            "ConnectionType",
            "NETWORK is not a known ConnectionType (expected one of JDBC, SFTP, MONGODB, KAFKA)"
        )]
    );

    connection.with_connection_type(ConnectionType::Kafka);
    assert!(connection.validate(&ValidationOptions::strict()).is_empty());
}

// ============================================================================
// Nested Records
// ============================================================================

fn table_with_bad_column() -> Table {
    let storage = StorageDescriptor::new()
        .columns(vec![
            Column::new().name("id").column_type("bigint"),
            Column::new().name("").column_type("string"),
        ])
        .location("s3://bucket/orders/");

    let mut table = Table::new();
    table
        .with_name("orders")
        .with_database_name("sales_db")
        .with_storage_descriptor(storage);
    table
}

#[test]
fn test_nested_paths() {
    let violations = table_with_bad_column().validate(&ValidationOptions::default());
    assert_eq!(
        violations,
        vec![ConstraintViolation::new(
            "StorageDescriptor.Columns[1].Name",
            "length 0 is outside 1..=255"
        )]
    );
    assert_eq!(
        violations[0].to_string(),
        "StorageDescriptor.Columns[1].Name: length 0 is outside 1..=255"
    );
}

#[test]
fn test_nested_validation_can_be_turned_off() {
    let options = ValidationOptions {
        validate_nested: false,
        ..ValidationOptions::default()
    };
    assert!(table_with_bad_column().validate(&options).is_empty());
}

#[test]
fn test_validate_or_err() {
    let err = table_with_bad_column()
        .validate_or_err(&ValidationOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref violations } if violations.len() == 1));
    assert_eq!(
        err.to_string(),
        "Validation failed: StorageDescriptor.Columns[1].Name: length 0 is outside 1..=255"
    );
    assert!(!err.is_caller_bug());

    let mut table = Table::new();
    table.with_name("orders");
    assert!(table.validate_or_err(&ValidationOptions::default()).is_ok());
}

#[test]
fn test_constraint_display_and_class() {
    assert_eq!(Length(1, 255).to_string(), "length 1..=255");
    assert_eq!(Min(0.0).class(), "range");
    assert_eq!(Constraint::KnownEnum.class(), "enum");
}
