//! Tests for the generic record contract

use super::*;
use crate::{model_record, open_enum};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

open_enum! {
    pub enum Tier {
        Gold => "GOLD",
        Silver => "SILVER",
    }
}

model_record! {
    /// Nested part used by [`Sample`]
    pub struct Part {
        code: string => "Code",
    }
}

model_record! {
    /// One field of every kind
    pub struct Sample {
        name: string => "Name",
        count: value(i32) => "Count",
        ratio: value(f64) => "Ratio",
        enabled: value(bool) => "Enabled",
        created: value(chrono::DateTime<chrono::Utc>) => "Created",
        tier: open_enum(Tier) => "Tier",
        part: record(Part) => "Part",
        tags: list(String) => "Tags",
        parts: list(Part) => "Parts",
        labels: map => "Labels",
    }
}

fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
    leaf_hash(value)
}

// ============================================================================
// Optional Field Container
// ============================================================================

#[test]
fn test_new_record_is_empty() {
    let sample = Sample::new();
    assert!(sample.is_empty());
    assert!(sample.get_name().is_none());
    assert!(sample.get_count().is_none());
    assert!(sample.get_ratio().is_none());
    assert!(sample.get_enabled().is_none());
    assert!(sample.get_created().is_none());
    assert!(sample.get_tier().is_none());
    assert!(sample.get_part().is_none());
    assert!(sample.get_tags().is_none());
    assert!(sample.get_parts().is_none());
    assert!(sample.get_labels().is_none());
    assert_eq!(sample.to_string(), "{}");
}

#[test]
fn test_set_and_clear() {
    let mut sample = Sample::new();
    sample.set_name(Some("a".to_string()));
    sample.set_count(Some(0));
    assert_eq!(sample.get_name(), Some("a"));
    // Zero is a present value, not absence
    assert_eq!(sample.get_count(), Some(0));

    sample.set_name(None);
    sample.set_count(None);
    assert!(sample.is_empty());
}

#[test]
fn test_empty_string_is_present() {
    let mut sample = Sample::new();
    sample.with_name("");
    assert_eq!(sample.get_name(), Some(""));
    assert_ne!(sample, Sample::new());
    assert_eq!(sample.to_string(), "{Name: }");
}

#[test]
fn test_set_get_round_trip_all_kinds() {
    let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut sample = Sample::new();
    sample
        .with_name("n")
        .with_count(7)
        .with_ratio(0.5)
        .with_enabled(false)
        .with_created(created)
        .with_tier(Tier::Gold)
        .with_part(Part::new().code("p"))
        .with_tags(vec!["x".to_string()])
        .with_parts(vec![Part::new()])
        .with_labels(crate::types::string_map([("k", "v")]));

    assert_eq!(sample.get_name(), Some("n"));
    assert_eq!(sample.get_count(), Some(7));
    assert_eq!(sample.get_ratio(), Some(0.5));
    assert_eq!(sample.get_enabled(), Some(false));
    assert_eq!(sample.get_created(), Some(created));
    assert_eq!(sample.get_tier(), Some(&Tier::Gold));
    assert_eq!(sample.get_part().and_then(Part::get_code), Some("p"));
    assert_eq!(sample.get_tags(), Some(&["x".to_string()][..]));
    assert_eq!(sample.get_parts().map(<[Part]>::len), Some(1));
    assert_eq!(
        sample.get_labels().and_then(|m| m.get("k")).map(String::as_str),
        Some("v")
    );
    assert_eq!(sample.present_fields().len(), Sample::FIELDS.len());
}

// ============================================================================
// Fluent Builders
// ============================================================================

#[test]
fn test_with_returns_same_instance() {
    let mut sample = Sample::new();
    let addr = std::ptr::addr_of!(sample);
    let returned = sample.with_name("a").with_count(1);
    assert!(std::ptr::eq(returned, addr));
    assert_eq!(sample.get_name(), Some("a"));
    assert_eq!(sample.get_count(), Some(1));
}

#[test]
fn test_consuming_builder_matches_mutating() {
    let built = Sample::new().name("a").count(1).tier("SILVER");

    let mut mutated = Sample::new();
    mutated.with_name("a").with_count(1).with_tier(Tier::Silver);

    assert_eq!(built, mutated);
}

#[test]
fn test_enum_raw_and_symbolic_are_indistinguishable() {
    let mut raw = Sample::new();
    raw.with_tier("GOLD");
    let mut symbolic = Sample::new();
    symbolic.with_tier(Tier::Gold);

    assert_eq!(raw, symbolic);
    assert_eq!(raw.get_tier(), symbolic.get_tier());
    assert_eq!(raw.get_tier_str(), Some("GOLD"));
    assert_eq!(raw.structural_hash(), symbolic.structural_hash());
    assert_eq!(raw.to_string(), symbolic.to_string());
}

#[test]
fn test_enum_decoded_as_unknown_equals_variant() {
    let mut decoded = Sample::new();
    decoded.set_tier(Some(Tier::Unknown("SILVER".to_string())));
    let mut symbolic = Sample::new();
    symbolic.with_tier(Tier::Silver);

    assert_eq!(decoded.get_tier_str(), symbolic.get_tier_str());
    assert_eq!(decoded.to_string(), symbolic.to_string());
    assert_eq!(decoded, symbolic);
    assert_eq!(symbolic, decoded);
    assert_eq!(decoded.structural_hash(), symbolic.structural_hash());
    assert_eq!(hash_of(&decoded), hash_of(&symbolic));

    let mut set = HashSet::new();
    set.insert(decoded);
    assert!(set.contains(&symbolic));
}

#[test]
fn test_enum_unknown_raw_value_is_kept() {
    let mut sample = Sample::new();
    sample.with_tier("PLATINUM");
    assert_eq!(sample.get_tier(), Some(&Tier::Unknown("PLATINUM".to_string())));
    assert_eq!(sample.to_string(), "{Tier: PLATINUM}");
}

#[test]
fn test_extend_allocates_then_appends() {
    let mut sample = Sample::new();
    sample.extend_tags(["a", "b"]);
    sample.extend_tags(["c"]);
    assert_eq!(
        sample.get_tags(),
        Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
    );
}

#[test]
fn test_extend_with_nothing_marks_present() {
    let mut sample = Sample::new();
    sample.extend_tags(Vec::<String>::new());
    assert_eq!(sample.get_tags(), Some(&[][..]));
    assert_ne!(sample, Sample::new());
}

#[test]
fn test_with_list_replaces_wholesale() {
    let mut sample = Sample::new();
    sample.extend_tags(["a", "b"]);
    sample.with_tags(vec!["z".to_string()]);
    assert_eq!(sample.get_tags(), Some(&["z".to_string()][..]));
}

// ============================================================================
// Incremental Map Builder
// ============================================================================

#[test]
fn test_add_entry_allocates_map() {
    let mut sample = Sample::new();
    sample.add_labels_entry("k", "v").unwrap();
    assert_eq!(sample.get_labels().map(StringMap::len), Some(1));
}

#[test]
fn test_add_entry_rejects_duplicate_and_keeps_map() {
    let mut sample = Sample::new();
    sample.add_labels_entry("k", "v1").unwrap();

    let err = sample.add_labels_entry("k", "v2").unwrap_err();
    assert_eq!(err.key, "k");
    assert_eq!(err.field, "Labels");

    let labels = sample.get_labels().unwrap();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels.get("k").map(String::as_str), Some("v1"));
}

#[test]
fn test_clear_entries_resets_to_absent() {
    let mut sample = Sample::new();
    sample.add_labels_entry("k", "v").unwrap();
    sample.clear_labels_entries();
    assert!(sample.get_labels().is_none());

    // A new build session starts after clearing
    sample.add_labels_entry("k", "v2").unwrap();
    assert_eq!(
        sample.get_labels().and_then(|m| m.get("k")).map(String::as_str),
        Some("v2")
    );
}

#[test]
fn test_bulk_set_bypasses_duplicate_check() {
    let mut sample = Sample::new();
    sample.add_labels_entry("k", "v1").unwrap();
    sample.set_labels(Some(crate::types::string_map([("k", "v2")])));
    assert_eq!(
        sample.get_labels().and_then(|m| m.get("k")).map(String::as_str),
        Some("v2")
    );
}

#[test]
fn test_clear_on_absent_is_noop() {
    let mut sample = Sample::new();
    sample.clear_labels_entries();
    assert!(sample.get_labels().is_none());
}

// ============================================================================
// Equality & Hash
// ============================================================================

#[test]
fn test_equality_reflexive_and_symmetric() {
    let mut a = Sample::new();
    a.with_name("a").with_ratio(1.5);
    let b = a.clone();

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(Sample::new(), Sample::new());
}

#[test]
fn test_present_never_equals_absent() {
    let mut a = Sample::new();
    a.with_name("a").with_count(1);
    let mut b = Sample::new();
    b.with_name("a");

    assert_ne!(a, b);
    assert_ne!(b, a);
}

#[test]
fn test_map_equality_ignores_insertion_order() {
    let mut a = Sample::new();
    a.add_labels_entry("x", "1").unwrap().add_labels_entry("y", "2").unwrap();
    let mut b = Sample::new();
    b.add_labels_entry("y", "2").unwrap().add_labels_entry("x", "1").unwrap();

    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());
    // Rendering follows insertion order
    assert_eq!(a.to_string(), "{Labels: {x=1, y=2}}");
    assert_eq!(b.to_string(), "{Labels: {y=2, x=1}}");
}

#[test]
fn test_list_equality_respects_order() {
    let mut a = Sample::new();
    a.extend_tags(["x", "y"]);
    let mut b = Sample::new();
    b.extend_tags(["y", "x"]);
    assert_ne!(a, b);
}

#[test]
fn test_nested_record_deep_equality() {
    let mut a = Sample::new();
    a.with_part(Part::new().code("p"));
    let mut b = Sample::new();
    b.with_part(Part::new().code("p"));
    assert_eq!(a, b);

    b.with_part(Part::new().code("q"));
    assert_ne!(a, b);
}

#[test]
fn test_double_equality_by_bits() {
    let mut a = Sample::new();
    a.with_ratio(f64::NAN);
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());

    let mut zero = Sample::new();
    zero.with_ratio(0.0);
    let mut negative_zero = Sample::new();
    negative_zero.with_ratio(-0.0);
    assert_ne!(zero, negative_zero);
}

#[test]
fn test_empty_record_hash_is_fold_of_absent_fields() {
    let expected = (0..Sample::FIELDS.len()).fold(HASH_SEED, |acc, _| {
        acc.wrapping_mul(HASH_PRIME).wrapping_add(ABSENT_HASH)
    });
    assert_eq!(Sample::new().structural_hash(), expected);
}

#[test]
fn test_hash_fold_order_matters() {
    let forward = HashFold::new().field(&1i32).field(&2i32).finish();
    let backward = HashFold::new().field(&2i32).field(&1i32).finish();
    assert_ne!(forward, backward);
}

#[test]
fn test_equal_records_hash_equal() {
    let created = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let mut a = Sample::new();
    a.with_name("a")
        .with_created(created)
        .with_tier("GOLD")
        .with_part(Part::new().code("p"))
        .extend_parts([Part::new().code("q")]);
    let b = a.clone();

    assert_eq!(a.structural_hash(), b.structural_hash());
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_records_work_in_hash_sets() {
    let mut set = HashSet::new();
    set.insert(Sample::new().name("a"));
    set.insert(Sample::new().name("a"));
    set.insert(Sample::new().name("b"));
    assert_eq!(set.len(), 2);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_declaration_order_skips_absent() {
    let mut sample = Sample::new();
    sample
        .with_labels(crate::types::string_map([("k", "v")]))
        .with_count(3)
        .with_name("n");
    assert_eq!(sample.to_string(), "{Name: n,Count: 3,Labels: {k=v}}");
}

#[test]
fn test_render_last_field_absent_has_no_trailing_comma() {
    let sample = Sample::new().name("n").count(1);
    assert_eq!(sample.to_string(), "{Name: n,Count: 1}");
}

#[test]
fn test_render_values() {
    let sample = Sample::new()
        .ratio(2.0)
        .enabled(true)
        .created(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
        .part(Part::new().code("p"))
        .tags(vec!["a".to_string(), "b".to_string()])
        .parts(vec![Part::new().code("x"), Part::new()]);

    assert_eq!(
        sample.to_string(),
        "{Ratio: 2.0,Enabled: true,Created: 2024-01-02 03:04:05 UTC,\
         Part: {Code: p},Tags: [a, b],Parts: [{Code: x}, {}]}"
    );
}

// ============================================================================
// Introspection
// ============================================================================

#[test]
fn test_field_descriptors() {
    assert_eq!(Sample::TYPE_NAME, "Sample");
    let labels: Vec<_> = Sample::FIELDS.iter().map(|f| f.label).collect();
    assert_eq!(
        labels,
        vec![
            "Name", "Count", "Ratio", "Enabled", "Created", "Tier", "Part", "Tags", "Parts",
            "Labels"
        ]
    );

    let kinds: Vec<_> = Sample::FIELDS.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::String,
            FieldKind::Integer,
            FieldKind::Double,
            FieldKind::Boolean,
            FieldKind::Timestamp,
            FieldKind::Enum("Tier"),
            FieldKind::Record("Part"),
            FieldKind::List("string"),
            FieldKind::List("Part"),
            FieldKind::Map,
        ]
    );
}

#[test]
fn test_field_lookup_by_label_or_name() {
    assert_eq!(Sample::field("Labels").map(|f| f.name), Some("labels"));
    assert_eq!(Sample::field("ratio").map(|f| f.label), Some("Ratio"));
    assert!(Sample::field("Missing").is_none());
}

#[test]
fn test_field_kind_display() {
    assert_eq!(FieldKind::Enum("Tier").to_string(), "enum<Tier>");
    assert_eq!(FieldKind::List("string").to_string(), "list<string>");
    assert_eq!(FieldKind::Map.to_string(), "map<string, string>");
}

#[test]
fn test_records_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sample>();
}
