//! Field metadata types

use crate::validate::Constraint;
use chrono::{DateTime, Utc};
use std::fmt;

/// Semantic type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Long,
    Double,
    Boolean,
    Timestamp,
    /// Open enum, carrying the enum type name
    Enum(&'static str),
    /// Nested record, carrying the record type name
    Record(&'static str),
    /// Ordered sequence, carrying the element type label
    List(&'static str),
    /// String to string mapping
    Map,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Long => write!(f, "long"),
            FieldKind::Double => write!(f, "double"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Timestamp => write!(f, "timestamp"),
            FieldKind::Enum(name) => write!(f, "enum<{name}>"),
            FieldKind::Record(name) => write!(f, "record<{name}>"),
            FieldKind::List(element) => write!(f, "list<{element}>"),
            FieldKind::Map => write!(f, "map<string, string>"),
        }
    }
}

/// Static description of one record field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Rust accessor name (e.g. `database_name`)
    pub name: &'static str,
    /// Service-side label, used for rendering (e.g. `DatabaseName`)
    pub label: &'static str,
    /// Semantic type
    pub kind: FieldKind,
    /// Constraints a wire collaborator may enforce
    pub constraints: &'static [Constraint],
}

/// Types that can be stored in a record field or list element
pub trait FieldType {
    /// Semantic kind when used as a field
    const KIND: FieldKind;

    /// Short label when used as a list element
    const TYPE_LABEL: &'static str;
}

macro_rules! impl_field_type {
    ($($ty:ty => $kind:expr, $label:literal;)*) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = $kind;
                const TYPE_LABEL: &'static str = $label;
            }
        )*
    };
}

impl_field_type! {
    String => FieldKind::String, "string";
    i32 => FieldKind::Integer, "integer";
    i64 => FieldKind::Long, "long";
    f64 => FieldKind::Double, "double";
    bool => FieldKind::Boolean, "boolean";
    DateTime<Utc> => FieldKind::Timestamp, "timestamp";
}
