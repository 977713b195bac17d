//! Structural field equality

use super::map::StringMap;
use chrono::{DateTime, Utc};

/// Equality used when comparing two records field by field
///
/// Identical to `==` except for doubles, which compare by bit pattern so that
/// equality stays consistent with [`StructuralHash`](super::StructuralHash)
/// (`NaN` equals `NaN`, `0.0` differs from `-0.0`).
pub trait FieldEq {
    fn field_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_field_eq_via_partial_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldEq for $ty {
                fn field_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_field_eq_via_partial_eq!(String, i32, i64, bool, DateTime<Utc>);

impl FieldEq for f64 {
    fn field_eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

/// Key order is ignored
impl FieldEq for StringMap {
    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: FieldEq> FieldEq for Vec<T> {
    fn field_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.field_eq(b))
    }
}

impl<T: FieldEq> FieldEq for Option<T> {
    fn field_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.field_eq(b),
            _ => false,
        }
    }
}
