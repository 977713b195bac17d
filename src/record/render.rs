//! Debug rendering of records
//!
//! `{Name: orders,DatabaseName: sales_db,Parameters: {classification=parquet}}`
//!
//! Only present fields are written, in declaration order. This is a debugging
//! aid, not a wire format, and is never parsed back.

use super::map::StringMap;
use chrono::{DateTime, Utc};
use std::fmt;

/// How a field value is written inside a record rendering
pub trait DisplayValue {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl DisplayValue for String {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! impl_display_value_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DisplayValue for $ty {
                fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_display_value_via_display!(i32, i64, bool, DateTime<Utc>);

/// Doubles always show a fractional part (`2.0`, not `2`)
impl DisplayValue for f64 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<T: DisplayValue> DisplayValue for Vec<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }
}

/// `{key=value, other=value}` in insertion order
impl DisplayValue for StringMap {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

/// Writes `{Label: value,Label: value}` for the present fields of a record
///
/// Works like `Formatter::debug_struct`: chain [`field`](Self::field) calls
/// and end with [`finish`](Self::finish).
pub struct RecordRenderer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> RecordRenderer<'a, 'b> {
    /// Open the rendering
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        Self {
            f,
            result,
            has_fields: false,
        }
    }

    /// Write `label: value` if the field is present, skip it otherwise
    pub fn field<T: DisplayValue>(&mut self, label: &str, value: &Option<T>) -> &mut Self {
        let Some(value) = value else {
            return self;
        };
        self.result = self.result.and_then(|()| {
            if self.has_fields {
                self.f.write_str(",")?;
            }
            write!(self.f, "{label}: ")?;
            value.fmt_value(self.f)
        });
        self.has_fields = true;
        self
    }

    /// Close the rendering
    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|()| self.f.write_str("}"))
    }
}
