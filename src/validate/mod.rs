//! Field constraints
//!
//! Records carry the service's documented constraints (length bounds, regex
//! patterns, numeric ranges, enum membership) as metadata but never enforce
//! them on set. A wire collaborator that wants to catch bad input before
//! sending a request runs [`ModelRecord::validate`](crate::record::ModelRecord::validate),
//! which walks present fields (and nested records) and reports violations.

pub mod patterns;
mod types;

pub use types::{Constraint, ConstraintViolation};

use crate::config::ValidationOptions;
use crate::enums::OpenEnum;
use crate::record::StringMap;
use chrono::{DateTime, Utc};
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

/// Compiled patterns, keyed by their source text
static PATTERN_CACHE: LazyLock<Mutex<FxHashMap<&'static str, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(FxHashMap::default()));

/// Compile a full-match pattern, caching the result
fn compiled(pattern: &'static str) -> Option<Regex> {
    let mut cache = PATTERN_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(pattern)
        .or_insert_with(|| match Regex::new(&format!("^(?:{pattern})$")) {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!(pattern, error = %e, "skipping invalid constraint pattern");
                None
            }
        })
        .clone()
}

/// Check whether `value` fully matches `pattern`
///
/// Invalid patterns match everything.
pub fn matches_pattern(pattern: &'static str, value: &str) -> bool {
    compiled(pattern).map_or(true, |regex| regex.is_match(value))
}

/// Join a parent path and a field label (`StorageDescriptor.Location`)
pub fn field_path(prefix: &str, label: &str) -> String {
    if prefix.is_empty() {
        label.to_string()
    } else {
        format!("{prefix}.{label}")
    }
}

/// Values that can be checked against a [`Constraint`]
///
/// The default accepts everything, which is what records, booleans and
/// timestamps need.
pub trait CheckValue {
    /// Return a message if `constraint` is violated
    fn check(&self, _constraint: &Constraint, _options: &ValidationOptions) -> Option<String> {
        None
    }
}

/// Values that may contain nested records to validate
pub trait NestedValidate {
    fn validate_nested(
        &self,
        _path: &str,
        _options: &ValidationOptions,
        _out: &mut Vec<ConstraintViolation>,
    ) {
    }
}

/// Check one field against its constraints, skipping absent fields
pub fn check_field<T: CheckValue>(
    value: &Option<T>,
    path: &str,
    constraints: &[Constraint],
    options: &ValidationOptions,
    out: &mut Vec<ConstraintViolation>,
) {
    let Some(value) = value else {
        return;
    };
    for constraint in constraints {
        if !options.enforces(constraint) {
            continue;
        }
        if let Some(message) = value.check(constraint, options) {
            out.push(ConstraintViolation::new(path, message));
        }
    }
}

fn check_len(len: usize, constraint: &Constraint) -> Option<String> {
    match *constraint {
        Constraint::Length(min, max) if len < min || len > max => {
            Some(format!("length {len} is outside {min}..={max}"))
        }
        Constraint::MinLength(min) if len < min => {
            Some(format!("length {len} is below minimum {min}"))
        }
        _ => None,
    }
}

fn check_number(value: f64, constraint: &Constraint) -> Option<String> {
    match *constraint {
        Constraint::Range(min, max) if value < min || value > max => {
            Some(format!("value {value} is outside {min}..={max}"))
        }
        Constraint::Min(min) if value < min => {
            Some(format!("value {value} is below minimum {min}"))
        }
        _ => None,
    }
}

/// Integer bounds are compared exactly: a bound is rounded inward to the
/// nearest integer instead of converting the value to `f64`
fn check_integer(value: i64, constraint: &Constraint) -> Option<String> {
    let below = |min: f64| i128::from(value) < min.ceil() as i128;
    let above = |max: f64| i128::from(value) > max.floor() as i128;
    match *constraint {
        Constraint::Range(min, max) if below(min) || above(max) => {
            Some(format!("value {value} is outside {min}..={max}"))
        }
        Constraint::Min(min) if below(min) => {
            Some(format!("value {value} is below minimum {min}"))
        }
        _ => None,
    }
}

/// Check an open enum against [`Constraint::KnownEnum`]
pub fn check_enum<E: OpenEnum>(
    value: &E,
    constraint: &Constraint,
    options: &ValidationOptions,
) -> Option<String> {
    if !matches!(constraint, Constraint::KnownEnum) || value.is_known() {
        return None;
    }
    if !options.reject_unknown_enum_values {
        return None;
    }
    tracing::warn!(
        enum_type = E::TYPE_NAME,
        value = value.as_str(),
        "rejected unknown enum value"
    );
    Some(format!(
        "{} is not a known {} (expected one of {})",
        value.as_str(),
        E::TYPE_NAME,
        E::KNOWN_VALUES.join(", ")
    ))
}

impl CheckValue for String {
    fn check(&self, constraint: &Constraint, _options: &ValidationOptions) -> Option<String> {
        match *constraint {
            Constraint::Pattern(pattern) if !matches_pattern(pattern, self) => {
                Some(format!("value does not match pattern {pattern}"))
            }
            _ => check_len(self.chars().count(), constraint),
        }
    }
}

impl CheckValue for i32 {
    fn check(&self, constraint: &Constraint, _options: &ValidationOptions) -> Option<String> {
        check_integer(i64::from(*self), constraint)
    }
}

impl CheckValue for i64 {
    fn check(&self, constraint: &Constraint, _options: &ValidationOptions) -> Option<String> {
        check_integer(*self, constraint)
    }
}

impl CheckValue for f64 {
    fn check(&self, constraint: &Constraint, _options: &ValidationOptions) -> Option<String> {
        check_number(*self, constraint)
    }
}

impl CheckValue for bool {}

impl CheckValue for DateTime<Utc> {}

impl CheckValue for StringMap {
    fn check(&self, constraint: &Constraint, _options: &ValidationOptions) -> Option<String> {
        check_len(self.len(), constraint)
    }
}

impl<T> CheckValue for Vec<T> {
    fn check(&self, constraint: &Constraint, _options: &ValidationOptions) -> Option<String> {
        check_len(self.len(), constraint)
    }
}

impl NestedValidate for String {}
impl NestedValidate for i32 {}
impl NestedValidate for i64 {}
impl NestedValidate for f64 {}
impl NestedValidate for bool {}
impl NestedValidate for DateTime<Utc> {}
impl NestedValidate for StringMap {}

/// Items are validated under `Label[index]`
impl<T: NestedValidate> NestedValidate for Vec<T> {
    fn validate_nested(
        &self,
        path: &str,
        options: &ValidationOptions,
        out: &mut Vec<ConstraintViolation>,
    ) {
        for (i, item) in self.iter().enumerate() {
            item.validate_nested(&format!("{path}[{i}]"), options, out);
        }
    }
}

impl<T: NestedValidate> NestedValidate for Option<T> {
    fn validate_nested(
        &self,
        path: &str,
        options: &ValidationOptions,
        out: &mut Vec<ConstraintViolation>,
    ) {
        if let Some(value) = self {
            value.validate_nested(path, options, out);
        }
    }
}

#[cfg(test)]
mod tests;
