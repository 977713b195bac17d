//! Constraint types

use std::fmt;

/// A documented constraint on a field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Inclusive length bounds: characters of a string, items of a list,
    /// entries of a map
    Length(usize, usize),
    /// Lower length bound only
    MinLength(usize),
    /// Regex the whole string must match
    Pattern(&'static str),
    /// Inclusive numeric bounds
    Range(f64, f64),
    /// Lower numeric bound only
    Min(f64),
    /// Enum value must be one of the known variants
    KnownEnum,
}

impl Constraint {
    /// Short name of the constraint class
    pub fn class(&self) -> &'static str {
        match self {
            Constraint::Length(..) | Constraint::MinLength(_) => "length",
            Constraint::Pattern(_) => "pattern",
            Constraint::Range(..) | Constraint::Min(_) => "range",
            Constraint::KnownEnum => "enum",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Length(min, max) => write!(f, "length {min}..={max}"),
            Constraint::MinLength(min) => write!(f, "length >= {min}"),
            Constraint::Pattern(pattern) => write!(f, "pattern {pattern}"),
            Constraint::Range(min, max) => write!(f, "range {min}..={max}"),
            Constraint::Min(min) => write!(f, "range >= {min}"),
            Constraint::KnownEnum => write!(f, "known enum value"),
        }
    }
}

/// A field value that broke one of its constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// Dotted path of labels, e.g. `StorageDescriptor.Columns[0].Name`
    pub path: String,
    /// What went wrong
    pub message: String,
}

impl ConstraintViolation {
    /// Create a violation
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
