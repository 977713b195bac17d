//! Error types for the Glue model
//!
//! Records never fail on get/set/with. The only failure a record raises on its
//! own is [`DuplicateKeyError`] from the incremental map builders. Everything
//! else here belongs to the helpers a wire collaborator uses around records:
//! strict enum parsing, constraint validation and options loading.

use crate::validate::ConstraintViolation;
use thiserror::Error;

/// A map field received the same key twice in one incremental build.
///
/// This signals a bug in the calling code, never bad service data. The map is
/// left exactly as it was before the rejected insert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Duplicated keys ({key}) are provided for {field}")]
pub struct DuplicateKeyError {
    /// Label of the map field (e.g. `Parameters`)
    pub field: &'static str,
    /// The offending key
    pub key: String,
}

impl DuplicateKeyError {
    /// Create a duplicate key error
    pub fn new(field: &'static str, key: impl Into<String>) -> Self {
        Self {
            field,
            key: key.into(),
        }
    }
}

/// The main error type for the Glue model
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Record Building Errors
    // ============================================================================
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),

    // ============================================================================
    // Enum Errors
    // ============================================================================
    #[error("Value cannot be null or empty for {type_name}")]
    EmptyEnumValue { type_name: &'static str },

    #[error("Cannot create {type_name} from {value} value")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Validation failed: {}", format_violations(.violations))]
    Validation { violations: Vec<ConstraintViolation> },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown enum value error
    pub fn unknown_enum(type_name: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            type_name,
            value: value.into(),
        }
    }

    /// Create a validation error from collected violations
    pub fn validation(violations: Vec<ConstraintViolation>) -> Self {
        Self::Validation { violations }
    }

    /// Check if this error comes from a local programming mistake rather
    /// than from data or the environment
    pub fn is_caller_bug(&self) -> bool {
        matches!(
            self,
            Error::DuplicateKey(_) | Error::EmptyEnumValue { .. } | Error::UnknownEnumValue { .. }
        )
    }
}

fn format_violations(violations: &[ConstraintViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for the Glue model
pub type Result<T> = std::result::Result<T, Error>;
