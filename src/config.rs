//! Validation options
//!
//! Controls which constraint classes [`ModelRecord::validate`] enforces.
//! Options can be built in code or loaded from YAML:
//!
//! ```yaml
//! enforce_patterns: true
//! reject_unknown_enum_values: true
//! ```
//!
//! [`ModelRecord::validate`]: crate::record::ModelRecord::validate

use crate::error::{Error, Result};
use crate::validate::Constraint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Validation Options
// ============================================================================

/// Which constraints a validation pass enforces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationOptions {
    /// Check regex patterns on strings
    #[serde(default = "default_true")]
    pub enforce_patterns: bool,

    /// Check length bounds on strings, lists and maps
    #[serde(default = "default_true")]
    pub enforce_lengths: bool,

    /// Check numeric ranges
    #[serde(default = "default_true")]
    pub enforce_ranges: bool,

    /// Report enum values this crate does not know. Off by default since
    /// the service may add values before the model catches up.
    #[serde(default)]
    pub reject_unknown_enum_values: bool,

    /// Descend into nested records and record lists
    #[serde(default = "default_true")]
    pub validate_nested: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            enforce_patterns: true,
            enforce_lengths: true,
            enforce_ranges: true,
            reject_unknown_enum_values: false,
            validate_nested: true,
        }
    }
}

impl ValidationOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that enforce everything, unknown enum values included
    pub fn strict() -> Self {
        Self {
            reject_unknown_enum_values: true,
            ..Self::default()
        }
    }

    /// Check whether a constraint is enforced under these options
    pub fn enforces(&self, constraint: &Constraint) -> bool {
        match constraint {
            Constraint::Length(..) | Constraint::MinLength(_) => self.enforce_lengths,
            Constraint::Pattern(_) => self.enforce_patterns,
            Constraint::Range(..) | Constraint::Min(_) => self.enforce_ranges,
            Constraint::KnownEnum => self.reject_unknown_enum_values,
        }
    }

    /// Parse options from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse validation options: {e}")))
    }

    /// Load options from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.display().to_string(),
            },
            _ => Error::Io(e),
        })?;
        Self::from_yaml_str(&content)
    }
}
