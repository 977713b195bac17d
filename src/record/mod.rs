//! Generic record contract
//!
//! Every model type in this crate is a sparse record: a fixed, ordered set of
//! named fields, each independently present or absent. This module provides
//! the pieces that make records behave as structural values:
//!
//! - [`FieldEq`] - field-wise equality, absent == absent, deep for
//!   nested records, lists and maps
//! - [`StructuralHash`] - the `hash * 31 + field` fold over fields in
//!   declaration order, absent fields contribute `0`
//! - [`RecordRenderer`] / [`DisplayValue`] - `{Name: value,Other: value}`
//!   debug rendering of the present fields only
//! - [`insert_entry`] / [`clear_entries`] - incremental map building with
//!   duplicate-key rejection
//! - [`model_record!`](crate::model_record) - generates a record struct with
//!   all of the above plus its accessors
//!
//! # Thread safety
//!
//! Records are plain owned data and are `Send + Sync`. They are not
//! synchronized: mutating one instance from several threads (`set_*`,
//! `with_*`, `add_*_entry`) needs external locking, and shared reads are only
//! safe while no writer is active.

mod eq;
mod hash;
mod macros;
mod map;
mod render;
mod types;

pub use eq::FieldEq;
pub use hash::{leaf_hash, HashFold, StructuralHash, ABSENT_HASH, HASH_PRIME, HASH_SEED};
pub use map::{clear_entries, insert_entry, StringMap};
pub use render::{DisplayValue, RecordRenderer};
pub use types::{FieldDescriptor, FieldKind, FieldType};

use crate::config::ValidationOptions;
use crate::error::{Error, Result};
use crate::validate::ConstraintViolation;
use std::fmt;
use std::hash::Hash;

/// A generated model record
///
/// Implemented by [`model_record!`](crate::model_record); not meant to be
/// implemented by hand.
pub trait ModelRecord:
    Clone + Default + fmt::Debug + fmt::Display + Eq + Hash + StructuralHash + FieldEq
{
    /// Name of the record type (e.g. `Table`)
    const TYPE_NAME: &'static str;

    /// Field descriptors in declaration order
    const FIELDS: &'static [FieldDescriptor];

    /// Labels of the fields currently present, in declaration order
    fn present_fields(&self) -> Vec<&'static str>;

    /// Check whether every field is absent
    fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Look up a field descriptor by label (`DatabaseName`) or by Rust name
    /// (`database_name`)
    fn field(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS
            .iter()
            .find(|f| f.label == name || f.name == name)
    }

    /// Append constraint violations for this record to `out`, prefixing
    /// paths with `prefix`
    fn collect_violations(
        &self,
        prefix: &str,
        options: &ValidationOptions,
        out: &mut Vec<ConstraintViolation>,
    );

    /// Check every present field against its declared constraints
    fn validate(&self, options: &ValidationOptions) -> Vec<ConstraintViolation> {
        let mut violations = Vec::new();
        self.collect_violations("", options, &mut violations);
        if !violations.is_empty() {
            tracing::debug!(
                record = Self::TYPE_NAME,
                count = violations.len(),
                "record failed validation"
            );
        }
        violations
    }

    /// Like [`validate`](Self::validate), folding violations into an error
    fn validate_or_err(&self, options: &ValidationOptions) -> Result<()> {
        let violations = self.validate(options);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(violations))
        }
    }
}

#[cfg(test)]
mod tests;
