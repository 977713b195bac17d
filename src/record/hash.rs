//! Structural hashing
//!
//! A record hashes as `fold(hash * 31 + field_hash)` over its fields in
//! declaration order, starting from `1`, with `0` for absent fields. Leaf
//! values go through `FxHasher`, which is deterministic across runs. Only the
//! equal-implies-equal-hash property is a contract; the numbers themselves are
//! not meant to be stored or compared across versions.

use super::map::StringMap;
use chrono::{DateTime, Utc};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Multiplier of the field fold
pub const HASH_PRIME: u64 = 31;

/// Starting value of the field fold
pub const HASH_SEED: u64 = 1;

/// Contribution of an absent field
pub const ABSENT_HASH: u64 = 0;

/// Hash consistent with [`FieldEq`](super::FieldEq)
pub trait StructuralHash {
    fn structural_hash(&self) -> u64;
}

/// Hash a single leaf value with `FxHasher`
pub fn leaf_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Accumulator for the `hash * 31 + field` fold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashFold(u64);

impl HashFold {
    /// Start a fold at [`HASH_SEED`]
    pub fn new() -> Self {
        Self(HASH_SEED)
    }

    /// Fold in one field
    pub fn field<T: StructuralHash + ?Sized>(mut self, value: &T) -> Self {
        self.0 = self
            .0
            .wrapping_mul(HASH_PRIME)
            .wrapping_add(value.structural_hash());
        self
    }

    /// Final hash value
    pub fn finish(self) -> u64 {
        self.0
    }
}

impl Default for HashFold {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_leaf_hash {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StructuralHash for $ty {
                fn structural_hash(&self) -> u64 {
                    leaf_hash(self)
                }
            }
        )*
    };
}

impl_leaf_hash!(String, i32, i64, bool, DateTime<Utc>);

impl StructuralHash for f64 {
    fn structural_hash(&self) -> u64 {
        leaf_hash(&self.to_bits())
    }
}

/// Order-independent: entry hashes are summed
impl StructuralHash for StringMap {
    fn structural_hash(&self) -> u64 {
        self.iter()
            .map(|(k, v)| leaf_hash(&(k.as_str(), v.as_str())))
            .fold(0u64, u64::wrapping_add)
    }
}

impl<T: StructuralHash> StructuralHash for Vec<T> {
    fn structural_hash(&self) -> u64 {
        self.iter()
            .fold(HashFold::new(), |fold, item| fold.field(item))
            .finish()
    }
}

impl<T: StructuralHash> StructuralHash for Option<T> {
    fn structural_hash(&self) -> u64 {
        self.as_ref()
            .map_or(ABSENT_HASH, StructuralHash::structural_hash)
    }
}
