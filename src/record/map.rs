//! Incremental map building for map-valued fields

use crate::error::DuplicateKeyError;
use indexmap::IndexMap;
use tracing::{debug, trace};

/// String to string map used by every map-valued field
///
/// Keeps insertion order for rendering; equality ignores order.
pub type StringMap = IndexMap<String, String>;

/// Insert one entry into a map field, allocating the map when absent
///
/// Fails if `key` is already present, leaving the map untouched.
pub fn insert_entry(
    slot: &mut Option<StringMap>,
    record: &'static str,
    field: &'static str,
    key: String,
    value: String,
) -> Result<(), DuplicateKeyError> {
    let map = slot.get_or_insert_with(StringMap::new);
    if map.contains_key(&key) {
        debug!(record, field, key = %key, "rejected duplicate map key");
        return Err(DuplicateKeyError::new(field, key));
    }
    map.insert(key, value);
    Ok(())
}

/// Reset a map field to absent (not to an empty map)
pub fn clear_entries(slot: &mut Option<StringMap>, record: &'static str, field: &'static str) {
    if let Some(map) = slot.take() {
        trace!(record, field, entries = map.len(), "cleared map entries");
    }
}
