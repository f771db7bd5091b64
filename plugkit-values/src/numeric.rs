//! Numeric-key extraction and ceiling lookup

use crate::bag::{Bag, Value};
use crate::key::{parse_numeric_key, Key};
use indexmap::IndexMap;
use smallvec::SmallVec;

impl Bag {
    /// Keep only the entries with numeric keys, coerced to integers.
    ///
    /// Positional keys pass through unchanged. Named keys survive when
    /// [`parse_numeric_key`] accepts them, with the fractional part
    /// truncated toward zero (`"7.3"` becomes key `7`). Coercion
    /// collisions keep the first position and the last value.
    pub fn numeric_entries(&self) -> IndexMap<i64, Value> {
        let mut numeric = IndexMap::new();

        for (key, value) in self.iter() {
            let index = match key {
                Key::Positional(index) => Some(*index),
                Key::Named(name) => parse_numeric_key(name),
            };
            if let Some(index) = index {
                numeric.insert(index, value.clone());
            }
        }

        numeric
    }

    /// The maximum positional key, if any.
    ///
    /// Named keys never count here, even numeric-looking ones. `None`
    /// distinguishes "no integer keys" from a legitimate maximum of `0`.
    pub fn max_int_key(&self) -> Option<i64> {
        self.keys()
            .filter_map(|key| match key {
                Key::Positional(index) => Some(*index),
                Key::Named(_) => None,
            })
            .max()
    }

    /// The smallest numeric key that is `>= lookup`, after coercing keys
    /// via [`Bag::numeric_entries`].
    ///
    /// An exact match returns the match; a lookup at or below the minimum
    /// returns the minimum; a lookup above the maximum (or an empty
    /// numeric set) returns `None`.
    pub fn ceiling_key(&self, lookup: i64) -> Option<i64> {
        self.ceiling_entry(lookup).map(|(key, _)| key)
    }

    /// Like [`Bag::ceiling_key`], but returns the value stored under the
    /// found key.
    pub fn ceiling_value(&self, lookup: i64) -> Option<Value> {
        self.ceiling_entry(lookup).map(|(_, value)| value)
    }

    // Sort-and-scan on each call; no index survives between calls.
    fn ceiling_entry(&self, lookup: i64) -> Option<(i64, Value)> {
        let numeric = self.numeric_entries();

        let mut keys: SmallVec<[i64; 16]> = numeric.keys().copied().collect();
        keys.sort_unstable();

        let found = keys.into_iter().find(|&key| key >= lookup)?;
        let value = numeric.get(&found)?.clone();
        Some((found, value))
    }
}
