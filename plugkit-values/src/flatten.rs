//! Flattening nested bags into one level
//!
//! Merge semantics follow the host runtime's array-merge: positional keys
//! are renumbered to consecutive indexes in first-appearance order, named
//! keys keep their first position and the last written value wins. Sibling
//! sub-bags sharing a named key therefore overwrite each other with no key
//! prefixing; that collision behavior is kept as the host exhibits it.

use crate::bag::{Bag, Value};
use crate::key::Key;

impl Bag {
    /// Collect every leaf value at any depth into a single-level bag.
    ///
    /// Traversal is depth-first in iteration order. Always returns a bag;
    /// an empty bag flattens to an empty bag.
    pub fn flatten(&self) -> Bag {
        let mut flat = Flattened::default();
        flat.absorb(self);
        flat.bag
    }
}

#[derive(Default)]
struct Flattened {
    bag: Bag,
    next_index: i64,
}

impl Flattened {
    fn absorb(&mut self, bag: &Bag) {
        for (key, value) in bag.iter() {
            match value {
                Value::Bag(inner) => self.absorb(inner),
                leaf => self.merge(key, leaf),
            }
        }
    }

    fn merge(&mut self, key: &Key, leaf: &Value) {
        match key {
            Key::Named(_) => {
                self.bag.insert(key.clone(), leaf.clone());
            }
            Key::Positional(_) => {
                self.bag.insert(Key::Positional(self.next_index), leaf.clone());
                self.next_index += 1;
            }
        }
    }
}
