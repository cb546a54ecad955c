use std::collections::BTreeSet;

use crate::error::Result;
use crate::interface::LookupStructure;
use crate::Key;

/// The "RedBlackTree" structure of the benchmark: a balanced ordered set of keys.
///
/// Backed by [`BTreeSet`]; inserting a key that is already present is a no-op.
#[derive(Clone, Debug, Default)]
pub struct OrderedSetIndex {
    keys: BTreeSet<Key>,
}

impl OrderedSetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the key was not already present.
    pub fn insert(&mut self, key: Key) -> bool {
        self.keys.insert(key)
    }

    pub fn contains(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.iter().copied()
    }
}

impl LookupStructure for OrderedSetIndex {
    const NAME: &'static str = "RedBlackTree";

    fn build(keys: &[Key]) -> Result<Self> {
        let mut index = OrderedSetIndex::new();
        for &key in keys {
            index.insert(key);
        }
        Ok(index)
    }

    fn contains(&self, key: Key) -> bool {
        OrderedSetIndex::contains(self, key)
    }
}
