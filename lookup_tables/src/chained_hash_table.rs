use std::num::NonZeroUsize;

use crate::bucket_array::{BucketArray, BucketStats};
use crate::error::{LookupTableError, Result};
use crate::interface::LookupStructure;
use crate::Key;

/// A chained hash table with a bucket count fixed at construction.
///
/// Keys are appended to their bucket on [`insert`](Self::insert) with no duplicate
/// detection, so each bucket behaves as a multiset. The table never resizes.
#[derive(Clone, Debug)]
pub struct ChainedHashTable {
    buckets: BucketArray,
}

impl ChainedHashTable {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let num_buckets = NonZeroUsize::new(capacity).ok_or(LookupTableError::ZeroCapacity)?;
        Ok(Self {
            buckets: BucketArray::new(num_buckets),
        })
    }

    pub fn insert(&mut self, key: Key) {
        self.buckets.push(key);
    }

    pub fn contains(&self, key: Key) -> bool {
        self.buckets.contains(key)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.num_buckets()
    }

    pub fn stats(&self) -> BucketStats {
        self.buckets.stats()
    }
}

impl LookupStructure for ChainedHashTable {
    const NAME: &'static str = "HashingWithChaining";

    /// Allocates `keys.len()` buckets, then inserts the keys one at a time.
    fn build(keys: &[Key]) -> Result<Self> {
        let mut table = ChainedHashTable::with_capacity(keys.len())?;
        for &key in keys {
            table.insert(key);
        }
        Ok(table)
    }

    fn contains(&self, key: Key) -> bool {
        ChainedHashTable::contains(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_contains() {
        let mut table = ChainedHashTable::with_capacity(4).unwrap();
        for key in [10, 20, 30, 40] {
            table.insert(key);
        }
        assert!(table.contains(10));
        assert!(table.contains(40));
        assert!(!table.contains(99));
        assert_eq!(table.num_buckets(), 4);
    }

    #[test]
    fn test_capacity_is_independent_of_key_count() {
        let mut table = ChainedHashTable::with_capacity(2).unwrap();
        for key in 0..100 {
            table.insert(key);
        }
        assert_eq!(table.num_buckets(), 2);
        assert_eq!(table.len(), 100);
        assert!((0..100).all(|k| table.contains(k)));
        assert!(!table.contains(100));
    }

    #[test]
    fn test_duplicates_are_stored_separately() {
        let mut table = ChainedHashTable::with_capacity(8).unwrap();
        table.insert(3);
        table.insert(3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.stats().max_bucket_len, 2);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert_eq!(ChainedHashTable::with_capacity(0).unwrap_err(), LookupTableError::ZeroCapacity);
    }

    #[test]
    fn test_empty_table_contains_nothing() {
        let table = ChainedHashTable::with_capacity(16).unwrap();
        assert!(table.is_empty());
        assert!(!table.contains(0));
    }
}
