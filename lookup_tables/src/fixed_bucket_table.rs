//! The "PerfectHashing" structure of the benchmark.
//!
//! Despite the name this is not a perfect hash: it is a chained table with one
//! bucket per input key, built in a single pass. Collisions are chained and the
//! worst-case lookup is linear in the longest chain.

use std::num::NonZeroUsize;

use crate::bucket_array::{BucketArray, BucketStats};
use crate::error::{LookupTableError, Result};
use crate::interface::LookupStructure;
use crate::Key;

#[derive(Clone, Debug)]
pub struct FixedBucketTable {
    buckets: BucketArray,
}

impl FixedBucketTable {
    /// Builds a table with `keys.len()` buckets holding every key in `keys`.
    pub fn build(keys: &[Key]) -> Result<Self> {
        let num_buckets = NonZeroUsize::new(keys.len()).ok_or(LookupTableError::EmptyKeySet)?;
        let mut buckets = BucketArray::new(num_buckets);
        for &key in keys {
            buckets.push(key);
        }
        Ok(Self { buckets })
    }

    pub fn search(&self, key: Key) -> bool {
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

impl LookupStructure for FixedBucketTable {
    const NAME: &'static str = "PerfectHashing";

    fn build(keys: &[Key]) -> Result<Self> {
        FixedBucketTable::build(keys)
    }

    fn contains(&self, key: Key) -> bool {
        self.search(key)
    }
}
