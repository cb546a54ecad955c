use std::num::NonZeroUsize;

use crate::key_hasher::KeyHasher;
use crate::Key;

/// Occupancy summary of a [`BucketArray`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BucketStats {
    pub num_buckets: usize,
    pub num_keys: usize,
    pub empty_buckets: usize,
    pub max_bucket_len: usize,
}

/// A fixed number of collision chains addressed by [`KeyHasher`].
///
/// Buckets grow without bound and nothing is ever evicted or rehashed; the
/// number of buckets is set once at construction.
#[derive(Clone, Debug)]
pub struct BucketArray {
    hasher: KeyHasher,
    buckets: Vec<Vec<Key>>,
    num_keys: usize,
}

impl BucketArray {
    pub fn new(num_buckets: NonZeroUsize) -> Self {
        Self {
            hasher: KeyHasher::new(num_buckets),
            buckets: vec![Vec::new(); num_buckets.get()],
            num_keys: 0,
        }
    }

    /// Appends `key` to the end of its bucket. Duplicates are stored again.
    #[inline]
    pub fn push(&mut self, key: Key) {
        let index = self.hasher.bucket_of(key);
        self.buckets[index].push(key);
        self.num_keys += 1;
    }

    /// Scans the bucket `key` hashes to for an equal key.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.bucket(self.hasher.bucket_of(key)).contains(&key)
    }

    pub fn bucket(&self, index: usize) -> &[Key] {
        &self.buckets[index]
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of stored keys, duplicates included.
    pub fn len(&self) -> usize {
        self.num_keys
    }

    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    pub fn hasher(&self) -> KeyHasher {
        self.hasher
    }

    pub fn stats(&self) -> BucketStats {
        let mut stats = BucketStats {
            num_buckets: self.buckets.len(),
            num_keys: self.num_keys,
            ..Default::default()
        };
        for bucket in &self.buckets {
            if bucket.is_empty() {
                stats.empty_buckets += 1;
            }
            stats.max_bucket_len = stats.max_bucket_len.max(bucket.len());
        }
        stats
    }
}
