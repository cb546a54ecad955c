use std::num::NonZeroUsize;

use crate::Key;

/// Odd 32-bit multiplier close to 2^32 / phi (Knuth's multiplicative hashing).
pub const HASH_MULTIPLIER: u32 = 2_654_435_761;

/// Number of low-order bits discarded from the product before reduction.
const DISCARDED_LOW_BITS: u32 = 16;

/// Maps `key` to a bucket index in `[0, table_len)`.
///
/// The key is reinterpreted as its unsigned 32-bit pattern, multiplied by
/// [`HASH_MULTIPLIER`] with wrap-around, shifted right by 16 bits, and reduced
/// modulo the table length. Negative keys therefore hash deterministically.
#[inline]
pub fn bucket_index(key: Key, table_len: NonZeroUsize) -> usize {
    let mixed = (key as u32).wrapping_mul(HASH_MULTIPLIER) >> DISCARDED_LOW_BITS;
    mixed as usize % table_len.get()
}

/// A [`bucket_index`] bound to one table length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyHasher {
    table_len: NonZeroUsize,
}

impl KeyHasher {
    pub fn new(table_len: NonZeroUsize) -> Self {
        Self { table_len }
    }

    pub fn table_len(&self) -> usize {
        self.table_len.get()
    }

    #[inline]
    pub fn bucket_of(&self, key: Key) -> usize {
        bucket_index(key, self.table_len)
    }
}
