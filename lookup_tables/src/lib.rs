#![cfg_attr(feature = "strict", deny(warnings))]

//! Key-lookup structures over integer keys: two chained hash tables sharing one
//! multiplicative hash, and a balanced ordered set.

mod bucket_array;
pub mod chained_hash_table;
pub mod error;
pub mod fixed_bucket_table;
mod interface;
pub mod key_hasher;
pub mod ordered_set_index;

pub use bucket_array::{BucketArray, BucketStats};
pub use chained_hash_table::ChainedHashTable;
pub use error::{LookupTableError, Result};
pub use fixed_bucket_table::FixedBucketTable;
pub use interface::LookupStructure;
pub use key_hasher::{bucket_index, KeyHasher, HASH_MULTIPLIER};
pub use ordered_set_index::OrderedSetIndex;

/// The key type stored by every structure in this crate.
pub type Key = i32;
