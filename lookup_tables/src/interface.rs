use crate::error::Result;
use crate::Key;

/// A key-lookup structure that can be benchmarked: built from a full key set,
/// then queried for membership.
pub trait LookupStructure: Sized {
    /// Column prefix used when reporting timings for this structure.
    const NAME: &'static str;

    /// Creates the structure and populates it with every key in `keys`.
    ///
    /// This is the whole insert phase of a benchmark pass, allocation included.
    fn build(keys: &[Key]) -> Result<Self>;

    fn contains(&self, key: Key) -> bool;
}
