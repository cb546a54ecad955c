use lookup_tables::Key;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed keys.
pub trait KeySource {
    fn next_key(&mut self) -> Key;

    fn generate(&mut self, n: usize) -> Vec<Key> {
        (0..n).map(|_| self.next_key()).collect()
    }
}

/// Draws keys uniformly from `[0, Key::MAX]`.
pub struct RandomKeySource<R: Rng = ChaCha8Rng> {
    rng: R,
}

impl RandomKeySource<ChaCha8Rng> {
    /// Seeds from `seed`, or from the thread-local OS-seeded generator when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_rng(seeded_rng(seed))
    }
}

impl<R: Rng> RandomKeySource<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> KeySource for RandomKeySource<R> {
    fn next_key(&mut self) -> Key {
        self.rng.random_range(0..=Key::MAX)
    }
}

/// Applies a uniformly random permutation (Fisher-Yates) to `keys` using a
/// fresh generator, independent of the one that produced the keys.
pub fn shuffle_keys(keys: &mut [Key], seed: Option<u64>) {
    keys.shuffle(&mut seeded_rng(seed));
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}
