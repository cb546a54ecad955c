use std::path::PathBuf;

/// Output file written in the working directory when no other path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "timing_results.csv";

/// Smallest benchmarked key count; each following size doubles it.
pub const DEFAULT_MIN_SIZE: usize = 25;

/// Sizes are benchmarked while they do not exceed this bound.
pub const DEFAULT_MAX_SIZE: usize = 1 << 24;

/// Default tracing filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for one benchmark run.
///
/// The tool reads no flags or environment variables; the binary runs with
/// [`BenchConfig::default`] and tests adjust the fields directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    pub output_path: PathBuf,
    pub min_size: usize,
    pub max_size: usize,

    /// Explicit sizes to benchmark instead of the doubling sequence.
    pub sizes: Option<Vec<usize>>,

    /// Seed for key generation; `None` seeds from OS entropy.
    pub key_seed: Option<u64>,

    /// Seed for shuffling, independent of `key_seed`; `None` seeds from OS entropy.
    pub shuffle_seed: Option<u64>,

    /// When false, the fixed bucket table query pass iterates the keys without
    /// calling `search`, so its reported time is loop overhead only.
    pub query_fixed_table: bool,

    pub log_level: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            sizes: None,
            key_seed: None,
            shuffle_seed: None,
            query_fixed_table: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BenchConfig {
    /// The key counts to benchmark, in order.
    pub fn sizes(&self) -> Vec<usize> {
        if let Some(sizes) = &self.sizes {
            return sizes.clone();
        }

        let mut sizes = Vec::new();
        let mut n = self.min_size;
        while n > 0 && n <= self.max_size {
            sizes.push(n);
            n = match n.checked_mul(2) {
                Some(next) => next,
                None => break,
            };
        }
        sizes
    }
}
