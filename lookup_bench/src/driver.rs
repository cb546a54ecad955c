use std::hint::black_box;
use std::time::Instant;

use lookup_tables::{ChainedHashTable, FixedBucketTable, Key, LookupStructure, OrderedSetIndex};
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::key_source::{shuffle_keys, KeySource, RandomKeySource};
use crate::result_sink::{ResultRow, ResultSink};

/// Runs `f` and returns its output with the elapsed monotonic time, truncated to
/// whole milliseconds.
pub fn time_ms<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let output = f();
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    (output, elapsed_ms)
}

/// Insert and query timings of one structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PassTimings {
    insert_ms: u64,
    query_ms: u64,
}

/// Times the build of `S` over `keys`, then a query pass over the same keys.
///
/// With `query` false the pass visits each key without looking it up.
fn bench_structure<S: LookupStructure>(keys: &[Key], query: bool) -> Result<(S, PassTimings)> {
    let (structure, insert_ms) = time_ms(|| S::build(keys));
    let structure = structure?;

    let (found, query_ms) = time_ms(|| {
        let mut found = 0usize;
        for &key in keys {
            if query {
                found += structure.contains(black_box(key)) as usize;
            } else {
                black_box(key);
            }
        }
        found
    });
    black_box(found);

    Ok((structure, PassTimings { insert_ms, query_ms }))
}

/// Benchmarks the three lookup structures across a sequence of key counts.
pub struct BenchmarkDriver<K: KeySource = RandomKeySource> {
    config: BenchConfig,
    key_source: K,
}

impl BenchmarkDriver<RandomKeySource> {
    pub fn new(config: BenchConfig) -> Self {
        let key_source = RandomKeySource::new(config.key_seed);
        Self { config, key_source }
    }
}

impl<K: KeySource> BenchmarkDriver<K> {
    pub fn with_key_source(config: BenchConfig, key_source: K) -> Self {
        Self { config, key_source }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Benchmarks every configured size, appending one row per size to `sink`.
    ///
    /// Stops at the first failure; rows already written stay in the sink.
    pub fn run(&mut self, sink: &mut impl ResultSink) -> Result<Vec<ResultRow>> {
        let sizes = self.config.sizes();
        info!("Benchmarking {} sizes from {:?} to {:?}", sizes.len(), sizes.first(), sizes.last());

        let mut rows = Vec::with_capacity(sizes.len());
        for (iteration, n) in sizes.into_iter().enumerate() {
            let row = self.run_size(n, iteration)?;
            sink.write_row(&row)?;
            rows.push(row);
        }
        Ok(rows)
    }

    /// One benchmark iteration: generate and shuffle `n` keys, then time each
    /// structure's insert and query passes. All structures are dropped on return.
    pub fn run_size(&mut self, n: usize, iteration: usize) -> Result<ResultRow> {
        let mut keys = self.key_source.generate(n);
        let shuffle_seed = self.config.shuffle_seed.map(|seed| seed.wrapping_add(iteration as u64));
        shuffle_keys(&mut keys, shuffle_seed);

        let (fixed, perfect) = bench_structure::<FixedBucketTable>(&keys, self.config.query_fixed_table)?;
        debug!(n, stats = ?fixed.stats(), "{} buckets", FixedBucketTable::NAME);
        drop(fixed);

        let (chained, chain) = bench_structure::<ChainedHashTable>(&keys, true)?;
        debug!(n, stats = ?chained.stats(), "{} buckets", ChainedHashTable::NAME);
        drop(chained);

        let (_, tree) = bench_structure::<OrderedSetIndex>(&keys, true)?;

        let row = ResultRow {
            n: n as u64,
            perfect_insert_ms: perfect.insert_ms,
            perfect_query_ms: perfect.query_ms,
            chain_insert_ms: chain.insert_ms,
            chain_query_ms: chain.query_ms,
            tree_insert_ms: tree.insert_ms,
            tree_query_ms: tree.query_ms,
        };
        info!(
            n,
            perfect_insert_ms = row.perfect_insert_ms,
            perfect_query_ms = row.perfect_query_ms,
            chain_insert_ms = row.chain_insert_ms,
            chain_query_ms = row.chain_query_ms,
            tree_insert_ms = row.tree_insert_ms,
            tree_query_ms = row.tree_query_ms,
            "Benchmarked size"
        );
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lookup_tables::LookupTableError;
    use more_asserts::assert_ge;
    use tracing_test::traced_test;

    use super::*;
    use crate::error::BenchError;
    use crate::result_sink::MemoryResultSink;

    fn seeded_config(sizes: Vec<usize>) -> BenchConfig {
        BenchConfig {
            sizes: Some(sizes),
            key_seed: Some(1),
            shuffle_seed: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_time_ms_truncates() {
        let ((), ms) = time_ms(|| std::thread::sleep(Duration::from_millis(5)));
        assert_ge!(ms, 5);

        let (value, ms) = time_ms(|| 7);
        assert_eq!(value, 7);
        assert!(ms < 1000);
    }

    #[test]
    fn test_single_size_run() {
        let mut driver = BenchmarkDriver::new(seeded_config(vec![25]));
        let mut sink = MemoryResultSink::default();
        let rows = driver.run(&mut sink).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].n, 25);
        assert_eq!(sink.rows, rows);
    }

    #[test]
    fn test_rows_follow_size_order() {
        let mut driver = BenchmarkDriver::new(seeded_config(vec![25, 50, 100]));
        let mut sink = MemoryResultSink::default();
        driver.run(&mut sink).unwrap();
        assert_eq!(sink.rows.iter().map(|r| r.n).collect::<Vec<_>>(), vec![25, 50, 100]);
    }

    #[test]
    fn test_bench_structure_queries_when_enabled() {
        let keys = [10, 20, 30, 40];
        let (table, _) = bench_structure::<ChainedHashTable>(&keys, true).unwrap();
        assert_eq!(table.len(), 4);
        let (table, _) = bench_structure::<FixedBucketTable>(&keys, false).unwrap();
        assert!(table.search(30));
    }

    #[test]
    fn test_zero_size_fails() {
        let mut driver = BenchmarkDriver::new(seeded_config(vec![25, 0, 50]));
        let mut sink = MemoryResultSink::default();
        let err = driver.run(&mut sink).unwrap_err();

        assert!(matches!(err, BenchError::LookupTable(LookupTableError::EmptyKeySet)));
        // The size before the failure was already recorded.
        assert_eq!(sink.rows.len(), 1);
    }

    struct FixedKeys(Vec<Key>);

    impl KeySource for FixedKeys {
        fn next_key(&mut self) -> Key {
            self.0.pop().unwrap_or(0)
        }
    }

    #[test]
    fn test_custom_key_source() {
        let config = BenchConfig {
            query_fixed_table: true,
            ..seeded_config(vec![4])
        };
        let mut driver = BenchmarkDriver::with_key_source(config, FixedKeys(vec![10, 20, 30, 40]));
        let row = driver.run_size(4, 0).unwrap();
        assert_eq!(row.n, 4);
        assert!(driver.config().query_fixed_table);
    }

    #[test]
    #[traced_test]
    fn test_logs_each_size() {
        let mut driver = BenchmarkDriver::new(seeded_config(vec![25, 50]));
        driver.run(&mut MemoryResultSink::default()).unwrap();
        assert!(logs_contain("Benchmarked size"));
        assert!(logs_contain("n=50"));
    }
}
