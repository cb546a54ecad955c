//! Benchmarks a fixed bucket table, a chained hash table and an ordered set on
//! random integer keys of doubling sizes, writing timings to `timing_results.csv`.
//!
//! Run with: cargo run --release --bin lookup_bench

use std::process::ExitCode;

use anyhow::{Context, Result};
use lookup_bench::logging::init_logging;
use lookup_bench::{BenchConfig, BenchmarkDriver, CsvResultSink, ResultSink};
use tracing::{error, info};

fn run(config: BenchConfig) -> Result<()> {
    // Open the output first so an unwritable path fails before any benchmarking.
    let mut sink = CsvResultSink::create(&config.output_path)?;
    let output_path = config.output_path.clone();

    let rows = BenchmarkDriver::new(config).run(&mut sink)?;
    sink.finish().with_context(|| format!("flushing {output_path:?}"))?;

    info!("Wrote {} rows to {output_path:?}", rows.len());
    println!("Timing results saved to '{}'.", output_path.display());
    Ok(())
}

fn main() -> ExitCode {
    let config = BenchConfig::default();

    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("Error initializing logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Benchmark failed: {e:#}");
            ExitCode::FAILURE
        },
    }
}
