use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::{BenchError, Result};

/// Sets up console logging on stderr, filtered by `level` (an `EnvFilter`
/// directive such as `info` or `lookup_bench=debug`). Should only be called once.
///
/// Stdout is left free for the completion message of the binary.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = build_filter(level)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    // Ignore the error if a global subscriber is already installed.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|_| BenchError::InvalidLogFilter(level.to_string()))
}
