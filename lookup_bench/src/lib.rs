#![cfg_attr(feature = "strict", deny(warnings))]

pub mod config;
pub mod driver;
pub mod error;
pub mod key_source;
pub mod logging;
pub mod result_sink;

pub use config::BenchConfig;
pub use driver::{time_ms, BenchmarkDriver};
pub use error::{BenchError, Result};
pub use key_source::{shuffle_keys, KeySource, RandomKeySource};
pub use result_sink::{CsvResultSink, MemoryResultSink, ResultRow, ResultSink};
