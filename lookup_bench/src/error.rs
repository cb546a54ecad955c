use std::io;
use std::path::PathBuf;

use lookup_tables::LookupTableError;
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Cannot open output file {path:?}: {source}")]
    OutputUnavailable { path: PathBuf, source: io::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Lookup table error: {0}")]
    LookupTable(#[from] LookupTableError),

    #[error("Invalid log filter {0:?}")]
    InvalidLogFilter(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
