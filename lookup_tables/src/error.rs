use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTableError {
    #[error("Hash table capacity must be non-zero")]
    ZeroCapacity,

    #[error("Cannot build a fixed bucket table from an empty key set")]
    EmptyKeySet,
}

pub type Result<T> = std::result::Result<T, LookupTableError>;
