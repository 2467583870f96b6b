//! Error types for the preparation pipeline.

use polars::error::PolarsError;

/// Result type for pipeline operations
pub type PrepResult<T> = std::result::Result<T, PrepError>;

/// Error type for pipeline operations. Every variant is fatal: the run
/// halts with no output file update and no retries.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    #[error("Load error: {0}")]
    Load(String),

    #[error("Schema cast error: {0}")]
    SchemaCast(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}
