//! Error types for the crop_history crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while loading or validating the observation dataset
#[derive(Debug, Error)]
pub enum HistoryError {
    /// A column the aggregation depends on is not part of the schema
    #[error("Missing column: the dataset must contain '{0}'")]
    MissingColumn(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, HistoryError>;

impl From<PolarsError> for HistoryError {
    fn from(err: PolarsError) -> Self {
        HistoryError::PolarsError(err.to_string())
    }
}
