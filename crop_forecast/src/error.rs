//! Error types for the crop_forecast crate

use thiserror::Error;

/// Errors raised while loading a model or producing a forecast
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A forecast must cover at least one step
    #[error("Invalid step count: {0} (a forecast needs at least one step)")]
    InvalidSteps(usize),

    /// The requested horizon is longer than the model allows
    #[error("Forecast horizon of {steps} steps exceeds the model limit of {max} steps")]
    HorizonTooLong { steps: usize, max: usize },

    /// The model artifact could not be loaded at startup
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// The artifact was readable but does not describe a usable model
    #[error("Artifact error: {0}")]
    ArtifactError(String),

    /// Error related to forecasting operations
    #[error("Forecasting error: {0}")]
    ForecastingError(String),

    /// Error related to result validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from decoding the artifact
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
