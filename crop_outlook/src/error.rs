//! Error types for the crop_outlook crate

use thiserror::Error;

/// Errors raised while configuring or starting the service
#[derive(Debug, Error)]
pub enum OutlookError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from loading the historical dataset
    #[error(transparent)]
    History(#[from] crop_history::HistoryError),

    /// Error from loading the forecasting model
    #[error(transparent)]
    Forecast(#[from] crop_forecast::ForecastError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, OutlookError>;
