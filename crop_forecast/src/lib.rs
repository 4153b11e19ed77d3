//! # Crop Forecast
//!
//! Inference over production forecasting models fitted ahead of time.
//!
//! ## Features
//!
//! - JSON model artifacts carrying the fitted state and its calendar metadata
//! - Model families: simple exponential smoothing, Holt linear trend,
//!   Holt-Winters (additive or multiplicative), ARIMA(p, d, 0)
//! - A [`ForecastProvider`] seam so callers can inject any forecasting backend
//!
//! ## Quick Start
//!
//! ```no_run
//! use crop_forecast::{ArtifactForecaster, ForecastProvider};
//!
//! let provider = ArtifactForecaster::load("forecast_model.json")?;
//! let forecast = provider.forecast(12)?;
//! println!("twelve months out: {:?}", forecast.last());
//! # Ok::<(), crop_forecast::ForecastError>(())
//! ```

pub mod artifact;
pub mod error;
pub mod models;
pub mod provider;
pub mod utils;

// Re-export commonly used types
pub use crate::artifact::{ModelArtifact, ModelSpec};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{FittedModel, ForecastResult};
pub use crate::provider::{ArtifactForecaster, ForecastProvider, UnavailableForecaster};
pub use crate::utils::Frequency;
