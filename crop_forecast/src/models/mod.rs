//! Fitted forecasting models

use crate::error::{ForecastError, Result};
use std::fmt::Debug;

/// Forecast result containing predicted values
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    /// Forecasted values, in chronological order
    values: Vec<f64>,
    /// Number of periods forecasted
    horizons: usize,
}

impl ForecastResult {
    /// Create a new forecast result
    pub fn new(values: Vec<f64>, horizons: usize) -> Result<Self> {
        if values.len() != horizons {
            return Err(ForecastError::ValidationError(format!(
                "Values length ({}) doesn't match horizons ({})",
                values.len(),
                horizons
            )));
        }

        Ok(Self { values, horizons })
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of periods forecasted
    pub fn horizons(&self) -> usize {
        self.horizons
    }

    /// Value for the furthest forecasted period
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// A model whose parameters were estimated ahead of time.
///
/// Forecasting is pure inference: the model state is never updated.
pub trait FittedModel: Debug + Send + Sync {
    /// Generate forecast for the next `horizon` periods
    fn forecast(&self, horizon: usize) -> Result<ForecastResult>;

    /// Name of the model
    fn name(&self) -> &str;
}

pub(crate) fn require_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ForecastError::InvalidParameter(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}

pub mod arima;
pub mod exponential_smoothing;
pub mod holt_winters;
