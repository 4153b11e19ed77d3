//! Exponential smoothing models without seasonality

use crate::error::Result;
use crate::models::{require_finite, FittedModel, ForecastResult};

/// Fitted simple exponential smoothing: a flat forecast at the final level
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothed level at the end of the training data
    level: f64,
}

impl SimpleExponentialSmoothing {
    /// Create a fitted model from its final level
    pub fn new(level: f64) -> Result<Self> {
        require_finite("level", level)?;

        Ok(Self {
            name: "Simple Exponential Smoothing".to_string(),
            level,
        })
    }

    /// Smoothed level
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl FittedModel for SimpleExponentialSmoothing {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        ForecastResult::new(vec![self.level; horizon], horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fitted Holt linear trend model
#[derive(Debug, Clone)]
pub struct HoltLinear {
    /// Name of the model
    name: String,
    /// Smoothed level
    level: f64,
    /// Smoothed trend per period
    trend: f64,
}

impl HoltLinear {
    /// Create a fitted model from its final level and trend
    pub fn new(level: f64, trend: f64) -> Result<Self> {
        require_finite("level", level)?;
        require_finite("trend", trend)?;

        Ok(Self {
            name: "Holt Linear Trend".to_string(),
            level,
            trend,
        })
    }

    /// Get (level, trend)
    pub fn components(&self) -> (f64, f64) {
        (self.level, self.trend)
    }
}

impl FittedModel for HoltLinear {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        let values = (1..=horizon)
            .map(|h| self.level + h as f64 * self.trend)
            .collect();

        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
