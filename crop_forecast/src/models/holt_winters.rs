//! Holt-Winters seasonal exponential smoothing

use crate::error::{ForecastError, Result};
use crate::models::{require_finite, FittedModel, ForecastResult};
use serde::{Deserialize, Serialize};

/// How the seasonal component combines with level and trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seasonality {
    /// Y = level + trend + season
    #[default]
    Additive,
    /// Y = (level + trend) * season
    Multiplicative,
}

/// Fitted Holt-Winters model.
///
/// `seasonal[0]` is the seasonal term of the first period after the end of
/// the training data; the cycle length is `seasonal.len()`.
#[derive(Debug, Clone)]
pub struct HoltWinters {
    /// Name of the model
    name: String,
    level: f64,
    trend: f64,
    seasonal: Vec<f64>,
    seasonality: Seasonality,
}

impl HoltWinters {
    /// Create a fitted model from its final components
    pub fn new(
        level: f64,
        trend: f64,
        seasonal: Vec<f64>,
        seasonality: Seasonality,
    ) -> Result<Self> {
        require_finite("level", level)?;
        require_finite("trend", trend)?;
        if seasonal.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "Seasonal components must cover at least one period".to_string(),
            ));
        }
        for (i, s) in seasonal.iter().enumerate() {
            require_finite(&format!("seasonal[{}]", i), *s)?;
        }

        Ok(Self {
            name: format!("Holt-Winters ({:?}, period={})", seasonality, seasonal.len()),
            level,
            trend,
            seasonal,
            seasonality,
        })
    }

    /// Number of periods in one seasonal cycle
    pub fn period(&self) -> usize {
        self.seasonal.len()
    }

    /// Get all components: (level, trend, seasonal)
    pub fn components(&self) -> (f64, f64, &[f64]) {
        (self.level, self.trend, &self.seasonal)
    }
}

impl FittedModel for HoltWinters {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        let values = (1..=horizon)
            .map(|h| {
                let season = self.seasonal[(h - 1) % self.period()];
                let base = self.level + h as f64 * self.trend;
                match self.seasonality {
                    Seasonality::Additive => base + season,
                    Seasonality::Multiplicative => base * season,
                }
            })
            .collect();

        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
