//! The forecasting capability consumed by the resolver

use crate::artifact::ModelArtifact;
use crate::error::{ForecastError, Result};
use crate::models::{FittedModel, ForecastResult};
use crate::utils::{period_end, Frequency};
use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Produces forecasts for a number of steps past the model's anchor period.
///
/// A successful forecast holds exactly `steps` values in chronological order.
pub trait ForecastProvider: Send + Sync {
    /// Forecast the next `steps` periods
    fn forecast(&self, steps: usize) -> Result<ForecastResult>;

    /// Spacing of one step
    fn frequency(&self) -> Frequency {
        Frequency::Monthly
    }
}

impl<P: ForecastProvider + ?Sized> ForecastProvider for Box<P> {
    fn forecast(&self, steps: usize) -> Result<ForecastResult> {
        (**self).forecast(steps)
    }

    fn frequency(&self) -> Frequency {
        (**self).frequency()
    }
}

impl<P: ForecastProvider + ?Sized> ForecastProvider for Arc<P> {
    fn forecast(&self, steps: usize) -> Result<ForecastResult> {
        (**self).forecast(steps)
    }

    fn frequency(&self) -> Frequency {
        (**self).frequency()
    }
}

/// Forecasts from a model loaded out of a [`ModelArtifact`]
#[derive(Debug)]
pub struct ArtifactForecaster {
    model: Box<dyn FittedModel>,
    frequency: Frequency,
    anchor: Option<NaiveDate>,
    max_steps: usize,
}

impl ArtifactForecaster {
    /// Load the artifact at `path` and build its model
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let artifact = ModelArtifact::from_path(path)?;
        let forecaster = Self::from_artifact(&artifact)?;
        info!(
            path = %path.display(),
            model = forecaster.model.name(),
            frequency = %forecaster.frequency,
            "loaded forecasting model"
        );
        Ok(forecaster)
    }

    /// Build the model described by an already decoded artifact
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self> {
        Ok(Self {
            model: artifact.model.build()?,
            frequency: artifact.frequency,
            anchor: artifact.anchor,
            max_steps: artifact.max_steps,
        })
    }

    /// Name of the wrapped model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Longest horizon this forecaster serves
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl ForecastProvider for ArtifactForecaster {
    fn forecast(&self, steps: usize) -> Result<ForecastResult> {
        if steps == 0 {
            return Err(ForecastError::InvalidSteps(steps));
        }
        if steps > self.max_steps {
            return Err(ForecastError::HorizonTooLong {
                steps,
                max: self.max_steps,
            });
        }

        let result = self.model.forecast(steps)?;
        if result.horizons() != steps {
            return Err(ForecastError::ValidationError(format!(
                "{} returned {} values for {} steps",
                self.model.name(),
                result.horizons(),
                steps
            )));
        }
        if let Some(bad) = result.values().iter().position(|v| !v.is_finite()) {
            return Err(ForecastError::ForecastingError(format!(
                "{} produced a non-finite value at step {}",
                self.model.name(),
                bad + 1
            )));
        }

        if let Some(end) = self
            .anchor
            .and_then(|anchor| period_end(anchor, steps, self.frequency))
        {
            debug!(steps, period = %end, "forecast horizon");
        }

        Ok(result)
    }

    fn frequency(&self) -> Frequency {
        self.frequency
    }
}

/// Stands in for a model that failed to load; every forecast reports why
#[derive(Debug, Clone)]
pub struct UnavailableForecaster {
    reason: String,
}

impl UnavailableForecaster {
    /// Create a provider reporting `reason` on every call
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ForecastProvider for UnavailableForecaster {
    fn forecast(&self, _steps: usize) -> Result<ForecastResult> {
        Err(ForecastError::ModelUnavailable(self.reason.clone()))
    }
}
