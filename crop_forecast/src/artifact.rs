//! Persisted model artifacts
//!
//! An artifact is a JSON document holding the final state of a model fitted
//! elsewhere, plus the calendar metadata needed to interpret its steps:
//!
//! ```json
//! {
//!   "name": "rice-production",
//!   "frequency": "monthly",
//!   "anchor": "2021-12-01",
//!   "model": {
//!     "kind": "holt_winters",
//!     "level": 61250.0,
//!     "trend": 35.5,
//!     "seasonal": [120.0, -80.0, 15.0],
//!     "seasonality": "additive"
//!   }
//! }
//! ```

use crate::error::{ForecastError, Result};
use crate::models::arima::Arima;
use crate::models::exponential_smoothing::{HoltLinear, SimpleExponentialSmoothing};
use crate::models::holt_winters::{HoltWinters, Seasonality};
use crate::models::FittedModel;
use crate::utils::Frequency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Longest horizon served when the artifact does not set `max_steps`
pub const DEFAULT_MAX_STEPS: usize = 12_000;

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

/// Fitted state of one of the supported model families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    SimpleExponentialSmoothing {
        level: f64,
    },
    Holt {
        level: f64,
        trend: f64,
    },
    HoltWinters {
        level: f64,
        trend: f64,
        seasonal: Vec<f64>,
        #[serde(default)]
        seasonality: Seasonality,
    },
    Arima {
        ar: Vec<f64>,
        #[serde(default)]
        intercept: f64,
        #[serde(default)]
        d: usize,
        history: Vec<f64>,
    },
}

impl ModelSpec {
    /// Validate the state and build the model it describes
    pub fn build(&self) -> Result<Box<dyn FittedModel>> {
        let model: Box<dyn FittedModel> = match self {
            ModelSpec::SimpleExponentialSmoothing { level } => {
                Box::new(SimpleExponentialSmoothing::new(*level)?)
            }
            ModelSpec::Holt { level, trend } => Box::new(HoltLinear::new(*level, *trend)?),
            ModelSpec::HoltWinters {
                level,
                trend,
                seasonal,
                seasonality,
            } => Box::new(HoltWinters::new(*level, *trend, seasonal.clone(), *seasonality)?),
            ModelSpec::Arima {
                ar,
                intercept,
                d,
                history,
            } => Box::new(Arima::new(ar.clone(), *intercept, *d, history.clone())?),
        };

        Ok(model)
    }
}

/// A model artifact as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Human readable label
    #[serde(default)]
    pub name: Option<String>,
    /// Spacing of forecast steps
    #[serde(default)]
    pub frequency: Frequency,
    /// Last period covered by the training data
    #[serde(default)]
    pub anchor: Option<NaiveDate>,
    /// Longest horizon the model may be asked for
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    /// Fitted model state
    pub model: ModelSpec,
}

impl ModelArtifact {
    /// Create an artifact with default metadata
    pub fn new(model: ModelSpec) -> Self {
        Self {
            name: None,
            frequency: Frequency::default(),
            anchor: None,
            max_steps: DEFAULT_MAX_STEPS,
            model,
        }
    }

    /// Read and decode the artifact stored at `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Decode an artifact from JSON
    pub fn from_json(raw: &str) -> Result<Self> {
        let artifact: Self = serde_json::from_str(raw)?;
        if artifact.max_steps == 0 {
            return Err(ForecastError::ArtifactError(
                "max_steps must allow at least one step".to_string(),
            ));
        }
        Ok(artifact)
    }

    /// Encode the artifact as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
