//! Startup configuration
//!
//! Values come from the process environment, after loading a `.env` file from
//! the working directory when one exists.
//!
//! | Variable            | Default                                                              |
//! |---------------------|----------------------------------------------------------------------|
//! | `CROP_DATASET_PATH` | `rice production across different countries from 1961 to 2021.csv` |
//! | `CROP_MODEL_PATH`   | `forecast_model.json`                                                |
//! | `CROP_LOG`          | `info`                                                               |

use crate::error::{OutlookError, Result};
use std::path::PathBuf;

pub const DATASET_PATH_VAR: &str = "CROP_DATASET_PATH";
pub const MODEL_PATH_VAR: &str = "CROP_MODEL_PATH";
pub const LOG_FILTER_VAR: &str = "CROP_LOG";

pub const DEFAULT_DATASET_PATH: &str =
    "rice production across different countries from 1961 to 2021.csv";
pub const DEFAULT_MODEL_PATH: &str = "forecast_model.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Where the service finds its collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlookConfig {
    /// CSV file with `Year` and `Value` columns
    pub dataset_path: PathBuf,
    /// JSON model artifact
    pub model_path: PathBuf,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for OutlookConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl OutlookConfig {
    /// Read the configuration from `.env` and the process environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let dataset_path = non_empty(DATASET_PATH_VAR, lookup(DATASET_PATH_VAR))?
            .map(PathBuf::from)
            .unwrap_or(defaults.dataset_path);
        let model_path = non_empty(MODEL_PATH_VAR, lookup(MODEL_PATH_VAR))?
            .map(PathBuf::from)
            .unwrap_or(defaults.model_path);
        let log_filter =
            non_empty(LOG_FILTER_VAR, lookup(LOG_FILTER_VAR))?.unwrap_or(defaults.log_filter);

        Ok(Self {
            dataset_path,
            model_path,
            log_filter,
        })
    }
}

fn non_empty(key: &str, value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(OutlookError::Config(format!("{} is set but empty", key)))
        }
        other => Ok(other),
    }
}
