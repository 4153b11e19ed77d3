//! # Crop Outlook
//!
//! Resolves a year to either historical rice production or a model forecast.
//!
//! - Years in 1961–2021 are answered from the [`AggregateTable`].
//! - Later years are forecast `(year - 2021) * 12` monthly steps ahead and the
//!   last forecast value is reported.
//! - Anything else is invalid input.
//!
//! Every query produces a [`ResolutionResult`]; nothing in the query path
//! returns an error or panics.
//!
//! ```
//! use crop_forecast::{ArtifactForecaster, ModelArtifact, ModelSpec};
//! use crop_history::{AggregateTable, RawObservation};
//! use crop_outlook::{ResolutionResult, ResolutionService};
//!
//! let table = AggregateTable::from_observations(vec![
//!     RawObservation::new(Some(1965), Some(10.0)),
//!     RawObservation::new(Some(1965), Some(5.0)),
//! ]);
//! let artifact = ModelArtifact::new(ModelSpec::SimpleExponentialSmoothing { level: 500.0 });
//! let service = ResolutionService::new(table, ArtifactForecaster::from_artifact(&artifact)?);
//!
//! assert_eq!(
//!     service.resolve("1965"),
//!     ResolutionResult::HistoricalValue { year: 1965, amount: 15.0 }
//! );
//! assert_eq!(
//!     service.resolve("2022"),
//!     ResolutionResult::ForecastedValue { year: 2022, amount: 500.0 }
//! );
//! # Ok::<(), crop_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod resolution;
pub mod service;

pub use crop_history::AggregateTable;

pub use crate::config::OutlookConfig;
pub use crate::error::{OutlookError, Result};
pub use crate::resolution::ResolutionResult;
pub use crate::service::{ResolutionService, Route};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
