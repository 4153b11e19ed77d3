//! # Crop Outlook Workspace
//!
//! Umbrella crate over the workspace members:
//!
//! - [`history`]: the historical production table (`crop_history`)
//! - [`forecast`]: forecasting models and providers (`crop_forecast`)
//! - [`outlook`]: the year resolution service (`crop_outlook`)
//!
//! ## Example
//!
//! ```no_run
//! use crop_outlook_workspace::outlook::{OutlookConfig, ResolutionService};
//!
//! let config = OutlookConfig::from_env()?;
//! let service = ResolutionService::from_config(&config);
//! println!("{}", service.resolve("2030"));
//! # Ok::<(), crop_outlook_workspace::outlook::OutlookError>(())
//! ```

pub use crop_forecast as forecast;
pub use crop_history as history;
pub use crop_outlook as outlook;

pub use crop_outlook::{ResolutionResult, ResolutionService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_wires_members() {
        let table = history::AggregateTable::from_observations(vec![history::RawObservation::new(
            Some(2000),
            Some(12.346),
        )]);
        let provider = forecast::UnavailableForecaster::new("no model");
        let service = ResolutionService::new(table, provider);

        assert_eq!(
            service.resolve("2000"),
            ResolutionResult::HistoricalValue {
                year: 2000,
                amount: 12.35
            }
        );
        assert!(service.resolve("2040").is_error());
    }
}
