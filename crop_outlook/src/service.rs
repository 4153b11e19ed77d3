//! Deciding whether a year is answered from history or from the model

use crate::config::OutlookConfig;
use crate::error::Result;
use crate::resolution::{out_of_range_message, round2, ResolutionResult, INVALID_YEAR_MESSAGE};
use crop_forecast::{ArtifactForecaster, ForecastProvider, Frequency, UnavailableForecaster};
use crop_history::{AggregateTable, CsvSource, HISTORICAL_RANGE};
use tracing::{debug, warn};

/// Forecast steps per calendar year past the historical range
pub const STEPS_PER_YEAR: i64 = 12;

/// Where a validated year is answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Historical(i64),
    Forecast(i64),
    BeforeRange(i64),
}

/// Parse a raw query as a whole year; surrounding whitespace is ignored
pub fn parse_year(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Classify a year against the historical range
pub fn route(year: i64) -> Route {
    if HISTORICAL_RANGE.contains(&year) {
        Route::Historical(year)
    } else if year > *HISTORICAL_RANGE.end() {
        Route::Forecast(year)
    } else {
        Route::BeforeRange(year)
    }
}

/// Monthly steps from the end of the historical range to the end of `year`
pub fn forecast_steps(year: i64) -> Option<usize> {
    let years_ahead = year.checked_sub(*HISTORICAL_RANGE.end())?;
    let steps = years_ahead.checked_mul(STEPS_PER_YEAR)?;
    usize::try_from(steps).ok().filter(|s| *s > 0)
}

/// Answers year queries from an aggregate table and a forecast provider.
///
/// Both collaborators are fixed at construction; `resolve` only reads them,
/// so one service can be shared across threads.
#[derive(Debug)]
pub struct ResolutionService<P> {
    table: AggregateTable,
    provider: P,
}

impl<P: ForecastProvider> ResolutionService<P> {
    /// Create a service over already loaded collaborators
    pub fn new(table: AggregateTable, provider: P) -> Self {
        let frequency = provider.frequency();
        if frequency != Frequency::Monthly {
            warn!(
                %frequency,
                "forecast provider is not monthly; years are still mapped to {} steps",
                STEPS_PER_YEAR
            );
        }

        Self { table, provider }
    }

    /// The historical table
    pub fn table(&self) -> &AggregateTable {
        &self.table
    }

    /// The forecast provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve a raw year query
    pub fn resolve(&self, raw: &str) -> ResolutionResult {
        let Some(year) = parse_year(raw) else {
            debug!(input = raw, "rejected non-numeric year");
            return ResolutionResult::InvalidInput {
                message: INVALID_YEAR_MESSAGE.to_string(),
            };
        };

        let route = route(year);
        debug!(?route, "classified year query");
        match route {
            Route::Historical(year) => self.resolve_historical(year),
            Route::Forecast(year) => self.resolve_forecast(year),
            Route::BeforeRange(year) => ResolutionResult::InvalidInput {
                message: out_of_range_message(year),
            },
        }
    }

    fn resolve_historical(&self, year: i64) -> ResolutionResult {
        match self.table.lookup(year) {
            Some(amount) => ResolutionResult::HistoricalValue {
                year,
                amount: round2(amount),
            },
            None => ResolutionResult::NoDataForYear { year },
        }
    }

    fn resolve_forecast(&self, year: i64) -> ResolutionResult {
        let Some(steps) = forecast_steps(year) else {
            return ResolutionResult::ForecastUnavailable {
                year,
                message: format!("Forecast horizon for year {} cannot be represented", year),
            };
        };

        match self.provider.forecast(steps) {
            Ok(forecast) => match forecast.last() {
                Some(amount) => ResolutionResult::ForecastedValue {
                    year,
                    amount: round2(amount),
                },
                None => ResolutionResult::ForecastUnavailable {
                    year,
                    message: "Forecast returned no values".to_string(),
                },
            },
            Err(err) => {
                warn!(year, steps, error = %err, "forecast failed");
                ResolutionResult::ForecastUnavailable {
                    year,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl ResolutionService<Box<dyn ForecastProvider>> {
    /// Load both collaborators, degrading instead of failing.
    ///
    /// An unreadable dataset leaves the table empty, so every historical year
    /// has no data. An unusable model artifact makes every forecast report the
    /// load error.
    pub fn from_config(config: &OutlookConfig) -> Self {
        let table = match AggregateTable::build(&CsvSource::new(&config.dataset_path)) {
            Ok(table) => table,
            Err(err) => {
                warn!(
                    path = %config.dataset_path.display(),
                    error = %err,
                    "historical dataset unavailable; serving an empty table"
                );
                AggregateTable::empty()
            }
        };

        let provider: Box<dyn ForecastProvider> =
            match ArtifactForecaster::load(&config.model_path) {
                Ok(forecaster) => Box::new(forecaster),
                Err(err) => {
                    warn!(
                        path = %config.model_path.display(),
                        error = %err,
                        "forecasting model unavailable; forecasts will fail"
                    );
                    Box::new(UnavailableForecaster::new(err.to_string()))
                }
            };

        Self::new(table, provider)
    }

    /// Load both collaborators, failing on the first error
    pub fn load_strict(config: &OutlookConfig) -> Result<Self> {
        let table = AggregateTable::build(&CsvSource::new(&config.dataset_path))?;
        let provider: Box<dyn ForecastProvider> =
            Box::new(ArtifactForecaster::load(&config.model_path)?);
        Ok(Self::new(table, provider))
    }
}
