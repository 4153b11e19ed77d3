//! Typed outcome of resolving one year query

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// Message for input that is not a whole number
pub const INVALID_YEAR_MESSAGE: &str = "Invalid input! Please enter a valid numeric year.";

/// Message for a year before the historical range
pub fn out_of_range_message(year: i64) -> String {
    format!(
        "Year {} is outside the supported range \
         (1961–2021 for historical data or after 2021 for prediction).",
        year
    )
}

/// Round to two decimal places, ties to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Shortest text for an amount, keeping one decimal on whole numbers (`15.0`, `1234.57`)
pub fn amount_text(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}

/// Result of resolving a year query.
///
/// Amounts are already rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// Aggregated production for a year in the historical range
    HistoricalValue { year: i64, amount: f64 },
    /// Model forecast for a year after the historical range
    ForecastedValue { year: i64, amount: f64 },
    /// Year in the historical range with no observations
    NoDataForYear { year: i64 },
    /// The query could not be answered as given
    InvalidInput { message: String },
    /// The forecasting model failed; `message` describes the underlying error
    ForecastUnavailable { year: i64, message: String },
}

impl ResolutionResult {
    /// Whether a renderer should present this as an error
    pub fn is_error(&self) -> bool {
        !matches!(
            self,
            ResolutionResult::HistoricalValue { .. } | ResolutionResult::ForecastedValue { .. }
        )
    }

    /// Year the result refers to, when the input parsed
    pub fn year(&self) -> Option<i64> {
        match self {
            ResolutionResult::HistoricalValue { year, .. }
            | ResolutionResult::ForecastedValue { year, .. }
            | ResolutionResult::NoDataForYear { year }
            | ResolutionResult::ForecastUnavailable { year, .. } => Some(*year),
            ResolutionResult::InvalidInput { .. } => None,
        }
    }

    /// Production amount, for the two successful outcomes
    pub fn amount(&self) -> Option<f64> {
        match self {
            ResolutionResult::HistoricalValue { amount, .. }
            | ResolutionResult::ForecastedValue { amount, .. } => Some(*amount),
            _ => None,
        }
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionResult::HistoricalValue { amount, .. } => {
                write!(f, "{} tonnes (Historical Data)", amount_text(*amount))
            }
            ResolutionResult::ForecastedValue { amount, .. } => {
                write!(f, "{} tonnes (Predicted)", amount_text(*amount))
            }
            ResolutionResult::NoDataForYear { year } => {
                write!(f, "No data available for the year {}.", year)
            }
            ResolutionResult::InvalidInput { message } => write!(f, "{}", message),
            ResolutionResult::ForecastUnavailable { message, .. } => {
                write!(f, "An error occurred: {}", message)
            }
        }
    }
}

/// Write one result per line, as its display text or as a JSON object
pub fn write_result<W: Write>(
    out: &mut W,
    result: &ResolutionResult,
    json: bool,
) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, result)?;
        writeln!(out)
    } else {
        writeln!(out, "{}", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round2() {
        assert_eq!(round2(15.0), 15.0);
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-2.5), -2.5);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(15.125), 15.12);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(15.0), "15.0");
        assert_eq!(amount_text(0.0), "0.0");
        assert_eq!(amount_text(1234.57), "1234.57");
        assert_eq!(amount_text(15.1), "15.1");
    }

    #[test]
    fn test_display_matches_page_text() {
        let historical = ResolutionResult::HistoricalValue {
            year: 1965,
            amount: 15.0,
        };
        assert_eq!(historical.to_string(), "15.0 tonnes (Historical Data)");

        let forecast = ResolutionResult::ForecastedValue {
            year: 2022,
            amount: 500.0,
        };
        assert_eq!(forecast.to_string(), "500.0 tonnes (Predicted)");

        let absent = ResolutionResult::NoDataForYear { year: 1999 };
        assert_eq!(absent.to_string(), "No data available for the year 1999.");

        let failed = ResolutionResult::ForecastUnavailable {
            year: 2030,
            message: "Model unavailable: missing".to_string(),
        };
        assert_eq!(failed.to_string(), "An error occurred: Model unavailable: missing");
    }

    #[test]
    fn test_accessors() {
        let invalid = ResolutionResult::InvalidInput {
            message: INVALID_YEAR_MESSAGE.to_string(),
        };
        assert!(invalid.is_error());
        assert_eq!(invalid.year(), None);
        assert_eq!(invalid.amount(), None);

        let forecast = ResolutionResult::ForecastedValue {
            year: 2022,
            amount: 1.5,
        };
        assert!(!forecast.is_error());
        assert_eq!(forecast.year(), Some(2022));
        assert_eq!(forecast.amount(), Some(1.5));
    }

    #[test]
    fn test_write_result_plain_and_json() {
        let result = ResolutionResult::HistoricalValue {
            year: 1965,
            amount: 15.12,
        };

        let mut plain = Vec::new();
        write_result(&mut plain, &result, false).unwrap();
        assert_eq!(String::from_utf8(plain).unwrap(), "15.12 tonnes (Historical Data)\n");

        let mut json = Vec::new();
        write_result(&mut json, &result, true).unwrap();
        write_result(&mut json, &ResolutionResult::NoDataForYear { year: 1999 }, true).unwrap();
        let lines: Vec<serde_json::Value> = String::from_utf8(json)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![
                serde_json::json!({"outcome": "historical_value", "year": 1965, "amount": 15.12}),
                serde_json::json!({"outcome": "no_data_for_year", "year": 1999}),
            ]
        );
    }

    #[test]
    fn test_serializes_with_outcome_tag() {
        let json = serde_json::to_value(ResolutionResult::NoDataForYear { year: 1999 }).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "no_data_for_year", "year": 1999}));
    }
}
