//! Tabular observation sources and column coercion

use crate::error::{HistoryError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Column holding the observation year
pub const YEAR_COLUMN: &str = "Year";
/// Column holding the observed production value
pub const VALUE_COLUMN: &str = "Value";

/// One row of the source dataset after coercion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawObservation {
    /// `None` when the year cell is missing or not a whole number
    pub year: Option<i64>,
    /// `None` when the value cell is missing or not numeric
    pub value: Option<f64>,
}

impl RawObservation {
    /// Create an observation from already coerced cells
    pub fn new(year: Option<i64>, value: Option<f64>) -> Self {
        Self { year, value }
    }
}

/// A tabular source of observations, read once at startup
pub trait DataSource {
    /// Read the whole dataset into a frame
    fn load_frame(&self) -> Result<DataFrame>;
}

/// Dataset stored as a CSV file with a header row
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Create a source for the CSV file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataSource for CsvSource {
    fn load_frame(&self) -> Result<DataFrame> {
        debug!(path = %self.path.display(), "reading observation dataset");
        let file = File::open(&self.path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Ok(df)
    }
}

impl DataSource for DataFrame {
    fn load_frame(&self) -> Result<DataFrame> {
        Ok(self.clone())
    }
}

/// Coerce the `Year` and `Value` columns of `df` into observations.
///
/// Both columns are cast to floating point without strictness, so cells that
/// cannot be read as numbers become nulls instead of failing the load. A year
/// must additionally be a finite whole number; a `NaN` value counts as missing.
pub fn observations(df: &DataFrame) -> Result<Vec<RawObservation>> {
    require_column(df, YEAR_COLUMN)?;
    require_column(df, VALUE_COLUMN)?;

    let years = df.column(YEAR_COLUMN)?.cast(&DataType::Float64)?;
    let values = df.column(VALUE_COLUMN)?.cast(&DataType::Float64)?;

    let observations = years
        .f64()?
        .into_iter()
        .zip(values.f64()?.into_iter())
        .map(|(year, value)| RawObservation {
            year: year.and_then(whole_year),
            value: value.filter(|v| !v.is_nan()),
        })
        .collect();

    Ok(observations)
}

fn require_column(df: &DataFrame, name: &str) -> Result<()> {
    if df.get_column_names().iter().any(|column| *column == name) {
        Ok(())
    } else {
        Err(HistoryError::MissingColumn(name.to_string()))
    }
}

fn whole_year(raw: f64) -> Option<i64> {
    if raw.is_finite() && raw.fract() == 0.0 && raw.abs() <= i64::MAX as f64 {
        Some(raw as i64)
    } else {
        None
    }
}
