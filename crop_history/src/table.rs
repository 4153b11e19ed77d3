//! Per-year aggregation of historical production

use crate::data::{observations, DataSource, RawObservation};
use crate::error::Result;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use tracing::{debug, info};

/// Years for which aggregated observations are authoritative
pub const HISTORICAL_RANGE: RangeInclusive<i64> = 1961..=2021;

/// Summed production per year over [`HISTORICAL_RANGE`].
///
/// A year whose rows all had unreadable values is present with a total of
/// `0.0`; a year with no rows at all has no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateTable {
    totals: HashMap<i64, f64>,
}

impl AggregateTable {
    /// A table with no years; every lookup is absent
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read `source` once and aggregate its observations
    pub fn build<S: DataSource + ?Sized>(source: &S) -> Result<Self> {
        let frame = source.load_frame()?;
        let rows = observations(&frame)?;
        debug!(rows = rows.len(), "coerced observation rows");

        let table = Self::from_observations(rows);
        match table.span() {
            Some((first, last)) => info!(
                years = table.len(),
                first,
                last,
                "aggregated historical production"
            ),
            None => info!("dataset contained no observations in the historical range"),
        }

        Ok(table)
    }

    /// Aggregate already coerced observations.
    ///
    /// Rows without a year or outside [`HISTORICAL_RANGE`] are skipped. Rows
    /// without a value still register their year.
    pub fn from_observations<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawObservation>,
    {
        let mut totals: HashMap<i64, f64> = HashMap::new();
        let mut skipped = 0usize;
        let mut missing_values = 0usize;

        for row in rows {
            let Some(year) = row.year.filter(|y| HISTORICAL_RANGE.contains(y)) else {
                skipped += 1;
                continue;
            };
            if row.value.is_none() {
                missing_values += 1;
            }
            *totals.entry(year).or_insert(0.0) += row.value.unwrap_or(0.0);
        }

        if skipped > 0 || missing_values > 0 {
            debug!(skipped, missing_values, "observations coerced during aggregation");
        }

        Self { totals }
    }

    /// Summed value for `year`, if the year was observed
    pub fn lookup(&self, year: i64) -> Option<f64> {
        self.totals.get(&year).copied()
    }

    /// Number of aggregated years
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Check if no year was aggregated
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Earliest and latest aggregated years
    pub fn span(&self) -> Option<(i64, i64)> {
        let first = self.totals.keys().min()?;
        let last = self.totals.keys().max()?;
        Some((*first, *last))
    }

    /// Aggregated years with their totals, in chronological order
    pub fn entries(&self) -> Vec<(i64, f64)> {
        let mut entries: Vec<(i64, f64)> = self.totals.iter().map(|(y, v)| (*y, *v)).collect();
        entries.sort_by_key(|(year, _)| *year);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i64, value: f64) -> RawObservation {
        RawObservation::new(Some(year), Some(value))
    }

    #[test]
    fn test_sums_by_year() {
        let table = AggregateTable::from_observations(vec![
            row(1965, 10.0),
            row(1965, 5.0),
            RawObservation::new(Some(1970), None),
        ]);

        assert_eq!(table.lookup(1965), Some(15.0));
        assert_eq!(table.lookup(1970), Some(0.0));
        assert_eq!(table.lookup(1999), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_skips_out_of_range_and_missing_years() {
        let table = AggregateTable::from_observations(vec![
            row(1960, 1.0),
            row(1961, 2.0),
            row(2021, 3.0),
            row(2022, 4.0),
            RawObservation::new(None, Some(5.0)),
        ]);

        assert_eq!(table.entries(), vec![(1961, 2.0), (2021, 3.0)]);
        assert_eq!(table.span(), Some((1961, 2021)));
    }

    #[test]
    fn test_empty_table() {
        let table = AggregateTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.span(), None);
        assert_eq!(table.lookup(1990), None);
    }
}
