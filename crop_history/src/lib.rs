//! # Crop History
//!
//! Builds the historical production table served for past years.
//!
//! The dataset is read once from a [`DataSource`] (a CSV file in production),
//! its `Year` and `Value` columns are coerced to numbers, and values are
//! summed per year over [`HISTORICAL_RANGE`]. Unreadable values count as zero
//! and rows with an unreadable year are dropped.
//!
//! ```no_run
//! use crop_history::{AggregateTable, CsvSource};
//!
//! let table = AggregateTable::build(&CsvSource::new("production.csv"))?;
//! if let Some(total) = table.lookup(1990) {
//!     println!("1990: {total}");
//! }
//! # Ok::<(), crop_history::HistoryError>(())
//! ```

pub mod data;
pub mod error;
pub mod table;

pub use crate::data::{CsvSource, DataSource, RawObservation, VALUE_COLUMN, YEAR_COLUMN};
pub use crate::error::{HistoryError, Result};
pub use crate::table::{AggregateTable, HISTORICAL_RANGE};
