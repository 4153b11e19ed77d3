use approx::assert_relative_eq;
use crop_history::{AggregateTable, CsvSource, DataSource, HistoryError};
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[test]
fn test_build_from_csv_coerces_values() {
    let file = write_csv(&["Year,Value", "1965,10", "1965,5", "1970,bad"]);

    let table = AggregateTable::build(&CsvSource::new(file.path())).unwrap();

    assert_eq!(table.entries(), vec![(1965, 15.0), (1970, 0.0)]);
    assert_eq!(table.lookup(1999), None);
}

#[test]
fn test_build_ignores_extra_columns_and_out_of_range_years() {
    let file = write_csv(&[
        "Area,Item,Year,Unit,Value",
        "\"India, Republic of\",Rice,1961,t,100.5",
        "Thailand,Rice,1961,t,200.25",
        "India,Rice,1960,t,999",
        "India,Rice,2022,t,999",
        "India,Rice,2021,t,",
    ]);

    let table = AggregateTable::build(&CsvSource::new(file.path())).unwrap();

    assert_relative_eq!(table.lookup(1961).unwrap(), 300.75);
    assert_eq!(table.lookup(2021), Some(0.0));
    assert_eq!(table.lookup(1960), None);
    assert_eq!(table.lookup(2022), None);
}

#[test]
fn test_build_skips_unreadable_years() {
    let file = write_csv(&["Year,Value", "1990,4", "nineteen ninety,6", "1990.5,1"]);

    let table = AggregateTable::build(&CsvSource::new(file.path())).unwrap();

    assert_eq!(table.entries(), vec![(1990, 4.0)]);
}

#[test]
fn test_build_from_dataframe() {
    let df = DataFrame::new(vec![
        Series::new("Year", vec![2000i64, 2000, 2001]),
        Series::new("Value", vec![1.5, 2.25, 3.0]),
    ])
    .unwrap();

    let table = AggregateTable::build(&df).unwrap();

    assert_eq!(table.lookup(2000), Some(3.75));
    assert_eq!(table.lookup(2001), Some(3.0));
}

#[test]
fn test_missing_column_is_a_load_error() {
    let file = write_csv(&["Year,Production", "1965,10"]);

    let err = AggregateTable::build(&CsvSource::new(file.path())).unwrap_err();

    assert!(matches!(err, HistoryError::MissingColumn(ref c) if c == "Value"));
    assert!(err.to_string().contains("'Value'"));
}

#[test]
fn test_unreadable_source_is_a_load_error() {
    let source = CsvSource::new("/nonexistent/production.csv");

    assert!(matches!(source.load_frame(), Err(HistoryError::IoError(_))));
    assert!(AggregateTable::build(&source).is_err());
}
