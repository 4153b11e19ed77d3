use approx::assert_relative_eq;
use crop_forecast::{ArtifactForecaster, ForecastError, ForecastProvider, Frequency};
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_artifact(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

#[rstest]
#[case::ses(r#"{"kind": "simple_exponential_smoothing", "level": 500.0}"#, 500.0)]
#[case::holt(r#"{"kind": "holt", "level": 380.0, "trend": 10.0}"#, 500.0)]
#[case::holt_winters(
    r#"{"kind": "holt_winters", "level": 440.0, "trend": 5.0,
        "seasonal": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0]}"#,
    500.0
)]
#[case::arima(
    r#"{"kind": "arima", "ar": [], "intercept": 10.0, "d": 1, "history": [370.0, 380.0]}"#,
    500.0
)]
fn test_twelve_step_forecast_from_artifact(#[case] model: &str, #[case] expected_last: f64) {
    let file = write_artifact(&format!(
        r#"{{"name": "rice", "frequency": "monthly", "anchor": "2021-12-01", "model": {}}}"#,
        model
    ));

    let provider = ArtifactForecaster::load(file.path()).unwrap();
    let forecast = provider.forecast(12).unwrap();

    assert_eq!(forecast.values().len(), 12);
    assert_relative_eq!(forecast.last().unwrap(), expected_last);
    assert_eq!(provider.frequency(), Frequency::Monthly);
}

#[test]
fn test_missing_artifact() {
    let err = ArtifactForecaster::load("/nonexistent/forecast_model.json").unwrap_err();
    assert!(matches!(err, ForecastError::IoError(_)));
}

#[test]
fn test_corrupted_artifact() {
    let file = write_artifact("{\"model\": {\"kind\": \"holt\", \"level\": ");
    let err = ArtifactForecaster::load(file.path()).unwrap_err();
    assert!(matches!(err, ForecastError::JsonError(_)));
}

#[test]
fn test_invalid_model_state() {
    let file =
        write_artifact(r#"{"model": {"kind": "arima", "ar": [0.5, 0.1], "history": [1.0]}}"#);
    let err = ArtifactForecaster::load(file.path()).unwrap_err();
    assert!(matches!(err, ForecastError::InvalidParameter(_)));
}

#[test]
fn test_artifact_horizon_limit() {
    let file = write_artifact(
        r#"{"max_steps": 120, "model": {"kind": "simple_exponential_smoothing", "level": 1.0}}"#,
    );
    let provider = ArtifactForecaster::load(file.path()).unwrap();

    assert_eq!(provider.max_steps(), 120);
    assert_eq!(provider.model_name(), "Simple Exponential Smoothing");
    assert!(provider.forecast(120).is_ok());
    assert!(matches!(
        provider.forecast(121),
        Err(ForecastError::HorizonTooLong { steps: 121, max: 120 })
    ));
}
