//! ARIMA(p, d, 0) models for time series forecasting

use crate::error::{ForecastError, Result};
use crate::models::{require_finite, FittedModel, ForecastResult};
use std::collections::VecDeque;

/// Fitted autoregressive model on a `d`-times differenced series
#[derive(Debug, Clone)]
pub struct Arima {
    /// Name of the model
    name: String,
    /// AR coefficients, most recent lag first
    ar_coefficients: Vec<f64>,
    /// Constant term of the differenced process
    intercept: f64,
    /// Differencing order (d)
    d: usize,
    /// Tail of the original series, oldest first
    history: Vec<f64>,
}

impl Arima {
    /// Create a fitted model.
    ///
    /// `history` must hold at least `p + d` observations of the undifferenced
    /// series so the first forecast has every lag it needs.
    pub fn new(
        ar_coefficients: Vec<f64>,
        intercept: f64,
        d: usize,
        history: Vec<f64>,
    ) -> Result<Self> {
        let p = ar_coefficients.len();
        let required = (p + d).max(1);
        if history.len() < required {
            return Err(ForecastError::InvalidParameter(format!(
                "Insufficient history for ARIMA({},{},0). Need at least {} observations, got {}.",
                p,
                d,
                required,
                history.len()
            )));
        }
        require_finite("intercept", intercept)?;
        for (i, phi) in ar_coefficients.iter().enumerate() {
            require_finite(&format!("ar[{}]", i), *phi)?;
        }
        for (i, y) in history.iter().enumerate() {
            require_finite(&format!("history[{}]", i), *y)?;
        }

        Ok(Self {
            name: format!("ARIMA({},{},0)", p, d),
            ar_coefficients,
            intercept,
            d,
            history,
        })
    }

    /// AR order (p)
    pub fn p(&self) -> usize {
        self.ar_coefficients.len()
    }

    /// Differencing order (d)
    pub fn d(&self) -> usize {
        self.d
    }
}

fn difference(series: &[f64]) -> Vec<f64> {
    series.windows(2).map(|w| w[1] - w[0]).collect()
}

impl FittedModel for Arima {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        // Last value at each differencing level, used to integrate forecasts back
        let mut tails = Vec::with_capacity(self.d);
        let mut working = self.history.clone();
        for _ in 0..self.d {
            let last = working.last().copied().ok_or_else(|| {
                ForecastError::ForecastingError("History exhausted while differencing".to_string())
            })?;
            tails.push(last);
            working = difference(&working);
        }

        let p = self.p();
        let mut lags: VecDeque<f64> = working[working.len().saturating_sub(p)..]
            .iter()
            .copied()
            .collect();

        let mut forecasts = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            let mut next = self.intercept;
            for (i, phi) in self.ar_coefficients.iter().enumerate() {
                next += phi * lags[lags.len() - 1 - i];
            }
            if p > 0 {
                lags.push_back(next);
                lags.pop_front();
            }

            let mut value = next;
            for tail in tails.iter_mut().rev() {
                *tail += value;
                value = *tail;
            }
            forecasts.push(value);
        }

        ForecastResult::new(forecasts, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ar1_decays_toward_mean() {
        let model = Arima::new(vec![0.5], 0.0, 0, vec![8.0]).unwrap();
        let forecast = model.forecast(3).unwrap();
        assert_eq!(forecast.values(), &[4.0, 2.0, 1.0]);
    }

    #[test]
    fn test_random_walk_with_drift() {
        let model = Arima::new(Vec::new(), 2.0, 1, vec![10.0]).unwrap();
        let forecast = model.forecast(3).unwrap();
        assert_eq!(forecast.values(), &[12.0, 14.0, 16.0]);
    }

    #[test]
    fn test_differenced_ar_integrates_back() {
        // Differences 1, 2 -> next differences 1.0, 0.5 with phi = 0.5
        let model = Arima::new(vec![0.5], 0.0, 1, vec![0.0, 1.0, 3.0]).unwrap();
        let forecast = model.forecast(2).unwrap();
        assert_relative_eq!(forecast.values()[0], 4.0);
        assert_relative_eq!(forecast.values()[1], 4.5);
    }

    #[test]
    fn test_second_order_differencing() {
        // Constant second difference of 1: 1, 2, 4 -> 7, 11
        let model = Arima::new(Vec::new(), 1.0, 2, vec![1.0, 2.0, 4.0]).unwrap();
        let forecast = model.forecast(2).unwrap();
        assert_eq!(forecast.values(), &[7.0, 11.0]);
    }

    #[test]
    fn test_insufficient_history() {
        let err = Arima::new(vec![0.5, 0.2], 0.0, 1, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter(_)));
    }
}
