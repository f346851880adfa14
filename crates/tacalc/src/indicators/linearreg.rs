//! Linear regression family: LINEARREG, LINEARREG_SLOPE,
//! LINEARREG_INTERCEPT, LINEARREG_ANGLE and TSF.
//!
//! Each window of `period` samples is fitted by least squares against
//! `x = 0, 1, ..., period-1` (oldest sample at `x = 0`):
//!
//! ```text
//! m = (p * Sxy - Sx * Sy) / (p * Sxx - Sx^2)
//! b = (Sy - m * Sx) / p
//!
//! LINEARREG           = b + m * (p - 1)     fitted value at the newest bar
//! LINEARREG_SLOPE     = m
//! LINEARREG_INTERCEPT = b
//! LINEARREG_ANGLE     = atan(m) in degrees
//! TSF                 = b + m * p           one bar ahead
//! ```
//!
//! `Sy` and `Sxy` slide with the window: every remaining sample's `x` drops
//! by one, so `Sxy` loses the remaining `Sy` and gains `(p - 1) * y_new`.
//! Both are refitted from the window every `period` bars and whenever a
//! spike leaves it, so the fit never drifts from a direct one.
//!
//! # Lookback
//!
//! `period - 1`, with `period >= 2`.

use crate::error::Result;
use crate::kernels::linear_window_sums;
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback of every linear regression indicator, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100000`.
#[inline]
pub fn linearreg_lookback(period: usize) -> Result<usize> {
    validate_period(period, 2)?;
    Ok(period - 1)
}

/// Fits every window and maps `(slope, intercept, p)` to an output value.
fn fit_windows<T, F>(data: &[T], period: usize, map: F) -> Result<Vec<T>>
where
    T: SeriesElement,
    F: Fn(T, T, T) -> T,
{
    let lookback = linearreg_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }

    let p = T::from_usize(period)?;
    let last_x = T::from_usize(period - 1)?;
    let sum_x = p * last_x / T::two();
    let sum_xx = p * last_x * (T::two() * p - T::one()) / T::lit(6.0);
    let divisor = p * sum_xx - sum_x * sum_x;

    let sums = linear_window_sums(data, period)?;
    for (k, (sum_y, weighted)) in sums.into_iter().enumerate() {
        // weights run from 1 where x runs from 0
        let sum_xy = weighted - sum_y;
        let slope = (p * sum_xy - sum_x * sum_y) / divisor;
        let intercept = (sum_y - slope * sum_x) / p;
        out[lookback + k] = map(slope, intercept, p);
    }
    Ok(out)
}

/// Linear regression value at the newest bar of each window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `2..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::linearreg::linearreg;
///
/// let result = linearreg(&[1.0_f64, 3.0, 5.0, 7.0], 3).unwrap();
/// assert!((result[3] - 7.0).abs() < 1e-12);
/// ```
#[must_use = "this returns a Result with the regression values, which should be used"]
pub fn linearreg<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    fit_windows(data, period, |m, b, p| b + m * (p - T::one()))
}

/// Slope of the regression line of each window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `2..=100000`.
#[must_use = "this returns a Result with the regression slopes, which should be used"]
pub fn linearreg_slope<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    fit_windows(data, period, |m, _, _| m)
}

/// Intercept of the regression line of each window, at its oldest bar.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `2..=100000`.
#[must_use = "this returns a Result with the regression intercepts, which should be used"]
pub fn linearreg_intercept<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    fit_windows(data, period, |_, b, _| b)
}

/// Angle of the regression line of each window, in degrees.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `2..=100000`.
#[must_use = "this returns a Result with the regression angles, which should be used"]
pub fn linearreg_angle<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    fit_windows(data, period, |m, _, _| m.atan().to_degrees())
}

/// Time series forecast: the regression line extended one bar ahead.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `2..=100000`.
#[must_use = "this returns a Result with the forecasts, which should be used"]
pub fn tsf<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    fit_windows(data, period, |m, b, p| b + m * p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_fit(window: &[f64]) -> (f64, f64) {
        let n = window.len() as f64;
        let mx = (n - 1.0) / 2.0;
        let my = window.iter().sum::<f64>() / n;
        let mut cov = 0.0;
        let mut var = 0.0;
        for (j, &y) in window.iter().enumerate() {
            cov += (j as f64 - mx) * (y - my);
            var += (j as f64 - mx).powi(2);
        }
        let m = cov / var;
        (m, my - m * mx)
    }

    #[test]
    fn test_linearreg_family_on_line() {
        let data: Vec<f64> = (0..10).map(|i| 2.0 * f64::from(i) + 1.0).collect();
        let slope = linearreg_slope(&data, 4).unwrap();
        let intercept = linearreg_intercept(&data, 4).unwrap();
        let value = linearreg(&data, 4).unwrap();
        let forecast = tsf(&data, 4).unwrap();
        let angle = linearreg_angle(&data, 4).unwrap();
        assert!(slope[2].is_nan());
        for i in 3..10 {
            assert!((slope[i] - 2.0).abs() < 1e-9);
            assert!((intercept[i] - data[i - 3]).abs() < 1e-9);
            assert!((value[i] - data[i]).abs() < 1e-9);
            assert!((forecast[i] - (data[i] + 2.0)).abs() < 1e-9);
            assert!((angle[i] - 2.0_f64.atan().to_degrees()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linearreg_sliding_matches_naive() {
        let data: Vec<f64> = (0..60).map(|i| f64::from(i * 37 % 23) - 4.5).collect();
        let p = 7;
        let slope = linearreg_slope(&data, p).unwrap();
        let intercept = linearreg_intercept(&data, p).unwrap();
        for end in p - 1..data.len() {
            let (m, b) = naive_fit(&data[end + 1 - p..=end]);
            assert!((slope[end] - m).abs() < 1e-9);
            assert!((intercept[end] - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linearreg_long_series_matches_direct_fit() {
        let data: Vec<f64> = (0..20_000)
            .map(|i| 50_000.0 + (f64::from(i) * 0.37).sin() * 300.0 + f64::from(i % 7) * 0.1)
            .collect();
        let p = 14;
        let slope = linearreg_slope(&data, p).unwrap();
        let value = linearreg(&data, p).unwrap();
        for end in p - 1..data.len() {
            let (m, b) = naive_fit(&data[end + 1 - p..=end]);
            let (s, v) = (slope[end], value[end]);
            assert!((s - m).abs() < 1e-8, "slope[{end}]: {s} vs {m}");
            let fitted = b + m * (p - 1) as f64;
            assert!((v - fitted).abs() < 1e-7, "value[{end}]: {v} vs {fitted}");
        }
    }

    #[test]
    fn test_linearreg_flat_after_spike() {
        let mut data = vec![1e9_f64];
        data.extend(std::iter::repeat(1.1).take(20));
        let slope = linearreg_slope(&data, 5).unwrap();
        let value = linearreg(&data, 5).unwrap();
        for end in 5..data.len() {
            let (s, v) = (slope[end], value[end]);
            assert!(s.abs() < 1e-12, "slope[{end}] = {s}");
            assert!((v - 1.1).abs() < 1e-12, "value[{end}] = {v}");
        }
    }

    #[test]
    fn test_linearreg_period_bounds() {
        assert!(linearreg_lookback(1).is_err());
        assert_eq!(linearreg_lookback(14).unwrap(), 13);
        assert!(tsf::<f64>(&[], 14).unwrap().is_empty());
    }
}
