//! Window dispersion statistics: VAR, STDDEV and AVGDEV.
//!
//! All three describe the last `period` samples and use the population
//! convention (divide by `n`). VAR and STDDEV come from running sums of `x`
//! and `x^2`:
//!
//! ```text
//! VAR    = (E[x^2] - E[x]^2) * nbdev^2
//! STDDEV = sqrt(E[x^2] - E[x]^2) * nbdev     (0 when the variance is ~0 or below)
//! AVGDEV = mean(|x - mean(x)|)
//! ```
//!
//! A single-sample window has zero dispersion.
//!
//! # Lookback
//!
//! `period - 1` for all three.

use crate::error::Result;
use crate::kernels::rolling_sum::WindowMoments;
use crate::output::real_output;
use crate::traits::{is_zero_or_neg, validate_period, validate_range, SeriesElement};

/// Returns the VAR/STDDEV/AVGDEV lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn dispersion_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period - 1)
}

fn validate_nbdev(nbdev: f64) -> Result<()> {
    validate_range("nbdev", nbdev, -3.0e37, 3.0e37)
}

/// Raw population variance of each full window, placed at the window end.
fn window_variance<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = dispersion_lookback(period)?;
    let mut out = real_output(data.len());
    let moments = WindowMoments::compute(data, period);
    let n = T::from_usize(period)?;
    for k in 0..moments.len() {
        out[lookback + k] = moments.variance(k, n);
    }
    Ok(out)
}

/// Population variance over the last `period` samples, scaled by `nbdev^2`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`, or
/// `Error::InvalidParameter` for a non-finite `nbdev`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::statistics::var;
///
/// let result = var(&[1.0_f64, 2.0, 3.0, 4.0], 4, 1.0).unwrap();
/// assert!((result[3] - 1.25).abs() < 1e-12);
/// ```
#[must_use = "this returns a Result with the variance, which should be used"]
pub fn var<T: SeriesElement>(data: &[T], period: usize, nbdev: f64) -> Result<Vec<T>> {
    validate_nbdev(nbdev)?;
    let scale = T::from_f64(nbdev * nbdev)?;
    let mut out = window_variance(data, period)?;
    for v in out.iter_mut().filter(|v| !v.is_nan()) {
        *v = *v * scale;
    }
    Ok(out)
}

/// Population standard deviation over the last `period` samples, times
/// `nbdev`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`, or
/// `Error::InvalidParameter` for a non-finite `nbdev`.
#[must_use = "this returns a Result with the standard deviation, which should be used"]
pub fn stddev<T: SeriesElement>(data: &[T], period: usize, nbdev: f64) -> Result<Vec<T>> {
    validate_nbdev(nbdev)?;
    let scale = T::from_f64(nbdev)?;
    let mut out = window_variance(data, period)?;
    for v in out.iter_mut().filter(|v| !v.is_nan()) {
        *v = if is_zero_or_neg(*v) {
            T::zero()
        } else {
            v.sqrt() * scale
        };
    }
    Ok(out)
}

/// Mean absolute deviation from the window mean over the last `period`
/// samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the average deviation, which should be used"]
pub fn avgdev<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = dispersion_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let n = T::from_usize(period)?;
    for end in lookback..data.len() {
        let window = &data[end - lookback..=end];
        let mean = window.iter().fold(T::zero(), |acc, &x| acc + x) / n;
        let deviation = window
            .iter()
            .fold(T::zero(), |acc, &x| acc + (x - mean).abs());
        out[end] = deviation / n;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_scaled_by_nbdev_squared() {
        let data = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let plain = var(&data, 8, 1.0).unwrap();
        let scaled = var(&data, 8, 2.0).unwrap();
        assert!((plain[7] - 4.0).abs() < 1e-12);
        assert!((scaled[7] - 16.0).abs() < 1e-12);
        assert!(plain[6].is_nan());
    }

    #[test]
    fn test_stddev_basic_and_period_one() {
        let data = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let result = stddev(&data, 8, 1.5).unwrap();
        assert!((result[7] - 3.0).abs() < 1e-12);
        let ones = stddev(&data, 1, 1.0).unwrap();
        assert!(ones.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_stddev_constant_is_zero() {
        let result = stddev(&[1e6_f64; 10], 5, 1.0).unwrap();
        assert!(result[4..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_var_and_stddev_after_a_spike() {
        let mut data = vec![1e8_f64];
        data.extend(std::iter::repeat(1.1).take(5));
        let variance = var(&data, 2, 1.0).unwrap();
        let deviation = stddev(&data, 2, 1.0).unwrap();
        assert!(variance[1] > 1e14);
        for i in 2..data.len() {
            assert_eq!(variance[i], 0.0, "var[{i}]");
            assert_eq!(deviation[i], 0.0, "stddev[{i}]");
        }

        let mut data = vec![1e8_f64];
        data.extend((0..8).map(|i| if i % 2 == 0 { 1.0 } else { 2.0 }));
        let variance = var(&data, 2, 1.0).unwrap();
        for (i, &v) in variance.iter().enumerate().skip(2) {
            assert!((v - 0.25).abs() < 1e-12, "var[{i}] = {v}");
        }
    }

    #[test]
    fn test_avgdev() {
        let result = avgdev(&[1.0_f64, 2.0, 3.0, 4.0, 10.0], 4).unwrap();
        assert!(result[2].is_nan());
        // mean 2.5: deviations 1.5, 0.5, 0.5, 1.5
        assert!((result[3] - 1.0).abs() < 1e-12);
        // mean 4.75: 2.75 + 1.75 + 0.75 + 5.25
        assert!((result[4] - 2.625).abs() < 1e-12);
    }

    #[test]
    fn test_dispersion_validation() {
        assert!(var(&[1.0_f64; 4], 0, 1.0).is_err());
        assert!(stddev(&[1.0_f64; 4], 2, f64::NAN).is_err());
        assert!(avgdev::<f64>(&[], 5).unwrap().is_empty());
    }
}
