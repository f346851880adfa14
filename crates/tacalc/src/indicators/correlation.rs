//! Two-series statistics: CORREL (Pearson correlation) and BETA.
//!
//! CORREL correlates the raw values of the last `period` bars. BETA regresses
//! the one-bar returns of the second series on those of the first:
//!
//! ```text
//! r = (x - x[-1]) / x[-1]            (0 when x[-1] is ~0)
//! BETA = (n*Sxy - Sx*Sy) / (n*Sxx - Sx^2)
//! ```
//!
//! Both return 0 when the denominator vanishes.
//!
//! # Lookback
//!
//! CORREL: `period - 1`. BETA: `period` (one extra bar for the first return).

use crate::error::Result;
use crate::kernels::SlidingSums;
use crate::output::real_output;
use crate::traits::{is_zero, is_zero_or_neg, validate_period, validate_same_len, SeriesElement};

/// Returns the CORREL lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn correl_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period - 1)
}

/// Returns the BETA lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn beta_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period)
}

/// Pearson correlation of `x` and `y` over the last `period` bars.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::correlation::correl;
///
/// let x = [1.0_f64, 2.0, 3.0, 4.0];
/// let y = [8.0_f64, 6.0, 4.0, 2.0];
/// let result = correl(&x, &y, 3).unwrap();
/// assert!((result[3] + 1.0).abs() < 1e-12);
/// ```
#[must_use = "this returns a Result with the correlation, which should be used"]
pub fn correl<T: SeriesElement>(x: &[T], y: &[T], period: usize) -> Result<Vec<T>> {
    let len = validate_same_len("CORREL", &[x, y])?;
    let lookback = correl_lookback(period)?;
    let mut out = real_output(len);
    if len <= lookback {
        return Ok(out);
    }

    let n = T::from_usize(period)?;
    let terms = |j: usize| {
        let (a, b) = (x[j], y[j]);
        [a, b, a * b, a * a, b * b]
    };
    let mut sums = SlidingSums::<T, 5>::new(period);
    sums.rebuild((0..lookback).map(terms));
    for today in lookback..len {
        sums.push(terms(today));
        let [sx, sy, sxy, sx2, sy2] = sums.totals();
        let spread = (sx2 - sx * sx / n) * (sy2 - sy * sy / n);
        out[today] = if is_zero_or_neg(spread) {
            T::zero()
        } else {
            (sxy - sx * sy / n) / spread.sqrt()
        };

        let oldest = today - lookback;
        sums.pop(terms(oldest), (oldest + 1..=today).map(terms));
    }
    Ok(out)
}

#[inline]
fn one_bar_return<T: SeriesElement>(price: T, prev: T) -> T {
    if is_zero(prev) {
        T::zero()
    } else {
        (price - prev) / prev
    }
}

/// Beta of `y` against `x`, from one-bar returns over the last `period`
/// bars.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the beta values, which should be used"]
pub fn beta<T: SeriesElement>(x: &[T], y: &[T], period: usize) -> Result<Vec<T>> {
    let len = validate_same_len("BETA", &[x, y])?;
    let lookback = beta_lookback(period)?;
    let mut out = real_output(len);
    if len <= lookback {
        return Ok(out);
    }

    let n = T::from_usize(period)?;
    let terms = |j: usize| {
        let rx = one_bar_return(x[j], x[j - 1]);
        let ry = one_bar_return(y[j], y[j - 1]);
        [rx * rx, rx, rx * ry, ry]
    };
    let mut sums = SlidingSums::<T, 4>::new(period);
    sums.rebuild((1..lookback).map(terms));
    for today in lookback..len {
        sums.push(terms(today));
        let [sxx, sx, sxy, sy] = sums.totals();
        let denominator = n * sxx - sx * sx;
        out[today] = if is_zero(denominator) {
            T::zero()
        } else {
            (n * sxy - sx * sy) / denominator
        };

        // drop the oldest return of the window
        let oldest = today + 1 - period;
        sums.pop(terms(oldest), (oldest + 1..=today).map(terms));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_correl_perfect() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 2.0).collect();
        let result = correl(&x, &y, 5).unwrap();
        assert!(result[3].is_nan());
        assert!(result[4..].iter().all(|&v| (v - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_correl_flat_series_is_zero() {
        let result = correl(&[1.0_f64; 6], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert!(result[2..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_correl_forgets_a_spike() {
        let mut x = vec![1e9_f64];
        x.extend(std::iter::repeat(1.1).take(10));
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
        let result = correl(&x, &y, 3).unwrap();
        assert!((result[2] - 1.0).abs() < 1e-9);
        for (i, &v) in result.iter().enumerate().skip(3) {
            assert_eq!(v, 0.0, "bar {i}");
        }

        let mut x = vec![1e9_f64];
        x.extend((1..=10).map(f64::from));
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
        let result = correl(&x, &y, 3).unwrap();
        for (i, &v) in result.iter().enumerate().skip(3) {
            assert!((v - 1.0).abs() < 1e-9, "bar {i}: {v}");
        }
    }

    #[test]
    fn test_beta_scaled_returns() {
        // y returns are exactly twice x returns
        let mut x = vec![100.0_f64];
        let mut y = vec![50.0_f64];
        for i in 0..20 {
            let r = if i % 2 == 0 { 0.01 } else { -0.005 };
            x.push(x[i] * (1.0 + r));
            y.push(y[i] * (1.0 + 2.0 * r));
        }
        let result = beta(&x, &y, 5).unwrap();
        assert!(result[4].is_nan());
        for &v in &result[5..] {
            assert!((v - 2.0).abs() < 1e-9, "beta {v}");
        }
    }

    #[test]
    fn test_beta_degenerate_is_zero() {
        let result = beta(&[5.0_f64; 8], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 3).unwrap();
        assert!(result[3..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_beta_forgets_a_spike() {
        let mut x = vec![1.0_f64, 1e9];
        x.extend(std::iter::repeat(1.0).take(8));
        let y: Vec<f64> = (1..=10).map(f64::from).collect();
        let result = beta(&x, &y, 3).unwrap();
        for (i, &v) in result.iter().enumerate().skip(5) {
            assert_eq!(v, 0.0, "bar {i}");
        }
    }

    #[test]
    fn test_two_series_length_mismatch() {
        assert!(matches!(
            correl(&[1.0_f64; 10], &[1.0; 9], 3),
            Err(Error::LengthMismatch { .. })
        ));
        assert!(beta(&[1.0_f64; 10], &[1.0; 9], 3).is_err());
    }
}
