//! Weighted Moving Average (WMA).
//!
//! Linearly weighted: the newest sample has weight `period`, the oldest 1.
//!
//! ```text
//! WMA[i] = sum(j=1..p, j * x[i-p+j]) / (p * (p + 1) / 2)
//! ```
//!
//! The weighted total slides with the window: each step adds `p * x_new` and
//! subtracts the plain window total, and is refitted from the window every
//! `period` bars.
//!
//! # Lookback
//!
//! `period - 1`.

use crate::error::Result;
use crate::kernels::linear_window_sums;
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the WMA lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn wma_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period - 1)
}

/// Computes the Weighted Moving Average.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::wma::wma;
///
/// let result = wma(&[1.0_f64, 2.0, 3.0], 3).unwrap();
/// // (1*1 + 2*2 + 3*3) / 6
/// assert!((result[2] - 14.0 / 6.0).abs() < 1e-12);
/// ```
#[must_use = "this returns a Result with the WMA values, which should be used"]
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = wma_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let divider = T::from_usize(period * (period + 1) / 2)?;
    let sums = linear_window_sums(data, period)?;
    for (k, (_, weighted)) in sums.into_iter().enumerate() {
        out[lookback + k] = weighted / divider;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wma_naive(data: &[f64], period: usize) -> Vec<f64> {
        let div = (period * (period + 1) / 2) as f64;
        (0..data.len())
            .map(|i| {
                if i + 1 < period {
                    f64::NAN
                } else {
                    (0..period)
                        .map(|j| data[i + 1 - period + j] * (j + 1) as f64)
                        .sum::<f64>()
                        / div
                }
            })
            .collect()
    }

    #[test]
    fn test_wma_matches_naive() {
        let data: Vec<f64> = (0..50).map(|i| f64::from(i * 7 % 11) + 0.5).collect();
        for period in [1, 2, 5, 9] {
            let fast = wma(&data, period).unwrap();
            let slow = wma_naive(&data, period);
            for (a, b) in fast.iter().zip(&slow) {
                assert!((a.is_nan() && b.is_nan()) || (a - b).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_wma_long_series_after_spike() {
        let mut data = vec![1e12_f64];
        data.extend((0..30_000).map(|i| 50_000.0 + (f64::from(i) * 0.3).sin() * 100.0));
        let fast = wma(&data, 10).unwrap();
        let slow = wma_naive(&data, 10);
        for i in 10..data.len() {
            let (f, s) = (fast[i], slow[i]);
            assert!((f - s).abs() < 1e-7, "bar {i}: {f} vs {s}");
        }
    }

    #[test]
    fn test_wma_period_one() {
        assert_eq!(wma(&[4.0_f64, 2.0], 1).unwrap(), vec![4.0, 2.0]);
    }

    #[test]
    fn test_wma_empty() {
        assert!(wma::<f64>(&[], 30).unwrap().is_empty());
    }
}
