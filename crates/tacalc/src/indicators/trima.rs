//! Triangular Moving Average (TRIMA).
//!
//! A simple average of a simple average. The two stage lengths split the
//! period so the combined weights form a triangle:
//!
//! ```text
//! odd p:  SMA(SMA(x, (p+1)/2), (p+1)/2)
//! even p: SMA(SMA(x, p/2), p/2 + 1)
//! ```
//!
//! Both stages are running window sums, so the cost is O(n).
//!
//! # Lookback
//!
//! `period - 1`.

use crate::error::Result;
use crate::kernels::rolling_sum::window_sums;
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the TRIMA lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn trima_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period - 1)
}

const fn stage_lengths(period: usize) -> (usize, usize) {
    if period % 2 == 1 {
        let half = (period + 1) / 2;
        (half, half)
    } else {
        let half = period / 2;
        (half, half + 1)
    }
}

/// Computes the Triangular Moving Average.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::trima::trima;
///
/// // weights 1,2,3,2,1 over 9 total
/// let result = trima(&[9.0_f64, 0.0, 0.0, 0.0, 0.0], 5).unwrap();
/// assert!((result[4] - 1.0).abs() < 1e-12);
/// ```
#[must_use = "this returns a Result with the TRIMA values, which should be used"]
pub fn trima<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = trima_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let (first, second) = stage_lengths(period);
    let n1 = T::from_usize(first)?;
    let n2 = T::from_usize(second)?;
    let inner: Vec<T> = window_sums(data, first)
        .into_iter()
        .map(|s| s / n1)
        .collect();
    for (k, total) in window_sums(&inner, second).into_iter().enumerate() {
        out[lookback + k] = total / n2;
    }
    Ok(out)
}
