//! Simple Moving Average (SMA).
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (x[i-p+1] + ... + x[i]) / p
//! ```
//!
//! The window total is updated incrementally, so the cost is O(n).
//!
//! # Lookback
//!
//! `period - 1`.
//!
//! # Example
//!
//! ```
//! use tacalc::indicators::sma::sma;
//!
//! let result = sma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
//! assert!(result[0].is_nan() && result[1].is_nan());
//! assert_eq!(&result[2..], &[2.0, 3.0, 4.0]);
//! ```

use crate::error::Result;
use crate::kernels::rolling_sum::window_sums;
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the SMA lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn sma_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period - 1)
}

/// Computes the Simple Moving Average.
///
/// A period of 1 returns a copy of the input.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = sma_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let p = T::from_usize(period)?;
    for (k, total) in window_sums(data, period).into_iter().enumerate() {
        out[lookback + k] = total / p;
    }
    Ok(out)
}
