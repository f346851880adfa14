//! Exponential Moving Average (EMA).
//!
//! The EMA is seeded with the simple average of the first `period` samples and
//! then follows the recurrence
//!
//! ```text
//! EMA[i] = (x[i] - EMA[i-1]) * k + EMA[i-1],    k = 2 / (period + 1)
//! ```
//!
//! which is the same as `k * x + (1 - k) * EMA[i-1]` written the way the
//! reference library evaluates it.
//!
//! # Lookback
//!
//! `period - 1`.
//!
//! # Example
//!
//! ```
//! use tacalc::indicators::ema::ema;
//!
//! let data = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0, 15.0];
//! let result = ema(&data, 3).unwrap();
//!
//! assert!(result[1].is_nan());
//! assert!((result[2] - 11.0).abs() < 1e-10); // SMA seed
//! assert!((result[3] - 12.0).abs() < 1e-10); // (13 - 11) * 0.5 + 11
//! ```

use crate::error::Result;
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the EMA lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn ema_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period - 1)
}

/// Standard smoothing factor `2 / (period + 1)`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the period cannot be represented.
#[inline]
pub fn ema_k<T: SeriesElement>(period: usize) -> Result<T> {
    Ok(T::two() / (T::from_usize(period)? + T::one()))
}

/// EMA values for positions `period-1 ..`, seeded by the SMA of the first
/// `period` samples. Empty when the series is shorter than `period`.
pub(crate) fn ema_values<T: SeriesElement>(data: &[T], period: usize, k: T) -> Result<Vec<T>> {
    if period == 0 || data.len() < period {
        return Ok(Vec::new());
    }
    let p = T::from_usize(period)?;
    let seed = data[..period].iter().fold(T::zero(), |acc, &x| acc + x) / p;
    let mut values = Vec::with_capacity(data.len() + 1 - period);
    let mut prev = seed;
    values.push(prev);
    for &x in &data[period..] {
        prev = (x - prev) * k + prev;
        values.push(prev);
    }
    Ok(values)
}

/// Computes the Exponential Moving Average.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = ema_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let values = ema_values(data, period, ema_k(period)?)?;
    out[lookback..].copy_from_slice(&values);
    Ok(out)
}
