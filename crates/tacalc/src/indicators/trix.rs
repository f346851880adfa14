//! TRIX: one-bar rate of change of a triple-smoothed EMA.
//!
//! ```text
//! E3   = EMA(EMA(EMA(x, p), p), p)
//! TRIX = (E3[i] / E3[i-1] - 1) * 100         (0 when E3[i-1] is 0)
//! ```
//!
//! # Lookback
//!
//! `3 * (period - 1) + 1`.

use crate::error::Result;
use crate::indicators::ema::{ema_k, ema_values};
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the TRIX lookback, `3 * (period - 1) + 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn trix_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(3 * (period - 1) + 1)
}

/// Computes TRIX.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::trix::trix;
///
/// let data: Vec<f64> = (1..=30).map(f64::from).collect();
/// let result = trix(&data, 5).unwrap();
/// assert!(result[12].is_nan());
/// assert!(result[13] > 0.0);
/// ```
#[must_use = "this returns a Result with the TRIX values, which should be used"]
pub fn trix<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = trix_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let k = ema_k(period)?;
    let e1 = ema_values(data, period, k)?;
    let e2 = ema_values(&e1, period, k)?;
    let e3 = ema_values(&e2, period, k)?;
    for (j, pair) in e3.windows(2).enumerate() {
        let prev = pair[0];
        out[lookback + j] = if prev == T::zero() {
            T::zero()
        } else {
            (pair[1] / prev - T::one()) * T::hundred()
        };
    }
    Ok(out)
}
