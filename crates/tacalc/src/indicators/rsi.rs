//! Relative Strength Index (RSI).
//!
//! Gains and losses of consecutive closes are averaged separately with
//! Wilder smoothing:
//!
//! ```text
//! avg_gain[p] = mean(gains[1..=p])
//! avg_gain[i] = (avg_gain[i-1] * (p - 1) + gain[i]) / p
//! RSI         = 100 * avg_gain / (avg_gain + avg_loss)
//! ```
//!
//! which equals `100 - 100 / (1 + avg_gain / avg_loss)`. When both averages
//! are zero (a flat series) the RSI is reported as the neutral value 50.
//!
//! # Lookback
//!
//! `period`.

use crate::error::Result;
use crate::output::real_output;
use crate::traits::{is_zero, validate_period, SeriesElement};

/// Returns the RSI lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn rsi_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period)
}

/// Wilder-smoothed average gain and loss at every position from `period`.
///
/// Shared by RSI and CMO. Element `k` belongs to position `period + k`.
pub(crate) fn smoothed_gain_loss<T: SeriesElement>(
    data: &[T],
    period: usize,
) -> Result<Vec<(T, T)>> {
    if data.len() <= period {
        return Ok(Vec::new());
    }
    let p = T::from_usize(period)?;
    let p_minus_one = p - T::one();
    let mut gain = T::zero();
    let mut loss = T::zero();
    for pair in data[..=period].windows(2) {
        let change = pair[1] - pair[0];
        if change < T::zero() {
            loss = loss - change;
        } else {
            gain = gain + change;
        }
    }
    gain = gain / p;
    loss = loss / p;

    let mut averages = Vec::with_capacity(data.len() - period);
    averages.push((gain, loss));
    for pair in data[period..].windows(2) {
        let change = pair[1] - pair[0];
        gain = gain * p_minus_one;
        loss = loss * p_minus_one;
        if change < T::zero() {
            loss = loss - change;
        } else {
            gain = gain + change;
        }
        gain = gain / p;
        loss = loss / p;
        averages.push((gain, loss));
    }
    Ok(averages)
}

/// Computes the Relative Strength Index.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::rsi::rsi;
///
/// let up: Vec<f64> = (0..20).map(f64::from).collect();
/// let result = rsi(&up, 14).unwrap();
/// assert!(result[13].is_nan());
/// assert_eq!(result[14], 100.0);
///
/// // flat prices have no gains and no losses
/// assert_eq!(rsi(&[5.0_f64; 20], 14).unwrap()[19], 50.0);
/// ```
#[must_use = "this returns a Result with the RSI values, which should be used"]
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = rsi_lookback(period)?;
    let mut out = real_output(data.len());
    for (k, (gain, loss)) in smoothed_gain_loss(data, period)?.into_iter().enumerate() {
        let total = gain + loss;
        out[lookback + k] = if is_zero(total) {
            T::fifty()
        } else {
            T::hundred() * (gain / total)
        };
    }
    Ok(out)
}
