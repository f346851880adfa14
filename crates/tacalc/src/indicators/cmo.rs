//! Chande Momentum Oscillator (CMO).
//!
//! ```text
//! CMO = 100 * (avg_gain - avg_loss) / (avg_gain + avg_loss)
//! ```
//!
//! using the same Wilder-smoothed averages as RSI. A flat series gives 0.
//!
//! # Lookback
//!
//! `period`.

use crate::error::Result;
use crate::indicators::rsi::smoothed_gain_loss;
use crate::output::real_output;
use crate::traits::{is_zero, validate_period, SeriesElement};

/// Returns the CMO lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn cmo_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period)
}

/// Computes the Chande Momentum Oscillator.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the CMO values, which should be used"]
pub fn cmo<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = cmo_lookback(period)?;
    let mut out = real_output(data.len());
    for (k, (gain, loss)) in smoothed_gain_loss(data, period)?.into_iter().enumerate() {
        let total = gain + loss;
        out[lookback + k] = if is_zero(total) {
            T::zero()
        } else {
            T::hundred() * ((gain - loss) / total)
        };
    }
    Ok(out)
}
