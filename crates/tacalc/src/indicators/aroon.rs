//! Aroon and Aroon Oscillator.
//!
//! The window covers the current bar and the `period` bars before it:
//!
//! ```text
//! Aroon Up   = 100 * (period - bars since highest high) / period
//! Aroon Down = 100 * (period - bars since lowest low)  / period
//! AROONOSC   = Aroon Up - Aroon Down
//! ```
//!
//! Among equal extremes the most recent bar counts.
//!
//! # Lookback
//!
//! `period`.

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_extrema_positions, Extremum};
use crate::output::real_output;
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Output of [`aroon`].
#[derive(Debug, Clone, PartialEq)]
pub struct AroonOutput<T> {
    /// Aroon Down.
    pub down: Vec<T>,
    /// Aroon Up.
    pub up: Vec<T>,
}

/// Returns the Aroon lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100000`.
#[inline]
pub fn aroon_lookback(period: usize) -> Result<usize> {
    validate_period(period, 2)?;
    Ok(period)
}

/// Positions of the highest high and lowest low over each `period + 1` bar
/// window, paired with the position of the window's last bar.
fn extreme_positions<T: SeriesElement>(
    high: &[T],
    low: &[T],
    period: usize,
) -> impl Iterator<Item = (usize, usize, usize)> {
    let highest = rolling_extrema_positions(high, period + 1, Extremum::Max);
    let lowest = rolling_extrema_positions(low, period + 1, Extremum::Min);
    highest
        .into_iter()
        .zip(lowest)
        .enumerate()
        .map(move |(k, (hi, lo))| (k + period, hi, lo))
}

/// Computes Aroon Down and Aroon Up.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `2..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::aroon::aroon;
///
/// let high = [1.0_f64, 2.0, 3.0, 4.0];
/// let low = [0.5_f64, 1.5, 2.5, 3.5];
/// let out = aroon(&high, &low, 2).unwrap();
/// assert_eq!(out.up[3], 100.0);
/// assert_eq!(out.down[3], 0.0);
/// ```
#[must_use = "this returns a Result with the Aroon output, which should be used"]
pub fn aroon<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<AroonOutput<T>> {
    let len = validate_same_len("AROON", &[high, low])?;
    aroon_lookback(period)?;
    let factor = T::hundred() / T::from_usize(period)?;
    let mut down = real_output(len);
    let mut up = real_output(len);
    for (today, hi, lo) in extreme_positions(high, low, period) {
        up[today] = factor * T::from_usize(period - (today - hi))?;
        down[today] = factor * T::from_usize(period - (today - lo))?;
    }
    Ok(AroonOutput { down, up })
}

/// Returns the Aroon Oscillator lookback, `period`.
///
/// # Errors
///
/// See [`aroon_lookback`].
#[inline]
pub fn aroonosc_lookback(period: usize) -> Result<usize> {
    aroon_lookback(period)
}

/// Computes the Aroon Oscillator.
///
/// # Errors
///
/// See [`aroon`].
#[must_use = "this returns a Result with the oscillator values, which should be used"]
pub fn aroonosc<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    let len = validate_same_len("AROONOSC", &[high, low])?;
    aroon_lookback(period)?;
    let factor = T::hundred() / T::from_usize(period)?;
    let mut out = real_output(len);
    for (today, hi, lo) in extreme_positions(high, low, period) {
        out[today] = factor * (T::from_usize(hi)? - T::from_usize(lo)?);
    }
    Ok(out)
}
