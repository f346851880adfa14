//! True Range, Average True Range and Normalized ATR.
//!
//! # Formula
//!
//! ```text
//! TR[i]  = max(high[i], close[i-1]) - min(low[i], close[i-1])
//! ATR[p] = mean(TR[1..=p])
//! ATR[i] = (ATR[i-1] * (p - 1) + TR[i]) / p
//! NATR   = ATR / close * 100                  (0 when close is 0)
//! ```
//!
//! # Lookback
//!
//! TRANGE: 1. ATR and NATR: `period`.

use crate::error::Result;
use crate::output::real_output;
use crate::traits::{is_zero, validate_period, validate_same_len, SeriesElement};

/// True range of one bar given the previous close.
#[inline]
pub(crate) fn true_range<T: SeriesElement>(high: T, low: T, prev_close: T) -> T {
    let mut range = high - low;
    let gap_up = (prev_close - high).abs();
    if gap_up > range {
        range = gap_up;
    }
    let gap_down = (prev_close - low).abs();
    if gap_down > range {
        range = gap_down;
    }
    range
}

/// Returns the TRANGE lookback, 1.
#[inline]
#[must_use]
pub const fn trange_lookback() -> usize {
    1
}

/// Computes the true range.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use tacalc::indicators::atr::trange;
///
/// let high = [10.0_f64, 12.0, 11.0];
/// let low = [9.0_f64, 11.0, 7.0];
/// let close = [9.5_f64, 11.5, 8.0];
/// let tr = trange(&high, &low, &close).unwrap();
/// assert!(tr[0].is_nan());
/// // gap up from 9.5 to a 12.0 high
/// assert_eq!(tr[1], 2.5);
/// assert_eq!(tr[2], 4.5);
/// ```
#[must_use = "this returns a Result with the true range values, which should be used"]
pub fn trange<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    let len = validate_same_len("TRANGE", &[high, low, close])?;
    let mut out = real_output(len);
    for i in trange_lookback()..len {
        out[i] = true_range(high[i], low[i], close[i - 1]);
    }
    Ok(out)
}

/// Returns the ATR lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn atr_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period)
}

/// Wilder-smoothed true range. Element `k` belongs to position `period + k`.
fn smoothed_true_range<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    let len = high.len();
    if len <= period {
        return Ok(Vec::new());
    }
    let p = T::from_usize(period)?;
    let p_minus_one = p - T::one();
    let tr = |i: usize| true_range(high[i], low[i], close[i - 1]);
    let mut atr = (1..=period).fold(T::zero(), |acc, i| acc + tr(i)) / p;
    let mut values = Vec::with_capacity(len - period);
    values.push(atr);
    for i in period + 1..len {
        atr = (atr * p_minus_one + tr(i)) / p;
        values.push(atr);
    }
    Ok(values)
}

/// Computes the Average True Range.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the ATR values, which should be used"]
pub fn atr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    let len = validate_same_len("ATR", &[high, low, close])?;
    let lookback = atr_lookback(period)?;
    let mut out = real_output(len);
    let smoothed = smoothed_true_range(high, low, close, period)?;
    for (k, value) in smoothed.into_iter().enumerate() {
        out[lookback + k] = value;
    }
    Ok(out)
}

/// Returns the NATR lookback, `period`.
///
/// # Errors
///
/// See [`atr_lookback`].
#[inline]
pub fn natr_lookback(period: usize) -> Result<usize> {
    atr_lookback(period)
}

/// Computes the ATR as a percentage of the close.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the NATR values, which should be used"]
pub fn natr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    let len = validate_same_len("NATR", &[high, low, close])?;
    let lookback = natr_lookback(period)?;
    let mut out = real_output(len);
    let smoothed = smoothed_true_range(high, low, close, period)?;
    for (k, value) in smoothed.into_iter().enumerate() {
        let c = close[lookback + k];
        out[lookback + k] = if is_zero(c) {
            T::zero()
        } else {
            value / c * T::hundred()
        };
    }
    Ok(out)
}
