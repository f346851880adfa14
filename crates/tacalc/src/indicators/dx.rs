//! Directional movement: PLUS_DM, MINUS_DM, PLUS_DI, MINUS_DI and DX.
//!
//! # Formula
//!
//! ```text
//! up   = high[i] - high[i-1]
//! down = low[i-1] - low[i]
//! +DM  = up   if up > 0 and up > down, else 0
//! -DM  = down if down > 0 and down > up, else 0
//! ```
//!
//! `+DM`, `-DM` and the true range are summed over the first `period - 1`
//! bars and then Wilder-smoothed: `S = S - S / period + value`.
//!
//! ```text
//! +DI = 100 * S(+DM) / S(TR)
//! -DI = 100 * S(-DM) / S(TR)
//! DX  = 100 * |+DI - -DI| / (+DI + -DI)
//! ```
//!
//! DX repeats its previous value when the true range or the DI sum is zero.
//!
//! # Lookback
//!
//! PLUS_DM and MINUS_DM: `period - 1` (1 for period 1). PLUS_DI, MINUS_DI and
//! DX: `period`.

use crate::error::Result;
use crate::indicators::atr::true_range;
use crate::output::real_output;
use crate::traits::{is_zero, validate_period, validate_same_len, SeriesElement};

/// Plus and minus directional movement of bar `i` (`i >= 1`).
#[inline]
pub(crate) fn directional_movement<T: SeriesElement>(high: &[T], low: &[T], i: usize) -> (T, T) {
    let up = high[i] - high[i - 1];
    let down = low[i - 1] - low[i];
    let plus = if up > T::zero() && up > down { up } else { T::zero() };
    let minus = if down > T::zero() && down > up { down } else { T::zero() };
    (plus, minus)
}

/// Wilder-smoothed `+DM`, `-DM` and true range.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Smoothed<T> {
    pub plus_dm: T,
    pub minus_dm: T,
    pub tr: T,
}

impl<T: SeriesElement> Smoothed<T> {
    /// `+DI` and `-DI`, or `None` when the true range is zero.
    pub(crate) fn indicators(&self) -> Option<(T, T)> {
        if is_zero(self.tr) {
            None
        } else {
            Some((
                T::hundred() * (self.plus_dm / self.tr),
                T::hundred() * (self.minus_dm / self.tr),
            ))
        }
    }

    /// DX, or `None` when either the true range or the DI sum is zero.
    pub(crate) fn dx(&self) -> Option<T> {
        let (plus, minus) = self.indicators()?;
        let sum = plus + minus;
        if is_zero(sum) {
            None
        } else {
            Some(T::hundred() * ((minus - plus).abs() / sum))
        }
    }
}

/// Smoothed sums for positions `period..`. Element `k` belongs to position
/// `period + k`.
pub(crate) fn smoothed_directional<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<Smoothed<T>>> {
    let len = high.len();
    if len <= period {
        return Ok(Vec::new());
    }
    let p = T::from_usize(period)?;
    let mut state = Smoothed {
        plus_dm: T::zero(),
        minus_dm: T::zero(),
        tr: T::zero(),
    };
    for i in 1..period {
        let (plus, minus) = directional_movement(high, low, i);
        state.plus_dm = state.plus_dm + plus;
        state.minus_dm = state.minus_dm + minus;
        state.tr = state.tr + true_range(high[i], low[i], close[i - 1]);
    }
    let mut values = Vec::with_capacity(len - period);
    for i in period..len {
        let (plus, minus) = directional_movement(high, low, i);
        state.plus_dm = state.plus_dm - state.plus_dm / p + plus;
        state.minus_dm = state.minus_dm - state.minus_dm / p + minus;
        state.tr = state.tr - state.tr / p + true_range(high[i], low[i], close[i - 1]);
        values.push(state);
    }
    Ok(values)
}

/// Returns the PLUS_DM/MINUS_DM lookback: `period - 1`, or 1 for period 1.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn dm_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok((period - 1).max(1))
}

fn smoothed_movement<T: SeriesElement>(
    indicator: &'static str,
    high: &[T],
    low: &[T],
    period: usize,
    pick: fn((T, T)) -> T,
) -> Result<Vec<T>> {
    let len = validate_same_len(indicator, &[high, low])?;
    let lookback = dm_lookback(period)?;
    let mut out = real_output(len);
    if len <= lookback {
        return Ok(out);
    }
    if period == 1 {
        for i in lookback..len {
            out[i] = pick(directional_movement(high, low, i));
        }
        return Ok(out);
    }
    let p = T::from_usize(period)?;
    let mut total = (1..period).fold(T::zero(), |acc, i| {
        acc + pick(directional_movement(high, low, i))
    });
    out[lookback] = total;
    for i in period..len {
        total = total - total / p + pick(directional_movement(high, low, i));
        out[i] = total;
    }
    Ok(out)
}

/// Computes the smoothed plus directional movement.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the +DM values, which should be used"]
pub fn plus_dm<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    smoothed_movement("PLUS_DM", high, low, period, |(plus, _)| plus)
}

/// Computes the smoothed minus directional movement.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the -DM values, which should be used"]
pub fn minus_dm<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    smoothed_movement("MINUS_DM", high, low, period, |(_, minus)| minus)
}

/// Returns the PLUS_DI/MINUS_DI lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn di_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period)
}

fn directional_indicator<T: SeriesElement>(
    indicator: &'static str,
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
    pick: fn((T, T)) -> T,
) -> Result<Vec<T>> {
    let len = validate_same_len(indicator, &[high, low, close])?;
    let lookback = di_lookback(period)?;
    let mut out = real_output(len);
    let smoothed = smoothed_directional(high, low, close, period)?;
    for (k, state) in smoothed.iter().enumerate() {
        out[lookback + k] = state.indicators().map_or(T::zero(), pick);
    }
    Ok(out)
}

/// Computes the plus directional indicator.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the +DI values, which should be used"]
pub fn plus_di<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    directional_indicator("PLUS_DI", high, low, close, period, |(plus, _)| plus)
}

/// Computes the minus directional indicator.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the -DI values, which should be used"]
pub fn minus_di<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    directional_indicator("MINUS_DI", high, low, close, period, |(_, minus)| minus)
}

/// Returns the DX lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100000`.
#[inline]
pub fn dx_lookback(period: usize) -> Result<usize> {
    validate_period(period, 2)?;
    Ok(period)
}

/// Computes the Directional Movement Index.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `2..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::dx::dx;
///
/// let high: Vec<f64> = (0..20).map(|i| 10.0 + f64::from(i)).collect();
/// let low: Vec<f64> = high.iter().map(|h| h - 1.0).collect();
/// let close: Vec<f64> = high.iter().map(|h| h - 0.5).collect();
/// let result = dx(&high, &low, &close, 5).unwrap();
/// // only upward movement
/// assert_eq!(result[5], 100.0);
/// ```
#[must_use = "this returns a Result with the DX values, which should be used"]
pub fn dx<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    let len = validate_same_len("DX", &[high, low, close])?;
    let lookback = dx_lookback(period)?;
    let mut out = real_output(len);
    let mut prev = T::zero();
    let smoothed = smoothed_directional(high, low, close, period)?;
    for (k, state) in smoothed.iter().enumerate() {
        if let Some(value) = state.dx() {
            prev = value;
        }
        out[lookback + k] = prev;
    }
    Ok(out)
}
