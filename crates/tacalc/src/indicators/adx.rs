//! Average Directional Movement Index (ADX) and its rating (ADXR).
//!
//! # Formula
//!
//! ```text
//! ADX[2p-1] = mean of the first p DX values
//! ADX[i]    = (ADX[i-1] * (p - 1) + DX[i]) / p
//! ADXR[i]   = (ADX[i] + ADX[i - (p - 1)]) / 2
//! ```
//!
//! Bars whose DX is undefined (zero true range or zero DI sum) do not
//! contribute to the seed and leave ADX unchanged afterwards.
//!
//! # Lookback
//!
//! ADX: `2 * period - 1`. ADXR: `3 * period - 2`.

use crate::error::Result;
use crate::indicators::dx::smoothed_directional;
use crate::output::real_output;
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Returns the ADX lookback, `2 * period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100000`.
#[inline]
pub fn adx_lookback(period: usize) -> Result<usize> {
    validate_period(period, 2)?;
    Ok(2 * period - 1)
}

fn adx_values<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    let lookback = adx_lookback(period)?;
    let mut out = real_output(high.len());
    if high.len() <= lookback {
        return Ok(out);
    }
    let p = T::from_usize(period)?;
    let p_minus_one = p - T::one();
    let states = smoothed_directional(high, low, close, period)?;
    let (seed, rest) = states.split_at(period);
    let mut adx = seed
        .iter()
        .filter_map(|state| state.dx())
        .fold(T::zero(), |acc, dx| acc + dx)
        / p;
    out[lookback] = adx;
    for (k, state) in rest.iter().enumerate() {
        if let Some(dx) = state.dx() {
            adx = (adx * p_minus_one + dx) / p;
        }
        out[lookback + 1 + k] = adx;
    }
    Ok(out)
}

/// Computes the Average Directional Movement Index.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `2..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::adx::adx;
///
/// let high: Vec<f64> = (0..40).map(|i| 10.0 + f64::from(i)).collect();
/// let low: Vec<f64> = high.iter().map(|h| h - 1.0).collect();
/// let close: Vec<f64> = high.iter().map(|h| h - 0.5).collect();
/// let result = adx(&high, &low, &close, 14).unwrap();
/// assert!(result[26].is_nan());
/// assert!((result[27] - 100.0).abs() < 1e-9);
/// ```
#[must_use = "this returns a Result with the ADX values, which should be used"]
pub fn adx<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    validate_same_len("ADX", &[high, low, close])?;
    adx_values(high, low, close, period)
}

/// Returns the ADXR lookback, `3 * period - 2`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100000`.
#[inline]
pub fn adxr_lookback(period: usize) -> Result<usize> {
    Ok(adx_lookback(period)? + period - 1)
}

/// Computes the ADX rating.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `2..=100000`.
#[must_use = "this returns a Result with the ADXR values, which should be used"]
pub fn adxr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    let len = validate_same_len("ADXR", &[high, low, close])?;
    let lookback = adxr_lookback(period)?;
    let adx = adx_values(high, low, close, period)?;
    let mut out = real_output(len);
    for i in lookback..len {
        out[i] = (adx[i] + adx[i + 1 - period]) / T::two();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::dx::dx;

    fn bars() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let close: Vec<f64> = (0..100)
            .map(|i| 40.0 + (f64::from(i) * 0.21).sin() * 6.0 + f64::from(i) * 0.05)
            .collect();
        let high = close.iter().map(|c| c + 0.8).collect();
        let low = close.iter().map(|c| c - 0.6).collect();
        (high, low, close)
    }

    #[test]
    fn test_adx_lookbacks() {
        assert_eq!(adx_lookback(14).unwrap(), 27);
        assert_eq!(adxr_lookback(14).unwrap(), 40);
        assert!(adx_lookback(1).is_err());
    }

    #[test]
    fn test_adx_seed_is_mean_of_dx() {
        let (high, low, close) = bars();
        let a = adx(&high, &low, &close, 5).unwrap();
        let d = dx(&high, &low, &close, 5).unwrap();
        let seed: f64 = d[5..10].iter().sum::<f64>() / 5.0;
        assert!(a[8].is_nan());
        assert!((a[9] - seed).abs() < 1e-10);
        let next = (seed * 4.0 + d[10]) / 5.0;
        assert!((a[10] - next).abs() < 1e-10);
    }

    #[test]
    fn test_adxr_averages_lagged_adx() {
        let (high, low, close) = bars();
        let a = adx(&high, &low, &close, 5).unwrap();
        let r = adxr(&high, &low, &close, 5).unwrap();
        assert!(r[12].is_nan());
        for i in 13..100 {
            assert!((r[i] - (a[i] + a[i - 4]) / 2.0).abs() < 1e-12);
        }
    }
}
