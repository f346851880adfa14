//! Commodity Channel Index (CCI).
//!
//! ```text
//! TP  = (high + low + close) / 3
//! CCI = (TP - SMA(TP)) / (0.015 * MeanDeviation(TP))
//! ```
//!
//! CCI is 0 when either the numerator or the mean deviation is zero.
//!
//! # Lookback
//!
//! `period - 1`.

use crate::error::Result;
use crate::output::real_output;
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Returns the CCI lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn cci_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period - 1)
}

/// Computes the Commodity Channel Index.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the CCI values, which should be used"]
pub fn cci<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    let len = validate_same_len("CCI", &[high, low, close])?;
    let lookback = cci_lookback(period)?;
    let mut out = real_output(len);
    if len <= lookback {
        return Ok(out);
    }
    let three = T::lit(3.0);
    let scale = T::lit(0.015);
    let p = T::from_usize(period)?;
    let typical: Vec<T> = (0..len).map(|i| (high[i] + low[i] + close[i]) / three).collect();
    for (k, window) in typical.windows(period).enumerate() {
        let mean = window.iter().fold(T::zero(), |acc, &x| acc + x) / p;
        let deviation = window
            .iter()
            .fold(T::zero(), |acc, &x| acc + (x - mean).abs());
        let last = window[period - 1] - mean;
        out[lookback + k] = if last != T::zero() && deviation != T::zero() {
            last / (scale * (deviation / p))
        } else {
            T::zero()
        };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cci_known_value() {
        let tp = [1.0_f64, 2.0, 3.0];
        let result = cci(&tp, &tp, &tp, 3).unwrap();
        // mean 2, mean deviation 2/3, last - mean = 1
        assert!((result[2] - 1.0 / (0.015 * 2.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_cci_flat_is_zero() {
        let flat = [4.0_f64; 6];
        let result = cci(&flat, &flat, &flat, 3).unwrap();
        assert!(result[1].is_nan());
        assert!(result[2..].iter().all(|&v| v == 0.0));
    }
}
