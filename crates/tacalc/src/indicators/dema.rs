//! Double Exponential Moving Average (DEMA).
//!
//! ```text
//! DEMA = 2 * EMA(x) - EMA(EMA(x))
//! ```
//!
//! The inner EMA runs on the outer EMA's valid values, so the lookback is the
//! sum of both stages: `2 * (period - 1)`.

use crate::error::Result;
use crate::indicators::ema::{ema_k, ema_values};
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the DEMA lookback, `2 * (period - 1)`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn dema_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(2 * (period - 1))
}

/// Computes the Double Exponential Moving Average.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::dema::dema;
///
/// let data: Vec<f64> = (1..=20).map(f64::from).collect();
/// let result = dema(&data, 5).unwrap();
/// assert_eq!(result.iter().take_while(|v| v.is_nan()).count(), 8);
/// // DEMA removes the lag of a linear trend
/// assert!((result[19] - 20.0).abs() < 1e-9);
/// ```
#[must_use = "this returns a Result with the DEMA values, which should be used"]
pub fn dema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = dema_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let k = ema_k(period)?;
    let e1 = ema_values(data, period, k)?;
    let e2 = ema_values(&e1, period, k)?;
    let stage = period - 1;
    for (j, &inner) in e2.iter().enumerate() {
        out[lookback + j] = T::two() * e1[stage + j] - inner;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::ema::ema;

    #[test]
    fn test_dema_matches_decomposition() {
        let data: Vec<f64> = (0..60)
            .map(|i| 100.0 + (f64::from(i) * 0.3).sin() * 5.0)
            .collect();
        let period = 6;
        let e1 = ema(&data, period).unwrap();
        let e2 = ema(&e1[period - 1..], period).unwrap();
        let d = dema(&data, period).unwrap();
        let lookback = dema_lookback(period).unwrap();
        for i in lookback..data.len() {
            let expected = 2.0 * e1[i] - e2[i - (period - 1)];
            assert!((d[i] - expected).abs() < 1e-10, "index {i}");
        }
    }

    #[test]
    fn test_dema_lookback() {
        assert_eq!(dema_lookback(30).unwrap(), 58);
        assert!(dema_lookback(0).is_err());
    }

    #[test]
    fn test_dema_short_input() {
        let result = dema(&[1.0_f64; 8], 5).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
        let result = dema(&[1.0_f64; 9], 5).unwrap();
        assert!((result[8] - 1.0).abs() < 1e-12);
    }
}
