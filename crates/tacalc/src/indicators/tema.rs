//! Triple Exponential Moving Average (TEMA).
//!
//! ```text
//! TEMA = 3 * EMA1 - 3 * EMA2 + EMA3
//! EMA2 = EMA(EMA1), EMA3 = EMA(EMA2)
//! ```
//!
//! # Lookback
//!
//! `3 * (period - 1)`.

use crate::error::Result;
use crate::indicators::ema::{ema_k, ema_values};
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the TEMA lookback, `3 * (period - 1)`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn tema_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(3 * (period - 1))
}

/// Computes the Triple Exponential Moving Average.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the TEMA values, which should be used"]
pub fn tema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = tema_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let k = ema_k(period)?;
    let e1 = ema_values(data, period, k)?;
    let e2 = ema_values(&e1, period, k)?;
    let e3 = ema_values(&e2, period, k)?;
    let stage = period - 1;
    let three = T::lit(3.0);
    for (j, &third) in e3.iter().enumerate() {
        let second = e2[stage + j];
        let first = e1[2 * stage + j];
        out[lookback + j] = three * first - three * second + third;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::ema::ema;

    #[test]
    fn test_tema_lookback() {
        assert_eq!(tema_lookback(30).unwrap(), 87);
        assert_eq!(tema_lookback(1).unwrap(), 0);
    }

    #[test]
    fn test_tema_matches_decomposition() {
        let data: Vec<f64> = (0..80)
            .map(|i| 50.0 + f64::from(i % 7) - f64::from(i % 3))
            .collect();
        let p = 4;
        let e1 = ema(&data, p).unwrap();
        let e2 = ema(&e1[p - 1..], p).unwrap();
        let e3 = ema(&e2[p - 1..], p).unwrap();
        let t = tema(&data, p).unwrap();
        let lb = tema_lookback(p).unwrap();
        assert!(t[lb - 1].is_nan());
        for i in lb..data.len() {
            let expected =
                3.0 * e1[i] - 3.0 * e2[i - (p - 1)] + e3[i - 2 * (p - 1)];
            assert!((t[i] - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_tema_linear_trend_has_no_lag() {
        let data: Vec<f64> = (0..40).map(f64::from).collect();
        let t = tema(&data, 5).unwrap();
        assert!((t[39] - 39.0).abs() < 1e-9);
    }
}
