//! Momentum (MOM).
//!
//! ```text
//! MOM[i] = x[i] - x[i - period]
//! ```
//!
//! # Lookback
//!
//! `period`.

use crate::error::Result;
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the MOM lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn mom_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period)
}

/// Computes momentum.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::mom::mom;
///
/// let result = mom(&[1.0_f64, 4.0, 9.0, 16.0], 2).unwrap();
/// assert!(result[1].is_nan());
/// assert_eq!(result[2..], [8.0, 12.0]);
/// ```
#[must_use = "this returns a Result with the momentum values, which should be used"]
pub fn mom<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = mom_lookback(period)?;
    let mut out = real_output(data.len());
    for i in lookback..data.len() {
        out[i] = data[i] - data[i - period];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mom_period_one_is_difference() {
        let result = mom(&[3.0_f64, 5.0, 4.0], 1).unwrap();
        assert!(result[0].is_nan());
        assert_eq!(result[1..], [2.0, -1.0]);
    }

    #[test]
    fn test_mom_short_input() {
        assert!(mom(&[1.0_f64; 10], 10).unwrap().iter().all(|v| v.is_nan()));
        assert!(mom::<f64>(&[], 10).unwrap().is_empty());
    }
}
