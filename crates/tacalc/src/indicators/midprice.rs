//! MIDPRICE indicator.
//!
//! `(highest high + lowest low) / 2` over the last `period` bars.
//!
//! # Lookback
//!
//! `period - 1`.

use crate::error::Result;
use crate::indicators::extrema::{max, min, window_lookback};
use crate::traits::{validate_same_len, SeriesElement};

/// Returns the MIDPRICE lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn midprice_lookback(period: usize) -> Result<usize> {
    window_lookback(period)
}

/// Computes MIDPRICE.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `high` and `low` differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the MIDPRICE values, which should be used"]
pub fn midprice<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    validate_same_len("MIDPRICE", &[high, low])?;
    let highest = max(high, period)?;
    let lowest = min(low, period)?;
    Ok(highest
        .into_iter()
        .zip(lowest)
        .map(|(h, l)| (h + l) / T::two())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_midprice_window() {
        let high = [10.0_f64, 12.0, 11.0, 13.0];
        let low = [8.0_f64, 9.0, 7.0, 10.0];
        let result = midprice(&high, &low, 2).unwrap();
        assert!(result[0].is_nan());
        assert_eq!(result[1..], [10.0, 9.5, 10.0]);
    }

    #[test]
    fn test_midprice_length_mismatch() {
        let err = midprice(&[1.0_f64; 10], &[1.0; 9], 3).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }
}
