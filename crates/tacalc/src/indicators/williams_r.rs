//! Williams %R.
//!
//! ```text
//! %R = -100 * (HH - close) / (HH - LL)          (0 when HH == LL)
//! ```
//!
//! over the last `period` bars.
//!
//! # Lookback
//!
//! `period - 1`.

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_extrema_positions, Extremum};
use crate::output::real_output;
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Returns the WILLR lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn willr_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period - 1)
}

/// Computes Williams %R, ranging from -100 (close at the low) to 0 (close at
/// the high).
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::williams_r::willr;
///
/// let high = [10.0_f64, 12.0, 11.0];
/// let low = [8.0_f64, 9.0, 10.0];
/// let close = [9.0_f64, 11.0, 10.0];
/// let result = willr(&high, &low, &close, 2).unwrap();
/// assert!(result[0].is_nan());
/// assert!((result[1] + 25.0).abs() < 1e-12);
/// ```
#[must_use = "this returns a Result with the %R values, which should be used"]
pub fn willr<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    let len = validate_same_len("WILLR", &[high, low, close])?;
    let lookback = willr_lookback(period)?;
    let mut out = real_output(len);
    let highest = rolling_extrema_positions(high, period, Extremum::Max);
    let lowest = rolling_extrema_positions(low, period, Extremum::Min);
    for (k, (&hi, &lo)) in highest.iter().zip(&lowest).enumerate() {
        let today = lookback + k;
        let range = high[hi] - low[lo];
        out[today] = if range == T::zero() {
            T::zero()
        } else {
            -T::hundred() * (high[hi] - close[today]) / range
        };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_willr_extremes() {
        let high = [5.0_f64, 6.0, 7.0];
        let low = [4.0_f64, 5.0, 6.0];
        let at_high = willr(&high, &low, &[4.5, 5.5, 7.0], 3).unwrap();
        assert_eq!(at_high[2], 0.0);
        let at_low = willr(&high, &low, &[4.5, 5.5, 4.0], 3).unwrap();
        assert_eq!(at_low[2], -100.0);
    }

    #[test]
    fn test_willr_flat_range() {
        let flat = [3.0_f64; 5];
        let result = willr(&flat, &flat, &flat, 2).unwrap();
        assert!(result[1..].iter().all(|&v| v == 0.0));
    }
}
