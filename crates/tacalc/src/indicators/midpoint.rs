//! MIDPOINT indicator.
//!
//! `(highest + lowest) / 2` of a single series over the last `period`
//! samples.
//!
//! # Lookback
//!
//! `period - 1`.

use crate::error::Result;
use crate::indicators::extrema::{max, min, window_lookback};
use crate::traits::SeriesElement;

/// Returns the MIDPOINT lookback, `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn midpoint_lookback(period: usize) -> Result<usize> {
    window_lookback(period)
}

/// Computes MIDPOINT.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::midpoint::midpoint;
///
/// let result = midpoint(&[1.0_f64, 5.0, 3.0], 2).unwrap();
/// assert!(result[0].is_nan());
/// assert_eq!(result[1..], [3.0, 4.0]);
/// ```
#[must_use = "this returns a Result with the MIDPOINT values, which should be used"]
pub fn midpoint<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let highest = max(data, period)?;
    let lowest = min(data, period)?;
    Ok(highest
        .into_iter()
        .zip(lowest)
        .map(|(h, l)| (h + l) / T::two())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_lookback() {
        assert_eq!(midpoint_lookback(14).unwrap(), 13);
        assert!(midpoint_lookback(0).is_err());
    }

    #[test]
    fn test_midpoint_window() {
        let data = [10.0_f64, 12.0, 8.0, 11.0, 9.0];
        let result = midpoint(&data, 3).unwrap();
        assert!(result[1].is_nan());
        assert_eq!(result[2..], [10.0, 10.0, 9.5]);
    }
}
