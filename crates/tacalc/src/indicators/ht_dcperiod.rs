//! Hilbert Transform - Dominant Cycle Period (`HT_DCPERIOD`).
//!
//! Outputs the smoothed dominant cycle period measured by the homodyne
//! discriminator in [`ht_core`](super::ht_core). Values lie in `[6, 50]` once
//! the filter has settled.
//!
//! # Lookback
//!
//! 32 bars.

use crate::error::Result;
use crate::indicators::ht_core::{drive, HT_LOOKBACK};
use crate::output::real_output;
use crate::traits::SeriesElement;

/// Returns the `HT_DCPERIOD` lookback, 32.
#[inline]
#[must_use]
pub const fn ht_dcperiod_lookback() -> usize {
    HT_LOOKBACK
}

/// Computes the dominant cycle period.
///
/// # Errors
///
/// Returns `Error::NumericConversion` only if an internal constant cannot be
/// represented in `T`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::ht_dcperiod::ht_dcperiod;
///
/// let data: Vec<f64> = (0..100).map(|i| (f64::from(i) * 0.3).sin() + 10.0).collect();
/// let result = ht_dcperiod(&data).unwrap();
/// assert!(result[31].is_nan());
/// assert!(!result[32].is_nan());
/// ```
#[must_use = "this returns a Result with the cycle period, which should be used"]
pub fn ht_dcperiod<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    let lookback = ht_dcperiod_lookback();
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    drive(data, lookback, |bar| {
        if bar.today >= lookback {
            out[bar.today] = bar.smooth_period;
        }
        Ok(())
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ht_dcperiod_short_input() {
        let result = ht_dcperiod(&[1.0_f64; 32]).unwrap();
        assert_eq!(result.len(), 32);
        assert!(result.iter().all(|v| v.is_nan()));
        assert!(ht_dcperiod::<f64>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_ht_dcperiod_bounded() {
        let data: Vec<f64> = (0..300)
            .map(|i| 100.0 + 4.0 * (f64::from(i) * 0.4).sin() + f64::from(i % 7))
            .collect();
        let result = ht_dcperiod(&data).unwrap();
        assert!(result[32..].iter().all(|v| v.is_finite()));
        assert!(result[120..].iter().all(|&v| (6.0..=50.0).contains(&v)));
    }
}
