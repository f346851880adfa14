//! Hilbert Transform - Instantaneous Trendline (`HT_TRENDLINE`).
//!
//! The raw price is averaged over the current dominant cycle period and the
//! last four such averages are blended with weights 4, 3, 2, 1.
//!
//! # Lookback
//!
//! 63 bars.

use crate::error::Result;
use crate::indicators::ht_core::{drive, Trendline, HT_PHASE_LOOKBACK};
use crate::output::real_output;
use crate::traits::SeriesElement;

/// Returns the `HT_TRENDLINE` lookback, 63.
#[inline]
#[must_use]
pub const fn ht_trendline_lookback() -> usize {
    HT_PHASE_LOOKBACK
}

/// Computes the instantaneous trendline.
///
/// # Errors
///
/// Returns `Error::NumericConversion` only if an internal constant cannot be
/// represented in `T`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::ht_trendline::ht_trendline;
///
/// let data = vec![25.0_f64; 100];
/// let result = ht_trendline(&data).unwrap();
/// assert!((result[99] - 25.0).abs() < 1e-9);
/// ```
#[must_use = "this returns a Result with the trendline, which should be used"]
pub fn ht_trendline<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    let lookback = ht_trendline_lookback();
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let mut trendline = Trendline::default();
    drive(data, lookback, |bar| {
        let value = trendline.update(data, bar);
        if bar.today >= lookback {
            out[bar.today] = value;
        }
        Ok(())
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ht_trendline_constant() {
        let result = ht_trendline(&[7.5_f64; 120]).unwrap();
        assert!(result[62].is_nan());
        assert!(result[63..].iter().all(|&v| (v - 7.5).abs() < 1e-9));
    }

    #[test]
    fn test_ht_trendline_tracks_trend() {
        let data: Vec<f64> = (0..200).map(f64::from).collect();
        let result = ht_trendline(&data).unwrap();
        // an average of past prices lags but stays below the latest value
        assert!(result[199] < 199.0);
        assert!(result[199] > 150.0);
    }
}
