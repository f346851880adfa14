//! Hilbert Transform - Dominant Cycle Phase (`HT_DCPHASE`).
//!
//! The phase is the argument of the DFT of the smoothed price taken over one
//! dominant cycle, shifted by 90 degrees and compensated for the one bar lag.
//! Output lies in `(-45, 315]` degrees.
//!
//! # Lookback
//!
//! 63 bars.

use crate::error::Result;
use crate::indicators::ht_core::{drive, DcPhase, HT_PHASE_LOOKBACK};
use crate::output::real_output;
use crate::traits::SeriesElement;

/// Returns the `HT_DCPHASE` lookback, 63.
#[inline]
#[must_use]
pub const fn ht_dcphase_lookback() -> usize {
    HT_PHASE_LOOKBACK
}

/// Computes the dominant cycle phase in degrees.
///
/// # Errors
///
/// Returns `Error::NumericConversion` only if an internal constant cannot be
/// represented in `T`.
#[must_use = "this returns a Result with the cycle phase, which should be used"]
pub fn ht_dcphase<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    let lookback = ht_dcphase_lookback();
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let mut phase = DcPhase::new();
    drive(data, lookback, |bar| {
        let value = phase.update(bar);
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
    fn test_ht_dcphase_range() {
        let data: Vec<f64> = (0..300)
            .map(|i| 20.0 + 3.0 * (f64::from(i) * std::f64::consts::PI / 10.0).sin())
            .collect();
        let result = ht_dcphase(&data).unwrap();
        assert!(result[62].is_nan());
        for &v in &result[63..] {
            assert!(v > -45.0 - 1e-9 && v <= 315.0 + 1e-9, "phase {v}");
        }
    }

    #[test]
    fn test_ht_dcphase_lookback() {
        assert_eq!(ht_dcphase_lookback(), 63);
        let result = ht_dcphase(&[1.0_f64; 63]).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
