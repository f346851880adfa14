//! Hilbert Transform - Phasor Components (`HT_PHASOR`).
//!
//! Returns the in-phase (`I1`) and quadrature (`Q1`) components of the
//! detrended, smoothed price.
//!
//! # Lookback
//!
//! 32 bars.

use crate::error::Result;
use crate::indicators::ht_core::{drive, HT_LOOKBACK};
use crate::output::real_output;
use crate::traits::SeriesElement;

/// In-phase and quadrature series.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasorOutput<T> {
    /// In-phase component.
    pub in_phase: Vec<T>,
    /// Quadrature component.
    pub quadrature: Vec<T>,
}

/// Returns the `HT_PHASOR` lookback, 32.
#[inline]
#[must_use]
pub const fn ht_phasor_lookback() -> usize {
    HT_LOOKBACK
}

/// Computes the phasor components.
///
/// # Errors
///
/// Returns `Error::NumericConversion` only if an internal constant cannot be
/// represented in `T`.
#[must_use = "this returns a Result with the phasor components, which should be used"]
pub fn ht_phasor<T: SeriesElement>(data: &[T]) -> Result<PhasorOutput<T>> {
    let lookback = ht_phasor_lookback();
    let mut in_phase = real_output(data.len());
    let mut quadrature = real_output(data.len());
    if data.len() > lookback {
        drive(data, lookback, |bar| {
            if bar.today >= lookback {
                in_phase[bar.today] = bar.in_phase;
                quadrature[bar.today] = bar.quadrature;
            }
            Ok(())
        })?;
    }
    Ok(PhasorOutput {
        in_phase,
        quadrature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ht_phasor_flat_series_is_zero() {
        // the detrender removes a constant level entirely
        let out = ht_phasor(&[42.0_f64; 80]).unwrap();
        assert!(out.in_phase[31].is_nan());
        for i in 40..80 {
            assert!(out.in_phase[i].abs() < 1e-9);
            assert!(out.quadrature[i].abs() < 1e-9);
        }
    }

    #[test]
    fn test_ht_phasor_oscillates() {
        let data: Vec<f64> = (0..200).map(|i| 10.0 + (f64::from(i) * 0.35).sin()).collect();
        let out = ht_phasor(&data).unwrap();
        let tail = &out.quadrature[100..];
        assert!(tail.iter().any(|&v| v > 0.0));
        assert!(tail.iter().any(|&v| v < 0.0));
    }
}
