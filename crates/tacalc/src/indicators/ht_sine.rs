//! Hilbert Transform - SineWave (`HT_SINE`).
//!
//! `sine = sin(phase)` and `lead_sine = sin(phase + 45deg)`, where `phase` is
//! the dominant cycle phase of [`ht_dcphase`](super::ht_dcphase). Crossings of
//! the two lines mark cycle turning points.
//!
//! # Lookback
//!
//! 63 bars.

use crate::error::Result;
use crate::indicators::ht_core::{deg2rad, drive, DcPhase, HT_PHASE_LOOKBACK};
use crate::output::real_output;
use crate::traits::SeriesElement;

/// Sine and lead sine series.
#[derive(Debug, Clone, PartialEq)]
pub struct SineOutput<T> {
    /// Sine of the dominant cycle phase.
    pub sine: Vec<T>,
    /// Sine of the phase advanced by 45 degrees.
    pub lead_sine: Vec<T>,
}

/// Returns the `HT_SINE` lookback, 63.
#[inline]
#[must_use]
pub const fn ht_sine_lookback() -> usize {
    HT_PHASE_LOOKBACK
}

/// Computes the SineWave indicator.
///
/// # Errors
///
/// Returns `Error::NumericConversion` only if an internal constant cannot be
/// represented in `T`.
#[must_use = "this returns a Result with the sine wave, which should be used"]
pub fn ht_sine<T: SeriesElement>(data: &[T]) -> Result<SineOutput<T>> {
    let lookback = ht_sine_lookback();
    let mut sine = real_output(data.len());
    let mut lead_sine = real_output(data.len());
    if data.len() > lookback {
        let mut phase = DcPhase::new();
        let to_rad = deg2rad::<T>();
        let lead = T::lit(45.0);
        drive(data, lookback, |bar| {
            let degrees = phase.update(bar);
            if bar.today >= lookback {
                sine[bar.today] = (degrees * to_rad).sin();
                lead_sine[bar.today] = ((degrees + lead) * to_rad).sin();
            }
            Ok(())
        })?;
    }
    Ok(SineOutput { sine, lead_sine })
}
