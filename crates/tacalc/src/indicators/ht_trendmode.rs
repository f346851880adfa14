//! Hilbert Transform - Trend vs Cycle Mode (`HT_TRENDMODE`).
//!
//! Outputs `1` while the market trends and `0` while it cycles. A bar is in
//! trend mode by default and switches to cycle mode when
//!
//! - the sine and lead sine crossed less than half a cycle ago, or
//! - the phase advances at between 0.67 and 1.5 times the cycle rate,
//!
//! unless the smoothed price is at least 1.5% away from the trendline.
//!
//! # Lookback
//!
//! 63 bars.

use crate::error::Result;
use crate::indicators::ht_core::{deg2rad, drive, DcPhase, Trendline, HT_PHASE_LOOKBACK};
use crate::output::signal_output;
use crate::traits::SeriesElement;

/// Returns the `HT_TRENDMODE` lookback, 63.
#[inline]
#[must_use]
pub const fn ht_trendmode_lookback() -> usize {
    HT_PHASE_LOOKBACK
}

/// Computes the trend/cycle mode flag.
///
/// Bars inside the lookback hold `0`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` only if an internal constant cannot be
/// represented in `T`.
#[must_use = "this returns a Result with the trend mode, which should be used"]
pub fn ht_trendmode<T: SeriesElement>(data: &[T]) -> Result<Vec<i32>> {
    let lookback = ht_trendmode_lookback();
    let mut out = signal_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }

    let to_rad = deg2rad::<T>();
    let mut phase = DcPhase::new();
    let mut trendline = Trendline::default();
    let mut dc_phase = T::zero();
    let mut sine = T::zero();
    let mut lead_sine = T::zero();
    let mut days_in_trend = 0_u32;

    drive(data, lookback, |bar| {
        let prev_phase = dc_phase;
        dc_phase = phase.update(bar);
        let (prev_sine, prev_lead) = (sine, lead_sine);
        sine = (dc_phase * to_rad).sin();
        lead_sine = ((dc_phase + T::lit(45.0)) * to_rad).sin();
        let trend_value = trendline.update(data, bar);

        let mut trend = 1;
        if (sine > lead_sine && prev_sine <= prev_lead)
            || (sine < lead_sine && prev_sine >= prev_lead)
        {
            days_in_trend = 0;
            trend = 0;
        }
        days_in_trend += 1;
        if T::lit(f64::from(days_in_trend)) < T::lit(0.5) * bar.smooth_period {
            trend = 0;
        }

        let advance = dc_phase - prev_phase;
        if bar.smooth_period != T::zero() {
            let rate = T::lit(360.0) / bar.smooth_period;
            if advance > T::lit(0.67) * rate && advance < T::lit(1.5) * rate {
                trend = 0;
            }
        }
        if trend_value != T::zero()
            && ((bar.smoothed - trend_value) / trend_value).abs() >= T::lit(0.015)
        {
            trend = 1;
        }

        if bar.today >= lookback {
            out[bar.today] = trend;
        }
        Ok(())
    })?;
    Ok(out)
}
