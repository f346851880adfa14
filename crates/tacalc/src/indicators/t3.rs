//! T3 (Tillson Triple Exponential Moving Average) indicator.
//!
//! T3 cascades six EMA stages `e1..e6` (each `e(n)` smooths `e(n-1)`) and
//! combines the last four with coefficients derived from the volume factor
//! `v`:
//!
//! ```text
//! c1 = -v^3
//! c2 = 3v^2 + 3v^3
//! c3 = -6v^2 - 3v - 3v^3
//! c4 = 1 + 3v + v^3 + 3v^2
//! T3 = c1*e6 + c2*e5 + c3*e4 + c4*e3
//! ```
//!
//! Each stage is seeded with the average of its first `period` inputs, so
//! stage `n` produces its first value `period - 1` bars after stage `n-1`.
//!
//! # Lookback
//!
//! `6 * (period - 1)`.

use crate::error::Result;
use crate::indicators::ema::ema_k;
use crate::output::real_output;
use crate::traits::{validate_period, validate_range, SeriesElement};

const STAGES: usize = 6;

/// T3 parameters.
///
/// # Example
///
/// ```
/// use tacalc::indicators::t3::T3;
///
/// let data: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i % 9)).collect();
/// let t3 = T3::default().period(3);
/// let result = t3.compute(&data).unwrap();
/// assert_eq!(result.iter().take_while(|v| v.is_nan()).count(), t3.lookback().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct T3 {
    period: usize,
    vfactor: f64,
}

impl Default for T3 {
    fn default() -> Self {
        Self {
            period: 5,
            vfactor: 0.7,
        }
    }
}

impl T3 {
    /// Sets the stage period.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the volume factor, `0.0..=1.0`.
    #[must_use]
    pub const fn vfactor(mut self, vfactor: f64) -> Self {
        self.vfactor = vfactor;
        self
    }

    /// Returns the lookback for these parameters.
    ///
    /// # Errors
    ///
    /// See [`t3_lookback`].
    pub fn lookback(&self) -> Result<usize> {
        t3_lookback(self.period, self.vfactor)
    }

    /// Computes T3 over `data`.
    ///
    /// # Errors
    ///
    /// See [`t3`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        t3(data, self.period, self.vfactor)
    }
}

/// Returns the T3 lookback, `6 * (period - 1)`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`, or
/// `Error::InvalidParameter` if `vfactor` is outside `0.0..=1.0`.
#[inline]
pub fn t3_lookback(period: usize, vfactor: f64) -> Result<usize> {
    validate_period(period, 1)?;
    validate_range("vfactor", vfactor, 0.0, 1.0)?;
    Ok(STAGES * (period - 1))
}

/// Computes the T3 moving average.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` or `Error::InvalidParameter` for
/// parameters outside their ranges.
#[must_use = "this returns a Result with the T3 values, which should be used"]
pub fn t3<T: SeriesElement>(data: &[T], period: usize, vfactor: f64) -> Result<Vec<T>> {
    let lookback = t3_lookback(period, vfactor)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }

    let k = ema_k::<T>(period)?;
    let one_minus_k = T::one() - k;
    let p = T::from_usize(period)?;
    let mut e = [T::zero(); STAGES];
    let mut today = 0;

    // Stage n is seeded by averaging its first `period` inputs while the
    // already seeded stages below it keep running.
    for stage in 0..STAGES {
        let mut total = T::zero();
        let count = if stage == 0 { period } else { period - 1 };
        if stage > 0 {
            total = e[stage - 1];
        }
        for _ in 0..count {
            let mut input = data[today];
            today += 1;
            for lower in e.iter_mut().take(stage) {
                *lower = k * input + one_minus_k * *lower;
                input = *lower;
            }
            total = total + input;
        }
        e[stage] = total / p;
    }

    let v = T::from_f64(vfactor)?;
    let v2 = v * v;
    let c1 = -v2 * v;
    let three = T::lit(3.0);
    let c2 = three * (v2 - c1);
    let c3 = -T::lit(6.0) * v2 - three * (v - c1);
    let c4 = T::one() + three * v - c1 + three * v2;
    let combine = |e: &[T; STAGES]| c1 * e[5] + c2 * e[4] + c3 * e[3] + c4 * e[2];

    out[lookback] = combine(&e);
    for (i, &x) in data.iter().enumerate().skip(lookback + 1) {
        let mut input = x;
        for stage in &mut e {
            *stage = k * input + one_minus_k * *stage;
            input = *stage;
        }
        out[i] = combine(&e);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t3_lookback() {
        assert_eq!(t3_lookback(5, 0.7).unwrap(), 24);
        assert!(t3_lookback(5, 1.5).is_err());
        assert!(t3_lookback(0, 0.7).is_err());
    }

    #[test]
    fn test_t3_constant_series() {
        let result = t3(&[3.0_f64; 40], 5, 0.7).unwrap();
        assert!(result[23].is_nan());
        for &v in &result[24..] {
            assert!((v - 3.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_t3_coefficients_sum_to_one() {
        // c1 + c2 + c3 + c4 == 1 for any v, so a flat series is preserved;
        // check with an unusual factor.
        let result = t3(&[-2.5_f64; 30], 3, 0.15).unwrap();
        assert!(result[12..].iter().all(|&v| (v + 2.5).abs() < 1e-10));
    }

    #[test]
    fn test_t3_zero_vfactor_is_triple_ema() {
        // v = 0 leaves c4 = 1: T3 reduces to the third cascaded stage.
        let data: Vec<f64> = (0..50).map(|i| f64::from(i % 5) * 2.0).collect();
        let result = t3(&data, 3, 0.0).unwrap();
        let k = 0.5;
        let mut e = [0.0_f64; 6];
        let mut idx = 0;
        for stage in 0..6 {
            let count = if stage == 0 { 3 } else { 2 };
            let mut total = if stage == 0 { 0.0 } else { e[stage - 1] };
            for _ in 0..count {
                let mut input = data[idx];
                idx += 1;
                for lower in e.iter_mut().take(stage) {
                    *lower = k * input + (1.0 - k) * *lower;
                    input = *lower;
                }
                total += input;
            }
            e[stage] = total / 3.0;
        }
        assert!((result[12] - e[2]).abs() < 1e-12);
    }

    #[test]
    fn test_t3_builder() {
        let t3 = T3::default().period(4).vfactor(0.5);
        assert_eq!(t3.lookback().unwrap(), 18);
        assert_eq!(
            T3::default(),
            T3 {
                period: 5,
                vfactor: 0.7,
            }
        );
    }
}
