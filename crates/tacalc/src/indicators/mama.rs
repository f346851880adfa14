//! MAMA (MESA Adaptive Moving Average) indicator.
//!
//! MAMA adapts its smoothing factor to the rate of change of the Hilbert
//! phase. FAMA (Following Adaptive Moving Average) applies half that factor
//! to MAMA itself.
//!
//! # Formula
//!
//! ```text
//! phase = atan(Q1 / I1)                        (0 when I1 is 0)
//! delta = max(prev_phase - phase, 1)
//! alpha = max(fast_limit / delta, slow_limit)  (fast_limit when delta == 1)
//! MAMA  = alpha * price + (1 - alpha) * MAMA[-1]
//! FAMA  = alpha/2 * MAMA + (1 - alpha/2) * FAMA[-1]
//! ```
//!
//! Both averages start from zero when the engine starts, 20 bars before the
//! first output.
//!
//! # Lookback
//!
//! 32 bars.

use crate::error::Result;
use crate::indicators::ht_core::{drive, rad2deg, HT_LOOKBACK};
use crate::output::real_output;
use crate::traits::{validate_range, SeriesElement};

/// Output structure for the MAMA indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct MamaOutput<T> {
    /// MESA Adaptive Moving Average.
    pub mama: Vec<T>,
    /// Following Adaptive Moving Average.
    pub fama: Vec<T>,
}

/// MAMA parameters.
///
/// # Example
///
/// ```
/// use tacalc::indicators::mama::Mama;
///
/// let data: Vec<f64> = (0..80).map(|i| 10.0 + f64::from(i % 6)).collect();
/// let out = Mama::default().fast_limit(0.6).compute(&data).unwrap();
/// assert!(out.mama[31].is_nan());
/// assert!(out.fama[32].is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mama {
    fast_limit: f64,
    slow_limit: f64,
}

impl Default for Mama {
    fn default() -> Self {
        Self {
            fast_limit: 0.5,
            slow_limit: 0.05,
        }
    }
}

impl Mama {
    /// Sets the upper alpha limit, `0.01..=0.99`.
    #[must_use]
    pub const fn fast_limit(mut self, value: f64) -> Self {
        self.fast_limit = value;
        self
    }

    /// Sets the lower alpha limit, `0.01..=0.99`.
    #[must_use]
    pub const fn slow_limit(mut self, value: f64) -> Self {
        self.slow_limit = value;
        self
    }

    /// Computes MAMA and FAMA over `data`.
    ///
    /// # Errors
    ///
    /// See [`mama`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<MamaOutput<T>> {
        mama(data, self.fast_limit, self.slow_limit)
    }
}

/// Returns the MAMA lookback, 32.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if either limit is outside `0.01..=0.99`.
#[inline]
pub fn mama_lookback(fast_limit: f64, slow_limit: f64) -> Result<usize> {
    validate_range("fast_limit", fast_limit, 0.01, 0.99)?;
    validate_range("slow_limit", slow_limit, 0.01, 0.99)?;
    Ok(HT_LOOKBACK)
}

/// Computes the MESA Adaptive Moving Average.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if either limit is outside
/// `0.01..=0.99`.
#[must_use = "this returns a Result with the MAMA output, which should be used"]
pub fn mama<T: SeriesElement>(
    data: &[T],
    fast_limit: f64,
    slow_limit: f64,
) -> Result<MamaOutput<T>> {
    let lookback = mama_lookback(fast_limit, slow_limit)?;
    let mut mama_out = real_output(data.len());
    let mut fama_out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(MamaOutput {
            mama: mama_out,
            fama: fama_out,
        });
    }

    let fast = T::from_f64(fast_limit)?;
    let slow = T::from_f64(slow_limit)?;
    let half = T::lit(0.5);
    let to_deg = rad2deg::<T>();
    let mut prev_phase = T::zero();
    let mut mama = T::zero();
    let mut fama = T::zero();

    drive(data, lookback, |bar| {
        let phase = if bar.in_phase == T::zero() {
            T::zero()
        } else {
            (bar.quadrature / bar.in_phase).atan() * to_deg
        };
        let mut delta = prev_phase - phase;
        prev_phase = phase;
        if delta < T::one() {
            delta = T::one();
        }
        let alpha = if delta > T::one() {
            (fast / delta).max(slow)
        } else {
            fast
        };

        mama = alpha * bar.price + (T::one() - alpha) * mama;
        let follow = alpha * half;
        fama = follow * mama + (T::one() - follow) * fama;
        if bar.today >= lookback {
            mama_out[bar.today] = mama;
            fama_out[bar.today] = fama;
        }
        Ok(())
    })?;

    Ok(MamaOutput {
        mama: mama_out,
        fama: fama_out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mama_lookback_validation() {
        assert_eq!(mama_lookback(0.5, 0.05).unwrap(), 32);
        assert!(mama_lookback(1.0, 0.05).is_err());
        assert!(mama_lookback(0.5, 0.0).is_err());
    }

    #[test]
    fn test_mama_constant_series_converges() {
        let out = mama(&[20.0_f64; 120], 0.5, 0.05).unwrap();
        assert!(out.mama[31].is_nan() && out.fama[31].is_nan());
        assert!((out.mama[119] - 20.0).abs() < 1e-6);
        assert!((out.fama[119] - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_mama_short_input() {
        let out = mama(&[1.0_f64; 32], 0.5, 0.05).unwrap();
        assert!(out.mama.iter().all(|v| v.is_nan()));
        let empty = mama::<f64>(&[], 0.5, 0.05).unwrap();
        assert!(empty.mama.is_empty() && empty.fama.is_empty());
    }

    #[test]
    fn test_mama_builder_matches_function() {
        let data: Vec<f64> = (0..90).map(|i| 30.0 + (f64::from(i) * 0.2).cos()).collect();
        let a = Mama::default().slow_limit(0.1).compute(&data).unwrap();
        let b = mama(&data, 0.5, 0.1).unwrap();
        assert_eq!(a.mama[40..], b.mama[40..]);
    }
}
