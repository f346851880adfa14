//! Chaikin A/D Oscillator (ADOSC).
//!
//! ```text
//! ADOSC = EMA(AD, fast) - EMA(AD, slow)
//! ```
//!
//! Both EMAs start from the first AD value instead of an SMA seed, and their
//! periods are not reordered.
//!
//! # Lookback
//!
//! `max(fast, slow) - 1`.

use crate::error::Result;
use crate::indicators::ad::money_flow;
use crate::indicators::ema::ema_k;
use crate::output::real_output;
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Chaikin oscillator parameters. Defaults: 3, 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdOsc {
    /// Fast EMA period.
    pub fast_period: usize,
    /// Slow EMA period.
    pub slow_period: usize,
}

impl Default for AdOsc {
    fn default() -> Self {
        Self {
            fast_period: 3,
            slow_period: 10,
        }
    }
}

impl AdOsc {
    /// Returns the ADOSC lookback, `max(fast, slow) - 1`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a period is outside `2..=100000`.
    pub fn lookback(&self) -> Result<usize> {
        validate_period(self.fast_period, 2)?;
        validate_period(self.slow_period, 2)?;
        Ok(self.fast_period.max(self.slow_period) - 1)
    }

    /// Computes the Chaikin oscillator.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the inputs differ in length, or
    /// the errors of [`AdOsc::lookback`].
    #[must_use = "this returns a Result with the ADOSC values, which should be used"]
    pub fn compute<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        close: &[T],
        volume: &[T],
    ) -> Result<Vec<T>> {
        let len = validate_same_len("ADOSC", &[high, low, close, volume])?;
        let lookback = self.lookback()?;
        let mut out = real_output(len);
        if len <= lookback {
            return Ok(out);
        }
        let fast_k = ema_k::<T>(self.fast_period)?;
        let slow_k = ema_k::<T>(self.slow_period)?;

        let mut ad = money_flow(high[0], low[0], close[0], volume[0]);
        let mut fast = ad;
        let mut slow = ad;
        for i in 1..len {
            ad = ad + money_flow(high[i], low[i], close[i], volume[i]);
            fast = fast_k * ad + (T::one() - fast_k) * fast;
            slow = slow_k * ad + (T::one() - slow_k) * slow;
            if i >= lookback {
                out[i] = fast - slow;
            }
        }
        Ok(out)
    }
}

/// Returns the ADOSC lookback.
///
/// # Errors
///
/// See [`AdOsc::lookback`].
pub fn adosc_lookback(fast_period: usize, slow_period: usize) -> Result<usize> {
    AdOsc {
        fast_period,
        slow_period,
    }
    .lookback()
}

/// Computes the Chaikin A/D Oscillator.
///
/// # Errors
///
/// See [`AdOsc::compute`].
///
/// # Example
///
/// ```
/// use tacalc::indicators::adosc::adosc;
///
/// let high = [10.0_f64; 12];
/// let low = [8.0_f64; 12];
/// let close = [9.5_f64; 12];
/// let volume = [1000.0_f64; 12];
/// let result = adosc(&high, &low, &close, &volume, 3, 10).unwrap();
/// assert!(result[8].is_nan());
/// // a steadily rising AD line keeps the fast EMA above the slow one
/// assert!(result[9] > 0.0);
/// ```
#[must_use = "this returns a Result with the ADOSC values, which should be used"]
pub fn adosc<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    fast_period: usize,
    slow_period: usize,
) -> Result<Vec<T>> {
    AdOsc {
        fast_period,
        slow_period,
    }
    .compute(high, low, close, volume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::ad::ad;

    #[test]
    fn test_adosc_matches_manual_emas() {
        let high = [11.0_f64, 12.0, 12.5, 12.0, 13.0, 12.0];
        let low = [9.0_f64, 10.0, 11.0, 10.5, 11.0, 10.0];
        let close = [10.5_f64, 10.2, 12.0, 11.0, 12.5, 10.4];
        let volume = [100.0_f64, 120.0, 80.0, 150.0, 90.0, 110.0];
        let line = ad(&high, &low, &close, &volume).unwrap();
        let (fk, sk) = (0.5, 2.0 / 5.0);
        let (mut fast, mut slow) = (line[0], line[0]);
        for i in 1..6 {
            fast = fk * line[i] + (1.0 - fk) * fast;
            slow = sk * line[i] + (1.0 - sk) * slow;
        }
        let result = adosc(&high, &low, &close, &volume, 3, 4).unwrap();
        assert!(result[2].is_nan());
        assert!((result[5] - (fast - slow)).abs() < 1e-9);
    }

    #[test]
    fn test_adosc_validation() {
        assert_eq!(adosc_lookback(10, 3).unwrap(), 9);
        assert!(adosc_lookback(1, 10).is_err());
    }
}
