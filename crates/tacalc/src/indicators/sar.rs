//! SAR (Parabolic Stop and Reverse) indicator.
//!
//! # Formula
//!
//! ```text
//! SAR[i+1] = SAR[i] + AF * (EP - SAR[i])
//! ```
//!
//! - `EP` is the extreme point of the current trend: highest high while long,
//!   lowest low while short.
//! - `AF` starts at `acceleration`, grows by `acceleration` on every new
//!   extreme and is capped at `maximum`.
//! - While long the SAR may never rise above the previous two lows; while
//!   short it may never fall below the previous two highs.
//! - A bar that penetrates the SAR reverses the position; the new SAR is the
//!   old extreme point.
//!
//! The initial direction is short when the second bar's `-DM` is positive,
//! long otherwise.
//!
//! # Lookback
//!
//! 1.

use crate::error::Result;
use crate::output::real_output;
use crate::traits::{validate_range, validate_same_len, SeriesElement};

/// Parabolic SAR parameters. Defaults: acceleration 0.02, maximum 0.2.
///
/// # Example
///
/// ```
/// use tacalc::indicators::sar::Sar;
///
/// let high = [10.0_f64, 11.0, 12.0, 13.0, 12.5];
/// let low = [9.0_f64, 10.0, 11.0, 12.0, 11.0];
/// let result = Sar::default().compute(&high, &low).unwrap();
/// assert!(result[0].is_nan());
/// assert_eq!(result[1], 9.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sar {
    /// Acceleration factor start and increment.
    pub acceleration: f64,
    /// Upper limit of the acceleration factor.
    pub maximum: f64,
}

impl Default for Sar {
    fn default() -> Self {
        Self {
            acceleration: 0.02,
            maximum: 0.2,
        }
    }
}

impl Sar {
    /// Returns the SAR lookback, 1.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if either factor is negative or not
    /// finite.
    pub fn lookback(&self) -> Result<usize> {
        validate_range("acceleration", self.acceleration, 0.0, 3.0e37)?;
        validate_range("maximum", self.maximum, 0.0, 3.0e37)?;
        Ok(1)
    }

    /// Computes the parabolic SAR.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if `high` and `low` differ in length,
    /// or the errors of [`Sar::lookback`].
    #[must_use = "this returns a Result with the SAR values, which should be used"]
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T]) -> Result<Vec<T>> {
        let len = validate_same_len("SAR", &[high, low])?;
        let lookback = self.lookback()?;
        let mut out = real_output(len);
        if len <= lookback {
            return Ok(out);
        }

        let mut acceleration = self.acceleration;
        if acceleration > self.maximum {
            log::debug!(
                "SAR acceleration {acceleration} exceeds maximum {}, clamping",
                self.maximum
            );
            acceleration = self.maximum;
        }
        let step = T::from_f64(acceleration)?;
        let limit = T::from_f64(self.maximum)?;
        let mut af = step;

        // -DM of the second bar decides the starting side
        let diff_plus = high[1] - high[0];
        let diff_minus = low[0] - low[1];
        let mut is_long = !(diff_minus > T::zero() && diff_plus < diff_minus);

        let (mut ep, mut sar) = if is_long {
            (high[1], low[0])
        } else {
            (low[1], high[0])
        };
        let mut new_low = low[1];
        let mut new_high = high[1];

        for today in 1..len {
            let prev_low = new_low;
            let prev_high = new_high;
            new_low = low[today];
            new_high = high[today];

            if is_long {
                if new_low <= sar {
                    is_long = false;
                    sar = ep.max(prev_high).max(new_high);
                    out[today] = sar;
                    af = step;
                    ep = new_low;
                    sar = sar + af * (ep - sar);
                    sar = sar.max(prev_high).max(new_high);
                } else {
                    out[today] = sar;
                    if new_high > ep {
                        ep = new_high;
                        af = (af + step).min(limit);
                    }
                    sar = sar + af * (ep - sar);
                    sar = sar.min(prev_low).min(new_low);
                }
            } else if new_high >= sar {
                is_long = true;
                sar = ep.min(prev_low).min(new_low);
                out[today] = sar;
                af = step;
                ep = new_high;
                sar = sar + af * (ep - sar);
                sar = sar.min(prev_low).min(new_low);
            } else {
                out[today] = sar;
                if new_low < ep {
                    ep = new_low;
                    af = (af + step).min(limit);
                }
                sar = sar + af * (ep - sar);
                sar = sar.max(prev_high).max(new_high);
            }
        }
        Ok(out)
    }
}

/// Returns the SAR lookback, 1.
///
/// # Errors
///
/// See [`Sar::lookback`].
pub fn sar_lookback(acceleration: f64, maximum: f64) -> Result<usize> {
    Sar {
        acceleration,
        maximum,
    }
    .lookback()
}

/// Computes the parabolic SAR.
///
/// # Errors
///
/// See [`Sar::compute`].
#[must_use = "this returns a Result with the SAR values, which should be used"]
pub fn sar<T: SeriesElement>(
    high: &[T],
    low: &[T],
    acceleration: f64,
    maximum: f64,
) -> Result<Vec<T>> {
    Sar {
        acceleration,
        maximum,
    }
    .compute(high, low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sar_uptrend_stays_below_lows() {
        let high: Vec<f64> = (0..30).map(|i| 11.0 + f64::from(i)).collect();
        let low: Vec<f64> = (0..30).map(|i| 10.0 + f64::from(i)).collect();
        let result = sar(&high, &low, 0.02, 0.2).unwrap();
        assert!(result[0].is_nan());
        assert_eq!(result[1], 10.0);
        for i in 1..30 {
            assert!(result[i] <= low[i]);
        }
        // the stop accelerates towards price
        assert!(result[29] - result[28] > result[3] - result[2]);
    }

    #[test]
    fn test_sar_starts_short_on_falling_lows() {
        let high = [10.0_f64, 9.5, 9.0, 8.5];
        let low = [9.0_f64, 8.0, 7.5, 7.0];
        let result = sar(&high, &low, 0.02, 0.2).unwrap();
        // short: the first stop is the prior high
        assert_eq!(result[1], 10.0);
        assert!(result[2] >= high[2]);
    }

    #[test]
    fn test_sar_reversal_to_short() {
        let high = [10.0_f64, 11.0, 12.0, 13.0, 8.0];
        let low = [9.0_f64, 10.0, 11.0, 12.0, 7.0];
        let result = sar(&high, &low, 0.02, 0.2).unwrap();
        // the collapse on the last bar flips the position to the extreme high
        assert_eq!(result[4], 13.0);
    }

    #[test]
    fn test_sar_validation() {
        assert!(sar_lookback(-0.1, 0.2).is_err());
        assert_eq!(sar_lookback(0.5, 0.2).unwrap(), 1);
        let err = sar(&[1.0_f64; 10], &[1.0; 9], 0.02, 0.2).unwrap_err();
        assert!(err.is_usage());
    }
}
