//! Chaikin Accumulation/Distribution Line (AD).
//!
//! ```text
//! CLV = ((close - low) - (high - close)) / (high - low)
//! AD  = AD[-1] + CLV * volume                 (unchanged when high <= low)
//! ```
//!
//! The line starts at zero before the first bar.

use crate::error::Result;
use crate::traits::{validate_same_len, SeriesElement};

/// Returns the AD lookback, 0.
#[inline]
#[must_use]
pub const fn ad_lookback() -> usize {
    0
}

/// Money flow volume of one bar.
#[inline]
pub(crate) fn money_flow<T: SeriesElement>(high: T, low: T, close: T, volume: T) -> T {
    let range = high - low;
    if range > T::zero() {
        ((close - low) - (high - close)) / range * volume
    } else {
        T::zero()
    }
}

/// Computes the Accumulation/Distribution line.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use tacalc::indicators::ad::ad;
///
/// let high = [12.0_f64, 12.0];
/// let low = [8.0_f64, 8.0];
/// let close = [12.0_f64, 9.0];
/// let volume = [10.0_f64, 20.0];
/// // +10, then -0.5 * 20
/// assert_eq!(ad(&high, &low, &close, &volume).unwrap(), vec![10.0, 0.0]);
/// ```
#[must_use = "this returns a Result with the AD values, which should be used"]
pub fn ad<T: SeriesElement>(high: &[T], low: &[T], close: &[T], volume: &[T]) -> Result<Vec<T>> {
    let len = validate_same_len("AD", &[high, low, close, volume])?;
    let mut total = T::zero();
    Ok((0..len)
        .map(|i| {
            total = total + money_flow(high[i], low[i], close[i], volume[i]);
            total
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_zero_range_keeps_value() {
        let result = ad(&[5.0_f64, 5.0], &[5.0, 5.0], &[5.0, 5.0], &[100.0, 100.0]).unwrap();
        assert_eq!(result, vec![0.0, 0.0]);
    }
}
