//! Absolute and Percentage Price Oscillators (APO, PPO).
//!
//! # Formula
//!
//! ```text
//! APO = MA(fast) - MA(slow)
//! PPO = (MA(fast) - MA(slow)) / MA(slow) * 100     (0 when MA(slow) is 0)
//! ```
//!
//! Both averages use the same [`MaType`] and start at the slow average's
//! first bar. A fast period larger than the slow one is swapped.
//!
//! # Lookback
//!
//! The lookback of the slower average.

use crate::error::Result;
use crate::indicators::ma::{ma_from, ma_lookback, MaType};
use crate::output::real_output;
use crate::traits::{is_zero, validate_period, SeriesElement};

/// Returns the APO/PPO lookback.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if either period is outside `2..=100000`.
pub fn apo_lookback(fast_period: usize, slow_period: usize, ma_type: MaType) -> Result<usize> {
    validate_period(fast_period, 2)?;
    validate_period(slow_period, 2)?;
    ma_lookback(fast_period.max(slow_period), ma_type)
}

/// Runs both averages and combines them bar by bar.
fn price_oscillator<T, F>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    ma_type: MaType,
    combine: F,
) -> Result<Vec<T>>
where
    T: SeriesElement,
    F: Fn(T, T) -> T,
{
    let lookback = apo_lookback(fast_period, slow_period, ma_type)?;
    let (fast_period, slow_period) = if slow_period < fast_period {
        log::debug!(
            "price oscillator fast period {fast_period} exceeds slow period {slow_period}, swapping"
        );
        (slow_period, fast_period)
    } else {
        (fast_period, slow_period)
    };
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }
    let fast = ma_from(data, lookback, fast_period, ma_type)?;
    let slow = ma_from(data, lookback, slow_period, ma_type)?;
    for i in lookback..data.len() {
        out[i] = combine(fast[i], slow[i]);
    }
    Ok(out)
}

/// Computes the Absolute Price Oscillator.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if either period is outside `2..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::apo::apo;
/// use tacalc::indicators::ma::MaType;
///
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// let result = apo(&data, 2, 4, MaType::Sma).unwrap();
/// // a linear series: SMA(2) - SMA(4) = 1
/// assert_eq!(result[3], 1.0);
/// ```
#[must_use = "this returns a Result with the APO values, which should be used"]
pub fn apo<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    ma_type: MaType,
) -> Result<Vec<T>> {
    price_oscillator(data, fast_period, slow_period, ma_type, |fast, slow| {
        fast - slow
    })
}

/// Returns the PPO lookback, identical to [`apo_lookback`].
///
/// # Errors
///
/// See [`apo_lookback`].
pub fn ppo_lookback(fast_period: usize, slow_period: usize, ma_type: MaType) -> Result<usize> {
    apo_lookback(fast_period, slow_period, ma_type)
}

/// Computes the Percentage Price Oscillator.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if either period is outside `2..=100000`.
#[must_use = "this returns a Result with the PPO values, which should be used"]
pub fn ppo<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    ma_type: MaType,
) -> Result<Vec<T>> {
    price_oscillator(data, fast_period, slow_period, ma_type, |fast, slow| {
        if is_zero(slow) {
            T::zero()
        } else {
            (fast - slow) / slow * T::hundred()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::ema::ema;

    #[test]
    fn test_apo_lookback() {
        assert_eq!(apo_lookback(12, 26, MaType::Sma).unwrap(), 25);
        assert_eq!(apo_lookback(26, 12, MaType::Dema).unwrap(), 50);
        assert!(apo_lookback(1, 26, MaType::Sma).is_err());
    }

    #[test]
    fn test_ppo_values() {
        let data = [10.0_f64, 10.0, 10.0, 14.0];
        let result = ppo(&data, 2, 4, MaType::Sma).unwrap();
        // fast 12, slow 11
        assert!((result[3] - 100.0 / 11.0).abs() < 1e-12);
        let zero = ppo(&[0.0_f64; 5], 2, 4, MaType::Sma).unwrap();
        assert_eq!(zero[4], 0.0);
    }

    #[test]
    fn test_apo_ema_fast_seeded_at_slow_start() {
        let data: Vec<f64> = (0..40).map(|i| f64::from(i * 7 % 11)).collect();
        let result = apo(&data, 3, 8, MaType::Ema).unwrap();
        let slow = ema(&data, 8).unwrap();
        let fast = ema(&data[5..], 3).unwrap();
        assert!(result[6].is_nan());
        for i in 7..40 {
            assert!((result[i] - (fast[i - 5] - slow[i])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_apo_swaps_periods() {
        let data: Vec<f64> = (0..30).map(|i| f64::from(i % 4)).collect();
        let a = apo(&data, 10, 3, MaType::Wma).unwrap();
        let b = apo(&data, 3, 10, MaType::Wma).unwrap();
        assert_eq!(a[9..], b[9..]);
    }
}
