//! Stochastic oscillators: STOCH (slow) and STOCHF (fast).
//!
//! # Formula
//!
//! ```text
//! raw %K  = 100 * (close - LL(fast_k)) / (HH(fast_k) - LL(fast_k))   (0 when HH == LL)
//! STOCHF  : fast %K = raw %K,            fast %D = MA(fast %K, fast_d)
//! STOCH   : slow %K = MA(raw %K, slow_k), slow %D = MA(slow %K, slow_d)
//! ```
//!
//! `HH`/`LL` are the highest high and lowest low of the last `fast_k` bars.
//!
//! # Lookback
//!
//! `fast_k - 1` plus the lookbacks of the smoothing averages. Both outputs
//! start at the same bar.

use crate::error::Result;
use crate::indicators::ma::{ma, ma_lookback, MaType};
use crate::kernels::rolling_extrema::{rolling_extrema_positions, Extremum};
use crate::output::real_output;
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Output of the stochastic oscillators.
#[derive(Debug, Clone, PartialEq)]
pub struct StochOutput<T> {
    /// %K line.
    pub k: Vec<T>,
    /// %D line.
    pub d: Vec<T>,
}

/// Raw %K for every full window of `period` bars. Element `j` belongs to
/// position `period - 1 + j`.
pub(crate) fn raw_fast_k<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Vec<T> {
    let highest = rolling_extrema_positions(high, period, Extremum::Max);
    let lowest = rolling_extrema_positions(low, period, Extremum::Min);
    highest
        .iter()
        .zip(&lowest)
        .enumerate()
        .map(|(j, (&hi, &lo))| {
            let (hh, ll) = (high[hi], low[lo]);
            let range = hh - ll;
            if range == T::zero() {
                T::zero()
            } else {
                (close[period - 1 + j] - ll) / range * T::hundred()
            }
        })
        .collect()
}

/// Smooths `values` twice and writes both stages from `lookback` on.
///
/// `values[0]` belongs to position `lookback - first_lb - second_lb`.
fn smooth_twice<T: SeriesElement>(
    len: usize,
    lookback: usize,
    values: &[T],
    first: (usize, MaType),
    second: (usize, MaType),
) -> Result<StochOutput<T>> {
    let mut k_out = real_output(len);
    let mut d_out = real_output(len);
    if len <= lookback {
        return Ok(StochOutput { k: k_out, d: d_out });
    }
    let first_lb = ma_lookback(first.0, first.1)?;
    let second_lb = ma_lookback(second.0, second.1)?;
    let k = ma(values, first.0, first.1)?;
    let d = ma(&k[first_lb..], second.0, second.1)?;
    for (j, pos) in (lookback..len).enumerate() {
        k_out[pos] = k[first_lb + second_lb + j];
        d_out[pos] = d[second_lb + j];
    }
    Ok(StochOutput { k: k_out, d: d_out })
}

/// Slow stochastic parameters. Defaults: 5, 3 SMA, 3 SMA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stoch {
    /// Raw %K window.
    pub fast_k_period: usize,
    /// Period of the %K smoothing.
    pub slow_k_period: usize,
    /// Average used for %K smoothing.
    pub slow_k_ma: MaType,
    /// Period of the %D smoothing.
    pub slow_d_period: usize,
    /// Average used for %D smoothing.
    pub slow_d_ma: MaType,
}

impl Default for Stoch {
    fn default() -> Self {
        Self {
            fast_k_period: 5,
            slow_k_period: 3,
            slow_k_ma: MaType::Sma,
            slow_d_period: 3,
            slow_d_ma: MaType::Sma,
        }
    }
}

impl Stoch {
    /// Returns the STOCH lookback.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a period is outside `1..=100000`.
    pub fn lookback(&self) -> Result<usize> {
        validate_period(self.fast_k_period, 1)?;
        Ok(self.fast_k_period - 1
            + ma_lookback(self.slow_k_period, self.slow_k_ma)?
            + ma_lookback(self.slow_d_period, self.slow_d_ma)?)
    }

    /// Computes slow %K and slow %D.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the inputs differ in length, or
    /// the errors of [`Stoch::lookback`].
    #[must_use = "this returns a Result with the stochastic output, which should be used"]
    pub fn compute<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        close: &[T],
    ) -> Result<StochOutput<T>> {
        let len = validate_same_len("STOCH", &[high, low, close])?;
        let lookback = self.lookback()?;
        let raw = if len > lookback {
            raw_fast_k(high, low, close, self.fast_k_period)
        } else {
            Vec::new()
        };
        smooth_twice(
            len,
            lookback,
            &raw,
            (self.slow_k_period, self.slow_k_ma),
            (self.slow_d_period, self.slow_d_ma),
        )
    }
}

/// Returns the STOCH lookback.
///
/// # Errors
///
/// See [`Stoch::lookback`].
pub fn stoch_lookback(params: &Stoch) -> Result<usize> {
    params.lookback()
}

/// Computes the slow stochastic.
///
/// # Errors
///
/// See [`Stoch::compute`].
///
/// # Example
///
/// ```
/// use tacalc::indicators::stochastic::{stoch, Stoch};
///
/// let high: Vec<f64> = (0..20).map(|i| 11.0 + f64::from(i)).collect();
/// let low: Vec<f64> = (0..20).map(|i| 9.0 + f64::from(i)).collect();
/// let close: Vec<f64> = (0..20).map(|i| 10.5 + f64::from(i)).collect();
/// let out = stoch(&high, &low, &close, &Stoch::default()).unwrap();
/// assert!(out.k[7].is_nan());
/// assert!(out.k[8].is_finite() && out.d[8].is_finite());
/// ```
#[must_use = "this returns a Result with the stochastic output, which should be used"]
pub fn stoch<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    params: &Stoch,
) -> Result<StochOutput<T>> {
    params.compute(high, low, close)
}

/// Fast stochastic parameters. Defaults: 5, 3 SMA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StochF {
    /// Raw %K window.
    pub fast_k_period: usize,
    /// Period of the %D smoothing.
    pub fast_d_period: usize,
    /// Average used for %D smoothing.
    pub fast_d_ma: MaType,
}

impl Default for StochF {
    fn default() -> Self {
        Self {
            fast_k_period: 5,
            fast_d_period: 3,
            fast_d_ma: MaType::Sma,
        }
    }
}

impl StochF {
    /// Returns the STOCHF lookback.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a period is outside `1..=100000`.
    pub fn lookback(&self) -> Result<usize> {
        validate_period(self.fast_k_period, 1)?;
        Ok(self.fast_k_period - 1 + ma_lookback(self.fast_d_period, self.fast_d_ma)?)
    }

    /// Computes fast %K and fast %D.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the inputs differ in length, or
    /// the errors of [`StochF::lookback`].
    #[must_use = "this returns a Result with the stochastic output, which should be used"]
    pub fn compute<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        close: &[T],
    ) -> Result<StochOutput<T>> {
        let len = validate_same_len("STOCHF", &[high, low, close])?;
        let lookback = self.lookback()?;
        let raw = if len > lookback {
            raw_fast_k(high, low, close, self.fast_k_period)
        } else {
            Vec::new()
        };
        smooth_twice(
            len,
            lookback,
            &raw,
            (1, MaType::Sma),
            (self.fast_d_period, self.fast_d_ma),
        )
    }
}

/// Returns the STOCHF lookback.
///
/// # Errors
///
/// See [`StochF::lookback`].
pub fn stochf_lookback(params: &StochF) -> Result<usize> {
    params.lookback()
}

/// Computes the fast stochastic.
///
/// # Errors
///
/// See [`StochF::compute`].
#[must_use = "this returns a Result with the stochastic output, which should be used"]
pub fn stochf<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    params: &StochF,
) -> Result<StochOutput<T>> {
    params.compute(high, low, close)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let close: Vec<f64> = (0..50).map(|i| 20.0 + (f64::from(i) * 0.4).sin() * 3.0).collect();
        let high = close.iter().map(|c| c + 1.0).collect();
        let low = close.iter().map(|c| c - 1.0).collect();
        (high, low, close)
    }

    #[test]
    fn test_raw_fast_k() {
        let high = [10.0_f64, 12.0, 11.0];
        let low = [8.0_f64, 9.0, 10.0];
        let close = [9.0_f64, 11.0, 10.0];
        let raw = raw_fast_k(&high, &low, &close, 2);
        // windows [0,1] and [1,2]
        assert!((raw[0] - 100.0 * 3.0 / 4.0).abs() < 1e-12);
        assert!((raw[1] - 100.0 / 3.0).abs() < 1e-12);
        let flat = raw_fast_k(&[1.0_f64; 3], &[1.0; 3], &[1.0; 3], 2);
        assert_eq!(flat, vec![0.0, 0.0]);
    }

    #[test]
    fn test_stoch_lookback() {
        assert_eq!(Stoch::default().lookback().unwrap(), 8);
        assert_eq!(StochF::default().lookback().unwrap(), 6);
        let ema_d = StochF {
            fast_d_ma: MaType::Ema,
            ..StochF::default()
        };
        assert_eq!(stochf_lookback(&ema_d).unwrap(), 6);
    }

    #[test]
    fn test_stochf_k_is_raw() {
        let (high, low, close) = bars();
        let out = stochf(&high, &low, &close, &StochF::default()).unwrap();
        let raw = raw_fast_k(&high, &low, &close, 5);
        assert!(out.k[5].is_nan());
        for i in 6..50 {
            assert!((out.k[i] - raw[i - 4]).abs() < 1e-12);
            let d = (raw[i - 4] + raw[i - 5] + raw[i - 6]) / 3.0;
            assert!((out.d[i] - d).abs() < 1e-10);
        }
    }

    #[test]
    fn test_stoch_slow_k_is_fast_d() {
        let (high, low, close) = bars();
        let slow = stoch(&high, &low, &close, &Stoch::default()).unwrap();
        let fast = stochf(&high, &low, &close, &StochF::default()).unwrap();
        for i in 8..50 {
            assert!((slow.k[i] - fast.d[i]).abs() < 1e-10);
            assert!((0.0..=100.0).contains(&slow.d[i]));
        }
    }

    #[test]
    fn test_stoch_short_and_mismatched() {
        let out = stoch(&[1.0_f64; 8], &[1.0; 8], &[1.0; 8], &Stoch::default()).unwrap();
        assert!(out.k.iter().chain(&out.d).all(|v| v.is_nan()));
        assert!(stoch(&[1.0_f64; 8], &[1.0; 7], &[1.0; 8], &Stoch::default()).is_err());
    }
}
