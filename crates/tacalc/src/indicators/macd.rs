//! Moving Average Convergence Divergence: MACD, MACDEXT and MACDFIX.
//!
//! # Formula
//!
//! ```text
//! MACD line = MA(fast) - MA(slow)
//! Signal    = MA(MACD line, signal_period)
//! Histogram = MACD line - Signal
//! ```
//!
//! [`macd`] uses EMAs throughout. [`MacdExt`] selects the average of every
//! stage. [`macdfix`] fixes the periods at 12/26 and uses the smoothing
//! factors 0.15 and 0.075.
//!
//! Both averages of the MACD line start at the same bar: the fast EMA is
//! seeded from the window ending where the slow EMA produces its first value,
//! not from the start of the series. A fast period larger than the slow one
//! is swapped.
//!
//! # Lookback
//!
//! `(slow_period - 1) + (signal_period - 1)` for the EMA variants; the sum of
//! the largest line lookback and the signal lookback for [`MacdExt`].
//!
//! # Example
//!
//! ```
//! use tacalc::indicators::macd::macd;
//!
//! let data: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i % 7)).collect();
//! let out = macd(&data, 12, 26, 9).unwrap();
//! assert!(out.macd[32].is_nan());
//! assert!(out.signal[33].is_finite());
//! ```

use crate::error::Result;
use crate::indicators::ema::{ema_k, ema_values};
use crate::indicators::ma::{ma, ma_from, ma_lookback, MaType};
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

const FIX_FAST_PERIOD: usize = 12;
const FIX_SLOW_PERIOD: usize = 26;
const FIX_FAST_K: f64 = 0.15;
const FIX_SLOW_K: f64 = 0.075;

/// Output of the MACD family.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T> {
    /// MACD line (fast average minus slow average).
    pub macd: Vec<T>,
    /// Signal line (average of the MACD line).
    pub signal: Vec<T>,
    /// Histogram (MACD line minus signal line).
    pub hist: Vec<T>,
}

impl<T: SeriesElement> MacdOutput<T> {
    fn empty(len: usize) -> Self {
        Self {
            macd: real_output(len),
            signal: real_output(len),
            hist: real_output(len),
        }
    }

    /// Fills the outputs from `lookback` on with a MACD line and its signal,
    /// both indexed so that `line[offset + j]` and `signal[offset + j]` belong
    /// to position `lookback + j`.
    fn fill(&mut self, lookback: usize, offset: usize, line: &[T], signal: &[T]) {
        for (j, pos) in (lookback..self.macd.len()).enumerate() {
            let m = line[offset + j];
            let s = signal[offset + j];
            self.macd[pos] = m;
            self.signal[pos] = s;
            self.hist[pos] = m - s;
        }
    }
}

/// MACD parameters. Defaults: 12, 26, 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    /// Fast EMA period.
    pub fast_period: usize,
    /// Slow EMA period.
    pub slow_period: usize,
    /// Signal EMA period.
    pub signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

fn ordered(fast: usize, slow: usize) -> (usize, usize) {
    if slow < fast {
        log::debug!("MACD fast period {fast} exceeds slow period {slow}, swapping");
        (slow, fast)
    } else {
        (fast, slow)
    }
}

impl Macd {
    /// Returns the MACD lookback.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a line period is outside
    /// `2..=100000` or the signal period is outside `1..=100000`.
    pub fn lookback(&self) -> Result<usize> {
        validate_period(self.fast_period, 2)?;
        validate_period(self.slow_period, 2)?;
        validate_period(self.signal_period, 1)?;
        let slow = self.fast_period.max(self.slow_period);
        Ok(slow - 1 + self.signal_period - 1)
    }

    /// Computes MACD over `data`.
    ///
    /// # Errors
    ///
    /// See [`Macd::lookback`].
    #[must_use = "this returns a Result with the MACD output, which should be used"]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<MacdOutput<T>> {
        self.lookback()?;
        let (fast, slow) = ordered(self.fast_period, self.slow_period);
        ema_macd(
            data,
            (fast, ema_k(fast)?),
            (slow, ema_k(slow)?),
            self.signal_period,
        )
    }
}

/// EMA-based MACD with explicit smoothing factors.
fn ema_macd<T: SeriesElement>(
    data: &[T],
    (fast, fast_k): (usize, T),
    (slow, slow_k): (usize, T),
    signal_period: usize,
) -> Result<MacdOutput<T>> {
    let lookback = slow - 1 + signal_period - 1;
    let mut out = MacdOutput::empty(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }

    // both EMAs produce their first value at the slow EMA's first bar
    let first = slow - 1;
    let slow_ema = ema_values(data, slow, slow_k)?;
    let fast_ema = ema_values(&data[first + 1 - fast..], fast, fast_k)?;
    let line: Vec<T> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(&f, &s)| f - s)
        .collect();
    let signal = ema_values(&line, signal_period, ema_k(signal_period)?)?;
    out.fill(lookback, 0, &line[signal_period - 1..], &signal);
    Ok(out)
}

/// Returns the MACD lookback.
///
/// # Errors
///
/// See [`Macd::lookback`].
pub fn macd_lookback(
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<usize> {
    Macd {
        fast_period,
        slow_period,
        signal_period,
    }
    .lookback()
}

/// Computes MACD with EMA averages.
///
/// # Errors
///
/// See [`Macd::lookback`].
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macd<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput<T>> {
    Macd {
        fast_period,
        slow_period,
        signal_period,
    }
    .compute(data)
}

/// MACD with a selectable average for every stage. Defaults: 12, 26, 9, all
/// SMA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacdExt {
    /// Fast line period.
    pub fast_period: usize,
    /// Fast line average.
    pub fast_ma: MaType,
    /// Slow line period.
    pub slow_period: usize,
    /// Slow line average.
    pub slow_ma: MaType,
    /// Signal period.
    pub signal_period: usize,
    /// Signal average.
    pub signal_ma: MaType,
}

impl Default for MacdExt {
    fn default() -> Self {
        Self {
            fast_period: 12,
            fast_ma: MaType::Sma,
            slow_period: 26,
            slow_ma: MaType::Sma,
            signal_period: 9,
            signal_ma: MaType::Sma,
        }
    }
}

impl MacdExt {
    /// Returns the MACDEXT lookback: the larger line lookback plus the
    /// signal lookback.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a line period is outside
    /// `2..=100000` or the signal period is outside `1..=100000`.
    pub fn lookback(&self) -> Result<usize> {
        validate_period(self.fast_period, 2)?;
        validate_period(self.slow_period, 2)?;
        let line = ma_lookback(self.fast_period, self.fast_ma)?
            .max(ma_lookback(self.slow_period, self.slow_ma)?);
        Ok(line + ma_lookback(self.signal_period, self.signal_ma)?)
    }

    /// Computes MACDEXT over `data`.
    ///
    /// # Errors
    ///
    /// See [`MacdExt::lookback`].
    #[must_use = "this returns a Result with the MACD output, which should be used"]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<MacdOutput<T>> {
        let lookback = self.lookback()?;
        let mut out = MacdOutput::empty(data.len());
        if data.len() <= lookback {
            return Ok(out);
        }

        let (fast, slow) = if self.slow_period < self.fast_period {
            log::debug!(
                "MACDEXT fast period {} exceeds slow period {}, swapping",
                self.fast_period,
                self.slow_period
            );
            (
                (self.slow_period, self.slow_ma),
                (self.fast_period, self.fast_ma),
            )
        } else {
            (
                (self.fast_period, self.fast_ma),
                (self.slow_period, self.slow_ma),
            )
        };
        let signal_lookback = ma_lookback(self.signal_period, self.signal_ma)?;
        let first = lookback - signal_lookback;

        let fast_line = ma_from(data, first, fast.0, fast.1)?;
        let slow_line = ma_from(data, first, slow.0, slow.1)?;
        let line: Vec<T> = fast_line[first..]
            .iter()
            .zip(&slow_line[first..])
            .map(|(&f, &s)| f - s)
            .collect();
        let signal = ma(&line, self.signal_period, self.signal_ma)?;
        out.fill(lookback, signal_lookback, &line, &signal);
        Ok(out)
    }
}

/// Returns the MACDEXT lookback.
///
/// # Errors
///
/// See [`MacdExt::lookback`].
pub fn macdext_lookback(params: &MacdExt) -> Result<usize> {
    params.lookback()
}

/// Computes MACDEXT.
///
/// # Errors
///
/// See [`MacdExt::lookback`].
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macdext<T: SeriesElement>(data: &[T], params: &MacdExt) -> Result<MacdOutput<T>> {
    params.compute(data)
}

/// Returns the MACDFIX lookback, `25 + signal_period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `signal_period` is outside `1..=100000`.
pub fn macdfix_lookback(signal_period: usize) -> Result<usize> {
    validate_period(signal_period, 1)?;
    Ok(FIX_SLOW_PERIOD - 1 + signal_period - 1)
}

/// Computes MACD with the fixed 12/26 periods and smoothing factors 0.15 and
/// 0.075.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `signal_period` is outside `1..=100000`.
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macdfix<T: SeriesElement>(data: &[T], signal_period: usize) -> Result<MacdOutput<T>> {
    macdfix_lookback(signal_period)?;
    ema_macd(
        data,
        (FIX_FAST_PERIOD, T::lit(FIX_FAST_K)),
        (FIX_SLOW_PERIOD, T::lit(FIX_SLOW_K)),
        signal_period,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<f64> {
        (0..120)
            .map(|i| 50.0 + (f64::from(i) * 0.3).sin() * 5.0 + f64::from(i) * 0.1)
            .collect()
    }

    #[test]
    fn test_macd_lookback_and_sentinels() {
        assert_eq!(macd_lookback(12, 26, 9).unwrap(), 33);
        let out = macd(&series(), 12, 26, 9).unwrap();
        assert!(out.macd[32].is_nan() && out.signal[32].is_nan() && out.hist[32].is_nan());
        assert!(out.macd[33].is_finite());
    }

    #[test]
    fn test_macd_hist_is_line_minus_signal() {
        let out = macd(&series(), 5, 13, 4).unwrap();
        for i in 15..120 {
            assert!((out.hist[i] - (out.macd[i] - out.signal[i])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_macd_fast_ema_seeded_at_slow_start() {
        let data = series();
        let out = macd(&data, 3, 6, 1).unwrap();
        // first value at bar 5: both EMAs are the SMAs of windows ending there
        let fast = (data[3] + data[4] + data[5]) / 3.0;
        let slow = data[..6].iter().sum::<f64>() / 6.0;
        assert!((out.macd[5] - (fast - slow)).abs() < 1e-12);
        assert!((out.signal[5] - out.macd[5]).abs() < 1e-12);
    }

    #[test]
    fn test_macd_swaps_periods() {
        let data = series();
        let swapped = macd(&data, 26, 12, 9).unwrap();
        let plain = macd(&data, 12, 26, 9).unwrap();
        assert_eq!(swapped.macd[33..], plain.macd[33..]);
        assert_eq!(swapped.hist[33..], plain.hist[33..]);
    }

    #[test]
    fn test_macdext_with_emas_matches_macd() {
        let data = series();
        let params = MacdExt {
            fast_ma: MaType::Ema,
            slow_ma: MaType::Ema,
            signal_ma: MaType::Ema,
            ..MacdExt::default()
        };
        assert_eq!(params.lookback().unwrap(), 33);
        let ext = macdext(&data, &params).unwrap();
        let plain = macd(&data, 12, 26, 9).unwrap();
        for i in 33..120 {
            assert!((ext.macd[i] - plain.macd[i]).abs() < 1e-10);
            assert!((ext.signal[i] - plain.signal[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_macdext_sma_default() {
        let data = series();
        let out = macdext(&data, &MacdExt::default()).unwrap();
        assert!(out.macd[32].is_nan());
        let fast: f64 = data[22..=33].iter().sum::<f64>() / 12.0;
        let slow: f64 = data[8..=33].iter().sum::<f64>() / 26.0;
        assert!((out.macd[33] - (fast - slow)).abs() < 1e-10);
    }

    #[test]
    fn test_macdfix() {
        assert_eq!(macdfix_lookback(9).unwrap(), 33);
        let data = series();
        let fixed = macdfix(&data, 9).unwrap();
        let plain = macd(&data, 12, 26, 9).unwrap();
        assert!(fixed.macd[33].is_finite());
        // the fixed factors differ from 2/(n+1)
        assert!((fixed.macd[60] - plain.macd[60]).abs() > 1e-9);
    }

    #[test]
    fn test_macd_invalid() {
        assert!(macd(&series(), 1, 26, 9).is_err());
        assert!(macd(&series(), 12, 26, 0).is_err());
        assert!(macdfix(&series(), 0).is_err());
    }
}
