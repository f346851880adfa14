//! Ultimate Oscillator (ULTOSC).
//!
//! # Formula
//!
//! ```text
//! BP  = close - min(low, prev_close)
//! TR  = true range
//! A_n = sum(BP, n) / sum(TR, n)       (0 when sum(TR, n) is 0)
//! ULTOSC = 100 * (4 * A_short + 2 * A_mid + A_long) / 7
//! ```
//!
//! The three periods are sorted, so their order in the parameters does not
//! matter.
//!
//! # Lookback
//!
//! The longest period.

use crate::error::Result;
use crate::indicators::atr::true_range;
use crate::kernels::SlidingSums;
use crate::output::real_output;
use crate::traits::{is_zero, validate_period, validate_same_len, SeriesElement};

/// Ultimate Oscillator parameters. Defaults: 7, 14, 28.
///
/// # Example
///
/// ```
/// use tacalc::indicators::ultosc::UltOsc;
///
/// let close: Vec<f64> = (0..40).map(|i| 20.0 + f64::from(i % 6)).collect();
/// let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
/// let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
/// let result = UltOsc::default().compute(&high, &low, &close).unwrap();
/// assert!(result[27].is_nan());
/// assert!((0.0..=100.0).contains(&result[28]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UltOsc {
    /// First period.
    pub period1: usize,
    /// Second period.
    pub period2: usize,
    /// Third period.
    pub period3: usize,
}

impl Default for UltOsc {
    fn default() -> Self {
        Self {
            period1: 7,
            period2: 14,
            period3: 28,
        }
    }
}

impl UltOsc {
    fn sorted(&self) -> [usize; 3] {
        let mut periods = [self.period1, self.period2, self.period3];
        periods.sort_unstable();
        periods
    }

    /// Returns the ULTOSC lookback, the longest period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a period is outside `1..=100000`.
    pub fn lookback(&self) -> Result<usize> {
        validate_period(self.period1, 1)?;
        validate_period(self.period2, 1)?;
        validate_period(self.period3, 1)?;
        Ok(self.sorted()[2])
    }

    /// Computes the Ultimate Oscillator.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the inputs differ in length, or the
    /// errors of [`UltOsc::lookback`].
    #[must_use = "this returns a Result with the oscillator values, which should be used"]
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
        let len = validate_same_len("ULTOSC", &[high, low, close])?;
        let lookback = self.lookback()?;
        let mut out = real_output(len);
        if len <= lookback {
            return Ok(out);
        }

        let terms = |day: usize| {
            let prev_close = close[day - 1];
            let true_low = if low[day] < prev_close { low[day] } else { prev_close };
            [close[day] - true_low, true_range(high[day], low[day], prev_close)]
        };
        let weights = [T::lit(4.0), T::two(), T::one()];
        let sorted = self.sorted();
        let mut sums = sorted.map(SlidingSums::<T, 2>::new);
        for (window, &period) in sums.iter_mut().zip(&sorted) {
            window.rebuild((lookback + 1 - period..lookback).map(terms));
        }

        let seven = T::lit(7.0);
        for today in lookback..len {
            let entering = terms(today);
            let mut total = T::zero();
            for ((window, &period), &weight) in sums.iter_mut().zip(&sorted).zip(&weights) {
                window.push(entering);
                let [buying, range] = window.totals();
                if !is_zero(range) {
                    total = total + weight * (buying / range);
                }
                let oldest = today + 1 - period;
                window.pop(terms(oldest), (oldest + 1..=today).map(terms));
            }
            out[today] = T::hundred() * (total / seven);
        }
        Ok(out)
    }
}

/// Returns the ULTOSC lookback.
///
/// # Errors
///
/// See [`UltOsc::lookback`].
pub fn ultosc_lookback(period1: usize, period2: usize, period3: usize) -> Result<usize> {
    UltOsc {
        period1,
        period2,
        period3,
    }
    .lookback()
}

/// Computes the Ultimate Oscillator.
///
/// # Errors
///
/// See [`UltOsc::compute`].
#[must_use = "this returns a Result with the oscillator values, which should be used"]
pub fn ultosc<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period1: usize,
    period2: usize,
    period3: usize,
) -> Result<Vec<T>> {
    UltOsc {
        period1,
        period2,
        period3,
    }
    .compute(high, low, close)
}
