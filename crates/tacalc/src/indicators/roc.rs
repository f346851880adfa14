//! Rate of change family: ROC, ROCP, ROCR and ROCR100.
//!
//! All compare the current value with the value `period` bars earlier:
//!
//! | Indicator | Formula |
//! |---|---|
//! | ROC | `(x / prev - 1) * 100` |
//! | ROCP | `(x - prev) / prev` |
//! | ROCR | `x / prev` |
//! | ROCR100 | `x / prev * 100` |
//!
//! Each reports 0 when `prev` is zero.
//!
//! # Lookback
//!
//! `period`.

use crate::error::Result;
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback shared by the rate of change family, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn roc_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period)
}

fn rate_of_change<T, F>(data: &[T], period: usize, rate: F) -> Result<Vec<T>>
where
    T: SeriesElement,
    F: Fn(T, T) -> T,
{
    let lookback = roc_lookback(period)?;
    let mut out = real_output(data.len());
    for i in lookback..data.len() {
        let prev = data[i - period];
        out[i] = if prev == T::zero() {
            T::zero()
        } else {
            rate(data[i], prev)
        };
    }
    Ok(out)
}

/// Rate of change in percent: `(x / prev - 1) * 100`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::roc::roc;
///
/// let result = roc(&[100.0_f64, 110.0, 99.0], 1).unwrap();
/// assert!((result[1] - 10.0).abs() < 1e-12);
/// assert!((result[2] + 10.0).abs() < 1e-12);
/// ```
#[must_use = "this returns a Result with the ROC values, which should be used"]
pub fn roc<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rate_of_change(data, period, |x, prev| (x / prev - T::one()) * T::hundred())
}

/// Rate of change as a fraction: `(x - prev) / prev`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the ROCP values, which should be used"]
pub fn rocp<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rate_of_change(data, period, |x, prev| (x - prev) / prev)
}

/// Rate of change ratio: `x / prev`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the ROCR values, which should be used"]
pub fn rocr<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rate_of_change(data, period, |x, prev| x / prev)
}

/// Rate of change ratio scaled to 100: `x / prev * 100`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the ROCR100 values, which should be used"]
pub fn rocr100<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rate_of_change(data, period, |x, prev| x / prev * T::hundred())
}
