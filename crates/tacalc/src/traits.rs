//! Core traits and input validation for tacalc.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and
//! `f64` so every indicator can be written once. The free functions in this
//! module implement the usage-error checks shared by all indicators: period
//! bounds, real parameter ranges and aligned input lengths.
//!
//! # Example
//!
//! ```
//! use tacalc::traits::{validate_period, validate_same_len, SeriesElement};
//!
//! fn spread<T: SeriesElement>(a: &[T], b: &[T], period: usize) -> tacalc::Result<Vec<T>> {
//!     validate_period(period, 1)?;
//!     validate_same_len("SPREAD", &[a, b])?;
//!     Ok(a.iter().zip(b).map(|(&x, &y)| x - y).collect())
//! }
//!
//! assert!(spread(&[1.0_f64, 2.0], &[1.0], 1).is_err());
//! assert_eq!(spread(&[3.0_f64], &[1.0], 1).unwrap(), vec![2.0]);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// Largest period accepted by any indicator.
pub const MAX_PERIOD: usize = 100_000;

/// A trait for types that can be used as elements in a data series.
///
/// The trait requires:
/// - `Float`: Standard floating-point operations (NaN handling, infinity, arithmetic)
/// - `NumCast`: Safe conversion between numeric types
/// - `Copy` and `Default`
/// - `Send + Sync`, so series can be processed on worker threads
///
/// # Example
///
/// ```
/// use tacalc::traits::SeriesElement;
///
/// fn midpoint<T: SeriesElement>(a: T, b: T) -> T {
///     (a + b) / T::two()
/// }
///
/// assert!((midpoint(1.0_f64, 2.0) - 1.5).abs() < 1e-12);
/// ```
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// This is commonly used for converting period parameters to the series element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Converts an algorithm constant.
    ///
    /// Every `f64` literal has an `f32` counterpart (possibly rounded), so this
    /// cannot fail for the float types the trait is implemented for. NaN is
    /// returned if a custom element type rejects the value.
    #[inline]
    #[must_use]
    fn lit(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::lit(2.0)
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used by oscillators scaled to `[0, 100]` or `[-100, 100]`.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        Self::lit(100.0)
    }

    /// Returns the constant 50 as this type.
    #[inline]
    #[must_use]
    fn fifty() -> Self {
        Self::lit(50.0)
    }

    /// Converts to `f64`, returning NaN if the value cannot be represented.
    #[inline]
    #[must_use]
    fn as_f64(self) -> f64 {
        <f64 as NumCast>::from(self).unwrap_or(f64::NAN)
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Tolerance used by the reference library to treat a value as zero.
#[inline]
#[must_use]
pub fn is_zero<T: SeriesElement>(value: T) -> bool {
    let eps = T::lit(1e-8);
    -eps < value && value < eps
}

/// Returns `true` when `value` is below the reference library's zero tolerance.
#[inline]
#[must_use]
pub fn is_zero_or_neg<T: SeriesElement>(value: T) -> bool {
    value < T::lit(1e-8)
}

/// Validates that `period` lies in `min..=MAX_PERIOD`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` otherwise.
#[inline]
pub const fn validate_period(period: usize, min: usize) -> Result<()> {
    if period < min {
        let reason = match min {
            1 => "period must be at least 1",
            2 => "period must be at least 2",
            _ => "period below the indicator minimum",
        };
        Err(Error::InvalidPeriod { period, reason })
    } else if period > MAX_PERIOD {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must not exceed 100000",
        })
    } else {
        Ok(())
    }
}

/// Validates that a real parameter lies in `min..=max`.
///
/// NaN is always rejected.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` otherwise.
#[inline]
pub fn validate_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "value outside the accepted range",
        })
    }
}

/// Validates that all input series have the same length and returns it.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` naming the first series whose length
/// differs from the first one.
#[inline]
pub fn validate_same_len<T>(indicator: &'static str, series: &[&[T]]) -> Result<usize> {
    let expected = series.first().map_or(0, |s| s.len());
    for s in series.iter().skip(1) {
        if s.len() != expected {
            return Err(Error::LengthMismatch {
                indicator,
                expected,
                actual: s.len(),
            });
        }
    }
    Ok(expected)
}
