//! Balance of Power (BOP).
//!
//! ```text
//! BOP = (close - open) / (high - low)          (0 when high <= low)
//! ```

use crate::error::Result;
use crate::traits::{is_zero_or_neg, validate_same_len, SeriesElement};

/// Returns the BOP lookback, 0.
#[inline]
#[must_use]
pub const fn bop_lookback() -> usize {
    0
}

/// Computes the Balance of Power.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use tacalc::indicators::bop::bop;
///
/// let result = bop(&[10.0_f64, 5.0], &[12.0, 5.0], &[8.0, 5.0], &[11.0, 5.0]).unwrap();
/// assert_eq!(result, vec![0.25, 0.0]);
/// ```
#[must_use = "this returns a Result with the BOP values, which should be used"]
pub fn bop<T: SeriesElement>(open: &[T], high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_same_len("BOP", &[open, high, low, close])?;
    Ok(open
        .iter()
        .zip(high)
        .zip(low)
        .zip(close)
        .map(|(((&o, &h), &l), &c)| {
            let range = h - l;
            if is_zero_or_neg(range) {
                T::zero()
            } else {
                (c - o) / range
            }
        })
        .collect())
}
