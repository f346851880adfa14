//! Price transforms: AVGPRICE, MEDPRICE, TYPPRICE and WCLPRICE.
//!
//! | Indicator | Formula |
//! |---|---|
//! | AVGPRICE | `(open + high + low + close) / 4` |
//! | MEDPRICE | `(high + low) / 2` |
//! | TYPPRICE | `(high + low + close) / 3` |
//! | WCLPRICE | `(high + low + 2 * close) / 4` |
//!
//! All have lookback 0.

use crate::error::Result;
use crate::traits::{validate_same_len, SeriesElement};

/// Returns the lookback of every price transform, 0.
#[inline]
#[must_use]
pub const fn price_transform_lookback() -> usize {
    0
}

/// Computes the average price.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
#[must_use = "this returns a Result with the prices, which should be used"]
pub fn avgprice<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<T>> {
    let len = validate_same_len("AVGPRICE", &[open, high, low, close])?;
    let four = T::lit(4.0);
    Ok((0..len).map(|i| (open[i] + high[i] + low[i] + close[i]) / four).collect())
}

/// Computes the median price.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use tacalc::indicators::price_transform::medprice;
///
/// assert_eq!(medprice(&[12.0_f64, 9.0], &[8.0, 7.0]).unwrap(), vec![10.0, 8.0]);
/// ```
#[must_use = "this returns a Result with the prices, which should be used"]
pub fn medprice<T: SeriesElement>(high: &[T], low: &[T]) -> Result<Vec<T>> {
    validate_same_len("MEDPRICE", &[high, low])?;
    Ok(high
        .iter()
        .zip(low)
        .map(|(&h, &l)| (h + l) / T::two())
        .collect())
}

/// Computes the typical price.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
#[must_use = "this returns a Result with the prices, which should be used"]
pub fn typprice<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    let len = validate_same_len("TYPPRICE", &[high, low, close])?;
    let three = T::lit(3.0);
    Ok((0..len).map(|i| (high[i] + low[i] + close[i]) / three).collect())
}

/// Computes the weighted close price.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
#[must_use = "this returns a Result with the prices, which should be used"]
pub fn wclprice<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    let len = validate_same_len("WCLPRICE", &[high, low, close])?;
    let four = T::lit(4.0);
    Ok((0..len)
        .map(|i| (high[i] + low[i] + close[i] * T::two()) / four)
        .collect())
}
