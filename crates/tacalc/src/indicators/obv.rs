//! On Balance Volume (OBV).
//!
//! ```text
//! OBV[0] = volume[0]
//! OBV[i] = OBV[i-1] + volume[i]   if price rose
//!          OBV[i-1] - volume[i]   if price fell
//!          OBV[i-1]               otherwise
//! ```

use crate::error::Result;
use crate::traits::{validate_same_len, SeriesElement};

/// Returns the OBV lookback, 0.
#[inline]
#[must_use]
pub const fn obv_lookback() -> usize {
    0
}

/// Computes On Balance Volume.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use tacalc::indicators::obv::obv;
///
/// let price = [10.0_f64, 11.0, 10.5, 10.5];
/// let volume = [100.0_f64, 50.0, 30.0, 70.0];
/// assert_eq!(obv(&price, &volume).unwrap(), vec![100.0, 150.0, 120.0, 120.0]);
/// ```
#[must_use = "this returns a Result with the OBV values, which should be used"]
pub fn obv<T: SeriesElement>(price: &[T], volume: &[T]) -> Result<Vec<T>> {
    let len = validate_same_len("OBV", &[price, volume])?;
    let mut out = Vec::with_capacity(len);
    let Some((&first_price, &first_volume)) = price.first().zip(volume.first()) else {
        return Ok(out);
    };
    let mut total = first_volume;
    let mut prev = first_price;
    out.push(total);
    for (&p, &v) in price.iter().zip(volume).skip(1) {
        if p > prev {
            total = total + v;
        } else if p < prev {
            total = total - v;
        }
        prev = p;
        out.push(total);
    }
    Ok(out)
}
