//! Element-wise math transforms and operators.
//!
//! The unary transforms (ACOS ... TANH) map every element through the named
//! function; out-of-domain values follow IEEE-754 (e.g. `ln(-1)` is NaN).
//! The operators ADD, SUB, MULT and DIV combine two aligned series; DIV by
//! zero yields ±inf or NaN.
//!
//! All have lookback 0.

use num_traits::Float;

use crate::error::Result;
use crate::traits::{validate_same_len, SeriesElement};

/// Returns the lookback of every math transform and operator, 0.
#[inline]
#[must_use]
pub const fn math_lookback() -> usize {
    0
}

macro_rules! unary_transforms {
    ($($(#[$doc:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name<T: SeriesElement>(data: &[T]) -> Vec<T> {
                data.iter().map(|&v| Float::$method(v)).collect()
            }
        )*
    };
}

unary_transforms! {
    /// Arc cosine, in radians.
    acos => acos;
    /// Arc sine, in radians.
    asin => asin;
    /// Arc tangent, in radians.
    atan => atan;
    /// Smallest integer not below the value.
    ceil => ceil;
    /// Cosine.
    cos => cos;
    /// Hyperbolic cosine.
    cosh => cosh;
    /// Natural exponential.
    exp => exp;
    /// Largest integer not above the value.
    floor => floor;
    /// Natural logarithm.
    ln => ln;
    /// Base-10 logarithm.
    log10 => log10;
    /// Sine.
    sin => sin;
    /// Hyperbolic sine.
    sinh => sinh;
    /// Square root.
    sqrt => sqrt;
    /// Tangent.
    tan => tan;
    /// Hyperbolic tangent.
    tanh => tanh;
}

fn binary<T: SeriesElement>(
    name: &'static str,
    a: &[T],
    b: &[T],
    op: impl Fn(T, T) -> T,
) -> Result<Vec<T>> {
    validate_same_len(name, &[a, b])?;
    Ok(a.iter().zip(b).map(|(&x, &y)| op(x, y)).collect())
}

/// Element-wise `a + b`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use tacalc::indicators::math::add;
///
/// assert_eq!(add(&[1.0_f64, 2.0], &[0.5, 0.5]).unwrap(), vec![1.5, 2.5]);
/// ```
#[must_use = "this returns a Result with the values, which should be used"]
pub fn add<T: SeriesElement>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    binary("ADD", a, b, |x, y| x + y)
}

/// Element-wise `a - b`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
#[must_use = "this returns a Result with the values, which should be used"]
pub fn sub<T: SeriesElement>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    binary("SUB", a, b, |x, y| x - y)
}

/// Element-wise `a * b`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
#[must_use = "this returns a Result with the values, which should be used"]
pub fn mult<T: SeriesElement>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    binary("MULT", a, b, |x, y| x * y)
}

/// Element-wise `a / b`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
#[must_use = "this returns a Result with the values, which should be used"]
pub fn div<T: SeriesElement>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    binary("DIV", a, b, |x, y| x / y)
}
