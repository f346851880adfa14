//! Rolling window extrema and sums: MAX, MIN, SUM, MINMAX, MAXINDEX,
//! MININDEX and MINMAXINDEX.
//!
//! All of them look at the last `period` samples, so the lookback is
//! `period - 1`. Extrema come from the monotonic deque in
//! [`kernels::rolling_extrema`](crate::kernels::rolling_extrema); among equal
//! extrema the most recent position wins.
//!
//! Index outputs hold absolute positions into the input series and `-1`
//! inside the lookback.
//!
//! # Example
//!
//! ```
//! use tacalc::indicators::extrema::minmaxindex;
//!
//! let out = minmaxindex(&[5.0_f64, 3.0, 3.0, 1.0, 4.0], 2).unwrap();
//! assert_eq!(out.max_idx, vec![-1, 0, 2, 2, 4]);
//! assert_eq!(out.min_idx, vec![-1, 1, 2, 3, 3]);
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_extrema_positions, Extremum};
use crate::kernels::rolling_sum::window_sums;
use crate::output::{index_output, real_output, to_index};
use crate::traits::{validate_period, SeriesElement};

/// Lowest and highest values of each window.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxOutput<T> {
    /// Window minimum.
    pub min: Vec<T>,
    /// Window maximum.
    pub max: Vec<T>,
}

/// Positions of the lowest and highest values of each window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinMaxIndexOutput {
    /// Position of the window minimum.
    pub min_idx: Vec<i64>,
    /// Position of the window maximum.
    pub max_idx: Vec<i64>,
}

/// Returns the lookback shared by every indicator in this module,
/// `period - 1`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn window_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period - 1)
}

fn extremum_values<T: SeriesElement>(data: &[T], period: usize, kind: Extremum) -> Result<Vec<T>> {
    let lookback = window_lookback(period)?;
    let mut out = real_output(data.len());
    let positions = rolling_extrema_positions(data, period, kind);
    for (k, pos) in positions.into_iter().enumerate() {
        out[lookback + k] = data[pos];
    }
    Ok(out)
}

fn extremum_positions<T: SeriesElement>(
    data: &[T],
    period: usize,
    kind: Extremum,
) -> Result<Vec<i64>> {
    let lookback = window_lookback(period)?;
    let mut out = index_output(data.len());
    let positions = rolling_extrema_positions(data, period, kind);
    for (k, pos) in positions.into_iter().enumerate() {
        out[lookback + k] = to_index(pos);
    }
    Ok(out)
}

/// Highest value over the last `period` samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the window maxima, which should be used"]
pub fn max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    extremum_values(data, period, Extremum::Max)
}

/// Lowest value over the last `period` samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the window minima, which should be used"]
pub fn min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    extremum_values(data, period, Extremum::Min)
}

/// Sum of the last `period` samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the window sums, which should be used"]
pub fn sum<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = window_lookback(period)?;
    let mut out = real_output(data.len());
    for (k, total) in window_sums(data, period).into_iter().enumerate() {
        out[lookback + k] = total;
    }
    Ok(out)
}

/// Lowest and highest values over the last `period` samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the window extrema, which should be used"]
pub fn minmax<T: SeriesElement>(data: &[T], period: usize) -> Result<MinMaxOutput<T>> {
    Ok(MinMaxOutput {
        min: min(data, period)?,
        max: max(data, period)?,
    })
}

/// Position of the highest value over the last `period` samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the maximum positions, which should be used"]
pub fn maxindex<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<i64>> {
    extremum_positions(data, period, Extremum::Max)
}

/// Position of the lowest value over the last `period` samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the minimum positions, which should be used"]
pub fn minindex<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<i64>> {
    extremum_positions(data, period, Extremum::Min)
}

/// Positions of the lowest and highest values over the last `period`
/// samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the extrema positions, which should be used"]
pub fn minmaxindex<T: SeriesElement>(data: &[T], period: usize) -> Result<MinMaxIndexOutput> {
    Ok(MinMaxIndexOutput {
        min_idx: minindex(data, period)?,
        max_idx: maxindex(data, period)?,
    })
}
