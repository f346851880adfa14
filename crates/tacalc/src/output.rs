//! Owned output buffers with the lookback sentinel already in place.
//!
//! Every indicator allocates its outputs through these helpers, so the
//! sentinel prefix is a post-condition of allocation rather than something
//! each algorithm fills in by hand:
//!
//! | Output type | Sentinel | Helper |
//! |---|---|---|
//! | real | quiet NaN | [`real_output`] |
//! | pattern / mode signal | `0` | [`signal_output`] |
//! | index | `-1` | [`index_output`] |
//!
//! Indicators only write positions `[lookback, len)`.

use crate::traits::SeriesElement;

/// Sentinel stored in the lookback region of index outputs.
pub const INDEX_SENTINEL: i64 = -1;

/// Allocates a real output of `len` NaN values.
#[inline]
#[must_use]
pub fn real_output<T: SeriesElement>(len: usize) -> Vec<T> {
    vec![T::nan(); len]
}

/// Allocates a signal output of `len` zeros ("no pattern").
#[inline]
#[must_use]
pub fn signal_output(len: usize) -> Vec<i32> {
    vec![0; len]
}

/// Allocates an index output of `len` entries set to [`INDEX_SENTINEL`].
#[inline]
#[must_use]
pub fn index_output(len: usize) -> Vec<i64> {
    vec![INDEX_SENTINEL; len]
}

/// Converts an absolute series position to an index output value.
#[inline]
#[must_use]
pub fn to_index(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(INDEX_SENTINEL)
}
