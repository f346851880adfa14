//! Rolling extrema using a monotonic deque for O(n) rolling max/min.
//!
//! The deque holds indices whose values are monotonically ordered
//! (non-increasing for max, non-decreasing for min), so the front is always
//! the position of the window's extremum. Each index is pushed and popped at
//! most once, giving amortized O(1) per step instead of rescanning the window.
//!
//! # Ties
//!
//! A new value evicts every queued value it equals, so among equal extrema
//! the most recent position wins. This matches the reference library, whose
//! MAX/MIN/AROON/MINMAXINDEX scans replace the running extremum on `>=`/`<=`.
//!
//! # Example
//!
//! ```
//! use tacalc::kernels::rolling_extrema::{rolling_extrema_positions, Extremum};
//!
//! let data = [5.0_f64, 3.0, 3.0, 1.0, 4.0];
//! let max_pos = rolling_extrema_positions(&data, 2, Extremum::Max);
//! // windows end at positions 1, 2, 3, 4
//! assert_eq!(max_pos, vec![0, 2, 2, 4]);
//! ```

use std::collections::VecDeque;

use crate::traits::SeriesElement;

/// Which extremum a [`MonotonicDeque`] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Track the maximum.
    Max,
    /// Track the minimum.
    Min,
}

/// A monotonic deque of positions into a borrowed series.
#[derive(Debug, Clone)]
pub struct MonotonicDeque {
    deque: VecDeque<usize>,
    kind: Extremum,
}

impl MonotonicDeque {
    /// Creates an empty deque with room for `capacity` positions.
    #[must_use]
    pub fn new(kind: Extremum, capacity: usize) -> Self {
        Self {
            deque: VecDeque::with_capacity(capacity),
            kind,
        }
    }

    /// Pushes position `index` of `data`, evicting dominated positions.
    #[inline]
    pub fn push<T: SeriesElement>(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        while let Some(&back) = self.deque.back() {
            let dominated = match self.kind {
                Extremum::Max => value >= data[back],
                Extremum::Min => value <= data[back],
            };
            if dominated || data[back].is_nan() {
                self.deque.pop_back();
            } else {
                break;
            }
        }
        self.deque.push_back(index);
    }

    /// Drops positions strictly before `window_start`.
    #[inline]
    pub fn evict_before(&mut self, window_start: usize) {
        while let Some(&front) = self.deque.front() {
            if front < window_start {
                self.deque.pop_front();
            } else {
                break;
            }
        }
    }

    /// Position of the current extremum, if any.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Number of queued positions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }
}

/// Positions of the extremum of every full window of `window` samples.
///
/// Element `k` of the result belongs to the window ending at position
/// `k + window - 1`. Returns an empty vector when `window` is zero or longer
/// than the series.
#[must_use]
pub fn rolling_extrema_positions<T: SeriesElement>(
    data: &[T],
    window: usize,
    kind: Extremum,
) -> Vec<usize> {
    if window == 0 || data.len() < window {
        return Vec::new();
    }
    let mut deque = MonotonicDeque::new(kind, window);
    let mut positions = Vec::with_capacity(data.len() + 1 - window);
    for i in 0..data.len() {
        deque.push(i, data);
        if i + 1 >= window {
            deque.evict_before(i + 1 - window);
            // the position just pushed is always queued
            positions.push(deque.front().unwrap_or(i));
        }
    }
    positions
}
