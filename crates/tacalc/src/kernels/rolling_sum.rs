//! Incremental window sums.
//!
//! Each step adds the entering sample and subtracts the leaving one, so a
//! full pass is O(n) regardless of the window length. The same recurrence
//! drives SMA, SUM, VAR/STDDEV, the Bollinger deviation, CORREL, BETA, MFI
//! and the Ultimate Oscillator.
//!
//! Subtracting a sample only cancels the rounding of its own addition while
//! the running total stays of the same magnitude. After a spike leaves the
//! window, the residue of the spike would otherwise outlive it, so
//! [`SlidingSums`] rebuilds its totals from the samples still in the window
//! whenever the leaving term outweighs all of them, and once every `period`
//! slides to keep drift bounded on long series.
//!
//! # Example
//!
//! ```
//! use tacalc::kernels::rolling_sum::window_sums;
//!
//! let sums = window_sums(&[1.0_f64, 2.0, 3.0, 4.0], 2);
//! assert_eq!(sums, vec![3.0, 5.0, 7.0]);
//! ```

use crate::error::Result;
use crate::traits::SeriesElement;

/// Running totals of `N` per-sample terms over a sliding window.
///
/// `masses` holds the matching sums of absolute values; a leaving term larger
/// than the remaining mass means the total left behind is mostly rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidingSums<T, const N: usize> {
    period: usize,
    totals: [T; N],
    masses: [T; N],
    slides: usize,
}

impl<T: SeriesElement, const N: usize> SlidingSums<T, N> {
    /// Empty totals for a window of `period` samples.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            period,
            totals: [T::zero(); N],
            masses: [T::zero(); N],
            slides: 0,
        }
    }

    /// Adds the terms of the entering sample.
    #[inline]
    pub fn push(&mut self, terms: [T; N]) {
        for (slot, term) in terms.into_iter().enumerate() {
            self.totals[slot] = self.totals[slot] + term;
            self.masses[slot] = self.masses[slot] + term.abs();
        }
    }

    /// Removes the terms of the leaving sample.
    ///
    /// `rest` yields the terms of the samples still in the window. It is only
    /// consumed when the totals are rebuilt.
    #[inline]
    pub fn pop<I>(&mut self, terms: [T; N], rest: I)
    where
        I: IntoIterator<Item = [T; N]>,
    {
        let mut outweighed = false;
        for (slot, term) in terms.into_iter().enumerate() {
            self.totals[slot] = self.totals[slot] - term;
            self.masses[slot] = self.masses[slot] - term.abs();
            outweighed |= term.abs() > self.masses[slot];
        }
        self.slides += 1;
        if outweighed || self.slides >= self.period {
            self.rebuild(rest);
        }
    }

    /// Recomputes the totals from scratch.
    pub fn rebuild<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = [T; N]>,
    {
        self.totals = [T::zero(); N];
        self.masses = [T::zero(); N];
        self.slides = 0;
        for terms in samples {
            self.push(terms);
        }
    }

    /// Current totals, one per term.
    #[inline]
    #[must_use]
    pub fn totals(&self) -> [T; N] {
        self.totals
    }
}

/// Sum of every full window of `period` samples.
///
/// Element `k` belongs to the window ending at position `k + period - 1`.
/// Empty when `period` is zero or longer than the series.
#[must_use]
pub fn window_sums<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    if period == 0 || data.len() < period {
        return Vec::new();
    }
    let mut sums = Vec::with_capacity(data.len() + 1 - period);
    let mut running = SlidingSums::<T, 1>::new(period);
    running.rebuild(data[..period - 1].iter().map(|&x| [x]));
    for end in period - 1..data.len() {
        running.push([data[end]]);
        let [total] = running.totals();
        sums.push(total);
        let start = end + 1 - period;
        running.pop([data[start]], data[start + 1..=end].iter().map(|&x| [x]));
    }
    sums
}

/// Plain and linearly weighted sums of every full window.
///
/// Weights run from 1 for the oldest sample to `period` for the newest.
/// Element `k` is `(sum, weighted_sum)` of the window ending at position
/// `k + period - 1`. Sliding subtracts the plain sum from the weighted one,
/// so the weighted sum inherits the rounding of the plain one; both are
/// refitted from the window when a spike leaves and once every `period`
/// slides, like [`SlidingSums`].
///
/// # Errors
///
/// Returns `Error::NumericConversion` if `period` is not representable in
/// `T`.
pub fn linear_window_sums<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<(T, T)>> {
    if period == 0 || data.len() < period {
        return Ok(Vec::new());
    }
    let p = T::from_usize(period)?;
    let fit = |window: &[T]| {
        let (mut plain, mut weighted, mut mass) = (T::zero(), T::zero(), T::zero());
        let mut weight = T::one();
        for &x in window {
            plain = plain + x;
            weighted = weighted + weight * x;
            mass = mass + x.abs();
            weight = weight + T::one();
        }
        (plain, weighted, mass)
    };

    let mut sums = Vec::with_capacity(data.len() + 1 - period);
    let (mut plain, mut weighted, mut mass) = fit(&data[..period]);
    sums.push((plain, weighted));
    let mut slides = 0;
    for end in period..data.len() {
        let (dropped, incoming) = (data[end - period], data[end]);
        mass = mass - dropped.abs();
        slides += 1;
        if slides >= period || dropped.abs() > mass {
            (plain, weighted, mass) = fit(&data[end + 1 - period..=end]);
            slides = 0;
        } else {
            // every remaining weight drops by one
            weighted = weighted - plain + p * incoming;
            plain = plain - dropped + incoming;
            mass = mass + incoming.abs();
        }
        sums.push((plain, weighted));
    }
    Ok(sums)
}

/// Window sums of the samples and of their squares, for variance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowMoments<T> {
    /// Sum of samples per window.
    pub sum: Vec<T>,
    /// Sum of squared samples per window.
    pub sum_sq: Vec<T>,
}

impl<T: SeriesElement> WindowMoments<T> {
    /// Computes both sums in one pass.
    #[must_use]
    pub fn compute(data: &[T], period: usize) -> Self {
        if period == 0 || data.len() < period {
            return Self {
                sum: Vec::new(),
                sum_sq: Vec::new(),
            };
        }
        let count = data.len() + 1 - period;
        let mut sum = Vec::with_capacity(count);
        let mut sum_sq = Vec::with_capacity(count);
        let terms = |x: &T| [*x, *x * *x];
        let mut running = SlidingSums::<T, 2>::new(period);
        running.rebuild(data[..period - 1].iter().map(terms));
        for end in period - 1..data.len() {
            running.push(terms(&data[end]));
            let [total, total_sq] = running.totals();
            sum.push(total);
            sum_sq.push(total_sq);
            let start = end + 1 - period;
            running.pop(terms(&data[start]), data[start + 1..=end].iter().map(terms));
        }
        Self { sum, sum_sq }
    }

    /// Population variance of window `k`: `E[x^2] - E[x]^2`.
    ///
    /// Never negative. A difference within the rounding of `period` squared
    /// samples is zero.
    #[inline]
    #[must_use]
    pub fn variance(&self, k: usize, period: T) -> T {
        let mean = self.sum[k] / period;
        let mean_sq = self.sum_sq[k] / period;
        let variance = mean_sq - mean * mean;
        if variance <= mean_sq * T::epsilon() * (period + T::lit(4.0)) {
            T::zero()
        } else {
            variance
        }
    }

    /// Number of windows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sum.len()
    }

    /// Returns `true` if no full window exists.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sum.is_empty()
    }
}
