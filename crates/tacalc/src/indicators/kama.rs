//! KAMA (Kaufman Adaptive Moving Average) indicator.
//!
//! KAMA adjusts its smoothing to market efficiency: it follows price closely
//! while the market trends and flattens out while it chops sideways.
//!
//! # Formula
//!
//! ```text
//! ER[i]  = |x[i] - x[i-p]| / sum(j=i-p+1..i, |x[j] - x[j-1]|)
//! SC[i]  = (ER[i] * (2/3 - 2/31) + 2/31)^2
//! KAMA[i] = (x[i] - KAMA[i-1]) * SC[i] + KAMA[i-1]
//! ```
//!
//! The path length is a sliding window sum. The recursion starts from
//! `x[p-1]`, and the efficiency ratio is forced to 1 when the path length is
//! zero or does not exceed the signed net change.
//!
//! # Lookback
//!
//! `period` (one extra bar is needed for the first price change).

use crate::error::Result;
use crate::kernels::SlidingSums;
use crate::output::real_output;
use crate::traits::{is_zero, validate_period, SeriesElement};

/// Returns the KAMA lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn kama_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period)
}

/// Computes the Kaufman Adaptive Moving Average.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::kama::kama;
///
/// let data: Vec<f64> = (1..=40).map(f64::from).collect();
/// let result = kama(&data, 10).unwrap();
/// assert!(result[9].is_nan());
/// assert!(!result[10].is_nan());
/// ```
#[must_use = "this returns a Result with the KAMA values, which should be used"]
pub fn kama<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let lookback = kama_lookback(period)?;
    let mut out = real_output(data.len());
    if data.len() <= lookback {
        return Ok(out);
    }

    let const_max = T::two() / T::lit(31.0);
    let const_diff = T::two() / T::lit(3.0) - const_max;
    let smoothing = |sum_roc: T, period_roc: T| {
        let er = if sum_roc <= period_roc || is_zero(sum_roc) {
            T::one()
        } else {
            (period_roc / sum_roc).abs()
        };
        let sc = er * const_diff + const_max;
        sc * sc
    };

    // absolute one-bar change ending at bar j
    let step = |j: usize| [(data[j] - data[j - 1]).abs()];
    let mut sum_roc = SlidingSums::<T, 1>::new(period);
    sum_roc.rebuild((1..=period).map(step));

    let mut prev_kama = data[period - 1];
    for today in period..data.len() {
        if today > period {
            let oldest = today - period;
            sum_roc.pop(step(oldest), (oldest + 1..today).map(step));
            sum_roc.push(step(today));
        }
        let [total_roc] = sum_roc.totals();
        let period_roc = data[today] - data[today - period];
        prev_kama = (data[today] - prev_kama) * smoothing(total_roc, period_roc) + prev_kama;
        out[today] = prev_kama;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kama_hand_computed() {
        let data = [1.0_f64, 2.0, 3.0, 2.0];
        let result = kama(&data, 2).unwrap();
        assert!(result[0].is_nan() && result[1].is_nan());
        // efficient move: ER = 1, SC = (2/3)^2
        let first = 2.0 + (3.0 - 2.0) * (4.0 / 9.0);
        assert!((result[2] - first).abs() < 1e-12);
        // no net change: ER = 0, SC = (2/31)^2
        let sc = (2.0_f64 / 31.0).powi(2);
        let second = first + (2.0 - first) * sc;
        assert!((result[3] - second).abs() < 1e-12);
    }

    #[test]
    fn test_kama_constant_values() {
        let result = kama(&[7.0_f64; 25], 10).unwrap();
        assert!(result[10..].iter().all(|&v| (v - 7.0).abs() < 1e-12));
    }

    #[test]
    fn test_kama_trend_follows_closer_than_chop() {
        let trend: Vec<f64> = (0..60).map(f64::from).collect();
        let chop: Vec<f64> = (0..60).map(|i| if i % 2 == 0 { 0.0 } else { 1.0 }).collect();
        let t = kama(&trend, 10).unwrap();
        let c = kama(&chop, 10).unwrap();
        assert!(59.0 - t[59] < 5.0);
        assert!((c[59] - c[58]).abs() < 0.05);
    }

    #[test]
    fn test_kama_tracks_flat_tail_after_spike() {
        let mut data = vec![1.0_f64, 1e9];
        data.extend(std::iter::repeat(1.0).take(80));
        let result = kama(&data, 5).unwrap();
        // the path length over the flat tail is exactly zero, so ER is 1
        let last = result[data.len() - 1];
        assert!((last - 1.0).abs() < 1e-6, "kama = {last}");
    }

    #[test]
    fn test_kama_lookback_and_short_input() {
        assert_eq!(kama_lookback(30).unwrap(), 30);
        let result = kama(&[1.0_f64; 30], 30).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
        assert!(kama::<f64>(&[], 30).unwrap().is_empty());
    }
}
