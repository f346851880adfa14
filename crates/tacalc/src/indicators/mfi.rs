//! Money Flow Index (MFI).
//!
//! # Formula
//!
//! ```text
//! TP   = (high + low + close) / 3
//! flow = TP * volume, positive when TP rose from the previous bar and
//!        negative when it fell
//! MFI  = 100 * positive / (positive + negative)
//! ```
//!
//! summed over the last `period` bars. MFI is 0 when the total flow is below
//! 1.
//!
//! # Lookback
//!
//! `period`.

use crate::error::Result;
use crate::kernels::SlidingSums;
use crate::output::real_output;
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Returns the MFI lookback, `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
#[inline]
pub fn mfi_lookback(period: usize) -> Result<usize> {
    validate_period(period, 1)?;
    Ok(period)
}

/// Computes the Money Flow Index.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length, or
/// `Error::InvalidPeriod` for a period outside `1..=100000`.
///
/// # Example
///
/// ```
/// use tacalc::indicators::mfi::mfi;
///
/// let high = [11.0_f64, 12.0, 13.0, 12.0];
/// let low = [9.0_f64, 10.0, 11.0, 10.0];
/// let close = [10.0_f64, 11.0, 12.0, 11.0];
/// let volume = [100.0_f64, 100.0, 100.0, 100.0];
/// let result = mfi(&high, &low, &close, &volume, 2).unwrap();
/// assert_eq!(result[2], 100.0);
/// ```
#[must_use = "this returns a Result with the MFI values, which should be used"]
pub fn mfi<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    period: usize,
) -> Result<Vec<T>> {
    let len = validate_same_len("MFI", &[high, low, close, volume])?;
    let lookback = mfi_lookback(period)?;
    let mut out = real_output(len);
    if len <= lookback {
        return Ok(out);
    }

    let three = T::lit(3.0);
    let typical: Vec<T> = (0..len).map(|i| (high[i] + low[i] + close[i]) / three).collect();
    // [positive, negative] flow of each bar from 1 on
    let flows: Vec<[T; 2]> = (0..len)
        .map(|i| {
            if i == 0 {
                return [T::zero(); 2];
            }
            let flow = typical[i] * volume[i];
            if typical[i] > typical[i - 1] {
                [flow, T::zero()]
            } else if typical[i] < typical[i - 1] {
                [T::zero(), flow]
            } else {
                [T::zero(); 2]
            }
        })
        .collect();

    let mut sums = SlidingSums::<T, 2>::new(period);
    sums.rebuild(flows[1..period].iter().copied());
    for today in lookback..len {
        sums.push(flows[today]);
        let [positive, negative] = sums.totals();
        let total = positive + negative;
        out[today] = if total < T::one() {
            T::zero()
        } else {
            T::hundred() * (positive / total)
        };
        let oldest = today + 1 - period;
        sums.pop(flows[oldest], flows[oldest + 1..=today].iter().copied());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mfi_mixed_flows() {
        let high = [11.0_f64, 12.0, 11.0];
        let low = [9.0_f64, 10.0, 9.0];
        let close = [10.0_f64, 11.0, 10.0];
        let volume = [10.0_f64, 10.0, 20.0];
        let result = mfi(&high, &low, &close, &volume, 2).unwrap();
        // positive 11*10 = 110, negative 10*20 = 200
        assert!((result[2] - 100.0 * 110.0 / 310.0).abs() < 1e-10);
    }

    #[test]
    fn test_mfi_small_total_is_zero() {
        let flat = [1.0_f64; 6];
        let volume = [0.1_f64; 6];
        let result = mfi(&flat, &flat, &flat, &volume, 3).unwrap();
        assert!(result[3..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_mfi_after_volume_spike() {
        // rising then falling typical price, one enormous volume bar first
        let high: Vec<f64> = (0..12).map(|i| if i % 2 == 0 { 11.0 } else { 12.0 }).collect();
        let low: Vec<f64> = high.iter().map(|h| h - 2.0).collect();
        let close: Vec<f64> = high.iter().map(|h| h - 1.0).collect();
        let mut volume = vec![10.0_f64; 12];
        volume[1] = 1e15;
        let result = mfi(&high, &low, &close, &volume, 2).unwrap();
        // each later window holds one rise to 11 and one fall to 10
        for (i, &v) in result.iter().enumerate().skip(3) {
            assert!((v - 100.0 * 110.0 / 210.0).abs() < 1e-9, "mfi[{i}] = {v}");
        }
    }

    #[test]
    fn test_mfi_window_slides() {
        let high: Vec<f64> = (0..30).map(|i| 20.0 + f64::from(i % 5)).collect();
        let low: Vec<f64> = high.iter().map(|h| h - 2.0).collect();
        let close: Vec<f64> = high.iter().map(|h| h - 1.0).collect();
        let volume = vec![1000.0_f64; 30];
        let result = mfi(&high, &low, &close, &volume, 4).unwrap();
        assert!(result[3].is_nan());
        assert!(result[4..].iter().all(|v| (0.0..=100.0).contains(v)));
    }
}
