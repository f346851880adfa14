//! Shared test utilities for tacalc integration tests.

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal for testing purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Count the number of NaN values in a slice.
#[allow(dead_code)]
pub fn count_nans(data: &[f64]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Verify that the first `n` values are NaN and the rest are not.
#[allow(dead_code)]
pub fn verify_nan_prefix(data: &[f64], expected_nan_count: usize) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, v)| v.is_nan() == (i < expected_nan_count))
}

/// Aligned OHLCV bars.
#[allow(dead_code)]
pub struct Ohlcv {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

/// Deterministic trending wave, long enough for every default lookback.
#[allow(dead_code)]
pub fn wave_bars(n: usize) -> Ohlcv {
    let mut bars = Ohlcv {
        open: Vec::with_capacity(n),
        high: Vec::with_capacity(n),
        low: Vec::with_capacity(n),
        close: Vec::with_capacity(n),
        volume: Vec::with_capacity(n),
    };
    let mut prev = 50.0;
    for i in 0..n {
        let x = i as f64;
        let close = 50.0 + 5.0 * (x * 0.25).sin() + 2.0 * (x * 0.07).cos() + x * 0.02;
        bars.open.push(prev);
        bars.high.push(prev.max(close) + 0.3 + (i % 4) as f64 * 0.1);
        bars.low.push(prev.min(close) - 0.25 - (i % 3) as f64 * 0.1);
        bars.close.push(close);
        bars.volume.push(500.0 + ((i * 37) % 11) as f64 * 40.0);
        prev = close;
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
        assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
    }

    #[test]
    fn test_verify_nan_prefix() {
        let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, 3.0];
        assert!(verify_nan_prefix(&data, 2));
        assert!(!verify_nan_prefix(&data, 3));
        assert!(!verify_nan_prefix(&data, 1));
        assert_eq!(count_nans(&data), 2);
    }

    #[test]
    fn test_wave_bars_are_consistent() {
        let bars = wave_bars(64);
        for i in 0..64 {
            assert!(bars.high[i] >= bars.open[i].max(bars.close[i]));
            assert!(bars.low[i] <= bars.open[i].min(bars.close[i]));
        }
    }
}
