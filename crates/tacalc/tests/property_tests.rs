//! Property-based tests for the indicator contract using proptest.
//!
//! These tests verify invariant properties that must hold for all valid inputs,
//! using randomly generated test data to find edge cases.

mod common;

use proptest::prelude::*;
use strum::IntoEnumIterator;

use common::approx_eq;
use tacalc::indicators::candlestick::CandlePattern;
use tacalc::indicators::{
    atr, atr_lookback, bbands, dema, ema, maxindex, rsi, sma, trange, willr, CandleSettings, MaType,
};

// ==================== Test Data Generators ====================

/// Generate a random price series (all positive values)
fn arb_price_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, min_len..=max_len)
}

/// Generate aligned OHLC bars with high above and low below both open and close
fn arb_ohlc_series(
    min_len: usize,
    max_len: usize,
) -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>)> {
    let bar = (
        10.0..1000.0_f64,
        -0.05..0.05_f64,
        0.001..0.05_f64,
        0.001..0.05_f64,
    );
    let bars = prop::collection::vec(bar, min_len..=max_len);
    bars.prop_map(|data| {
        let mut open = Vec::with_capacity(data.len());
        let mut high = Vec::with_capacity(data.len());
        let mut low = Vec::with_capacity(data.len());
        let mut close = Vec::with_capacity(data.len());

        for (base, move_pct, high_pct, low_pct) in data {
            let o = base;
            let c = base * (1.0 + move_pct);
            open.push(o);
            high.push(o.max(c) * (1.0 + high_pct));
            low.push(o.min(c) * (1.0 - low_pct));
            close.push(c);
        }

        (open, high, low, close)
    })
}

/// Generate a series over a handful of repeated levels, so ties are common
fn arb_small_levels(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0u8..5, min_len..max_len)
        .prop_map(|v| v.into_iter().map(f64::from).collect())
}

// ==================== Moving Averages ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Output length equals input length and the prefix is exactly the lookback
    #[test]
    fn prop_sma_length_and_prefix(data in arb_price_series(0, 100), period in 1usize..=20) {
        let result = sma(&data, period).unwrap();
        prop_assert_eq!(result.len(), data.len());
        for (i, v) in result.iter().enumerate() {
            prop_assert_eq!(v.is_nan(), i < period - 1, "index {}", i);
        }
    }

    /// SMA lies between the window minimum and maximum
    #[test]
    fn prop_sma_within_window_bounds(data in arb_price_series(20, 100), period in 1usize..=20) {
        let result = sma(&data, period).unwrap();
        for i in period - 1..data.len() {
            let window = &data[i + 1 - period..=i];
            let lo = window.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(result[i] >= lo - 1e-9 && result[i] <= hi + 1e-9);
        }
    }

    /// Identical input gives bit-identical output
    #[test]
    fn prop_ema_deterministic(data in arb_price_series(10, 100), period in 1usize..=15) {
        let a = ema(&data, period).unwrap();
        let b = ema(&data, period).unwrap();
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    /// DEMA equals 2 * EMA - EMA(EMA) past its lookback
    #[test]
    fn prop_dema_decomposition(data in arb_price_series(30, 120), period in 2usize..=10) {
        let e1 = ema(&data, period).unwrap();
        let stage = period - 1;
        let e2 = ema(&e1[stage..], period).unwrap();
        let result = dema(&data, period).unwrap();
        for i in 2 * stage..data.len() {
            let expected = 2.0 * e1[i] - e2[i - stage];
            let actual = result[i];
            prop_assert!(approx_eq(actual, expected, 1e-6), "bar {i}: {actual} vs {expected}");
        }
    }

    /// Bollinger bands stay ordered
    #[test]
    fn prop_bbands_ordered(data in arb_price_series(10, 100), period in 2usize..=10) {
        let out = bbands(&data, period, 2.0, 2.0, MaType::Sma).unwrap();
        for i in period - 1..data.len() {
            prop_assert!(out.upper[i] >= out.middle[i] - 1e-9);
            prop_assert!(out.middle[i] >= out.lower[i] - 1e-9);
        }
    }
}

// ==================== Oscillators ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// RSI is bounded to [0, 100]
    #[test]
    fn prop_rsi_bounded(data in arb_price_series(20, 150), period in 2usize..=20) {
        let result = rsi(&data, period).unwrap();
        for (i, v) in result.iter().enumerate() {
            if i < period {
                prop_assert!(v.is_nan());
            } else {
                prop_assert!((0.0..=100.0).contains(v), "rsi[{}] = {}", i, v);
            }
        }
    }

    /// Williams %R is bounded to [-100, 0]
    #[test]
    fn prop_willr_bounded(
        (_, high, low, close) in arb_ohlc_series(20, 100),
        period in 2usize..=14,
    ) {
        let result = willr(&high, &low, &close, period).unwrap();
        for v in &result[period - 1..] {
            prop_assert!((-100.0..=0.0).contains(v), "willr = {}", v);
        }
    }
}

// ==================== Volatility ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// True range is at least the bar's own range, and ATR is non-negative
    #[test]
    fn prop_true_range_and_atr(
        (_, high, low, close) in arb_ohlc_series(20, 100),
        period in 1usize..=14,
    ) {
        let tr = trange(&high, &low, &close).unwrap();
        prop_assert!(tr[0].is_nan());
        for i in 1..tr.len() {
            prop_assert!(tr[i] >= high[i] - low[i] - 1e-9);
        }

        let result = atr(&high, &low, &close, period).unwrap();
        let lookback = atr_lookback(period).unwrap();
        for (i, v) in result.iter().enumerate() {
            prop_assert_eq!(v.is_nan(), i < lookback);
            if i >= lookback {
                prop_assert!(*v >= 0.0);
            }
        }
    }
}

// ==================== Extrema ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// MAXINDEX points at the latest occurrence of the window maximum
    #[test]
    fn prop_maxindex_latest_maximum(
        data in arb_small_levels(1, 60),
        period in 1usize..=8,
    ) {
        let result = maxindex(&data, period).unwrap();
        for (i, &idx) in result.iter().enumerate() {
            if i + 1 < period {
                prop_assert_eq!(idx, -1);
                continue;
            }
            let start = i + 1 - period;
            let idx = usize::try_from(idx).unwrap();
            prop_assert!(idx >= start && idx <= i);
            let window = &data[start..=i];
            prop_assert!(window.iter().all(|&v| v <= data[idx]));
            prop_assert!(data[idx + 1..=i].iter().all(|&v| v < data[idx]));
        }
    }
}

// ==================== Candlesticks ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Every pattern emits only recognised signal values and a zero prefix
    #[test]
    fn prop_candle_signals_well_formed((open, high, low, close) in arb_ohlc_series(0, 40)) {
        let settings = CandleSettings::default();
        for pattern in CandlePattern::iter() {
            let result = pattern.compute(&open, &high, &low, &close, &settings, None).unwrap();
            prop_assert_eq!(result.len(), open.len());
            let lookback = pattern.lookback(&settings);
            for (i, &v) in result.iter().enumerate() {
                prop_assert!(matches!(v, -200 | -100 | 0 | 100 | 200), "{} gave {}", pattern, v);
                if i < lookback {
                    prop_assert_eq!(v, 0, "{} prefix", pattern);
                }
            }
        }
    }
}
