//! Input validation and output-contract tests across indicator families.
//!
//! Covers empty input, mismatched sibling series, out-of-range parameters,
//! and the worked examples every implementation of the library must reproduce.

mod common;

use common::{approx_eq, count_nans, verify_nan_prefix, wave_bars, EPSILON};
use tacalc::indicators::candlestick::{cdl_engulfing, cdl_morning_star, CandlePattern};
use tacalc::indicators::{
    adx, atr, bbands, cci, dema, ema, ht_trendmode, ht_trendmode_lookback, macd, mfi, minmaxindex,
    obv, rsi, sma, stoch, trange, willr, CandleSettings, Stoch,
};
use tacalc::{Error, ErrorKind};

// ==================== Empty input ====================

#[test]
fn test_empty_sma_with_default_period() {
    let result = sma::<f64>(&[], 30).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_empty_inputs_across_families() {
    let empty: [f64; 0] = [];
    assert!(ema(&empty, 10).unwrap().is_empty());
    assert!(rsi(&empty, 14).unwrap().is_empty());
    assert!(atr(&empty, &empty, &empty, 14).unwrap().is_empty());
    assert!(adx(&empty, &empty, &empty, 14).unwrap().is_empty());
    assert!(obv(&empty, &empty).unwrap().is_empty());
    assert!(ht_trendmode(&empty).unwrap().is_empty());
    let signals = cdl_engulfing(&empty, &empty, &empty, &empty).unwrap();
    assert!(signals.is_empty());

    let bands = bbands(&empty, 5, 2.0, 2.0, Default::default()).unwrap();
    assert!(bands.upper.is_empty());
    assert!(bands.middle.is_empty());
    assert!(bands.lower.is_empty());
}

#[test]
fn test_input_shorter_than_lookback_is_all_sentinel() {
    let data = [1.0_f64, 2.0, 3.0];
    assert_eq!(count_nans(&sma(&data, 5).unwrap()), 3);
    assert_eq!(count_nans(&rsi(&data, 14).unwrap()), 3);
    assert_eq!(ht_trendmode(&data).unwrap(), vec![0, 0, 0]);
    let idx = minmaxindex(&data, 5).unwrap();
    assert_eq!(idx.min_idx, vec![-1, -1, -1]);
    assert_eq!(idx.max_idx, vec![-1, -1, -1]);
}

// ==================== Length mismatch ====================

#[test]
fn test_high_low_length_mismatch() {
    let high = vec![11.0_f64; 10];
    let low = vec![9.0_f64; 9];
    let close = vec![10.0_f64; 10];

    let err = atr(&high, &low, &close, 3).unwrap_err();
    assert!(matches!(
        err,
        Error::LengthMismatch {
            expected: 10,
            actual: 9,
            ..
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Usage);

    assert!(trange(&high, &low, &close).unwrap_err().is_usage());
    assert!(cci(&high, &low, &close, 5).unwrap_err().is_usage());
    assert!(willr(&high, &low, &close, 5).unwrap_err().is_usage());
    let err = stoch(&high, &low, &close, &Stoch::default()).unwrap_err();
    assert!(err.is_usage());
}

#[test]
fn test_volume_length_mismatch() {
    let bars = wave_bars(30);
    let short_volume = &bars.volume[..29];
    assert!(obv(&bars.close, short_volume).is_err());
    assert!(mfi(&bars.high, &bars.low, &bars.close, short_volume, 14).is_err());
}

#[test]
fn test_candle_length_mismatch() {
    let bars = wave_bars(20);
    let err = CandlePattern::Doji
        .compute(
            &bars.open,
            &bars.high,
            &bars.low[..19],
            &bars.close,
            &CandleSettings::default(),
            None,
        )
        .unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { .. }));
}

// ==================== Parameters ====================

#[test]
fn test_invalid_periods() {
    let data = [1.0_f64, 2.0, 3.0];
    assert!(matches!(sma(&data, 0), Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(
        ema(&data, 100_001),
        Err(Error::InvalidPeriod { period: 100_001, .. })
    ));
    assert!(sma(&data, 100_000).is_ok());
}

#[test]
fn test_invalid_parameter_is_usage_error() {
    let bars = wave_bars(30);
    let err = cdl_morning_star(&bars.open, &bars.high, &bars.low, &bars.close, -0.1).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "penetration", .. }));
    assert_eq!(err.kind(), ErrorKind::Usage);
}

#[test]
fn test_macd_line_periods_need_two_bars() {
    let data: Vec<f64> = (0..60).map(f64::from).collect();
    assert!(matches!(macd(&data, 1, 26, 9), Err(Error::InvalidPeriod { period: 1, .. })));
    assert!(macd(&data, 26, 12, 9).is_ok());
}

// ==================== Worked examples ====================

#[test]
fn test_sma_one_to_five() {
    let result = sma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
    assert!(verify_nan_prefix(&result, 2));
    assert!(approx_eq(result[2], 2.0, EPSILON));
    assert!(approx_eq(result[3], 3.0, EPSILON));
    assert!(approx_eq(result[4], 4.0, EPSILON));
}

#[test]
fn test_minmaxindex_prefers_latest_tie() {
    let data = [5.0_f64, 3.0, 3.0, 1.0, 4.0];
    let out = minmaxindex(&data, 2).unwrap();
    assert_eq!(out.min_idx, vec![-1, 1, 2, 3, 3]);
    assert_eq!(out.max_idx, vec![-1, 0, 2, 2, 4]);
}

#[test]
fn test_bullish_engulfing_after_neutral_bars() {
    let open = [10.0_f64, 10.0, 8.5];
    let high = [10.3_f64, 10.2, 10.6];
    let low = [9.8_f64, 8.9, 8.4];
    let close = [10.1_f64, 9.0, 10.5];
    let signals = cdl_engulfing(&open, &high, &low, &close).unwrap();
    assert_eq!(signals, vec![0, 0, 100]);
}

#[test]
fn test_bearish_engulfing() {
    let open = [10.0_f64, 9.0, 10.6];
    let high = [10.3_f64, 10.2, 10.8];
    let low = [9.8_f64, 8.9, 8.4];
    let close = [10.1_f64, 10.0, 8.6];
    let signals = cdl_engulfing(&open, &high, &low, &close).unwrap();
    assert_eq!(signals, vec![0, 0, -100]);
}

#[test]
fn test_dema_decomposition() {
    let bars = wave_bars(80);
    let period = 6;
    let e1 = ema(&bars.close, period).unwrap();
    let lookback = period - 1;
    let e2_tail = ema(&e1[lookback..], period).unwrap();
    let result = dema(&bars.close, period).unwrap();

    assert!(verify_nan_prefix(&result, 2 * lookback));
    for i in 2 * lookback..bars.close.len() {
        let expected = 2.0 * e1[i] - e2_tail[i - lookback];
        let actual = result[i];
        assert!(
            approx_eq(actual, expected, 1e-9),
            "bar {i}: {actual} vs {expected}"
        );
    }
}

#[test]
fn test_rsi_flat_series_is_fifty() {
    let result = rsi(&[42.0_f64; 30], 14).unwrap();
    assert!(verify_nan_prefix(&result, 14));
    assert!(result[14..].iter().all(|&v| approx_eq(v, 50.0, EPSILON)));
}

#[test]
fn test_ht_trendmode_prefix_is_zero() {
    let bars = wave_bars(120);
    let lookback = ht_trendmode_lookback();
    let out = ht_trendmode(&bars.close).unwrap();
    assert_eq!(out.len(), 120);
    assert!(out[..lookback].iter().all(|&v| v == 0));
    assert!(out[lookback..].iter().all(|&v| v == 0 || v == 1));
}

#[test]
fn test_single_precision_input() {
    let data: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let result = sma(&data, 3).unwrap();
    assert!(result[1].is_nan());
    assert!((result[4] - 4.0).abs() < 1e-6);
}
