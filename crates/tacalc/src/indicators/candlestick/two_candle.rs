//! Patterns formed by a candle and the one before it.

use super::core::{CandleSettings, Candles, SettingKind::*};
use crate::traits::SeriesElement;

pub(crate) fn counter_attack_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[Equal, BodyLong]) + 1
}

/// Two long candles of opposite color closing at the same price.
pub(crate) fn counter_attack<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let equal = c.avg(Equal, i - 1);
    if c.color(i - 1) == -c.color(i)
        && c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.body(i) > c.avg(BodyLong, i)
        && c.close(i) <= c.close(i - 1) + equal
        && c.close(i) >= c.close(i - 1) - equal
    {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn dark_cloud_cover_lookback(s: &CandleSettings) -> usize {
    s.period(BodyLong) + 1
}

/// Long white candle, then a black one opening above its high and closing
/// deep inside its body.
pub(crate) fn dark_cloud_cover<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 1) == 1
        && c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.color(i) == -1
        && c.open(i) > c.high(i - 1)
        && c.close(i) > c.open(i - 1)
        && c.close(i) < c.close(i - 1) - c.body(i - 1) * c.penetration()
    {
        -100
    } else {
        0
    }
}

pub(crate) fn doji_star_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, BodyLong]) + 1
}

/// Long candle followed by a doji gapping away in the trend direction.
pub(crate) fn doji_star<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let gapped = match c.color(i - 1) {
        1 => c.body_gap_up(i, i - 1),
        _ => c.body_gap_down(i, i - 1),
    };
    if c.body(i - 1) > c.avg(BodyLong, i - 1) && c.body(i) <= c.avg(BodyDoji, i) && gapped {
        -c.color(i - 1) * 100
    } else {
        0
    }
}

pub(crate) fn engulfing_lookback(_: &CandleSettings) -> usize {
    2
}

/// The second real body engulfs the first, with opposite colors.
pub(crate) fn engulfing<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let bullish = c.color(i) == 1
        && c.color(i - 1) == -1
        && c.close(i) > c.open(i - 1)
        && c.open(i) < c.close(i - 1);
    let bearish = c.color(i) == -1
        && c.color(i - 1) == 1
        && c.open(i) > c.close(i - 1)
        && c.close(i) < c.open(i - 1);
    if bullish || bearish {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn harami_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, BodyLong]) + 1
}

fn body_inside<T: SeriesElement>(c: &Candles<'_, T>, inner: usize, outer: usize) -> bool {
    c.body_top(inner) < c.body_top(outer) && c.body_bottom(inner) > c.body_bottom(outer)
}

/// Long candle whose body contains the following short body.
pub(crate) fn harami<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.body(i) <= c.avg(BodyShort, i)
        && body_inside(c, i, i - 1)
    {
        -c.color(i - 1) * 100
    } else {
        0
    }
}

pub(crate) fn harami_cross_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, BodyLong]) + 1
}

/// Harami whose second candle is a doji.
pub(crate) fn harami_cross<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.body(i) <= c.avg(BodyDoji, i)
        && body_inside(c, i, i - 1)
    {
        -c.color(i - 1) * 100
    } else {
        0
    }
}

pub(crate) fn homing_pigeon_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, BodyLong]) + 1
}

/// Two black candles, the short second one inside the first body.
pub(crate) fn homing_pigeon<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 1) == -1
        && c.color(i) == -1
        && c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.body(i) <= c.avg(BodyShort, i)
        && c.open(i) < c.open(i - 1)
        && c.close(i) > c.close(i - 1)
    {
        100
    } else {
        0
    }
}

pub(crate) fn in_neck_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[Equal, BodyLong]) + 1
}

/// Long black candle, then a white one opening below its low and closing
/// just at or slightly above its close.
pub(crate) fn in_neck<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 1) == -1
        && c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.color(i) == 1
        && c.open(i) < c.low(i - 1)
        && c.close(i) <= c.close(i - 1) + c.avg(Equal, i - 1)
        && c.close(i) >= c.close(i - 1)
    {
        -100
    } else {
        0
    }
}

fn opposite_marubozu<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> bool {
    let is_marubozu = |j: usize| {
        c.body(j) > c.avg(BodyLong, j)
            && c.upper_shadow(j) < c.avg(ShadowVeryShort, j)
            && c.lower_shadow(j) < c.avg(ShadowVeryShort, j)
    };
    let gapped = match c.color(i - 1) {
        -1 => c.candle_gap_up(i, i - 1),
        _ => c.candle_gap_down(i, i - 1),
    };
    c.color(i - 1) == -c.color(i) && is_marubozu(i - 1) && is_marubozu(i) && gapped
}

pub(crate) fn kicking_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[ShadowVeryShort, BodyLong]) + 1
}

/// Two marubozu of opposite color separated by a price gap.
pub(crate) fn kicking<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if opposite_marubozu(c, i) {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn kicking_by_length_lookback(s: &CandleSettings) -> usize {
    kicking_lookback(s)
}

/// Kicking, signed by the color of the longer marubozu.
pub(crate) fn kicking_by_length<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if opposite_marubozu(c, i) {
        let longer = if c.body(i) > c.body(i - 1) { i } else { i - 1 };
        c.color(longer) * 100
    } else {
        0
    }
}

pub(crate) fn matching_low_lookback(s: &CandleSettings) -> usize {
    s.period(Equal) + 1
}

/// Two black candles with the same close.
pub(crate) fn matching_low<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let equal = c.avg(Equal, i - 1);
    if c.color(i - 1) == -1
        && c.color(i) == -1
        && c.close(i) <= c.close(i - 1) + equal
        && c.close(i) >= c.close(i - 1) - equal
    {
        100
    } else {
        0
    }
}

pub(crate) fn on_neck_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[Equal, BodyLong]) + 1
}

/// Like in-neck, but the white candle closes at the prior low.
pub(crate) fn on_neck<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let equal = c.avg(Equal, i - 1);
    if c.color(i - 1) == -1
        && c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.color(i) == 1
        && c.open(i) < c.low(i - 1)
        && c.close(i) <= c.low(i - 1) + equal
        && c.close(i) >= c.low(i - 1) - equal
    {
        -100
    } else {
        0
    }
}

pub(crate) fn piercing_lookback(s: &CandleSettings) -> usize {
    s.period(BodyLong) + 1
}

/// Long black candle, then a long white one opening below its low and
/// closing above its midpoint.
pub(crate) fn piercing<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 1) == -1
        && c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.color(i) == 1
        && c.body(i) > c.avg(BodyLong, i)
        && c.open(i) < c.low(i - 1)
        && c.close(i) < c.open(i - 1)
        && c.close(i) > c.close(i - 1) + c.body(i - 1) * T::lit(0.5)
    {
        100
    } else {
        0
    }
}

pub(crate) fn separating_lines_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[ShadowVeryShort, BodyLong, Equal]) + 1
}

/// Opposite colors opening at the same price, the second a belt hold.
pub(crate) fn separating_lines<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let equal = c.avg(Equal, i - 1);
    let opening_shadow = if c.color(i) == 1 {
        c.lower_shadow(i)
    } else {
        c.upper_shadow(i)
    };
    if c.color(i - 1) == -c.color(i)
        && c.open(i) <= c.open(i - 1) + equal
        && c.open(i) >= c.open(i - 1) - equal
        && c.body(i) > c.avg(BodyLong, i)
        && opening_shadow < c.avg(ShadowVeryShort, i)
    {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn thrusting_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[Equal, BodyLong]) + 1
}

/// Like in-neck, but the white candle closes into the black body without
/// reaching its midpoint.
pub(crate) fn thrusting<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 1) == -1
        && c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.color(i) == 1
        && c.open(i) < c.low(i - 1)
        && c.close(i) > c.close(i - 1) + c.avg(Equal, i - 1)
        && c.close(i) <= c.close(i - 1) + c.body(i - 1) * T::lit(0.5)
    {
        -100
    } else {
        0
    }
}
