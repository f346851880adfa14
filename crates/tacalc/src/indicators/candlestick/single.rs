//! Patterns decided by the shape of one candle.
//!
//! Hammer, hanging man, inverted hammer and shooting star also look at the
//! previous bar for their location in the trend, but the signal is still a
//! single candle.

use super::core::{CandleSettings, Candles, SettingKind::*};
use crate::traits::SeriesElement;

pub(crate) fn belt_hold_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyLong, ShadowVeryShort])
}

/// Long candle opening on its extreme: white with no lower shadow or black
/// with no upper shadow.
pub(crate) fn belt_hold<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let color = c.color(i);
    let opening_shadow = if color == 1 {
        c.lower_shadow(i)
    } else {
        c.upper_shadow(i)
    };
    if c.body(i) > c.avg(BodyLong, i) && opening_shadow < c.avg(ShadowVeryShort, i) {
        color * 100
    } else {
        0
    }
}

pub(crate) fn closing_marubozu_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyLong, ShadowVeryShort])
}

/// Long candle closing on its extreme.
pub(crate) fn closing_marubozu<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let color = c.color(i);
    let closing_shadow = if color == 1 {
        c.upper_shadow(i)
    } else {
        c.lower_shadow(i)
    };
    if c.body(i) > c.avg(BodyLong, i) && closing_shadow < c.avg(ShadowVeryShort, i) {
        color * 100
    } else {
        0
    }
}

pub(crate) fn doji_lookback(s: &CandleSettings) -> usize {
    s.period(BodyDoji)
}

pub(crate) fn doji<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) <= c.avg(BodyDoji, i) {
        100
    } else {
        0
    }
}

pub(crate) fn dragonfly_doji_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, ShadowVeryShort])
}

pub(crate) fn dragonfly_doji<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) <= c.avg(BodyDoji, i)
        && c.upper_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.lower_shadow(i) > c.avg(ShadowVeryShort, i)
    {
        100
    } else {
        0
    }
}

pub(crate) fn gravestone_doji_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, ShadowVeryShort])
}

pub(crate) fn gravestone_doji<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) <= c.avg(BodyDoji, i)
        && c.lower_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.upper_shadow(i) > c.avg(ShadowVeryShort, i)
    {
        100
    } else {
        0
    }
}

pub(crate) fn hammer_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, ShadowLong, ShadowVeryShort, Near]) + 1
}

/// Small body near the prior low, long lower shadow, no upper shadow.
pub(crate) fn hammer<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) < c.avg(BodyShort, i)
        && c.lower_shadow(i) > c.avg(ShadowLong, i)
        && c.upper_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.body_bottom(i) <= c.low(i - 1) + c.avg(Near, i - 1)
    {
        100
    } else {
        0
    }
}

pub(crate) fn hanging_man_lookback(s: &CandleSettings) -> usize {
    hammer_lookback(s)
}

/// Hammer shape sitting near the prior high.
pub(crate) fn hanging_man<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) < c.avg(BodyShort, i)
        && c.lower_shadow(i) > c.avg(ShadowLong, i)
        && c.upper_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.body_bottom(i) >= c.high(i - 1) - c.avg(Near, i - 1)
    {
        -100
    } else {
        0
    }
}

pub(crate) fn high_wave_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, ShadowVeryLong])
}

pub(crate) fn high_wave<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) < c.avg(BodyShort, i)
        && c.upper_shadow(i) > c.avg(ShadowVeryLong, i)
        && c.lower_shadow(i) > c.avg(ShadowVeryLong, i)
    {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn inverted_hammer_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, ShadowLong, ShadowVeryShort]) + 1
}

/// Small body gapping down, long upper shadow, no lower shadow.
pub(crate) fn inverted_hammer<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) < c.avg(BodyShort, i)
        && c.upper_shadow(i) > c.avg(ShadowLong, i)
        && c.lower_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.body_gap_down(i, i - 1)
    {
        100
    } else {
        0
    }
}

pub(crate) fn long_legged_doji_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, ShadowLong])
}

pub(crate) fn long_legged_doji<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) <= c.avg(BodyDoji, i)
        && (c.lower_shadow(i) > c.avg(ShadowLong, i) || c.upper_shadow(i) > c.avg(ShadowLong, i))
    {
        100
    } else {
        0
    }
}

pub(crate) fn long_line_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyLong, ShadowShort])
}

pub(crate) fn long_line<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) > c.avg(BodyLong, i)
        && c.upper_shadow(i) < c.avg(ShadowShort, i)
        && c.lower_shadow(i) < c.avg(ShadowShort, i)
    {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn marubozu_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyLong, ShadowVeryShort])
}

pub(crate) fn marubozu<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) > c.avg(BodyLong, i)
        && c.upper_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.lower_shadow(i) < c.avg(ShadowVeryShort, i)
    {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn rickshaw_man_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, ShadowLong, Near])
}

/// Long-legged doji whose body sits near the middle of the range.
pub(crate) fn rickshaw_man<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let mid = c.low(i) + c.high_low(i) / T::two();
    let near = c.avg(Near, i);
    if c.body(i) <= c.avg(BodyDoji, i)
        && c.lower_shadow(i) > c.avg(ShadowLong, i)
        && c.upper_shadow(i) > c.avg(ShadowLong, i)
        && c.body_bottom(i) <= mid + near
        && c.body_top(i) >= mid - near
    {
        100
    } else {
        0
    }
}

pub(crate) fn shooting_star_lookback(s: &CandleSettings) -> usize {
    inverted_hammer_lookback(s)
}

/// Inverted hammer shape gapping up.
pub(crate) fn shooting_star<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) < c.avg(BodyShort, i)
        && c.upper_shadow(i) > c.avg(ShadowLong, i)
        && c.lower_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.body_gap_up(i, i - 1)
    {
        -100
    } else {
        0
    }
}

pub(crate) fn short_line_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, ShadowShort])
}

pub(crate) fn short_line<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) < c.avg(BodyShort, i)
        && c.upper_shadow(i) < c.avg(ShadowShort, i)
        && c.lower_shadow(i) < c.avg(ShadowShort, i)
    {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn spinning_top_lookback(s: &CandleSettings) -> usize {
    s.period(BodyShort)
}

/// Small body with both shadows longer than the body.
pub(crate) fn spinning_top<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let body = c.body(i);
    if body < c.avg(BodyShort, i) && c.upper_shadow(i) > body && c.lower_shadow(i) > body {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn takuri_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, ShadowVeryShort, ShadowVeryLong])
}

/// Dragonfly doji with a very long lower shadow.
pub(crate) fn takuri<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i) <= c.avg(BodyDoji, i)
        && c.upper_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.lower_shadow(i) > c.avg(ShadowVeryLong, i)
    {
        100
    } else {
        0
    }
}
