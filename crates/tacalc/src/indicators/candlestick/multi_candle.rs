//! Patterns spanning four or five candles.

use super::core::{CandleSettings, Candles, SettingKind::*};
use crate::traits::SeriesElement;

pub(crate) fn three_black_crows_lookback(s: &CandleSettings) -> usize {
    s.period(ShadowVeryShort) + 3
}

/// A white candle, then three falling black candles closing near their lows,
/// each opening inside the prior body.
pub(crate) fn three_black_crows<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let crows = (i - 2..=i)
        .all(|j| c.color(j) == -1 && c.lower_shadow(j) < c.avg(ShadowVeryShort, j));
    if c.color(i - 3) == 1
        && crows
        && c.open(i - 1) < c.open(i - 2)
        && c.open(i - 1) > c.close(i - 2)
        && c.open(i) < c.open(i - 1)
        && c.open(i) > c.close(i - 1)
        && c.high(i - 3) > c.close(i - 2)
        && c.close(i - 2) > c.close(i - 1)
        && c.close(i - 1) > c.close(i)
    {
        -100
    } else {
        0
    }
}

pub(crate) fn three_line_strike_lookback(s: &CandleSettings) -> usize {
    s.period(Near) + 3
}

/// Three candles stepping in one direction, then a fourth opening beyond
/// the third close and closing beyond the first open.
pub(crate) fn three_line_strike<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let opens_within = |j: usize| {
        let near = c.avg(Near, j - 1);
        c.open(j) >= c.body_bottom(j - 1) - near && c.open(j) <= c.body_top(j - 1) + near
    };
    let strike = match c.color(i - 1) {
        1 => {
            c.close(i - 1) > c.close(i - 2)
                && c.close(i - 2) > c.close(i - 3)
                && c.open(i) > c.close(i - 1)
                && c.close(i) < c.open(i - 3)
        }
        _ => {
            c.close(i - 1) < c.close(i - 2)
                && c.close(i - 2) < c.close(i - 3)
                && c.open(i) < c.close(i - 1)
                && c.close(i) > c.open(i - 3)
        }
    };
    if c.color(i - 3) == c.color(i - 2)
        && c.color(i - 2) == c.color(i - 1)
        && c.color(i) == -c.color(i - 1)
        && opens_within(i - 2)
        && opens_within(i - 1)
        && strike
    {
        c.color(i - 1) * 100
    } else {
        0
    }
}

pub(crate) fn breakaway_lookback(s: &CandleSettings) -> usize {
    s.period(BodyLong) + 4
}

/// Long candle, a gap, three candles extending the move, and a fifth one
/// closing inside the gap.
pub(crate) fn breakaway<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let bearish_run = c.color(i - 4) == -1
        && c.body_gap_down(i - 3, i - 4)
        && c.high(i - 2) < c.high(i - 3)
        && c.low(i - 2) < c.low(i - 3)
        && c.high(i - 1) < c.high(i - 2)
        && c.low(i - 1) < c.low(i - 2)
        && c.close(i) > c.open(i - 3)
        && c.close(i) < c.close(i - 4);
    let bullish_run = c.color(i - 4) == 1
        && c.body_gap_up(i - 3, i - 4)
        && c.high(i - 2) > c.high(i - 3)
        && c.low(i - 2) > c.low(i - 3)
        && c.high(i - 1) > c.high(i - 2)
        && c.low(i - 1) > c.low(i - 2)
        && c.close(i) < c.open(i - 3)
        && c.close(i) > c.close(i - 4);
    if c.body(i - 4) > c.avg(BodyLong, i - 4)
        && c.color(i - 4) == c.color(i - 3)
        && c.color(i - 3) == c.color(i - 1)
        && c.color(i - 1) == -c.color(i)
        && (bearish_run || bullish_run)
    {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn conceal_baby_swallow_lookback(s: &CandleSettings) -> usize {
    s.period(ShadowVeryShort) + 3
}

/// Two black marubozu, a black candle gapping down with an upper shadow
/// reaching into the prior body, and a black candle engulfing it.
pub(crate) fn conceal_baby_swallow<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let marubozu = |j: usize| {
        c.lower_shadow(j) < c.avg(ShadowVeryShort, j)
            && c.upper_shadow(j) < c.avg(ShadowVeryShort, j)
    };
    if (i - 3..=i).all(|j| c.color(j) == -1)
        && marubozu(i - 3)
        && marubozu(i - 2)
        && c.body_gap_down(i - 1, i - 2)
        && c.upper_shadow(i - 1) > c.avg(ShadowVeryShort, i - 1)
        && c.high(i - 1) > c.close(i - 2)
        && c.high(i) > c.high(i - 1)
        && c.low(i) < c.low(i - 1)
    {
        100
    } else {
        0
    }
}

pub(crate) fn ladder_bottom_lookback(s: &CandleSettings) -> usize {
    s.period(ShadowVeryShort) + 4
}

/// Three falling black candles, a black one with an upper shadow, then a
/// white candle gapping up and closing above the prior high.
pub(crate) fn ladder_bottom<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 4) == -1
        && c.color(i - 3) == -1
        && c.color(i - 2) == -1
        && c.open(i - 4) > c.open(i - 3)
        && c.open(i - 3) > c.open(i - 2)
        && c.close(i - 4) > c.close(i - 3)
        && c.close(i - 3) > c.close(i - 2)
        && c.color(i - 1) == -1
        && c.upper_shadow(i - 1) > c.avg(ShadowVeryShort, i - 1)
        && c.color(i) == 1
        && c.open(i) > c.open(i - 1)
        && c.close(i) > c.high(i - 1)
    {
        100
    } else {
        0
    }
}

pub(crate) fn mat_hold_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, BodyLong]) + 4
}

/// Long white candle, three small candles drifting down above its body, and
/// a white candle closing above all of them.
pub(crate) fn mat_hold<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let floor = c.close(i - 4) - c.body(i - 4) * c.penetration();
    let small = (i - 3..i).all(|j| c.body(j) < c.avg(BodyShort, j));
    let holds = |j: usize| c.body_bottom(j) < c.close(i - 4) && c.body_bottom(j) > floor;
    if c.body(i - 4) > c.avg(BodyLong, i - 4)
        && small
        && c.color(i - 4) == 1
        && c.color(i - 3) == -1
        && c.color(i) == 1
        && c.body_gap_up(i - 3, i - 4)
        && holds(i - 2)
        && holds(i - 1)
        && c.body_top(i - 2) < c.open(i - 3)
        && c.body_top(i - 1) < c.body_top(i - 2)
        && c.open(i) > c.close(i - 1)
        && c.close(i) > c.high(i - 3).max(c.high(i - 2)).max(c.high(i - 1))
    {
        100
    } else {
        0
    }
}

pub(crate) fn rise_fall_three_methods_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, BodyLong]) + 4
}

/// Long candle, three small countermoves inside its range, and a long
/// candle resuming the first one's direction.
pub(crate) fn rise_fall_three_methods<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let direction = c.color(i - 4);
    let sign = if direction == 1 { T::one() } else { -T::one() };
    let small = (i - 3..i).all(|j| c.body(j) < c.avg(BodyShort, j));
    let inside = (i - 3..i)
        .all(|j| c.body_bottom(j) < c.high(i - 4) && c.body_top(j) > c.low(i - 4));
    if c.body(i - 4) > c.avg(BodyLong, i - 4)
        && small
        && c.body(i) > c.avg(BodyLong, i)
        && direction == -c.color(i - 3)
        && c.color(i - 3) == c.color(i - 2)
        && c.color(i - 2) == c.color(i - 1)
        && c.color(i - 1) == -c.color(i)
        && inside
        && c.close(i - 2) * sign < c.close(i - 3) * sign
        && c.close(i - 1) * sign < c.close(i - 2) * sign
        && c.open(i) * sign > c.close(i - 1) * sign
        && c.close(i) * sign > c.close(i - 4) * sign
    {
        direction * 100
    } else {
        0
    }
}
