//! Patterns formed by three consecutive candles, plus the hikkake family.
//!
//! Hikkake signals carry state across bars: the inside-bar setup emits
//! ±100, and a close beyond the setup's second bar within the next three
//! bars confirms it with ±200.

use super::core::{CandleSettings, Candles, SettingKind::*};
use crate::traits::SeriesElement;

pub(crate) fn two_crows_lookback(s: &CandleSettings) -> usize {
    s.period(BodyLong) + 2
}

/// Long white candle, a black one gapping up, then a black one opening
/// inside the second body and closing inside the first.
pub(crate) fn two_crows<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 2) == 1
        && c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.color(i - 1) == -1
        && c.body_gap_up(i - 1, i - 2)
        && c.color(i) == -1
        && c.open(i) < c.open(i - 1)
        && c.open(i) > c.close(i - 1)
        && c.close(i) > c.open(i - 2)
        && c.close(i) < c.close(i - 2)
    {
        -100
    } else {
        0
    }
}

pub(crate) fn three_inside_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, BodyLong]) + 2
}

/// Harami confirmed by a third candle closing beyond the first open.
pub(crate) fn three_inside<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let confirmed = (c.color(i - 2) == 1 && c.color(i) == -1 && c.close(i) < c.open(i - 2))
        || (c.color(i - 2) == -1 && c.color(i) == 1 && c.close(i) > c.open(i - 2));
    if c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.body(i - 1) <= c.avg(BodyShort, i - 1)
        && c.body_top(i - 1) < c.body_top(i - 2)
        && c.body_bottom(i - 1) > c.body_bottom(i - 2)
        && confirmed
    {
        -c.color(i - 2) * 100
    } else {
        0
    }
}

pub(crate) fn three_outside_lookback(_: &CandleSettings) -> usize {
    3
}

/// Engulfing confirmed by a third candle closing further in its direction.
pub(crate) fn three_outside<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 1) == 1
        && c.color(i - 2) == -1
        && c.close(i - 1) > c.open(i - 2)
        && c.open(i - 1) < c.close(i - 2)
        && c.close(i) > c.close(i - 1)
    {
        100
    } else if c.color(i - 1) == -1
        && c.color(i - 2) == 1
        && c.open(i - 1) > c.close(i - 2)
        && c.close(i - 1) < c.open(i - 2)
        && c.close(i) < c.close(i - 1)
    {
        -100
    } else {
        0
    }
}

pub(crate) fn three_stars_in_south_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[ShadowVeryShort, ShadowLong, BodyLong, BodyShort]) + 2
}

/// Three shrinking black candles, the last a small marubozu inside the
/// second's range.
pub(crate) fn three_stars_in_south<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 2) == -1
        && c.color(i - 1) == -1
        && c.color(i) == -1
        && c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.lower_shadow(i - 2) > c.avg(ShadowLong, i - 2)
        && c.body(i - 1) < c.body(i - 2)
        && c.open(i - 1) > c.close(i - 2)
        && c.open(i - 1) <= c.high(i - 2)
        && c.low(i - 1) < c.close(i - 2)
        && c.low(i - 1) >= c.low(i - 2)
        && c.lower_shadow(i - 1) > c.avg(ShadowVeryShort, i - 1)
        && c.body(i) < c.avg(BodyShort, i)
        && c.lower_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.upper_shadow(i) < c.avg(ShadowVeryShort, i)
        && c.low(i) > c.low(i - 1)
        && c.high(i) < c.high(i - 1)
    {
        100
    } else {
        0
    }
}

pub(crate) fn three_white_soldiers_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[ShadowVeryShort, BodyShort, Far, Near]) + 2
}

/// Three rising white candles opening inside the prior body and closing
/// near their highs, without shrinking bodies.
pub(crate) fn three_white_soldiers<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let rising = (i - 2..=i)
        .all(|j| c.color(j) == 1 && c.upper_shadow(j) < c.avg(ShadowVeryShort, j));
    if rising
        && c.close(i) > c.close(i - 1)
        && c.close(i - 1) > c.close(i - 2)
        && c.open(i - 1) > c.open(i - 2)
        && c.open(i - 1) <= c.close(i - 2) + c.avg(Near, i - 2)
        && c.open(i) > c.open(i - 1)
        && c.open(i) <= c.close(i - 1) + c.avg(Near, i - 1)
        && c.body(i - 1) > c.body(i - 2) - c.avg(Far, i - 2)
        && c.body(i) > c.body(i - 1) - c.avg(Far, i - 1)
        && c.body(i) > c.avg(BodyShort, i)
    {
        100
    } else {
        0
    }
}

pub(crate) fn abandoned_baby_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, BodyLong, BodyShort]) + 2
}

/// Long candle, a doji gapping away from it on both sides, and a candle
/// reversing deep into the first body.
pub(crate) fn abandoned_baby<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let depth = c.body(i - 2) * c.penetration();
    let top = c.color(i - 2) == 1
        && c.color(i) == -1
        && c.close(i) < c.close(i - 2) - depth
        && c.candle_gap_up(i - 1, i - 2)
        && c.candle_gap_down(i, i - 1);
    let bottom = c.color(i - 2) == -1
        && c.color(i) == 1
        && c.close(i) > c.close(i - 2) + depth
        && c.candle_gap_down(i - 1, i - 2)
        && c.candle_gap_up(i, i - 1);
    if c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.body(i - 1) <= c.avg(BodyDoji, i - 1)
        && c.body(i) > c.avg(BodyShort, i)
        && (top || bottom)
    {
        c.color(i) * 100
    } else {
        0
    }
}

pub(crate) fn advance_block_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[ShadowLong, ShadowShort, Far, Near, BodyLong]) + 2
}

/// Three white soldiers losing strength: shrinking bodies or growing upper
/// shadows.
pub(crate) fn advance_block<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let weakening = (c.body(i - 1) < c.body(i - 2) - c.avg(Far, i - 2)
        && c.body(i) < c.body(i - 1) + c.avg(Near, i - 1))
        || c.body(i) < c.body(i - 1) - c.avg(Far, i - 1)
        || (c.body(i) < c.body(i - 1)
            && c.body(i - 1) < c.body(i - 2)
            && (c.upper_shadow(i) > c.avg(ShadowShort, i)
                || c.upper_shadow(i - 1) > c.avg(ShadowShort, i - 1)))
        || (c.body(i) < c.body(i - 1) && c.upper_shadow(i) > c.avg(ShadowLong, i));
    if c.color(i - 2) == 1
        && c.color(i - 1) == 1
        && c.color(i) == 1
        && c.close(i) > c.close(i - 1)
        && c.close(i - 1) > c.close(i - 2)
        && c.open(i - 1) > c.open(i - 2)
        && c.open(i - 1) <= c.close(i - 2) + c.avg(Near, i - 2)
        && c.open(i) > c.open(i - 1)
        && c.open(i) <= c.close(i - 1) + c.avg(Near, i - 1)
        && c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.upper_shadow(i - 2) < c.avg(ShadowShort, i - 2)
        && weakening
    {
        -100
    } else {
        0
    }
}

pub(crate) fn evening_doji_star_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, BodyLong, BodyShort]) + 2
}

pub(crate) fn evening_doji_star<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.color(i - 2) == 1
        && c.body(i - 1) <= c.avg(BodyDoji, i - 1)
        && c.body_gap_up(i - 1, i - 2)
        && c.body(i) > c.avg(BodyShort, i)
        && c.color(i) == -1
        && c.close(i) < c.close(i - 2) - c.body(i - 2) * c.penetration()
    {
        -100
    } else {
        0
    }
}

pub(crate) fn evening_star_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, BodyLong]) + 2
}

/// Long white candle, a short body gapping up, then a black candle closing
/// deep inside the first body.
pub(crate) fn evening_star<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.color(i - 2) == 1
        && c.body(i - 1) <= c.avg(BodyShort, i - 1)
        && c.body_gap_up(i - 1, i - 2)
        && c.body(i) > c.avg(BodyShort, i)
        && c.color(i) == -1
        && c.close(i) < c.close(i - 2) - c.body(i - 2) * c.penetration()
    {
        -100
    } else {
        0
    }
}

pub(crate) fn gap_side_side_white_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[Near, Equal]) + 2
}

/// Two similar white candles side by side after a gap.
pub(crate) fn gap_side_side_white<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let up = c.body_gap_up(i - 1, i - 2) && c.body_gap_up(i, i - 2);
    let down = c.body_gap_down(i - 1, i - 2) && c.body_gap_down(i, i - 2);
    let near = c.avg(Near, i - 1);
    let equal = c.avg(Equal, i - 1);
    if (up || down)
        && c.color(i - 1) == 1
        && c.color(i) == 1
        && c.body(i) >= c.body(i - 1) - near
        && c.body(i) <= c.body(i - 1) + near
        && c.open(i) >= c.open(i - 1) - equal
        && c.open(i) <= c.open(i - 1) + equal
    {
        if c.body_gap_up(i - 1, i - 2) {
            100
        } else {
            -100
        }
    } else {
        0
    }
}

pub(crate) fn hikkake_lookback(_: &CandleSettings) -> usize {
    5
}

fn inside_setup<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> Option<i32> {
    if c.high(i - 1) < c.high(i - 2) && c.low(i - 1) > c.low(i - 2) {
        breakout(c, i)
    } else {
        None
    }
}

fn breakout<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> Option<i32> {
    if c.high(i) < c.high(i - 1) && c.low(i) < c.low(i - 1) {
        Some(100)
    } else if c.high(i) > c.high(i - 1) && c.low(i) > c.low(i - 1) {
        Some(-100)
    } else {
        None
    }
}

/// Resolves a hikkake family signal at `i` given its setup detector.
///
/// A setup at `i` reports ±100. Otherwise the latest setup within the
/// previous three bars is confirmed at `i` with ±200 when the close breaks
/// the setup's second bar, unless an earlier bar already confirmed it.
fn hikkake_signal<T, F>(c: &Candles<'_, T>, i: usize, setup: F) -> i32
where
    T: SeriesElement,
    F: Fn(usize) -> Option<i32>,
{
    if let Some(signal) = setup(i) {
        return signal;
    }
    let confirms = |bar: usize, at: usize, signal: i32| {
        (signal > 0 && c.close(bar) > c.high(at - 1))
            || (signal < 0 && c.close(bar) < c.low(at - 1))
    };
    for at in (i - 3..i).rev() {
        if let Some(signal) = setup(at) {
            if (at + 1..i).any(|bar| confirms(bar, at, signal)) {
                return 0;
            }
            return if confirms(i, at, signal) { signal * 2 } else { 0 };
        }
    }
    0
}

/// Inside bar followed by a false breakout.
pub(crate) fn hikkake<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    hikkake_signal(c, i, |j| inside_setup(c, j))
}

pub(crate) fn hikkake_mod_lookback(s: &CandleSettings) -> usize {
    s.period(Near).max(1) + 5
}

/// Hikkake on two nested inside bars, the first closing near its extreme.
pub(crate) fn hikkake_mod<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let setup = |j: usize| {
        if !(c.high(j - 2) < c.high(j - 3)
            && c.low(j - 2) > c.low(j - 3)
            && c.high(j - 1) < c.high(j - 2)
            && c.low(j - 1) > c.low(j - 2))
        {
            return None;
        }
        let near = c.avg(Near, j - 2);
        match breakout(c, j) {
            Some(100) if c.close(j - 2) <= c.low(j - 2) + near => Some(100),
            Some(-100) if c.close(j - 2) >= c.high(j - 2) - near => Some(-100),
            _ => None,
        }
    };
    hikkake_signal(c, i, setup)
}

pub(crate) fn identical_three_crows_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[ShadowVeryShort, Equal]) + 2
}

/// Three falling black candles, each opening at the prior close.
pub(crate) fn identical_three_crows<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let falling = (i - 2..=i)
        .all(|j| c.color(j) == -1 && c.lower_shadow(j) < c.avg(ShadowVeryShort, j));
    let opens_at_close = |j: usize| {
        let equal = c.avg(Equal, j - 1);
        c.open(j) <= c.close(j - 1) + equal && c.open(j) >= c.close(j - 1) - equal
    };
    if falling
        && c.close(i - 2) > c.close(i - 1)
        && c.close(i - 1) > c.close(i)
        && opens_at_close(i - 1)
        && opens_at_close(i)
    {
        -100
    } else {
        0
    }
}

pub(crate) fn morning_doji_star_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyDoji, BodyLong, BodyShort]) + 2
}

pub(crate) fn morning_doji_star<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.color(i - 2) == -1
        && c.body(i - 1) <= c.avg(BodyDoji, i - 1)
        && c.body_gap_down(i - 1, i - 2)
        && c.body(i) > c.avg(BodyShort, i)
        && c.color(i) == 1
        && c.close(i) > c.close(i - 2) + c.body(i - 2) * c.penetration()
    {
        100
    } else {
        0
    }
}

pub(crate) fn morning_star_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, BodyLong]) + 2
}

/// Long black candle, a short body gapping down, then a white candle
/// closing deep inside the first body.
pub(crate) fn morning_star<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.color(i - 2) == -1
        && c.body(i - 1) <= c.avg(BodyShort, i - 1)
        && c.body_gap_down(i - 1, i - 2)
        && c.body(i) > c.avg(BodyShort, i)
        && c.color(i) == 1
        && c.close(i) > c.close(i - 2) + c.body(i - 2) * c.penetration()
    {
        100
    } else {
        0
    }
}

pub(crate) fn stalled_pattern_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyLong, BodyShort, ShadowVeryShort, Near]) + 2
}

/// Two long white candles, then a small one riding on the second's
/// shoulder.
pub(crate) fn stalled_pattern<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 2) == 1
        && c.color(i - 1) == 1
        && c.color(i) == 1
        && c.close(i) > c.close(i - 1)
        && c.close(i - 1) > c.close(i - 2)
        && c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.body(i - 1) > c.avg(BodyLong, i - 1)
        && c.upper_shadow(i - 1) < c.avg(ShadowVeryShort, i - 1)
        && c.open(i - 1) > c.open(i - 2)
        && c.open(i - 1) <= c.close(i - 2) + c.avg(Near, i - 2)
        && c.body(i) < c.avg(BodyShort, i)
        && c.open(i) >= c.close(i - 1) - c.body(i) - c.avg(Near, i - 1)
    {
        -100
    } else {
        0
    }
}

pub(crate) fn stick_sandwich_lookback(s: &CandleSettings) -> usize {
    s.period(Equal) + 2
}

/// Black, white above the first close, black closing where the first did.
pub(crate) fn stick_sandwich<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let equal = c.avg(Equal, i - 2);
    if c.color(i - 2) == -1
        && c.color(i - 1) == 1
        && c.color(i) == -1
        && c.low(i - 1) > c.close(i - 2)
        && c.close(i) <= c.close(i - 2) + equal
        && c.close(i) >= c.close(i - 2) - equal
    {
        100
    } else {
        0
    }
}

pub(crate) fn tasuki_gap_lookback(s: &CandleSettings) -> usize {
    s.period(Near) + 2
}

/// Gap, a candle continuing it, and an opposite candle of similar size that
/// does not close the gap.
pub(crate) fn tasuki_gap<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let similar = (c.body(i - 1) - c.body(i)).abs() < c.avg(Near, i - 1);
    let upside = c.body_gap_up(i - 1, i - 2)
        && c.color(i - 1) == 1
        && c.color(i) == -1
        && c.open(i) < c.close(i - 1)
        && c.open(i) > c.open(i - 1)
        && c.close(i) < c.open(i - 1)
        && c.close(i) > c.body_top(i - 2);
    let downside = c.body_gap_down(i - 1, i - 2)
        && c.color(i - 1) == -1
        && c.color(i) == 1
        && c.open(i) < c.open(i - 1)
        && c.open(i) > c.close(i - 1)
        && c.close(i) > c.open(i - 1)
        && c.close(i) < c.body_bottom(i - 2);
    if (upside || downside) && similar {
        c.color(i - 1) * 100
    } else {
        0
    }
}

pub(crate) fn tristar_lookback(s: &CandleSettings) -> usize {
    s.period(BodyDoji) + 2
}

/// Three dojis, the middle one gapping away from the other two.
pub(crate) fn tristar<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    // all three bodies compare with the average before the first doji
    let doji = c.avg(BodyDoji, i - 2);
    if !(c.body(i - 2) <= doji && c.body(i - 1) <= doji && c.body(i) <= doji) {
        return 0;
    }
    let mut signal = 0;
    if c.body_gap_up(i - 1, i - 2) && c.body_top(i) < c.body_top(i - 1) {
        signal = -100;
    }
    if c.body_gap_down(i - 1, i - 2) && c.body_bottom(i) > c.body_bottom(i - 1) {
        signal = 100;
    }
    signal
}

pub(crate) fn unique_three_river_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, BodyLong]) + 2
}

pub(crate) fn unique_three_river<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.color(i - 2) == -1
        && c.color(i - 1) == -1
        && c.close(i - 1) > c.close(i - 2)
        && c.open(i - 1) <= c.open(i - 2)
        && c.low(i - 1) < c.low(i - 2)
        && c.body(i) < c.avg(BodyShort, i)
        && c.color(i) == 1
        && c.open(i) > c.low(i - 1)
    {
        100
    } else {
        0
    }
}

pub(crate) fn upside_gap_two_crows_lookback(s: &CandleSettings) -> usize {
    s.max_period(&[BodyShort, BodyLong]) + 2
}

/// Long white candle, a short black one gapping up, and a larger black one
/// engulfing it while staying above the first close.
pub(crate) fn upside_gap_two_crows<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    if c.color(i - 2) == 1
        && c.body(i - 2) > c.avg(BodyLong, i - 2)
        && c.color(i - 1) == -1
        && c.body(i - 1) <= c.avg(BodyShort, i - 1)
        && c.body_gap_up(i - 1, i - 2)
        && c.color(i) == -1
        && c.open(i) > c.open(i - 1)
        && c.close(i) < c.close(i - 1)
        && c.close(i) > c.close(i - 2)
    {
        -100
    } else {
        0
    }
}

pub(crate) fn xside_gap_three_methods_lookback(_: &CandleSettings) -> usize {
    2
}

/// Two candles in the gap direction, then an opposite one filling the gap.
pub(crate) fn xside_gap_three_methods<T: SeriesElement>(c: &Candles<'_, T>, i: usize) -> i32 {
    let gapped = match c.color(i - 2) {
        1 => c.body_gap_up(i - 1, i - 2),
        _ => c.body_gap_down(i - 1, i - 2),
    };
    if c.color(i - 2) == c.color(i - 1)
        && c.color(i - 1) == -c.color(i)
        && c.open(i) < c.body_top(i - 1)
        && c.open(i) > c.body_bottom(i - 1)
        && c.close(i) < c.body_top(i - 2)
        && c.close(i) > c.body_bottom(i - 2)
        && gapped
    {
        c.color(i - 2) * 100
    } else {
        0
    }
}
