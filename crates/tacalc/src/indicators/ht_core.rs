//! Hilbert Transform engine shared by the `HT_*` indicators and MAMA.
//!
//! The engine follows John Ehlers' homodyne discriminator as evaluated by the
//! reference library, bar by bar:
//!
//! 1. The price is smoothed with a 4-bar WMA (weights 4, 3, 2, 1).
//! 2. Four Hilbert filters produce the detrender, the quadrature `Q1` and the
//!    90 degree advanced components `jI`/`jQ`. Each filter keeps separate
//!    three-slot histories for odd and even bars.
//! 3. `I2`/`Q2` are smoothed, the discriminator `Re`/`Im` yields the raw
//!    period, which is rate-limited, clamped to `[6, 50]` and smoothed again.
//!
//! Indicators drive the engine with [`drive`] and keep any extra state (phase,
//! trendline, MAMA) in the visiting closure.
//!
//! # Lookback
//!
//! The WMA needs 3 seed bars. Indicators that only need the period or the
//! phasor run 9 further warm-up bars ([`HT_LOOKBACK`] = 32); those that need
//! the dominant cycle phase run 34 ([`HT_PHASE_LOOKBACK`] = 63).

use std::f64::consts::PI;

use crate::error::Result;
use crate::traits::SeriesElement;

/// Lookback of `HT_DCPERIOD`, `HT_PHASOR` and MAMA.
pub const HT_LOOKBACK: usize = 32;

/// Lookback of `HT_DCPHASE`, `HT_SINE`, `HT_TRENDLINE` and `HT_TRENDMODE`.
pub const HT_PHASE_LOOKBACK: usize = 63;

const WMA_SEED: usize = 3;
const SMOOTH_PRICE_SIZE: usize = 50;

pub(crate) fn rad2deg<T: SeriesElement>() -> T {
    T::lit(180.0 / PI)
}

pub(crate) fn deg2rad<T: SeriesElement>() -> T {
    T::lit(PI / 180.0)
}

/// Values the engine exposes for one bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HilbertBar<T> {
    pub today: usize,
    pub price: T,
    pub smoothed: T,
    /// In-phase component, `I1` delayed three bars of the current parity.
    pub in_phase: T,
    pub quadrature: T,
    pub smooth_period: T,
}

/// Incremental 4-bar WMA over the raw price.
struct PriceSmoother<'a, T> {
    data: &'a [T],
    sub: T,
    sum: T,
    trailing_value: T,
    trailing_idx: usize,
}

impl<'a, T: SeriesElement> PriceSmoother<'a, T> {
    fn new(data: &'a [T]) -> Self {
        let mut sub = T::zero();
        let mut sum = T::zero();
        for (i, &x) in data[..WMA_SEED].iter().enumerate() {
            sub = sub + x;
            sum = sum + x * T::lit((i + 1) as f64);
        }
        Self {
            data,
            sub,
            sum,
            trailing_value: T::zero(),
            trailing_idx: 0,
        }
    }

    fn next(&mut self, price: T) -> T {
        self.sub = self.sub + price;
        self.sub = self.sub - self.trailing_value;
        self.sum = self.sum + price * T::lit(4.0);
        self.trailing_value = self.data[self.trailing_idx];
        self.trailing_idx += 1;
        let smoothed = self.sum * T::lit(0.1);
        self.sum = self.sum - self.sub;
        smoothed
    }
}

/// One Hilbert FIR filter with separate odd/even histories.
#[derive(Debug, Clone, Copy, Default)]
struct HilbertFilter<T> {
    history: [[T; 3]; 2],
    prev: [T; 2],
    prev_input: [T; 2],
}

impl<T: SeriesElement> HilbertFilter<T> {
    fn apply(&mut self, input: T, slot: usize, parity: usize, adjusted_period: T) -> T {
        let a = T::lit(0.0962);
        let b = T::lit(0.5769);
        let scaled = a * input;
        let mut value = -self.history[parity][slot];
        self.history[parity][slot] = scaled;
        value = value + scaled;
        value = value - self.prev[parity];
        self.prev[parity] = b * self.prev_input[parity];
        value = value + self.prev[parity];
        self.prev_input[parity] = input;
        value * adjusted_period
    }
}

/// Homodyne discriminator state.
#[derive(Debug, Clone, Default)]
struct CycleState<T> {
    detrender: HilbertFilter<T>,
    q1: HilbertFilter<T>,
    ji: HilbertFilter<T>,
    jq: HilbertFilter<T>,
    slot: usize,
    // [even, odd] delayed in-phase values
    i1_prev2: [T; 2],
    i1_prev3: [T; 2],
    prev_i2: T,
    prev_q2: T,
    re: T,
    im: T,
    period: T,
    smooth_period: T,
}

impl<T: SeriesElement> CycleState<T> {
    /// Advances one bar and returns `(in_phase, quadrature)`.
    fn step(&mut self, today: usize, smoothed: T) -> (T, T) {
        let adjusted = T::lit(0.075) * self.period + T::lit(0.54);
        let even = today % 2 == 0;
        let (parity, other) = if even { (0, 1) } else { (1, 0) };
        let slot = self.slot;

        let detrender = self.detrender.apply(smoothed, slot, parity, adjusted);
        let q1 = self.q1.apply(detrender, slot, parity, adjusted);
        let in_phase = self.i1_prev3[parity];
        let ji = self.ji.apply(in_phase, slot, parity, adjusted);
        let jq = self.jq.apply(q1, slot, parity, adjusted);
        if even {
            self.slot = (self.slot + 1) % 3;
        }

        let fifth = T::lit(0.2);
        let rest = T::lit(0.8);
        let q2 = fifth * (q1 + ji) + rest * self.prev_q2;
        let i2 = fifth * (in_phase - jq) + rest * self.prev_i2;
        self.i1_prev3[other] = self.i1_prev2[other];
        self.i1_prev2[other] = detrender;

        self.re = fifth * (i2 * self.prev_i2 + q2 * self.prev_q2) + rest * self.re;
        self.im = fifth * (i2 * self.prev_q2 - q2 * self.prev_i2) + rest * self.im;
        self.prev_q2 = q2;
        self.prev_i2 = i2;

        let old = self.period;
        if self.im != T::zero() && self.re != T::zero() {
            self.period = T::lit(360.0) / ((self.im / self.re).atan() * rad2deg());
        }
        let upper = T::lit(1.5) * old;
        if self.period > upper {
            self.period = upper;
        }
        let lower = T::lit(0.67) * old;
        if self.period < lower {
            self.period = lower;
        }
        if self.period < T::lit(6.0) {
            self.period = T::lit(6.0);
        } else if self.period > T::lit(50.0) {
            self.period = T::lit(50.0);
        }
        self.period = fifth * self.period + rest * old;
        self.smooth_period = T::lit(0.33) * self.period + T::lit(0.67) * self.smooth_period;

        (in_phase, q1)
    }
}

/// Runs the engine over `data`, calling `visit` for every bar after the
/// warm-up. `lookback` selects the warm-up length and must be one of the two
/// lookback constants; the caller guarantees `data.len() > lookback`.
pub(crate) fn drive<T, F>(data: &[T], lookback: usize, mut visit: F) -> Result<()>
where
    T: SeriesElement,
    F: FnMut(&HilbertBar<T>) -> Result<()>,
{
    let warmup = if lookback == HT_PHASE_LOOKBACK { 34 } else { 9 };
    let mut smoother = PriceSmoother::new(data);
    let mut today = WMA_SEED;
    for &x in &data[WMA_SEED..WMA_SEED + warmup] {
        smoother.next(x);
        today += 1;
    }

    let mut cycle = CycleState::default();
    for &price in &data[today..] {
        let smoothed = smoother.next(price);
        let (in_phase, quadrature) = cycle.step(today, smoothed);
        visit(&HilbertBar {
            today,
            price,
            smoothed,
            in_phase,
            quadrature,
            smooth_period: cycle.smooth_period,
        })?;
        today += 1;
    }
    Ok(())
}

/// Dominant cycle phase tracker over a ring of smoothed prices.
#[derive(Debug, Clone)]
pub(crate) struct DcPhase<T> {
    ring: [T; SMOOTH_PRICE_SIZE],
    idx: usize,
    phase: T,
}

impl<T: SeriesElement> DcPhase<T> {
    pub(crate) fn new() -> Self {
        Self {
            ring: [T::zero(); SMOOTH_PRICE_SIZE],
            idx: 0,
            phase: T::zero(),
        }
    }

    /// Records the bar's smoothed price and returns the updated phase in
    /// degrees.
    pub(crate) fn update(&mut self, bar: &HilbertBar<T>) -> T {
        self.ring[self.idx] = bar.smoothed;
        let dc_period = dc_period_int(bar.smooth_period).min(SMOOTH_PRICE_SIZE);

        let mut real_part = T::zero();
        let mut imag_part = T::zero();
        let mut idx = self.idx;
        if dc_period > 0 {
            let n = T::lit(dc_period as f64);
            let two_pi = T::lit(2.0 * PI);
            for i in 0..dc_period {
                let angle = T::lit(i as f64) * two_pi / n;
                let price = self.ring[idx];
                real_part = real_part + angle.sin() * price;
                imag_part = imag_part + angle.cos() * price;
                idx = if idx == 0 { SMOOTH_PRICE_SIZE - 1 } else { idx - 1 };
            }
        }

        let magnitude = imag_part.abs();
        if magnitude > T::zero() {
            self.phase = (real_part / imag_part).atan() * rad2deg();
        } else if magnitude <= T::lit(0.01) {
            if real_part < T::zero() {
                self.phase = self.phase - T::lit(90.0);
            } else if real_part > T::zero() {
                self.phase = self.phase + T::lit(90.0);
            }
        }
        self.phase = self.phase + T::lit(90.0);
        self.phase = self.phase + T::lit(360.0) / bar.smooth_period;
        if imag_part < T::zero() {
            self.phase = self.phase + T::lit(180.0);
        }
        if self.phase > T::lit(315.0) {
            self.phase = self.phase - T::lit(360.0);
        }

        self.idx = (self.idx + 1) % SMOOTH_PRICE_SIZE;
        self.phase
    }
}

/// Instantaneous trendline: a 4-3-2-1 weighted blend of the raw price
/// averaged over the dominant cycle.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Trendline<T> {
    recent: [T; 3],
}

impl<T: SeriesElement> Trendline<T> {
    pub(crate) fn update(&mut self, data: &[T], bar: &HilbertBar<T>) -> T {
        let dc_period = dc_period_int(bar.smooth_period).min(bar.today + 1);
        let mut average = T::zero();
        for &x in &data[bar.today + 1 - dc_period..=bar.today] {
            average = average + x;
        }
        if dc_period > 0 {
            average = average / T::lit(dc_period as f64);
        }
        let [i1, i2, i3] = self.recent;
        let trend = (T::lit(4.0) * average + T::lit(3.0) * i1 + T::two() * i2 + i3) / T::lit(10.0);
        self.recent = [average, i1, i2];
        trend
    }
}

fn dc_period_int<T: SeriesElement>(smooth_period: T) -> usize {
    (smooth_period + T::lit(0.5)).to_usize().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize, length: f64) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + 10.0 * (2.0 * PI * i as f64 / length).sin())
            .collect()
    }

    #[test]
    fn test_price_smoother_weights() {
        let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let mut smoother = PriceSmoother::new(&data);
        // (4*4 + 3*3 + 2*2 + 1*1) / 10
        assert!((smoother.next(4.0) - 3.0).abs() < 1e-12);
        assert!((smoother.next(5.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_drive_visits_after_warmup() {
        let data = cycle(80, 20.0);
        let mut first = None;
        let mut count = 0;
        drive(&data, HT_LOOKBACK, |bar| {
            first.get_or_insert(bar.today);
            count += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(first, Some(12));
        assert_eq!(count, 80 - 12);

        let mut first = None;
        drive(&data, HT_PHASE_LOOKBACK, |bar| {
            first.get_or_insert(bar.today);
            Ok(())
        })
        .unwrap();
        assert_eq!(first, Some(37));
    }

    #[test]
    fn test_smooth_period_bounded() {
        let data = cycle(300, 25.0);
        drive(&data, HT_LOOKBACK, |bar| {
            if bar.today >= 100 {
                assert!(bar.smooth_period >= 6.0 && bar.smooth_period <= 50.0);
            }
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_dominant_cycle_detected() {
        let data = cycle(400, 20.0);
        let mut last = 0.0;
        drive(&data, HT_LOOKBACK, |bar| {
            last = bar.smooth_period;
            Ok(())
        })
        .unwrap();
        assert!((last - 20.0).abs() < 4.0, "smooth period {last}");
    }
}
