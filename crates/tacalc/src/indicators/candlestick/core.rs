//! Candle geometry and the averaging settings shared by all patterns.
//!
//! Pattern rules compare a candle's body or shadows with the average of a
//! reference range over the bars just before it. Each [`SettingKind`] names
//! one such comparison ("long body", "doji body", "near" ...) and the
//! [`CandleSettings`] table says which range is averaged, over how many
//! bars, and with which factor:
//!
//! ```text
//! average(kind, j) = factor * mean(range(bars j-period .. j))     (period > 0)
//!                  = factor * range(bar j)                         (period = 0)
//! ```
//!
//! The `Shadows` range is halved, so it compares with a single shadow.
//!
//! | Setting | Range | Period | Factor |
//! |---|---|---|---|
//! | BodyLong | RealBody | 10 | 1.0 |
//! | BodyVeryLong | RealBody | 10 | 3.0 |
//! | BodyShort | RealBody | 10 | 1.0 |
//! | BodyDoji | HighLow | 10 | 0.1 |
//! | ShadowLong | RealBody | 0 | 1.0 |
//! | ShadowVeryLong | RealBody | 0 | 2.0 |
//! | ShadowShort | Shadows | 10 | 1.0 |
//! | ShadowVeryShort | HighLow | 10 | 0.1 |
//! | Near | HighLow | 5 | 0.2 |
//! | Far | HighLow | 5 | 0.6 |
//! | Equal | HighLow | 5 | 0.05 |

use std::ops::Range;

use strum::{AsRefStr, Display, EnumIter};

use crate::error::Result;
use crate::traits::SeriesElement;

/// Number of entries in a [`CandleSettings`] table.
pub const SETTING_COUNT: usize = 11;

/// Which per-bar range a setting averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeType {
    /// `|close - open|`.
    RealBody,
    /// `high - low`.
    HighLow,
    /// Upper plus lower shadow.
    Shadows,
}

/// The comparisons used by the pattern rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum SettingKind {
    /// Real body is long.
    BodyLong = 0,
    /// Real body is very long.
    BodyVeryLong = 1,
    /// Real body is short.
    BodyShort = 2,
    /// Real body is like a doji's.
    BodyDoji = 3,
    /// Shadow is long.
    ShadowLong = 4,
    /// Shadow is very long.
    ShadowVeryLong = 5,
    /// Shadow is short.
    ShadowShort = 6,
    /// Shadow is very short.
    ShadowVeryShort = 7,
    /// Two prices are near each other.
    Near = 8,
    /// Two prices are far from each other.
    Far = 9,
    /// Two prices are equal.
    Equal = 10,
}

/// One row of the settings table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleSetting {
    /// Range being averaged.
    pub range_type: RangeType,
    /// Number of preceding bars averaged; 0 uses the bar itself.
    pub avg_period: usize,
    /// Multiplier applied to the average.
    pub factor: f64,
}

impl CandleSetting {
    const fn new(range_type: RangeType, avg_period: usize, factor: f64) -> Self {
        Self {
            range_type,
            avg_period,
            factor,
        }
    }
}

/// The settings table, indexed by [`SettingKind`].
///
/// # Example
///
/// ```
/// use tacalc::indicators::candlestick::{CandleSetting, CandleSettings, RangeType, SettingKind};
///
/// let strict = CandleSettings::default().with(
///     SettingKind::BodyDoji,
///     CandleSetting { range_type: RangeType::HighLow, avg_period: 10, factor: 0.05 },
/// );
/// assert_eq!(strict.get(SettingKind::BodyDoji).factor, 0.05);
/// assert_eq!(strict.period(SettingKind::Near), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CandleSettings {
    table: [CandleSetting; SETTING_COUNT],
}

impl Default for CandleSettings {
    fn default() -> Self {
        use RangeType::{HighLow, RealBody, Shadows};
        Self {
            table: [
                CandleSetting::new(RealBody, 10, 1.0),
                CandleSetting::new(RealBody, 10, 3.0),
                CandleSetting::new(RealBody, 10, 1.0),
                CandleSetting::new(HighLow, 10, 0.1),
                CandleSetting::new(RealBody, 0, 1.0),
                CandleSetting::new(RealBody, 0, 2.0),
                CandleSetting::new(Shadows, 10, 1.0),
                CandleSetting::new(HighLow, 10, 0.1),
                CandleSetting::new(HighLow, 5, 0.2),
                CandleSetting::new(HighLow, 5, 0.6),
                CandleSetting::new(HighLow, 5, 0.05),
            ],
        }
    }
}

impl CandleSettings {
    /// Returns the row for `kind`.
    #[must_use]
    pub const fn get(&self, kind: SettingKind) -> CandleSetting {
        self.table[kind as usize]
    }

    /// Returns a copy with the row for `kind` replaced.
    #[must_use]
    pub const fn with(mut self, kind: SettingKind, setting: CandleSetting) -> Self {
        self.table[kind as usize] = setting;
        self
    }

    /// Averaging period of `kind`.
    #[must_use]
    pub const fn period(&self, kind: SettingKind) -> usize {
        self.table[kind as usize].avg_period
    }

    /// Largest averaging period among `kinds`.
    #[must_use]
    pub fn max_period(&self, kinds: &[SettingKind]) -> usize {
        kinds
            .iter()
            .map(|&kind| self.period(kind))
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Averaging<T> {
    range_type: RangeType,
    period: usize,
    period_t: T,
    factor: T,
}

/// Read-only view of aligned OHLC series plus converted settings.
pub(crate) struct Candles<'a, T> {
    open: &'a [T],
    high: &'a [T],
    low: &'a [T],
    close: &'a [T],
    averaging: [Averaging<T>; SETTING_COUNT],
    penetration: T,
}

impl<'a, T: SeriesElement> Candles<'a, T> {
    /// Builds the view. Lengths must already be validated.
    pub(crate) fn new(
        ohlc: [&'a [T]; 4],
        settings: &CandleSettings,
        penetration: f64,
    ) -> Result<Self> {
        let [open, high, low, close] = ohlc;
        let mut averaging = [Averaging {
            range_type: RangeType::RealBody,
            period: 0,
            period_t: T::zero(),
            factor: T::zero(),
        }; SETTING_COUNT];
        for (slot, setting) in averaging.iter_mut().zip(&settings.table) {
            *slot = Averaging {
                range_type: setting.range_type,
                period: setting.avg_period,
                period_t: T::from_usize(setting.avg_period)?,
                factor: T::from_f64(setting.factor)?,
            };
        }
        Ok(Self {
            open,
            high,
            low,
            close,
            averaging,
            penetration: T::from_f64(penetration)?,
        })
    }

    #[inline]
    pub(crate) fn open(&self, i: usize) -> T {
        self.open[i]
    }

    #[inline]
    pub(crate) fn high(&self, i: usize) -> T {
        self.high[i]
    }

    #[inline]
    pub(crate) fn low(&self, i: usize) -> T {
        self.low[i]
    }

    #[inline]
    pub(crate) fn close(&self, i: usize) -> T {
        self.close[i]
    }

    /// Penetration ratio of the patterns that take one.
    #[inline]
    pub(crate) fn penetration(&self) -> T {
        self.penetration
    }

    /// 1 for a white candle (close >= open), -1 for a black one.
    #[inline]
    pub(crate) fn color(&self, i: usize) -> i32 {
        if self.close[i] >= self.open[i] {
            1
        } else {
            -1
        }
    }

    #[inline]
    pub(crate) fn body(&self, i: usize) -> T {
        (self.close[i] - self.open[i]).abs()
    }

    #[inline]
    pub(crate) fn body_top(&self, i: usize) -> T {
        self.open[i].max(self.close[i])
    }

    #[inline]
    pub(crate) fn body_bottom(&self, i: usize) -> T {
        self.open[i].min(self.close[i])
    }

    #[inline]
    pub(crate) fn upper_shadow(&self, i: usize) -> T {
        self.high[i] - self.body_top(i)
    }

    #[inline]
    pub(crate) fn lower_shadow(&self, i: usize) -> T {
        self.body_bottom(i) - self.low[i]
    }

    #[inline]
    pub(crate) fn high_low(&self, i: usize) -> T {
        self.high[i] - self.low[i]
    }

    fn range(&self, range_type: RangeType, i: usize) -> T {
        match range_type {
            RangeType::RealBody => self.body(i),
            RangeType::HighLow => self.high_low(i),
            RangeType::Shadows => self.upper_shadow(i) + self.lower_shadow(i),
        }
    }

    /// Sum of the `range_type` measure over `bars`.
    fn range_sum(&self, range_type: RangeType, bars: Range<usize>) -> T {
        let mut total = T::zero();
        for k in bars {
            total = total + self.range(range_type, k);
        }
        total
    }

    /// Average of `kind` for the candle at `j`, taken over the bars before it.
    pub(crate) fn avg(&self, kind: SettingKind, j: usize) -> T {
        let a = self.averaging[kind as usize];
        let mut base = if a.period == 0 {
            self.range(a.range_type, j)
        } else {
            self.range_sum(a.range_type, j.saturating_sub(a.period)..j) / a.period_t
        };
        if a.range_type == RangeType::Shadows {
            base = base / T::two();
        }
        a.factor * base
    }

    /// The body of `later` lies entirely above the body of `earlier`.
    #[inline]
    pub(crate) fn body_gap_up(&self, later: usize, earlier: usize) -> bool {
        self.body_bottom(later) > self.body_top(earlier)
    }

    /// The body of `later` lies entirely below the body of `earlier`.
    #[inline]
    pub(crate) fn body_gap_down(&self, later: usize, earlier: usize) -> bool {
        self.body_top(later) < self.body_bottom(earlier)
    }

    /// The low of `later` is above the high of `earlier`.
    #[inline]
    pub(crate) fn candle_gap_up(&self, later: usize, earlier: usize) -> bool {
        self.low[later] > self.high[earlier]
    }

    /// The high of `later` is below the low of `earlier`.
    #[inline]
    pub(crate) fn candle_gap_down(&self, later: usize, earlier: usize) -> bool {
        self.high[later] < self.low[earlier]
    }
}
