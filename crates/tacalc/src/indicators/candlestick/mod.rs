//! Candlestick pattern recognition.
//!
//! All 61 patterns take aligned open, high, low and close series and return
//! one `i32` per bar:
//!
//! - `100` / `-100`: bullish / bearish pattern on this bar
//! - `200` / `-200`: confirmed hikkake
//! - `0`: no pattern, and every bar inside the lookback
//!
//! Body and shadow sizes are judged against averages of the preceding bars,
//! configured by [`CandleSettings`]. The free functions (`cdl_*`) use the
//! default settings; [`CandlePattern::compute`] accepts custom ones.
//!
//! # Pattern Families
//!
//! - Single candle: [`cdl_doji`], [`cdl_hammer`], [`cdl_marubozu`], [`cdl_spinning_top`], ...
//! - Two candles: [`cdl_engulfing`], [`cdl_harami`], [`cdl_piercing`], [`cdl_kicking`], ...
//! - Three candles: [`cdl_morning_star`], [`cdl_3outside`], [`cdl_hikkake`], [`cdl_tristar`], ...
//! - Four or five candles: [`cdl_3black_crows`], [`cdl_breakaway`], [`cdl_mat_hold`], ...
//!
//! Seven patterns take a penetration ratio: how far the last candle must
//! reach into the first candle's body.
//!
//! # Example
//!
//! ```
//! use tacalc::indicators::candlestick::{cdl_engulfing, CandlePattern};
//!
//! let open = [10.0_f64, 10.0, 8.5];
//! let high = [10.2_f64, 10.1, 10.6];
//! let low = [9.8_f64, 8.9, 8.4];
//! let close = [10.0_f64, 9.0, 10.5];
//!
//! assert_eq!(cdl_engulfing(&open, &high, &low, &close).unwrap(), vec![0, 0, 100]);
//! assert_eq!(CandlePattern::Engulfing.to_string(), "CDLENGULFING");
//! ```

pub mod core;
pub mod multi_candle;
pub mod single;
pub mod three_candle;
pub mod two_candle;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

pub use self::core::{CandleSetting, CandleSettings, RangeType, SettingKind, SETTING_COUNT};

use self::core::Candles;
use crate::error::Result;
use crate::output::signal_output;
use crate::traits::{validate_range, validate_same_len, SeriesElement};

type Detector<T> = fn(&Candles<'_, T>, usize) -> i32;

macro_rules! candle_patterns {
    (
        $(
            #[doc = $label:literal]
            $variant:ident = $name:literal => $module:ident::{$detect:ident, $lookback:ident},
            $func:ident, $func_lookback:ident $(, penetration = $pen:literal)?;
        )*
    ) => {
        /// Candlestick pattern selector, named by its function code.
        #[derive(
            Copy,
            Clone,
            Debug,
            PartialEq,
            Eq,
            Hash,
            AsRefStr,
            Display,
            EnumIter,
            EnumString,
            IntoStaticStr,
        )]
        #[strum(ascii_case_insensitive)]
        pub enum CandlePattern {
            $(
                #[doc = $label]
                #[strum(serialize = $name)]
                $variant,
            )*
        }

        impl CandlePattern {
            /// Number of bars before the first possible signal.
            #[must_use]
            pub fn lookback(self, settings: &CandleSettings) -> usize {
                match self {
                    $(Self::$variant => $module::$lookback(settings),)*
                }
            }

            /// Human-readable pattern name, e.g. `"Two Crows"`.
            #[must_use]
            pub fn description(self) -> &'static str {
                let label: &'static str = match self {
                    $(Self::$variant => $label,)*
                };
                label.trim().trim_end_matches('.')
            }

            /// Default penetration ratio, for the patterns that take one.
            #[must_use]
            pub const fn default_penetration(self) -> Option<f64> {
                match self {
                    $(Self::$variant => candle_patterns!(@penetration $($pen)?),)*
                }
            }

            fn detector<T: SeriesElement>(self) -> Detector<T> {
                match self {
                    $(Self::$variant => $module::$detect::<T>,)*
                }
            }
        }

        $(
            candle_patterns!(@public $variant, $func, $func_lookback, [$label] $(, $pen)?);
        )*
    };
    (@penetration) => { None };
    (@penetration $pen:literal) => { Some($pen) };
    (@public $variant:ident, $func:ident, $func_lookback:ident, [$label:literal]) => {
        #[doc = $label]
        ///
        /// # Errors
        ///
        /// Returns `Error::LengthMismatch` if the four series differ in length.
        #[must_use = "this returns a Result with the pattern signals, which should be used"]
        pub fn $func<T: SeriesElement>(
            open: &[T],
            high: &[T],
            low: &[T],
            close: &[T],
        ) -> Result<Vec<i32>> {
            let settings = CandleSettings::default();
            CandlePattern::$variant.compute(open, high, low, close, &settings, None)
        }

        #[doc = concat!("Lookback of [`", stringify!($func), "`] with the default settings.")]
        #[must_use]
        pub fn $func_lookback() -> usize {
            CandlePattern::$variant.lookback(&CandleSettings::default())
        }
    };
    (@public $variant:ident, $func:ident, $func_lookback:ident, [$label:literal], $pen:literal) => {
        #[doc = $label]
        ///
        /// `penetration` is a ratio of the first body.
        #[doc = concat!("Defaults to ", stringify!($pen), ".")]
        ///
        /// # Errors
        ///
        /// Returns `Error::LengthMismatch` if the four series differ in length,
        /// or `Error::InvalidParameter` for a negative penetration.
        #[must_use = "this returns a Result with the pattern signals, which should be used"]
        pub fn $func<T: SeriesElement>(
            open: &[T],
            high: &[T],
            low: &[T],
            close: &[T],
            penetration: f64,
        ) -> Result<Vec<i32>> {
            CandlePattern::$variant.compute(
                open,
                high,
                low,
                close,
                &CandleSettings::default(),
                Some(penetration),
            )
        }

        #[doc = concat!("Lookback of [`", stringify!($func), "`] with the default settings.")]
        #[must_use]
        pub fn $func_lookback() -> usize {
            CandlePattern::$variant.lookback(&CandleSettings::default())
        }
    };
}

candle_patterns! {
    /// Two Crows.
    TwoCrows = "CDL2CROWS" => three_candle::{two_crows, two_crows_lookback},
        cdl_2crows, cdl_2crows_lookback;
    /// Three Black Crows.
    ThreeBlackCrows = "CDL3BLACKCROWS"
        => multi_candle::{three_black_crows, three_black_crows_lookback},
        cdl_3black_crows, cdl_3black_crows_lookback;
    /// Three Inside Up/Down.
    ThreeInside = "CDL3INSIDE" => three_candle::{three_inside, three_inside_lookback},
        cdl_3inside, cdl_3inside_lookback;
    /// Three-Line Strike.
    ThreeLineStrike = "CDL3LINESTRIKE"
        => multi_candle::{three_line_strike, three_line_strike_lookback},
        cdl_3line_strike, cdl_3line_strike_lookback;
    /// Three Outside Up/Down.
    ThreeOutside = "CDL3OUTSIDE" => three_candle::{three_outside, three_outside_lookback},
        cdl_3outside, cdl_3outside_lookback;
    /// Three Stars In The South.
    ThreeStarsInSouth = "CDL3STARSINSOUTH"
        => three_candle::{three_stars_in_south, three_stars_in_south_lookback},
        cdl_3stars_in_south, cdl_3stars_in_south_lookback;
    /// Three Advancing White Soldiers.
    ThreeWhiteSoldiers = "CDL3WHITESOLDIERS"
        => three_candle::{three_white_soldiers, three_white_soldiers_lookback},
        cdl_3white_soldiers, cdl_3white_soldiers_lookback;
    /// Abandoned Baby.
    AbandonedBaby = "CDLABANDONEDBABY" => three_candle::{abandoned_baby, abandoned_baby_lookback},
        cdl_abandoned_baby, cdl_abandoned_baby_lookback, penetration = 0.3;
    /// Advance Block.
    AdvanceBlock = "CDLADVANCEBLOCK" => three_candle::{advance_block, advance_block_lookback},
        cdl_advance_block, cdl_advance_block_lookback;
    /// Belt-hold.
    BeltHold = "CDLBELTHOLD" => single::{belt_hold, belt_hold_lookback},
        cdl_belt_hold, cdl_belt_hold_lookback;
    /// Breakaway.
    Breakaway = "CDLBREAKAWAY" => multi_candle::{breakaway, breakaway_lookback},
        cdl_breakaway, cdl_breakaway_lookback;
    /// Closing Marubozu.
    ClosingMarubozu = "CDLCLOSINGMARUBOZU" => single::{closing_marubozu, closing_marubozu_lookback},
        cdl_closing_marubozu, cdl_closing_marubozu_lookback;
    /// Concealing Baby Swallow.
    ConcealBabySwallow = "CDLCONCEALBABYSWALL"
        => multi_candle::{conceal_baby_swallow, conceal_baby_swallow_lookback},
        cdl_conceal_baby_swallow, cdl_conceal_baby_swallow_lookback;
    /// Counterattack.
    CounterAttack = "CDLCOUNTERATTACK" => two_candle::{counter_attack, counter_attack_lookback},
        cdl_counter_attack, cdl_counter_attack_lookback;
    /// Dark Cloud Cover.
    DarkCloudCover = "CDLDARKCLOUDCOVER"
        => two_candle::{dark_cloud_cover, dark_cloud_cover_lookback},
        cdl_dark_cloud_cover, cdl_dark_cloud_cover_lookback, penetration = 0.5;
    /// Doji.
    Doji = "CDLDOJI" => single::{doji, doji_lookback},
        cdl_doji, cdl_doji_lookback;
    /// Doji Star.
    DojiStar = "CDLDOJISTAR" => two_candle::{doji_star, doji_star_lookback},
        cdl_doji_star, cdl_doji_star_lookback;
    /// Dragonfly Doji.
    DragonflyDoji = "CDLDRAGONFLYDOJI" => single::{dragonfly_doji, dragonfly_doji_lookback},
        cdl_dragonfly_doji, cdl_dragonfly_doji_lookback;
    /// Engulfing Pattern.
    Engulfing = "CDLENGULFING" => two_candle::{engulfing, engulfing_lookback},
        cdl_engulfing, cdl_engulfing_lookback;
    /// Evening Doji Star.
    EveningDojiStar = "CDLEVENINGDOJISTAR"
        => three_candle::{evening_doji_star, evening_doji_star_lookback},
        cdl_evening_doji_star, cdl_evening_doji_star_lookback, penetration = 0.3;
    /// Evening Star.
    EveningStar = "CDLEVENINGSTAR" => three_candle::{evening_star, evening_star_lookback},
        cdl_evening_star, cdl_evening_star_lookback, penetration = 0.3;
    /// Up/Down-gap side-by-side white lines.
    GapSideSideWhite = "CDLGAPSIDESIDEWHITE"
        => three_candle::{gap_side_side_white, gap_side_side_white_lookback},
        cdl_gap_side_side_white, cdl_gap_side_side_white_lookback;
    /// Gravestone Doji.
    GravestoneDoji = "CDLGRAVESTONEDOJI" => single::{gravestone_doji, gravestone_doji_lookback},
        cdl_gravestone_doji, cdl_gravestone_doji_lookback;
    /// Hammer.
    Hammer = "CDLHAMMER" => single::{hammer, hammer_lookback},
        cdl_hammer, cdl_hammer_lookback;
    /// Hanging Man.
    HangingMan = "CDLHANGINGMAN" => single::{hanging_man, hanging_man_lookback},
        cdl_hanging_man, cdl_hanging_man_lookback;
    /// Harami Pattern.
    Harami = "CDLHARAMI" => two_candle::{harami, harami_lookback},
        cdl_harami, cdl_harami_lookback;
    /// Harami Cross Pattern.
    HaramiCross = "CDLHARAMICROSS" => two_candle::{harami_cross, harami_cross_lookback},
        cdl_harami_cross, cdl_harami_cross_lookback;
    /// High-Wave Candle.
    HighWave = "CDLHIGHWAVE" => single::{high_wave, high_wave_lookback},
        cdl_high_wave, cdl_high_wave_lookback;
    /// Hikkake Pattern.
    Hikkake = "CDLHIKKAKE" => three_candle::{hikkake, hikkake_lookback},
        cdl_hikkake, cdl_hikkake_lookback;
    /// Modified Hikkake Pattern.
    HikkakeMod = "CDLHIKKAKEMOD" => three_candle::{hikkake_mod, hikkake_mod_lookback},
        cdl_hikkake_mod, cdl_hikkake_mod_lookback;
    /// Homing Pigeon.
    HomingPigeon = "CDLHOMINGPIGEON" => two_candle::{homing_pigeon, homing_pigeon_lookback},
        cdl_homing_pigeon, cdl_homing_pigeon_lookback;
    /// Identical Three Crows.
    IdenticalThreeCrows = "CDLIDENTICAL3CROWS"
        => three_candle::{identical_three_crows, identical_three_crows_lookback},
        cdl_identical_3crows, cdl_identical_3crows_lookback;
    /// In-Neck Pattern.
    InNeck = "CDLINNECK" => two_candle::{in_neck, in_neck_lookback},
        cdl_in_neck, cdl_in_neck_lookback;
    /// Inverted Hammer.
    InvertedHammer = "CDLINVERTEDHAMMER" => single::{inverted_hammer, inverted_hammer_lookback},
        cdl_inverted_hammer, cdl_inverted_hammer_lookback;
    /// Kicking.
    Kicking = "CDLKICKING" => two_candle::{kicking, kicking_lookback},
        cdl_kicking, cdl_kicking_lookback;
    /// Kicking, bull/bear decided by the longer marubozu.
    KickingByLength = "CDLKICKINGBYLENGTH"
        => two_candle::{kicking_by_length, kicking_by_length_lookback},
        cdl_kicking_by_length, cdl_kicking_by_length_lookback;
    /// Ladder Bottom.
    LadderBottom = "CDLLADDERBOTTOM" => multi_candle::{ladder_bottom, ladder_bottom_lookback},
        cdl_ladder_bottom, cdl_ladder_bottom_lookback;
    /// Long Legged Doji.
    LongLeggedDoji = "CDLLONGLEGGEDDOJI" => single::{long_legged_doji, long_legged_doji_lookback},
        cdl_longleg_doji, cdl_longleg_doji_lookback;
    /// Long Line Candle.
    LongLine = "CDLLONGLINE" => single::{long_line, long_line_lookback},
        cdl_long_line, cdl_long_line_lookback;
    /// Marubozu.
    Marubozu = "CDLMARUBOZU" => single::{marubozu, marubozu_lookback},
        cdl_marubozu, cdl_marubozu_lookback;
    /// Matching Low.
    MatchingLow = "CDLMATCHINGLOW" => two_candle::{matching_low, matching_low_lookback},
        cdl_matching_low, cdl_matching_low_lookback;
    /// Mat Hold.
    MatHold = "CDLMATHOLD" => multi_candle::{mat_hold, mat_hold_lookback},
        cdl_mat_hold, cdl_mat_hold_lookback, penetration = 0.5;
    /// Morning Doji Star.
    MorningDojiStar = "CDLMORNINGDOJISTAR"
        => three_candle::{morning_doji_star, morning_doji_star_lookback},
        cdl_morning_doji_star, cdl_morning_doji_star_lookback, penetration = 0.3;
    /// Morning Star.
    MorningStar = "CDLMORNINGSTAR" => three_candle::{morning_star, morning_star_lookback},
        cdl_morning_star, cdl_morning_star_lookback, penetration = 0.3;
    /// On-Neck Pattern.
    OnNeck = "CDLONNECK" => two_candle::{on_neck, on_neck_lookback},
        cdl_on_neck, cdl_on_neck_lookback;
    /// Piercing Pattern.
    Piercing = "CDLPIERCING" => two_candle::{piercing, piercing_lookback},
        cdl_piercing, cdl_piercing_lookback;
    /// Rickshaw Man.
    RickshawMan = "CDLRICKSHAWMAN" => single::{rickshaw_man, rickshaw_man_lookback},
        cdl_rickshaw_man, cdl_rickshaw_man_lookback;
    /// Rising/Falling Three Methods.
    RiseFallThreeMethods = "CDLRISEFALL3METHODS"
        => multi_candle::{rise_fall_three_methods, rise_fall_three_methods_lookback},
        cdl_rise_fall_3methods, cdl_rise_fall_3methods_lookback;
    /// Separating Lines.
    SeparatingLines = "CDLSEPARATINGLINES"
        => two_candle::{separating_lines, separating_lines_lookback},
        cdl_separating_lines, cdl_separating_lines_lookback;
    /// Shooting Star.
    ShootingStar = "CDLSHOOTINGSTAR" => single::{shooting_star, shooting_star_lookback},
        cdl_shooting_star, cdl_shooting_star_lookback;
    /// Short Line Candle.
    ShortLine = "CDLSHORTLINE" => single::{short_line, short_line_lookback},
        cdl_short_line, cdl_short_line_lookback;
    /// Spinning Top.
    SpinningTop = "CDLSPINNINGTOP" => single::{spinning_top, spinning_top_lookback},
        cdl_spinning_top, cdl_spinning_top_lookback;
    /// Stalled Pattern.
    StalledPattern = "CDLSTALLEDPATTERN"
        => three_candle::{stalled_pattern, stalled_pattern_lookback},
        cdl_stalled_pattern, cdl_stalled_pattern_lookback;
    /// Stick Sandwich.
    StickSandwich = "CDLSTICKSANDWICH" => three_candle::{stick_sandwich, stick_sandwich_lookback},
        cdl_stick_sandwich, cdl_stick_sandwich_lookback;
    /// Takuri (dragonfly doji with a very long lower shadow).
    Takuri = "CDLTAKURI" => single::{takuri, takuri_lookback},
        cdl_takuri, cdl_takuri_lookback;
    /// Tasuki Gap.
    TasukiGap = "CDLTASUKIGAP" => three_candle::{tasuki_gap, tasuki_gap_lookback},
        cdl_tasuki_gap, cdl_tasuki_gap_lookback;
    /// Thrusting Pattern.
    Thrusting = "CDLTHRUSTING" => two_candle::{thrusting, thrusting_lookback},
        cdl_thrusting, cdl_thrusting_lookback;
    /// Tristar Pattern.
    Tristar = "CDLTRISTAR" => three_candle::{tristar, tristar_lookback},
        cdl_tristar, cdl_tristar_lookback;
    /// Unique 3 River.
    UniqueThreeRiver = "CDLUNIQUE3RIVER"
        => three_candle::{unique_three_river, unique_three_river_lookback},
        cdl_unique_3river, cdl_unique_3river_lookback;
    /// Upside Gap Two Crows.
    UpsideGapTwoCrows = "CDLUPSIDEGAP2CROWS"
        => three_candle::{upside_gap_two_crows, upside_gap_two_crows_lookback},
        cdl_upside_gap_2crows, cdl_upside_gap_2crows_lookback;
    /// Upside/Downside Gap Three Methods.
    XSideGapThreeMethods = "CDLXSIDEGAP3METHODS"
        => three_candle::{xside_gap_three_methods, xside_gap_three_methods_lookback},
        cdl_xside_gap_3methods, cdl_xside_gap_3methods_lookback;
}

impl CandlePattern {
    /// Function code, e.g. `"CDLDOJI"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Runs the pattern over aligned OHLC series.
    ///
    /// `penetration` is only read by the patterns that take one; `None`
    /// selects their default.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the series differ in length, or
    /// `Error::InvalidParameter` for a negative or non-finite penetration.
    #[must_use = "this returns a Result with the pattern signals, which should be used"]
    pub fn compute<T: SeriesElement>(
        self,
        open: &[T],
        high: &[T],
        low: &[T],
        close: &[T],
        settings: &CandleSettings,
        penetration: Option<f64>,
    ) -> Result<Vec<i32>> {
        let len = validate_same_len(self.name(), &[open, high, low, close])?;
        let penetration = match self.default_penetration() {
            Some(default) => {
                let value = penetration.unwrap_or(default);
                validate_range("penetration", value, 0.0, 3.0e37)?;
                value
            }
            None => 0.0,
        };

        let mut out = signal_output(len);
        let lookback = self.lookback(settings);
        if len <= lookback {
            return Ok(out);
        }
        let candles = Candles::new([open, high, low, close], settings, penetration)?;
        let detect = self.detector::<T>();
        for (i, signal) in out.iter_mut().enumerate().skip(lookback) {
            *signal = detect(&candles, i);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::core::tests::Bars;
    use super::*;

    fn wavy_bars(n: usize) -> Bars {
        let mut bars = Bars::default();
        for i in 0..n {
            let x = i as f64;
            let open = 100.0 + (x * 0.7).sin() * 4.0;
            let close = 100.0 + (x * 0.7 + 0.9).sin() * 4.0;
            let high = open.max(close) + 0.5 + (x * 1.3).cos().abs();
            let low = open.min(close) - 0.5 - (x * 0.4).sin().abs();
            bars.push(open, high, low, close);
        }
        bars
    }

    #[test]
    fn test_pattern_table() {
        assert_eq!(CandlePattern::iter().count(), 61);
        let with_penetration = CandlePattern::iter()
            .filter(|p| p.default_penetration().is_some())
            .count();
        assert_eq!(with_penetration, 7);
        assert_eq!(CandlePattern::MatHold.default_penetration(), Some(0.5));
        assert_eq!(
            CandlePattern::from_str("cdlmorningstar").unwrap(),
            CandlePattern::MorningStar
        );
        assert_eq!(CandlePattern::ThreeBlackCrows.name(), "CDL3BLACKCROWS");
        assert_eq!(
            CandlePattern::ThreeBlackCrows.description(),
            "Three Black Crows"
        );
    }

    #[test]
    fn test_engulfing_after_neutral_bars() {
        let mut bars = Bars::default();
        for _ in 0..5 {
            bars.push(10.0, 10.2, 9.8, 10.0);
        }
        bars.push(10.0, 10.1, 8.9, 9.0);
        bars.push(8.5, 10.6, 8.4, 10.5);
        let (o, h, l, c) = bars.series();
        let result = cdl_engulfing(o, h, l, c).unwrap();
        assert_eq!(result, vec![0, 0, 0, 0, 0, 0, 100]);
    }

    #[test]
    fn test_empty_and_short_inputs() {
        for pattern in CandlePattern::iter() {
            let empty: [f64; 0] = [];
            let settings = CandleSettings::default();
            let out = pattern
                .compute(&empty, &empty, &empty, &empty, &settings, None)
                .unwrap();
            assert!(out.is_empty(), "{pattern}");

            let short = Bars::neutral(pattern.lookback(&settings));
            let (o, h, l, c) = short.series();
            let out = pattern.compute(o, h, l, c, &settings, None).unwrap();
            assert!(out.iter().all(|&v| v == 0), "{pattern}");
        }
    }

    #[test]
    fn test_length_mismatch_is_usage_error() {
        let bars = Bars::neutral(10);
        let err = cdl_doji(&bars.open, &bars.high[..9], &bars.low, &bars.close).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_negative_penetration_rejected() {
        let bars = Bars::neutral(20);
        let (o, h, l, c) = bars.series();
        assert!(cdl_morning_star(o, h, l, c, -0.1).is_err());
        // patterns without penetration ignore it
        let settings = CandleSettings::default();
        let doji = CandlePattern::Doji;
        assert!(doji.compute(o, h, l, c, &settings, Some(-1.0)).is_ok());
    }

    #[test]
    fn test_neutral_bars_trigger_nothing() {
        let bars = Bars::neutral(40);
        let (o, h, l, c) = bars.series();
        let settings = CandleSettings::default();
        for pattern in CandlePattern::iter() {
            let out = pattern.compute(o, h, l, c, &settings, None).unwrap();
            assert!(out.iter().all(|&v| v == 0), "{pattern}");
        }
    }

    #[test]
    fn test_signals_respect_lookback_and_range() {
        let bars = wavy_bars(200);
        let (o, h, l, c) = bars.series();
        let settings = CandleSettings::default();
        for pattern in CandlePattern::iter() {
            let out = pattern.compute(o, h, l, c, &settings, None).unwrap();
            let lookback = pattern.lookback(&settings);
            assert_eq!(out.len(), 200);
            assert!(out[..lookback].iter().all(|&v| v == 0), "{pattern}");
            assert!(
                out.iter().all(|v| [-200, -100, 0, 100, 200].contains(v)),
                "{pattern}"
            );
        }
    }

    #[test]
    fn test_custom_settings_change_detection() {
        let mut bars = Bars::neutral(10);
        bars.push(100.0, 101.5, 98.5, 100.5);
        let (o, h, l, c) = bars.series();
        assert_eq!(cdl_doji(o, h, l, c).unwrap()[10], 0);

        let loose = CandleSettings::default().with(
            SettingKind::BodyDoji,
            CandleSetting {
                range_type: RangeType::HighLow,
                avg_period: 10,
                factor: 0.2,
            },
        );
        let out = CandlePattern::Doji
            .compute(o, h, l, c, &loose, None)
            .unwrap();
        assert_eq!(out[10], 100);

        let short_window = CandleSettings::default().with(
            SettingKind::BodyDoji,
            CandleSetting {
                range_type: RangeType::HighLow,
                avg_period: 3,
                factor: 0.1,
            },
        );
        assert_eq!(CandlePattern::Doji.lookback(&short_window), 3);
    }

    #[test]
    fn test_f32_input() {
        let open = [10.0_f32, 10.0, 8.5];
        let high = [10.2_f32, 10.1, 10.6];
        let low = [9.8_f32, 8.9, 8.4];
        let close = [10.0_f32, 9.0, 10.5];
        assert_eq!(cdl_engulfing(&open, &high, &low, &close).unwrap()[2], 100);
    }
}
