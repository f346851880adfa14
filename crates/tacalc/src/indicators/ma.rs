//! Generic moving average dispatch.
//!
//! [`MaType`] selects one of the nine averages by name or by its numeric
//! code, and [`ma`] computes it. Composite indicators (MACDEXT, APO, PPO,
//! BBANDS, STOCH) take a `MaType` for each smoothing stage.
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//!
//! use tacalc::indicators::ma::{ma, MaType};
//!
//! let kind = MaType::from_str("wma").unwrap();
//! assert_eq!(kind, MaType::Wma);
//! assert_eq!(MaType::from_repr(2), Some(MaType::Wma));
//!
//! let result = ma(&[1.0_f64, 2.0, 3.0], 3, kind).unwrap();
//! assert!((result[2] - 14.0 / 6.0).abs() < 1e-12);
//! ```

use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

use crate::error::{Error, Result};
use crate::indicators::{dema, ema, kama, mama, sma, t3, tema, trima, wma};
use crate::output::real_output;
use crate::traits::{validate_period, SeriesElement};

/// Default MAMA limits used when MAMA is selected through [`ma`].
const MAMA_FAST: f64 = 0.5;
const MAMA_SLOW: f64 = 0.05;
/// Default T3 volume factor used when T3 is selected through [`ma`].
const T3_VFACTOR: f64 = 0.7;

/// Moving average kind, with the numeric codes `0..=8`.
#[repr(u8)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MaType {
    /// Simple moving average.
    #[default]
    Sma = 0,
    /// Exponential moving average.
    Ema = 1,
    /// Weighted moving average.
    Wma = 2,
    /// Double exponential moving average.
    Dema = 3,
    /// Triple exponential moving average.
    Tema = 4,
    /// Triangular moving average.
    Trima = 5,
    /// Kaufman adaptive moving average.
    Kama = 6,
    /// MESA adaptive moving average (MAMA output).
    Mama = 7,
    /// Tillson T3 with volume factor 0.7.
    T3 = 8,
}

impl MaType {
    /// Looks up a moving average kind by numeric code.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `code` is not in `0..=8`.
    pub fn from_code(code: i64) -> Result<Self> {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_repr)
            .ok_or(Error::InvalidParameter {
                name: "ma_type",
                value: code as f64,
                reason: "moving average type must be 0..=8",
            })
    }
}

/// Returns the lookback of the selected moving average.
///
/// A period of 1 has lookback 0 for every kind.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `1..=100000`.
pub fn ma_lookback(period: usize, ma_type: MaType) -> Result<usize> {
    validate_period(period, 1)?;
    if period == 1 {
        return Ok(0);
    }
    match ma_type {
        MaType::Sma => sma::sma_lookback(period),
        MaType::Ema => ema::ema_lookback(period),
        MaType::Wma => wma::wma_lookback(period),
        MaType::Dema => dema::dema_lookback(period),
        MaType::Tema => tema::tema_lookback(period),
        MaType::Trima => trima::trima_lookback(period),
        MaType::Kama => kama::kama_lookback(period),
        MaType::Mama => mama::mama_lookback(MAMA_FAST, MAMA_SLOW),
        MaType::T3 => t3::t3_lookback(period, T3_VFACTOR),
    }
}

/// Computes the selected moving average.
///
/// A period of 1 returns a copy of the input.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside `1..=100000`.
#[must_use = "this returns a Result with the moving average, which should be used"]
pub fn ma<T: SeriesElement>(data: &[T], period: usize, ma_type: MaType) -> Result<Vec<T>> {
    validate_period(period, 1)?;
    if period == 1 {
        return Ok(data.to_vec());
    }
    match ma_type {
        MaType::Sma => sma::sma(data, period),
        MaType::Ema => ema::ema(data, period),
        MaType::Wma => wma::wma(data, period),
        MaType::Dema => dema::dema(data, period),
        MaType::Tema => tema::tema(data, period),
        MaType::Trima => trima::trima(data, period),
        MaType::Kama => kama::kama(data, period),
        MaType::Mama => Ok(mama::mama(data, MAMA_FAST, MAMA_SLOW)?.mama),
        MaType::T3 => t3::t3(data, period, T3_VFACTOR),
    }
}

/// Computes a moving average whose first output is placed no earlier than
/// `start`.
///
/// Recursive averages are seeded from the window ending at `start`, as if
/// the input began `lookback` bars before it. Positions before the first
/// output are NaN.
pub(crate) fn ma_from<T: SeriesElement>(
    data: &[T],
    start: usize,
    period: usize,
    ma_type: MaType,
) -> Result<Vec<T>> {
    let lookback = ma_lookback(period, ma_type)?;
    let start = start.max(lookback);
    let mut out = real_output(data.len());
    if data.len() <= start {
        return Ok(out);
    }
    let shifted = ma(&data[start - lookback..], period, ma_type)?;
    out[start..].copy_from_slice(&shifted[lookback..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_ma_type_codes() {
        for (code, kind) in MaType::iter().enumerate() {
            assert_eq!(MaType::from_code(code as i64).unwrap(), kind);
        }
        assert!(MaType::from_code(9).is_err());
        assert!(MaType::from_code(-1).is_err());
    }

    #[test]
    fn test_ma_type_names() {
        assert_eq!(MaType::T3.to_string(), "T3");
        assert_eq!(MaType::Trima.as_ref(), "TRIMA");
        assert_eq!(MaType::from_str("kama").unwrap(), MaType::Kama);
        assert!(MaType::from_str("HMA").is_err());
    }

    #[test]
    fn test_ma_dispatch_matches_direct_calls() {
        let data: Vec<f64> = (0..120).map(|i| 10.0 + f64::from(i % 13) * 0.5).collect();
        assert_eq!(
            ma(&data, 9, MaType::Sma).unwrap()[8..],
            sma::sma(&data, 9).unwrap()[8..]
        );
        assert_eq!(
            ma(&data, 9, MaType::Ema).unwrap()[8..],
            ema::ema(&data, 9).unwrap()[8..]
        );
        assert_eq!(
            ma(&data, 4, MaType::T3).unwrap()[18..],
            t3::t3(&data, 4, 0.7).unwrap()[18..]
        );
    }

    #[test]
    fn test_ma_lookbacks() {
        assert_eq!(ma_lookback(30, MaType::Sma).unwrap(), 29);
        assert_eq!(ma_lookback(30, MaType::Dema).unwrap(), 58);
        assert_eq!(ma_lookback(30, MaType::Kama).unwrap(), 30);
        assert_eq!(ma_lookback(30, MaType::Mama).unwrap(), 32);
        assert_eq!(ma_lookback(5, MaType::T3).unwrap(), 24);
        for kind in MaType::iter() {
            assert_eq!(ma_lookback(1, kind).unwrap(), 0);
        }
    }

    #[test]
    fn test_ma_period_one_is_copy() {
        let data = [3.0_f64, 1.0, 4.0];
        for kind in MaType::iter() {
            assert_eq!(ma(&data, 1, kind).unwrap(), data.to_vec());
        }
    }

    #[test]
    fn test_ma_from_seeds_at_start() {
        let data: Vec<f64> = (0..30).map(|i| f64::from(i * i % 17)).collect();
        let shifted = ma_from(&data, 10, 3, MaType::Ema).unwrap();
        assert!(shifted[9].is_nan());
        // seed is the SMA of the window ending at 10
        let seed = (data[8] + data[9] + data[10]) / 3.0;
        assert!((shifted[10] - seed).abs() < 1e-12);
        // a start inside the lookback behaves like a plain call
        let plain = ma_from(&data, 0, 3, MaType::Sma).unwrap();
        assert_eq!(plain[2..], sma::sma(&data, 3).unwrap()[2..]);
    }
}
