//! Stochastic RSI: the fast stochastic applied to RSI values.
//!
//! ```text
//! r          = RSI(close, period)
//! fast %K    = 100 * (r - min(r, fast_k)) / (max(r, fast_k) - min(r, fast_k))
//! fast %D    = MA(fast %K, fast_d)
//! ```
//!
//! # Lookback
//!
//! `period + fast_k - 1 + MA lookback(fast_d)`.

use crate::error::Result;
use crate::indicators::ma::MaType;
use crate::indicators::rsi::{rsi, rsi_lookback};
use crate::indicators::stochastic::{StochF, StochOutput};
use crate::output::real_output;
use crate::traits::SeriesElement;

/// Stochastic RSI parameters. Defaults: 14, 5, 3 SMA.
///
/// # Example
///
/// ```
/// use tacalc::indicators::stochrsi::StochRsi;
///
/// let data: Vec<f64> = (0..60).map(|i| 30.0 + f64::from(i * 7 % 10)).collect();
/// let params = StochRsi::default();
/// let out = params.compute(&data).unwrap();
/// assert_eq!(params.lookback().unwrap(), 20);
/// assert!(out.k[19].is_nan() && out.k[20].is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StochRsi {
    /// RSI period.
    pub period: usize,
    /// Stochastic %K window over RSI values.
    pub fast_k_period: usize,
    /// Period of the %D smoothing.
    pub fast_d_period: usize,
    /// Average used for %D smoothing.
    pub fast_d_ma: MaType,
}

impl Default for StochRsi {
    fn default() -> Self {
        Self {
            period: 14,
            fast_k_period: 5,
            fast_d_period: 3,
            fast_d_ma: MaType::Sma,
        }
    }
}

impl StochRsi {
    fn stochf(&self) -> StochF {
        StochF {
            fast_k_period: self.fast_k_period,
            fast_d_period: self.fast_d_period,
            fast_d_ma: self.fast_d_ma,
        }
    }

    /// Returns the STOCHRSI lookback.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a period is outside `1..=100000`.
    pub fn lookback(&self) -> Result<usize> {
        Ok(rsi_lookback(self.period)? + self.stochf().lookback()?)
    }

    /// Computes fast %K and fast %D of the RSI.
    ///
    /// # Errors
    ///
    /// See [`StochRsi::lookback`].
    #[must_use = "this returns a Result with the stochastic output, which should be used"]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<StochOutput<T>> {
        let lookback = self.lookback()?;
        let mut k = real_output(data.len());
        let mut d = real_output(data.len());
        if data.len() <= lookback {
            return Ok(StochOutput { k, d });
        }
        let rsi_start = rsi_lookback(self.period)?;
        let values = &rsi(data, self.period)?[rsi_start..];
        let inner = self.stochf().compute(values, values, values)?;
        k[rsi_start..].copy_from_slice(&inner.k);
        d[rsi_start..].copy_from_slice(&inner.d);
        Ok(StochOutput { k, d })
    }
}

/// Returns the STOCHRSI lookback.
///
/// # Errors
///
/// See [`StochRsi::lookback`].
pub fn stochrsi_lookback(params: &StochRsi) -> Result<usize> {
    params.lookback()
}

/// Computes the stochastic RSI.
///
/// # Errors
///
/// See [`StochRsi::lookback`].
#[must_use = "this returns a Result with the stochastic output, which should be used"]
pub fn stochrsi<T: SeriesElement>(data: &[T], params: &StochRsi) -> Result<StochOutput<T>> {
    params.compute(data)
}
