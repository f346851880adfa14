//! Bollinger Bands (BBANDS).
//!
//! Three bands around a moving average of the price:
//!
//! ```text
//! middle = MA(price, period, ma_type)
//! upper  = middle + nbdev_up * stddev(price, period)
//! lower  = middle - nbdev_dn * stddev(price, period)
//! ```
//!
//! The deviation is always the population standard deviation of the last
//! `period` samples (divide by `n`), whatever average is selected for the
//! middle band.
//!
//! # Lookback
//!
//! `max(MA lookback, period - 1)`.
//!
//! # Example
//!
//! ```
//! use tacalc::indicators::bbands::Bbands;
//!
//! let data = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0, 20.5, 21.5];
//! let bands = Bbands::default().compute(&data).unwrap();
//!
//! assert!(bands.middle[3].is_nan());
//! assert!(bands.upper[4] > bands.middle[4]);
//! assert!(bands.middle[4] > bands.lower[4]);
//! ```

use crate::error::Result;
use crate::indicators::ma::{ma_from, ma_lookback, MaType};
use crate::kernels::rolling_sum::WindowMoments;
use crate::output::real_output;
use crate::traits::{validate_range, SeriesElement};

/// Output structure containing the three bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BbandsOutput<T> {
    /// Upper band.
    pub upper: Vec<T>,
    /// Middle band (the moving average).
    pub middle: Vec<T>,
    /// Lower band.
    pub lower: Vec<T>,
}

/// Bollinger Bands parameters. Defaults: period 5, both deviations 2, SMA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbands {
    /// Window length.
    pub period: usize,
    /// Deviation multiplier for the upper band.
    pub nbdev_up: f64,
    /// Deviation multiplier for the lower band.
    pub nbdev_dn: f64,
    /// Average used for the middle band.
    pub ma_type: MaType,
}

impl Default for Bbands {
    fn default() -> Self {
        Self {
            period: 5,
            nbdev_up: 2.0,
            nbdev_dn: 2.0,
            ma_type: MaType::Sma,
        }
    }
}

impl Bbands {
    /// Returns the lookback for these parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100000`, or
    /// `Error::InvalidParameter` for a non-finite deviation multiplier.
    pub fn lookback(&self) -> Result<usize> {
        crate::traits::validate_period(self.period, 2)?;
        validate_range("nbdev_up", self.nbdev_up, -3.0e37, 3.0e37)?;
        validate_range("nbdev_dn", self.nbdev_dn, -3.0e37, 3.0e37)?;
        Ok(ma_lookback(self.period, self.ma_type)?.max(self.period - 1))
    }

    /// Computes the bands.
    ///
    /// # Errors
    ///
    /// See [`Bbands::lookback`].
    #[must_use = "this returns a Result with the bands, which should be used"]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<BbandsOutput<T>> {
        let lookback = self.lookback()?;
        let mut upper = real_output(data.len());
        let mut lower = real_output(data.len());
        if data.len() <= lookback {
            return Ok(BbandsOutput {
                upper,
                middle: real_output(data.len()),
                lower,
            });
        }

        let middle = ma_from(data, lookback, self.period, self.ma_type)?;
        let moments = WindowMoments::compute(data, self.period);
        let n = T::from_usize(self.period)?;
        let up = T::from_f64(self.nbdev_up)?;
        let dn = T::from_f64(self.nbdev_dn)?;
        for i in lookback..data.len() {
            let variance = moments.variance(i + 1 - self.period, n);
            let deviation = if variance > T::zero() {
                variance.sqrt()
            } else {
                T::zero()
            };
            upper[i] = middle[i] + up * deviation;
            lower[i] = middle[i] - dn * deviation;
        }
        Ok(BbandsOutput {
            upper,
            middle,
            lower,
        })
    }
}

/// Returns the BBANDS lookback.
///
/// # Errors
///
/// See [`Bbands::lookback`].
pub fn bbands_lookback(period: usize, ma_type: MaType) -> Result<usize> {
    Bbands {
        period,
        ma_type,
        ..Bbands::default()
    }
    .lookback()
}

/// Computes Bollinger Bands.
///
/// # Errors
///
/// See [`Bbands::lookback`].
#[must_use = "this returns a Result with the bands, which should be used"]
pub fn bbands<T: SeriesElement>(
    data: &[T],
    period: usize,
    nbdev_up: f64,
    nbdev_dn: f64,
    ma_type: MaType,
) -> Result<BbandsOutput<T>> {
    Bbands {
        period,
        nbdev_up,
        nbdev_dn,
        ma_type,
    }
    .compute(data)
}
