//! Technical analysis indicators.
//!
//! Every indicator is a pure function over borrowed, aligned series that
//! returns owned outputs of the same length as its inputs, paired with a
//! `*_lookback` function giving the number of leading bars without a value.
//!
//! # Output Conventions
//!
//! - Real outputs hold NaN in the lookback region.
//! - Candlestick patterns and [`ht_trendmode()`] hold 0 there.
//! - Index outputs ([`maxindex`], [`minindex`], [`minmaxindex`]) hold -1.
//! - Empty input produces empty output; input no longer than the lookback
//!   produces an all-sentinel output.
//! - Aligned inputs of different lengths are rejected with
//!   [`Error::LengthMismatch`](crate::error::Error::LengthMismatch).
//!
//! # Indicator Families
//!
//! ## Overlap Studies
//!
//! [`sma()`], [`ema()`], [`wma()`], [`dema()`], [`tema()`], [`trima()`], [`kama()`],
//! [`mama()`], [`t3()`], [`ma()`], [`bbands()`], [`sar()`], [`midpoint()`],
//! [`midprice()`]
//!
//! ## Momentum
//!
//! [`rsi()`], [`cmo()`], [`mom()`], [`roc()`] and its ratio forms, [`macd()`],
//! [`macdext`], [`macdfix`], [`apo()`], [`ppo`], [`trix()`], [`stoch`],
//! [`stochf`], [`stochrsi()`], [`aroon()`], [`aroonosc`], [`adx()`], [`adxr`],
//! [`dx()`], [`plus_di`], [`minus_di`], [`plus_dm`], [`minus_dm`], [`willr`],
//! [`mfi()`], [`cci()`], [`ultosc()`], [`bop()`]
//!
//! ## Volatility and Volume
//!
//! [`trange`], [`atr()`], [`natr`], [`obv()`], [`ad()`], [`adosc()`]
//!
//! ## Statistics
//!
//! [`var`], [`stddev`], [`avgdev`], [`correl`], [`beta`], [`linearreg()`]
//! and its slope/intercept/angle forms, [`tsf`], [`max`], [`min`], [`sum`],
//! [`minmax`], [`minmaxindex`]
//!
//! ## Cycle
//!
//! [`ht_dcperiod()`], [`ht_dcphase()`], [`ht_phasor()`], [`ht_sine()`],
//! [`ht_trendline()`], [`ht_trendmode()`]
//!
//! ## Transforms and Patterns
//!
//! [`math`] (element-wise functions and operators), [`price_transform`],
//! and the 61 patterns in [`candlestick`].
//!
//! # Example
//!
//! ```
//! use tacalc::indicators::{ema, rsi, sma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! let ema_result = ema(&prices, 5).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//!
//! assert!(sma_result[3].is_nan() && sma_result[4].is_finite());
//! assert_eq!(ema_result.len(), prices.len());
//! assert!(rsi_result[5] >= 0.0 && rsi_result[5] <= 100.0);
//! ```

pub mod ad;
pub mod adosc;
pub mod adx;
pub mod apo;
pub mod aroon;
pub mod atr;
pub mod bbands;
pub mod bop;
pub mod candlestick;
pub mod cci;
pub mod cmo;
pub mod correlation;
pub mod dema;
pub mod dx;
pub mod ema;
pub mod extrema;
pub(crate) mod ht_core;
pub mod ht_dcperiod;
pub mod ht_dcphase;
pub mod ht_phasor;
pub mod ht_sine;
pub mod ht_trendline;
pub mod ht_trendmode;
pub mod kama;
pub mod linearreg;
pub mod ma;
pub mod macd;
pub mod mama;
pub mod math;
pub mod mfi;
pub mod midpoint;
pub mod midprice;
pub mod mom;
pub mod obv;
pub mod price_transform;
pub mod roc;
pub mod rsi;
pub mod sar;
pub mod sma;
pub mod statistics;
pub mod stochastic;
pub mod stochrsi;
pub mod t3;
pub mod tema;
pub mod trima;
pub mod trix;
pub mod ultosc;
pub mod williams_r;
pub mod wma;

// Re-export indicator functions for convenient access.
//
// These re-exports allow users to import directly from `indicators` without
// needing to specify the submodule, e.g., `use tacalc::indicators::sma;`.
// Math transforms stay under `indicators::math`.

pub use ad::{ad, ad_lookback};
pub use adosc::{adosc, adosc_lookback, AdOsc};
pub use adx::{adx, adx_lookback, adxr, adxr_lookback};
pub use apo::{apo, apo_lookback, ppo, ppo_lookback};
pub use aroon::{aroon, aroon_lookback, aroonosc, aroonosc_lookback, AroonOutput};
pub use atr::{atr, atr_lookback, natr, natr_lookback, trange, trange_lookback};
pub use bbands::{bbands, bbands_lookback, Bbands, BbandsOutput};
pub use bop::{bop, bop_lookback};
pub use candlestick::{CandlePattern, CandleSettings};
pub use cci::{cci, cci_lookback};
pub use cmo::{cmo, cmo_lookback};
pub use correlation::{beta, beta_lookback, correl, correl_lookback};
pub use dema::{dema, dema_lookback};
pub use dx::{di_lookback, dm_lookback, dx, dx_lookback, minus_di, minus_dm, plus_di, plus_dm};
pub use ema::{ema, ema_lookback};
pub use extrema::{
    max, maxindex, min, minindex, minmax, minmaxindex, sum, window_lookback, MinMaxIndexOutput,
    MinMaxOutput,
};
pub use ht_dcperiod::{ht_dcperiod, ht_dcperiod_lookback};
pub use ht_dcphase::{ht_dcphase, ht_dcphase_lookback};
pub use ht_phasor::{ht_phasor, ht_phasor_lookback, PhasorOutput};
pub use ht_sine::{ht_sine, ht_sine_lookback, SineOutput};
pub use ht_trendline::{ht_trendline, ht_trendline_lookback};
pub use ht_trendmode::{ht_trendmode, ht_trendmode_lookback};
pub use kama::{kama, kama_lookback};
pub use linearreg::{
    linearreg, linearreg_angle, linearreg_intercept, linearreg_lookback, linearreg_slope, tsf,
};
pub use ma::{ma, ma_lookback, MaType};
pub use macd::{
    macd, macd_lookback, macdext, macdext_lookback, macdfix, macdfix_lookback, Macd, MacdExt,
    MacdOutput,
};
pub use mama::{mama, mama_lookback, Mama, MamaOutput};
pub use mfi::{mfi, mfi_lookback};
pub use midpoint::{midpoint, midpoint_lookback};
pub use midprice::{midprice, midprice_lookback};
pub use mom::{mom, mom_lookback};
pub use obv::{obv, obv_lookback};
pub use price_transform::{avgprice, medprice, price_transform_lookback, typprice, wclprice};
pub use roc::{roc, roc_lookback, rocp, rocr, rocr100};
pub use rsi::{rsi, rsi_lookback};
pub use sar::{sar, sar_lookback, Sar};
pub use sma::{sma, sma_lookback};
pub use statistics::{avgdev, dispersion_lookback, stddev, var};
pub use stochastic::{stoch, stoch_lookback, stochf, stochf_lookback, Stoch, StochF, StochOutput};
pub use stochrsi::{stochrsi, stochrsi_lookback, StochRsi};
pub use t3::{t3, t3_lookback, T3};
pub use tema::{tema, tema_lookback};
pub use trima::{trima, trima_lookback};
pub use trix::{trix, trix_lookback};
pub use ultosc::{ultosc, ultosc_lookback, UltOsc};
pub use williams_r::{willr, willr_lookback};
pub use wma::{wma, wma_lookback};
