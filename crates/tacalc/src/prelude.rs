//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use tacalc::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//! assert_eq!(sma_result.len(), ema_result.len());
//! assert_eq!(rsi_lookback(5).unwrap(), 5);
//! assert!(rsi_result[4].is_nan());
//! ```
//!
//! # Contents
//!
//! - [`Error`], [`ErrorKind`] and [`Result`]
//! - [`SeriesElement`]
//! - [`Context`] and [`ContextState`]
//! - the most used indicators with their lookbacks and parameter structs
//! - [`CandlePattern`] and [`CandleSettings`] for pattern recognition

pub use crate::context::{Context, ContextState};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::traits::SeriesElement;

pub use crate::indicators::{
    adx, atr, bbands, cci, dema, ema, kama, ma, macd, mfi, natr, obv, rsi, sar, sma, stddev, stoch,
    tema, trange, willr, wma,
};

pub use crate::indicators::{
    adx_lookback, atr_lookback, bbands_lookback, cci_lookback, dema_lookback, ema_lookback,
    kama_lookback, ma_lookback, macd_lookback, mfi_lookback, natr_lookback, obv_lookback,
    rsi_lookback, sar_lookback, sma_lookback, stoch_lookback, tema_lookback, trange_lookback,
    willr_lookback, wma_lookback,
};

pub use crate::indicators::{
    Bbands, BbandsOutput, MaType, Macd, MacdOutput, Sar, Stoch, StochOutput,
};

pub use crate::indicators::{CandlePattern, CandleSettings};
