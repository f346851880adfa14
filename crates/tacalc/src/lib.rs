//! tacalc: TA-Lib compatible technical analysis indicators
//!
//! This crate computes the TA-Lib indicator set (overlap studies, momentum,
//! volatility, volume, statistics, Hilbert-transform cycle indicators, math
//! transforms and 61 candlestick patterns) over borrowed price series.
//!
//! # Features
//!
//! - **Uniform contract**: every indicator has a `*_lookback` function, and
//!   its outputs have the same length as its inputs with a sentinel prefix
//! - **Generics**: works with both `f32` and `f64` data types
//! - **Owned outputs**: results are returned as fresh `Vec`s; inputs are
//!   never mutated
//! - **Typed errors**: usage, computation and lifecycle failures are
//!   distinguished by [`ErrorKind`]
//! - **Batch processing**: optional Rayon fan-out over many series with the
//!   `parallel` feature
//!
//! # Quick Start
//!
//! ```
//! use tacalc::indicators::{sma, sma_lookback};
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! // The first `lookback` positions hold NaN
//! assert_eq!(sma_lookback(3).unwrap(), 2);
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert_eq!(&result[2..], &[2.0, 3.0, 4.0]);
//! ```
//!
//! # Sentinels
//!
//! | Output | Lookback value |
//! |---|---|
//! | real (`Vec<T>`) | NaN |
//! | candlestick / trend mode (`Vec<i32>`) | `0` |
//! | index (`Vec<i64>`) | `-1` |
//!
//! Empty input yields empty output. Input no longer than the lookback yields
//! an output made entirely of sentinels.
//!
//! # Error Handling
//!
//! ```
//! use tacalc::indicators::{atr, sma};
//! use tacalc::ErrorKind;
//!
//! // Period below the minimum of 1
//! let err = sma(&[1.0_f64, 2.0, 3.0], 0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Usage);
//!
//! // Aligned inputs of different lengths
//! let high = vec![10.0_f64; 10];
//! let low = vec![9.0_f64; 9];
//! let close = vec![9.5_f64; 10];
//! assert!(atr(&high, &low, &close, 3).unwrap_err().is_usage());
//!
//! // Empty input is not an error
//! let empty: Vec<f64> = vec![];
//! assert!(sma(&empty, 30).unwrap().is_empty());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod context;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod output;
pub mod prelude;
pub mod traits;

// Re-export commonly used types at crate root
pub use context::{Context, ContextState};
pub use error::{Error, ErrorKind, Result};
pub use traits::SeriesElement;
