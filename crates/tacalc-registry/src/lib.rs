//! tacalc-registry: table-driven access to every tacalc indicator
//!
//! Each indicator is described by one [`IndicatorDef`] record: its name,
//! [`Group`], input series, parameter schema with defaults, output schema,
//! and its lookback and compute functions. A [`Registry`] maps names to
//! records and dispatches calls over `f64` series, gated on a
//! [`tacalc::Context`] being ready.
//!
//! # Quick Start
//!
//! ```
//! use tacalc::Context;
//! use tacalc_registry::{Group, Registry};
//!
//! let ctx = Context::new();
//! ctx.initialize().unwrap();
//!
//! let registry = Registry::builtin();
//! let def = registry.get("BBANDS").unwrap();
//! assert_eq!(def.group(), Group::OverlapStudies);
//! assert_eq!(def.outputs().len(), 3);
//!
//! let close = [10.0, 10.5, 10.2, 10.8, 11.0, 10.9, 11.3];
//! let bands = registry.call(&ctx, "BBANDS", &[&close], &[("timeperiod", 3.into())]).unwrap();
//! let upper = bands[0].as_real().unwrap();
//! assert!(upper[1].is_nan() && upper[2].is_finite());
//!
//! ctx.shutdown().unwrap();
//! assert!(registry.call(&ctx, "BBANDS", &[&close], &[]).is_err());
//! ```
//!
//! # Introspection
//!
//! ```
//! use tacalc_registry::{Group, ParamValue, Registry};
//!
//! let registry = Registry::builtin();
//! assert!(registry.names().contains(&"CDLENGULFING"));
//!
//! let rsi = registry.get("rsi").unwrap();
//! assert_eq!(rsi.params()[0].name, "timeperiod");
//! assert_eq!(rsi.params()[0].default, ParamValue::Integer(14));
//! assert_eq!(registry.lookback("RSI", &[("timeperiod", 5.into())]).unwrap(), 5);
//!
//! let cycles: Vec<_> = registry.by_group(Group::CycleIndicators).iter().map(|d| d.name()).collect();
//! assert_eq!(cycles, ["HT_DCPERIOD", "HT_DCPHASE", "HT_PHASOR", "HT_SINE", "HT_TRENDMODE"]);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod builtins;
pub mod def;
pub mod params;
pub mod registry;

pub use def::{ComputeFn, Group, IndicatorDef, LookbackFn, Output, OutputKind, OutputSpec};
pub use params::{ParamKind, ParamSpec, ParamValue, Params};
pub use registry::Registry;

use tacalc::Result;

/// Computes a built-in indicator under the process-wide context.
///
/// Equivalent to `Registry::builtin().call(tacalc::context::global(), ...)`.
///
/// # Errors
///
/// Returns `Error::Lifecycle` unless [`tacalc::context::initialize`] has
/// been called (and [`tacalc::context::shutdown`] has not), and otherwise the
/// errors of [`Registry::call`].
///
/// # Example
///
/// ```
/// tacalc::context::initialize().unwrap();
///
/// let out = tacalc_registry::call("MAXINDEX", &[&[5.0, 3.0, 3.0, 1.0, 4.0]], &[("timeperiod", 2.into())]).unwrap();
/// assert_eq!(out[0].as_index().unwrap(), &[-1, 0, 2, 2, 4]);
/// ```
pub fn call(
    name: &str,
    inputs: &[&[f64]],
    overrides: &[(&str, ParamValue)],
) -> Result<Vec<Output>> {
    Registry::builtin().call(tacalc::context::global(), name, inputs, overrides)
}
