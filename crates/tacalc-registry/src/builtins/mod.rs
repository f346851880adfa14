//! The built-in indicator table, one submodule per family.
//!
//! Names, groups, input names, parameter names and defaults follow the
//! reference library's function table, so a caller used to its abstract
//! interface finds the same schema here.

mod cycle;
mod math;
mod momentum;
mod overlap;
mod pattern;
mod price;
mod statistics;
mod volume;

use tacalc::Result;

use crate::def::{Group, IndicatorDef, Output, OutputSpec};
use crate::params::ParamSpec;
use crate::registry::Registry;

pub(crate) const REAL: &[&str] = &["real"];
pub(crate) const REAL_PAIR: &[&str] = &["real0", "real1"];
pub(crate) const HL: &[&str] = &["high", "low"];
pub(crate) const HLC: &[&str] = &["high", "low", "close"];
pub(crate) const HLCV: &[&str] = &["high", "low", "close", "volume"];
pub(crate) const OHLC: &[&str] = &["open", "high", "low", "close"];

/// Lookback of an indicator parameterised by a single period.
pub(crate) type PeriodLookback = fn(usize) -> Result<usize>;
/// Single-output computation parameterised by a single period.
pub(crate) type PeriodCompute = fn(&[&[f64]], usize) -> Result<Vec<f64>>;
/// `(name, description, default period, lookback, compute)`.
pub(crate) type PeriodRow = (
    &'static str,
    &'static str,
    i64,
    PeriodLookback,
    PeriodCompute,
);

pub(crate) fn register_all(registry: &mut Registry) {
    math::register(registry);
    price::register(registry);
    overlap::register(registry);
    momentum::register(registry);
    volume::register(registry);
    statistics::register(registry);
    cycle::register(registry);
    pattern::register(registry);
}

pub(crate) const fn timeperiod(default: i64) -> ParamSpec {
    ParamSpec::integer("timeperiod", "Number of bars in the window", default)
}

pub(crate) fn one(output: impl Into<Output>) -> Vec<Output> {
    vec![output.into()]
}

/// Registers indicators whose only parameter is `timeperiod` and whose
/// only output is `real`.
pub(crate) fn register_periods(
    registry: &mut Registry,
    group: Group,
    inputs: &'static [&'static str],
    rows: &[PeriodRow],
) {
    for &(name, description, default, lookback, compute) in rows {
        registry.register(
            IndicatorDef::new(name, group, description)
                .with_inputs(inputs)
                .with_param(timeperiod(default))
                .with_output(OutputSpec::real("real"))
                .with_lookback(move |p| lookback(p.period("timeperiod")?))
                .with_compute(move |i, p| Ok(one(compute(i, p.period("timeperiod")?)?))),
        );
    }
}
