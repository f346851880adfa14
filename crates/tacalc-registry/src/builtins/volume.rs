//! Volatility and volume indicators.

use tacalc::indicators as ind;

use super::{one, register_periods, PeriodRow, HLC, HLCV};
use crate::def::{Group, IndicatorDef, OutputSpec};
use crate::params::ParamSpec;
use crate::registry::Registry;

pub(super) fn register(registry: &mut Registry) {
    let ranges: &[PeriodRow] = &[
        (
            "ATR",
            "Average True Range",
            14,
            ind::atr_lookback,
            |i, n| ind::atr(i[0], i[1], i[2], n),
        ),
        (
            "NATR",
            "Normalized Average True Range",
            14,
            ind::natr_lookback,
            |i, n| ind::natr(i[0], i[1], i[2], n),
        ),
    ];
    register_periods(registry, Group::VolatilityIndicators, HLC, ranges);

    registry.register(
        IndicatorDef::new("TRANGE", Group::VolatilityIndicators, "True Range")
            .with_inputs(HLC)
            .with_output(OutputSpec::real("real"))
            .with_lookback(|_| Ok(ind::trange_lookback()))
            .with_compute(|i, _| Ok(one(ind::trange(i[0], i[1], i[2])?))),
    );

    registry.register(
        IndicatorDef::new("OBV", Group::VolumeIndicators, "On Balance Volume")
            .with_inputs(&["real", "volume"])
            .with_output(OutputSpec::real("real"))
            .with_lookback(|_| Ok(ind::obv_lookback()))
            .with_compute(|i, _| Ok(one(ind::obv(i[0], i[1])?))),
    );

    registry.register(
        IndicatorDef::new("AD", Group::VolumeIndicators, "Chaikin A/D Line")
            .with_inputs(HLCV)
            .with_output(OutputSpec::real("real"))
            .with_lookback(|_| Ok(ind::ad_lookback()))
            .with_compute(|i, _| Ok(one(ind::ad(i[0], i[1], i[2], i[3])?))),
    );

    registry.register(
        IndicatorDef::new("ADOSC", Group::VolumeIndicators, "Chaikin A/D Oscillator")
            .with_inputs(HLCV)
            .with_param(ParamSpec::integer("fastperiod", "Number of bars for the fast MA", 3))
            .with_param(ParamSpec::integer("slowperiod", "Number of bars for the slow MA", 10))
            .with_output(OutputSpec::real("real"))
            .with_lookback(|p| {
                ind::adosc_lookback(p.period("fastperiod")?, p.period("slowperiod")?)
            })
            .with_compute(|i, p| {
                let (fast, slow) = (p.period("fastperiod")?, p.period("slowperiod")?);
                Ok(one(ind::adosc(i[0], i[1], i[2], i[3], fast, slow)?))
            }),
    );
}
