//! Candlestick patterns, one record per [`CandlePattern`].

use strum::IntoEnumIterator;
use tacalc::indicators::{CandlePattern, CandleSettings};

use super::{one, OHLC};
use crate::def::{Group, IndicatorDef, OutputSpec};
use crate::params::ParamSpec;
use crate::registry::Registry;

const PENETRATION: &str = "Percentage of penetration of a candle within another candle";

pub(super) fn register(registry: &mut Registry) {
    let group = Group::PatternRecognition;
    for pattern in CandlePattern::iter() {
        let mut def = IndicatorDef::new(pattern.name(), group, pattern.description())
            .with_inputs(OHLC)
            .with_output(OutputSpec::signal("integer"))
            .with_lookback(move |_| Ok(pattern.lookback(&CandleSettings::default())));
        def = match pattern.default_penetration() {
            Some(default) => def
                .with_param(ParamSpec::real("penetration", PENETRATION, default))
                .with_compute(move |i, p| {
                    let penetration = Some(p.real("penetration")?);
                    let settings = CandleSettings::default();
                    let (o, h, l, c) = (i[0], i[1], i[2], i[3]);
                    Ok(one(pattern.compute(o, h, l, c, &settings, penetration)?))
                }),
            None => def.with_compute(move |i, _| {
                let settings = CandleSettings::default();
                Ok(one(pattern.compute(i[0], i[1], i[2], i[3], &settings, None)?))
            }),
        };
        registry.register(def);
    }
}
