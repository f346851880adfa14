//! Price transforms.

use tacalc::indicators as ind;

use super::{one, HL, HLC, OHLC};
use crate::def::{Group, IndicatorDef, OutputSpec};
use crate::registry::Registry;

pub(super) fn register(registry: &mut Registry) {
    let defs = [
        IndicatorDef::new("AVGPRICE", Group::PriceTransform, "Average Price")
            .with_inputs(OHLC)
            .with_compute(|i, _| Ok(one(ind::avgprice(i[0], i[1], i[2], i[3])?))),
        IndicatorDef::new("MEDPRICE", Group::PriceTransform, "Median Price")
            .with_inputs(HL)
            .with_compute(|i, _| Ok(one(ind::medprice(i[0], i[1])?))),
        IndicatorDef::new("TYPPRICE", Group::PriceTransform, "Typical Price")
            .with_inputs(HLC)
            .with_compute(|i, _| Ok(one(ind::typprice(i[0], i[1], i[2])?))),
        IndicatorDef::new("WCLPRICE", Group::PriceTransform, "Weighted Close Price")
            .with_inputs(HLC)
            .with_compute(|i, _| Ok(one(ind::wclprice(i[0], i[1], i[2])?))),
    ];
    for def in defs {
        registry.register(
            def.with_output(OutputSpec::real("real"))
                .with_lookback(|_| Ok(ind::price_transform_lookback())),
        );
    }
}
