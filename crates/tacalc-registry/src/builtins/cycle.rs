//! Hilbert transform cycle indicators.

use tacalc::indicators as ind;

use super::one;
use crate::def::{Group, IndicatorDef, OutputSpec};
use crate::registry::Registry;

fn cycle(name: &'static str, description: &'static str) -> IndicatorDef {
    IndicatorDef::new(name, Group::CycleIndicators, description)
}

pub(super) fn register(registry: &mut Registry) {
    registry.register(
        cycle("HT_DCPERIOD", "Hilbert Transform - Dominant Cycle Period")
            .with_output(OutputSpec::real("real"))
            .with_lookback(|_| Ok(ind::ht_dcperiod_lookback()))
            .with_compute(|i, _| Ok(one(ind::ht_dcperiod(i[0])?))),
    );
    registry.register(
        cycle("HT_DCPHASE", "Hilbert Transform - Dominant Cycle Phase")
            .with_output(OutputSpec::real("real"))
            .with_lookback(|_| Ok(ind::ht_dcphase_lookback()))
            .with_compute(|i, _| Ok(one(ind::ht_dcphase(i[0])?))),
    );
    registry.register(
        cycle("HT_PHASOR", "Hilbert Transform - Phasor Components")
            .with_output(OutputSpec::real("inphase"))
            .with_output(OutputSpec::real("quadrature"))
            .with_lookback(|_| Ok(ind::ht_phasor_lookback()))
            .with_compute(|i, _| {
                let out = ind::ht_phasor(i[0])?;
                Ok(vec![out.in_phase.into(), out.quadrature.into()])
            }),
    );
    registry.register(
        cycle("HT_SINE", "Hilbert Transform - SineWave")
            .with_output(OutputSpec::real("sine"))
            .with_output(OutputSpec::real("leadsine"))
            .with_lookback(|_| Ok(ind::ht_sine_lookback()))
            .with_compute(|i, _| {
                let out = ind::ht_sine(i[0])?;
                Ok(vec![out.sine.into(), out.lead_sine.into()])
            }),
    );
    registry.register(
        cycle("HT_TRENDMODE", "Hilbert Transform - Trend vs Cycle Mode")
            .with_output(OutputSpec::signal("integer"))
            .with_lookback(|_| Ok(ind::ht_trendmode_lookback()))
            .with_compute(|i, _| Ok(one(ind::ht_trendmode(i[0])?))),
    );
}
