//! Overlap studies: moving averages, bands and trailing stops.

use tacalc::indicators::{self as ind, MaType};

use super::{one, register_periods, timeperiod, PeriodRow, HL, REAL};
use crate::def::{Group, IndicatorDef, OutputSpec};
use crate::params::ParamSpec;
use crate::registry::Registry;

const MATYPE: ParamSpec = ParamSpec::ma_type("matype", "Type of moving average", MaType::Sma);

pub(super) fn register(registry: &mut Registry) {
    let averages: &[PeriodRow] = &[
        (
            "SMA",
            "Simple Moving Average",
            30,
            ind::sma_lookback,
            |i, n| ind::sma(i[0], n),
        ),
        (
            "EMA",
            "Exponential Moving Average",
            30,
            ind::ema_lookback,
            |i, n| ind::ema(i[0], n),
        ),
        (
            "WMA",
            "Weighted Moving Average",
            30,
            ind::wma_lookback,
            |i, n| ind::wma(i[0], n),
        ),
        (
            "DEMA",
            "Double Exponential Moving Average",
            30,
            ind::dema_lookback,
            |i, n| ind::dema(i[0], n),
        ),
        (
            "TEMA",
            "Triple Exponential Moving Average",
            30,
            ind::tema_lookback,
            |i, n| ind::tema(i[0], n),
        ),
        (
            "TRIMA",
            "Triangular Moving Average",
            30,
            ind::trima_lookback,
            |i, n| ind::trima(i[0], n),
        ),
        (
            "KAMA",
            "Kaufman Adaptive Moving Average",
            30,
            ind::kama_lookback,
            |i, n| ind::kama(i[0], n),
        ),
        (
            "MIDPOINT",
            "MidPoint over period",
            14,
            ind::midpoint_lookback,
            |i, n| ind::midpoint(i[0], n),
        ),
    ];
    register_periods(registry, Group::OverlapStudies, REAL, averages);
    register_periods(
        registry,
        Group::OverlapStudies,
        HL,
        &[(
            "MIDPRICE",
            "Midpoint Price over period",
            14,
            ind::midprice_lookback,
            |i, n| ind::midprice(i[0], i[1], n),
        )],
    );

    registry.register(
        IndicatorDef::new("MA", Group::OverlapStudies, "Moving average")
            .with_param(timeperiod(30))
            .with_param(MATYPE)
            .with_output(OutputSpec::real("real"))
            .with_lookback(|p| ind::ma_lookback(p.period("timeperiod")?, p.ma_type("matype")?))
            .with_compute(|i, p| {
                let (period, ma_type) = (p.period("timeperiod")?, p.ma_type("matype")?);
                Ok(one(ind::ma(i[0], period, ma_type)?))
            }),
    );

    registry.register(
        IndicatorDef::new(
            "T3",
            Group::OverlapStudies,
            "Triple Exponential Moving Average (T3)",
        )
        .with_param(timeperiod(5))
        .with_param(ParamSpec::real("vfactor", "Volume factor", 0.7))
        .with_output(OutputSpec::real("real"))
        .with_lookback(|p| ind::t3_lookback(p.period("timeperiod")?, p.real("vfactor")?))
        .with_compute(|i, p| Ok(one(ind::t3(i[0], p.period("timeperiod")?, p.real("vfactor")?)?))),
    );

    registry.register(
        IndicatorDef::new("BBANDS", Group::OverlapStudies, "Bollinger Bands")
            .with_param(timeperiod(5))
            .with_param(ParamSpec::real("nbdevup", "Deviation multiplier for upper band", 2.0))
            .with_param(ParamSpec::real("nbdevdn", "Deviation multiplier for lower band", 2.0))
            .with_param(MATYPE)
            .with_output(OutputSpec::real("upperband"))
            .with_output(OutputSpec::real("middleband"))
            .with_output(OutputSpec::real("lowerband"))
            .with_lookback(|p| ind::bbands_lookback(p.period("timeperiod")?, p.ma_type("matype")?))
            .with_compute(|i, p| {
                let bands = ind::Bbands {
                    period: p.period("timeperiod")?,
                    nbdev_up: p.real("nbdevup")?,
                    nbdev_dn: p.real("nbdevdn")?,
                    ma_type: p.ma_type("matype")?,
                }
                .compute(i[0])?;
                Ok(vec![bands.upper.into(), bands.middle.into(), bands.lower.into()])
            }),
    );

    registry.register(
        IndicatorDef::new("SAR", Group::OverlapStudies, "Parabolic SAR")
            .with_inputs(HL)
            .with_param(ParamSpec::real("acceleration", "Acceleration factor step and start", 0.02))
            .with_param(ParamSpec::real("maximum", "Acceleration factor maximum", 0.2))
            .with_output(OutputSpec::real("real"))
            .with_lookback(|p| ind::sar_lookback(p.real("acceleration")?, p.real("maximum")?))
            .with_compute(|i, p| {
                Ok(one(ind::sar(i[0], i[1], p.real("acceleration")?, p.real("maximum")?)?))
            }),
    );

    registry.register(
        IndicatorDef::new(
            "MAMA",
            Group::OverlapStudies,
            "MESA Adaptive Moving Average",
        )
        .with_param(ParamSpec::real("fastlimit", "Upper limit of the adaptive factor", 0.5))
        .with_param(ParamSpec::real("slowlimit", "Lower limit of the adaptive factor", 0.05))
        .with_output(OutputSpec::real("mama"))
        .with_output(OutputSpec::real("fama"))
        .with_lookback(|p| ind::mama_lookback(p.real("fastlimit")?, p.real("slowlimit")?))
        .with_compute(|i, p| {
            let out = ind::mama(i[0], p.real("fastlimit")?, p.real("slowlimit")?)?;
            Ok(vec![out.mama.into(), out.fama.into()])
        }),
    );

    registry.register(
        IndicatorDef::new(
            "HT_TRENDLINE",
            Group::OverlapStudies,
            "Hilbert Transform - Instantaneous Trendline",
        )
        .with_output(OutputSpec::real("real"))
        .with_lookback(|_| Ok(ind::ht_trendline_lookback()))
        .with_compute(|i, _| Ok(one(ind::ht_trendline(i[0])?))),
    );
}
