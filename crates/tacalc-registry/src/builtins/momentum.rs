//! Momentum indicators and oscillators.

use tacalc::indicators::{self as ind, MaType, MacdExt, Stoch, StochF, StochRsi};
use tacalc::Result;

use super::{one, register_periods, timeperiod, PeriodRow, HL, HLC, HLCV, OHLC, REAL};
use crate::def::{Group, IndicatorDef, Output, OutputSpec};
use crate::params::{ParamSpec, Params};
use crate::registry::Registry;

const fn period(name: &'static str, description: &'static str, default: i64) -> ParamSpec {
    ParamSpec::integer(name, description, default)
}

const fn matype(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::ma_type(name, description, MaType::Sma)
}

const FASTK_PERIOD: ParamSpec = period(
    "fastk_period",
    "Time period for building the Fast-K line",
    5,
);

fn macdext_params(p: &Params) -> Result<MacdExt> {
    Ok(MacdExt {
        fast_period: p.period("fastperiod")?,
        fast_ma: p.ma_type("fastmatype")?,
        slow_period: p.period("slowperiod")?,
        slow_ma: p.ma_type("slowmatype")?,
        signal_period: p.period("signalperiod")?,
        signal_ma: p.ma_type("signalmatype")?,
    })
}

fn stoch_params(p: &Params) -> Result<Stoch> {
    Ok(Stoch {
        fast_k_period: p.period("fastk_period")?,
        slow_k_period: p.period("slowk_period")?,
        slow_k_ma: p.ma_type("slowk_matype")?,
        slow_d_period: p.period("slowd_period")?,
        slow_d_ma: p.ma_type("slowd_matype")?,
    })
}

fn stochf_params(p: &Params) -> Result<StochF> {
    Ok(StochF {
        fast_k_period: p.period("fastk_period")?,
        fast_d_period: p.period("fastd_period")?,
        fast_d_ma: p.ma_type("fastd_matype")?,
    })
}

fn stochrsi_params(p: &Params) -> Result<StochRsi> {
    Ok(StochRsi {
        period: p.period("timeperiod")?,
        fast_k_period: p.period("fastk_period")?,
        fast_d_period: p.period("fastd_period")?,
        fast_d_ma: p.ma_type("fastd_matype")?,
    })
}

fn macd_outputs(out: ind::MacdOutput<f64>) -> Vec<Output> {
    vec![out.macd.into(), out.signal.into(), out.hist.into()]
}

fn with_macd_outputs(def: IndicatorDef) -> IndicatorDef {
    def.with_output(OutputSpec::real("macd"))
        .with_output(OutputSpec::real("macdsignal"))
        .with_output(OutputSpec::real("macdhist"))
}

pub(super) fn register(registry: &mut Registry) {
    let single: &[PeriodRow] = &[
        (
            "RSI",
            "Relative Strength Index",
            14,
            ind::rsi_lookback,
            |i, n| ind::rsi(i[0], n),
        ),
        (
            "CMO",
            "Chande Momentum Oscillator",
            14,
            ind::cmo_lookback,
            |i, n| ind::cmo(i[0], n),
        ),
        (
            "MOM",
            "Momentum",
            10,
            ind::mom_lookback,
            |i, n| ind::mom(i[0], n),
        ),
        (
            "ROC",
            "Rate of change : ((price/prevPrice)-1)*100",
            10,
            ind::roc_lookback,
            |i, n| ind::roc(i[0], n),
        ),
        (
            "ROCP",
            "Rate of change Percentage: (price-prevPrice)/prevPrice",
            10,
            ind::roc_lookback,
            |i, n| ind::rocp(i[0], n),
        ),
        (
            "ROCR",
            "Rate of change ratio: (price/prevPrice)",
            10,
            ind::roc_lookback,
            |i, n| ind::rocr(i[0], n),
        ),
        (
            "ROCR100",
            "Rate of change ratio 100 scale: (price/prevPrice)*100",
            10,
            ind::roc_lookback,
            |i, n| ind::rocr100(i[0], n),
        ),
        (
            "TRIX",
            "1-day Rate-Of-Change (ROC) of a Triple Smooth EMA",
            30,
            ind::trix_lookback,
            |i, n| ind::trix(i[0], n),
        ),
    ];
    register_periods(registry, Group::MomentumIndicators, REAL, single);

    let directional: &[PeriodRow] = &[
        (
            "ADX",
            "Average Directional Movement Index",
            14,
            ind::adx_lookback,
            |i, n| ind::adx(i[0], i[1], i[2], n),
        ),
        (
            "ADXR",
            "Average Directional Movement Index Rating",
            14,
            ind::adxr_lookback,
            |i, n| ind::adxr(i[0], i[1], i[2], n),
        ),
        (
            "DX",
            "Directional Movement Index",
            14,
            ind::dx_lookback,
            |i, n| ind::dx(i[0], i[1], i[2], n),
        ),
        (
            "PLUS_DI",
            "Plus Directional Indicator",
            14,
            ind::di_lookback,
            |i, n| ind::plus_di(i[0], i[1], i[2], n),
        ),
        (
            "MINUS_DI",
            "Minus Directional Indicator",
            14,
            ind::di_lookback,
            |i, n| ind::minus_di(i[0], i[1], i[2], n),
        ),
        (
            "CCI",
            "Commodity Channel Index",
            14,
            ind::cci_lookback,
            |i, n| ind::cci(i[0], i[1], i[2], n),
        ),
        (
            "WILLR",
            "Williams' %R",
            14,
            ind::willr_lookback,
            |i, n| ind::willr(i[0], i[1], i[2], n),
        ),
    ];
    register_periods(registry, Group::MomentumIndicators, HLC, directional);

    let ranges: &[PeriodRow] = &[
        (
            "PLUS_DM",
            "Plus Directional Movement",
            14,
            ind::dm_lookback,
            |i, n| ind::plus_dm(i[0], i[1], n),
        ),
        (
            "MINUS_DM",
            "Minus Directional Movement",
            14,
            ind::dm_lookback,
            |i, n| ind::minus_dm(i[0], i[1], n),
        ),
        (
            "AROONOSC",
            "Aroon Oscillator",
            14,
            ind::aroonosc_lookback,
            |i, n| ind::aroonosc(i[0], i[1], n),
        ),
    ];
    register_periods(registry, Group::MomentumIndicators, HL, ranges);

    register_periods(
        registry,
        Group::MomentumIndicators,
        HLCV,
        &[(
            "MFI",
            "Money Flow Index",
            14,
            ind::mfi_lookback,
            |i, n| ind::mfi(i[0], i[1], i[2], i[3], n),
        )],
    );

    registry.register(
        IndicatorDef::new("AROON", Group::MomentumIndicators, "Aroon")
            .with_inputs(HL)
            .with_param(timeperiod(14))
            .with_output(OutputSpec::real("aroondown"))
            .with_output(OutputSpec::real("aroonup"))
            .with_lookback(|p| ind::aroon_lookback(p.period("timeperiod")?))
            .with_compute(|i, p| {
                let out = ind::aroon(i[0], i[1], p.period("timeperiod")?)?;
                Ok(vec![out.down.into(), out.up.into()])
            }),
    );

    registry.register(
        IndicatorDef::new("BOP", Group::MomentumIndicators, "Balance Of Power")
            .with_inputs(OHLC)
            .with_output(OutputSpec::real("real"))
            .with_lookback(|_| Ok(ind::bop_lookback()))
            .with_compute(|i, _| Ok(one(ind::bop(i[0], i[1], i[2], i[3])?))),
    );

    let oscillators: [(&'static str, &'static str, bool); 2] = [
        ("APO", "Absolute Price Oscillator", false),
        ("PPO", "Percentage Price Oscillator", true),
    ];
    for (name, description, percent) in oscillators {
        registry.register(
            IndicatorDef::new(name, Group::MomentumIndicators, description)
                .with_param(period("fastperiod", "Number of bars for the fast MA", 12))
                .with_param(period("slowperiod", "Number of bars for the slow MA", 26))
                .with_param(matype("matype", "Type of moving average"))
                .with_output(OutputSpec::real("real"))
                .with_lookback(|p| {
                    let (fast, slow) = (p.period("fastperiod")?, p.period("slowperiod")?);
                    ind::apo_lookback(fast, slow, p.ma_type("matype")?)
                })
                .with_compute(move |i, p| {
                    let (fast, slow) = (p.period("fastperiod")?, p.period("slowperiod")?);
                    let ma = p.ma_type("matype")?;
                    let out = if percent {
                        ind::ppo(i[0], fast, slow, ma)?
                    } else {
                        ind::apo(i[0], fast, slow, ma)?
                    };
                    Ok(one(out))
                }),
        );
    }

    registry.register(with_macd_outputs(
        IndicatorDef::new(
            "MACD",
            Group::MomentumIndicators,
            "Moving Average Convergence/Divergence",
        )
        .with_param(period("fastperiod", "Number of bars for the fast EMA", 12))
        .with_param(period("slowperiod", "Number of bars for the slow EMA", 26))
        .with_param(period("signalperiod", "Smoothing for the signal line", 9))
        .with_lookback(|p| {
            let (fast, slow) = (p.period("fastperiod")?, p.period("slowperiod")?);
            ind::macd_lookback(fast, slow, p.period("signalperiod")?)
        })
        .with_compute(|i, p| {
            let out = ind::macd(
                i[0],
                p.period("fastperiod")?,
                p.period("slowperiod")?,
                p.period("signalperiod")?,
            )?;
            Ok(macd_outputs(out))
        }),
    ));

    registry.register(with_macd_outputs(
        IndicatorDef::new(
            "MACDEXT",
            Group::MomentumIndicators,
            "MACD with controllable MA type",
        )
        .with_param(period("fastperiod", "Number of bars for the fast MA", 12))
        .with_param(matype("fastmatype", "Type of moving average for the fast MA"))
        .with_param(period("slowperiod", "Number of bars for the slow MA", 26))
        .with_param(matype("slowmatype", "Type of moving average for the slow MA"))
        .with_param(period("signalperiod", "Smoothing for the signal line", 9))
        .with_param(matype("signalmatype", "Type of moving average for the signal line"))
        .with_lookback(|p| macdext_params(p)?.lookback())
        .with_compute(|i, p| Ok(macd_outputs(macdext_params(p)?.compute(i[0])?))),
    ));

    registry.register(with_macd_outputs(
        IndicatorDef::new(
            "MACDFIX",
            Group::MomentumIndicators,
            "Moving Average Convergence/Divergence Fix 12/26",
        )
        .with_param(period("signalperiod", "Smoothing for the signal line", 9))
        .with_lookback(|p| ind::macdfix_lookback(p.period("signalperiod")?))
        .with_compute(|i, p| Ok(macd_outputs(ind::macdfix(i[0], p.period("signalperiod")?)?))),
    ));

    registry.register(
        IndicatorDef::new("STOCH", Group::MomentumIndicators, "Stochastic")
            .with_inputs(HLC)
            .with_param(FASTK_PERIOD)
            .with_param(period("slowk_period", "Smoothing for making the Slow-K line", 3))
            .with_param(matype("slowk_matype", "Type of moving average for Slow-K"))
            .with_param(period("slowd_period", "Smoothing for making the Slow-D line", 3))
            .with_param(matype("slowd_matype", "Type of moving average for Slow-D"))
            .with_output(OutputSpec::real("slowk"))
            .with_output(OutputSpec::real("slowd"))
            .with_lookback(|p| stoch_params(p)?.lookback())
            .with_compute(|i, p| {
                let out = stoch_params(p)?.compute(i[0], i[1], i[2])?;
                Ok(vec![out.k.into(), out.d.into()])
            }),
    );

    registry.register(
        IndicatorDef::new("STOCHF", Group::MomentumIndicators, "Stochastic Fast")
            .with_inputs(HLC)
            .with_param(FASTK_PERIOD)
            .with_param(period("fastd_period", "Smoothing for making the Fast-D line", 3))
            .with_param(matype("fastd_matype", "Type of moving average for Fast-D"))
            .with_output(OutputSpec::real("fastk"))
            .with_output(OutputSpec::real("fastd"))
            .with_lookback(|p| stochf_params(p)?.lookback())
            .with_compute(|i, p| {
                let out = stochf_params(p)?.compute(i[0], i[1], i[2])?;
                Ok(vec![out.k.into(), out.d.into()])
            }),
    );

    registry.register(
        IndicatorDef::new(
            "STOCHRSI",
            Group::MomentumIndicators,
            "Stochastic Relative Strength Index",
        )
        .with_param(timeperiod(14))
        .with_param(FASTK_PERIOD)
        .with_param(period("fastd_period", "Smoothing for making the Fast-D line", 3))
        .with_param(matype("fastd_matype", "Type of moving average for Fast-D"))
        .with_output(OutputSpec::real("fastk"))
        .with_output(OutputSpec::real("fastd"))
        .with_lookback(|p| stochrsi_params(p)?.lookback())
        .with_compute(|i, p| {
            let out = stochrsi_params(p)?.compute(i[0])?;
            Ok(vec![out.k.into(), out.d.into()])
        }),
    );

    registry.register(
        IndicatorDef::new("ULTOSC", Group::MomentumIndicators, "Ultimate Oscillator")
            .with_inputs(HLC)
            .with_param(period("timeperiod1", "Number of bars for the 1st period", 7))
            .with_param(period("timeperiod2", "Number of bars for the 2nd period", 14))
            .with_param(period("timeperiod3", "Number of bars for the 3rd period", 28))
            .with_output(OutputSpec::real("real"))
            .with_lookback(|p| {
                ind::ultosc_lookback(
                    p.period("timeperiod1")?,
                    p.period("timeperiod2")?,
                    p.period("timeperiod3")?,
                )
            })
            .with_compute(|i, p| {
                Ok(one(ind::ultosc(
                    i[0],
                    i[1],
                    i[2],
                    p.period("timeperiod1")?,
                    p.period("timeperiod2")?,
                    p.period("timeperiod3")?,
                )?))
            }),
    );
}
