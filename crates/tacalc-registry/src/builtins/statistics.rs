//! Rolling statistics and linear regression.

use tacalc::indicators as ind;

use super::{one, register_periods, timeperiod, PeriodRow, REAL, REAL_PAIR};
use crate::def::{Group, IndicatorDef, OutputSpec};
use crate::params::ParamSpec;
use crate::registry::Registry;

pub(super) fn register(registry: &mut Registry) {
    let regression: &[PeriodRow] = &[
        (
            "LINEARREG",
            "Linear Regression",
            14,
            ind::linearreg_lookback,
            |i, n| ind::linearreg(i[0], n),
        ),
        (
            "LINEARREG_ANGLE",
            "Linear Regression Angle",
            14,
            ind::linearreg_lookback,
            |i, n| ind::linearreg_angle(i[0], n),
        ),
        (
            "LINEARREG_INTERCEPT",
            "Linear Regression Intercept",
            14,
            ind::linearreg_lookback,
            |i, n| ind::linearreg_intercept(i[0], n),
        ),
        (
            "LINEARREG_SLOPE",
            "Linear Regression Slope",
            14,
            ind::linearreg_lookback,
            |i, n| ind::linearreg_slope(i[0], n),
        ),
        (
            "TSF",
            "Time Series Forecast",
            14,
            ind::linearreg_lookback,
            |i, n| ind::tsf(i[0], n),
        ),
        (
            "AVGDEV",
            "Average Deviation",
            14,
            ind::dispersion_lookback,
            |i, n| ind::avgdev(i[0], n),
        ),
    ];
    register_periods(registry, Group::StatisticFunctions, REAL, regression);

    let pairs: &[PeriodRow] = &[
        (
            "BETA",
            "Beta",
            5,
            ind::beta_lookback,
            |i, n| ind::beta(i[0], i[1], n),
        ),
        (
            "CORREL",
            "Pearson's Correlation Coefficient (r)",
            30,
            ind::correl_lookback,
            |i, n| ind::correl(i[0], i[1], n),
        ),
    ];
    register_periods(registry, Group::StatisticFunctions, REAL_PAIR, pairs);

    let dispersion: [(&'static str, &'static str, bool); 2] =
        [("STDDEV", "Standard Deviation", true), ("VAR", "Variance", false)];
    for (name, description, root) in dispersion {
        registry.register(
            IndicatorDef::new(name, Group::StatisticFunctions, description)
                .with_param(timeperiod(5))
                .with_param(ParamSpec::real("nbdev", "Number of deviations", 1.0))
                .with_output(OutputSpec::real("real"))
                .with_lookback(|p| ind::dispersion_lookback(p.period("timeperiod")?))
                .with_compute(move |i, p| {
                    let (period, nbdev) = (p.period("timeperiod")?, p.real("nbdev")?);
                    let out = if root {
                        ind::stddev(i[0], period, nbdev)?
                    } else {
                        ind::var(i[0], period, nbdev)?
                    };
                    Ok(one(out))
                }),
        );
    }
}
