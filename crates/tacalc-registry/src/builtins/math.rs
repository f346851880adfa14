//! Math transforms, arithmetic operators and rolling extrema.

use tacalc::indicators::{self as ind, math};
use tacalc::Result;

use super::{one, register_periods, timeperiod, PeriodRow, REAL, REAL_PAIR};
use crate::def::{Group, IndicatorDef, OutputSpec};
use crate::registry::Registry;

type UnaryRow = (&'static str, &'static str, fn(&[f64]) -> Vec<f64>);
type BinaryFn = fn(&[f64], &[f64]) -> Result<Vec<f64>>;
type BinaryRow = (&'static str, &'static str, BinaryFn);

pub(super) fn register(registry: &mut Registry) {
    let unary: &[UnaryRow] = &[
        ("ACOS", "Vector Trigonometric ACos", math::acos),
        ("ASIN", "Vector Trigonometric ASin", math::asin),
        ("ATAN", "Vector Trigonometric ATan", math::atan),
        ("CEIL", "Vector Ceil", math::ceil),
        ("COS", "Vector Trigonometric Cos", math::cos),
        ("COSH", "Vector Trigonometric Cosh", math::cosh),
        ("EXP", "Vector Arithmetic Exp", math::exp),
        ("FLOOR", "Vector Floor", math::floor),
        ("LN", "Vector Log Natural", math::ln),
        ("LOG10", "Vector Log10", math::log10),
        ("SIN", "Vector Trigonometric Sin", math::sin),
        ("SINH", "Vector Trigonometric Sinh", math::sinh),
        ("SQRT", "Vector Square Root", math::sqrt),
        ("TAN", "Vector Trigonometric Tan", math::tan),
        ("TANH", "Vector Trigonometric Tanh", math::tanh),
    ];
    for &(name, description, f) in unary {
        registry.register(
            IndicatorDef::new(name, Group::MathTransform, description)
                .with_output(OutputSpec::real("real"))
                .with_lookback(|_| Ok(math::math_lookback()))
                .with_compute(move |i, _| Ok(one(f(i[0])))),
        );
    }

    let binary: &[BinaryRow] = &[
        ("ADD", "Vector Arithmetic Add", math::add),
        ("SUB", "Vector Arithmetic Subtraction", math::sub),
        ("MULT", "Vector Arithmetic Mult", math::mult),
        ("DIV", "Vector Arithmetic Div", math::div),
    ];
    for &(name, description, f) in binary {
        registry.register(
            IndicatorDef::new(name, Group::MathOperators, description)
                .with_inputs(REAL_PAIR)
                .with_output(OutputSpec::real("real"))
                .with_lookback(|_| Ok(math::math_lookback()))
                .with_compute(move |i, _| Ok(one(f(i[0], i[1])?))),
        );
    }

    let windows: &[PeriodRow] = &[
        (
            "MAX",
            "Highest value over a specified period",
            30,
            ind::window_lookback,
            |i, n| ind::max(i[0], n),
        ),
        (
            "MIN",
            "Lowest value over a specified period",
            30,
            ind::window_lookback,
            |i, n| ind::min(i[0], n),
        ),
        (
            "SUM",
            "Summation",
            30,
            ind::window_lookback,
            |i, n| ind::sum(i[0], n),
        ),
    ];
    register_periods(registry, Group::MathOperators, REAL, windows);

    registry.register(
        IndicatorDef::new(
            "MAXINDEX",
            Group::MathOperators,
            "Index of highest value over a specified period",
        )
        .with_param(timeperiod(30))
        .with_output(OutputSpec::index("integer"))
        .with_lookback(|p| ind::window_lookback(p.period("timeperiod")?))
        .with_compute(|i, p| Ok(one(ind::maxindex(i[0], p.period("timeperiod")?)?))),
    );
    registry.register(
        IndicatorDef::new(
            "MININDEX",
            Group::MathOperators,
            "Index of lowest value over a specified period",
        )
        .with_param(timeperiod(30))
        .with_output(OutputSpec::index("integer"))
        .with_lookback(|p| ind::window_lookback(p.period("timeperiod")?))
        .with_compute(|i, p| Ok(one(ind::minindex(i[0], p.period("timeperiod")?)?))),
    );
    registry.register(
        IndicatorDef::new(
            "MINMAX",
            Group::MathOperators,
            "Lowest and highest values over a specified period",
        )
        .with_param(timeperiod(30))
        .with_output(OutputSpec::real("min"))
        .with_output(OutputSpec::real("max"))
        .with_lookback(|p| ind::window_lookback(p.period("timeperiod")?))
        .with_compute(|i, p| {
            let out = ind::minmax(i[0], p.period("timeperiod")?)?;
            Ok(vec![out.min.into(), out.max.into()])
        }),
    );
    registry.register(
        IndicatorDef::new(
            "MINMAXINDEX",
            Group::MathOperators,
            "Indexes of lowest and highest values over a specified period",
        )
        .with_param(timeperiod(30))
        .with_output(OutputSpec::index("minidx"))
        .with_output(OutputSpec::index("maxidx"))
        .with_lookback(|p| ind::window_lookback(p.period("timeperiod")?))
        .with_compute(|i, p| {
            let out = ind::minmaxindex(i[0], p.period("timeperiod")?)?;
            Ok(vec![out.min_idx.into(), out.max_idx.into()])
        }),
    );
}
