//! Indicator definition records.
//!
//! An [`IndicatorDef`] is the single record describing one indicator: its
//! name, group, input series, parameter schema, output schema, and the two
//! functions that compute its lookback and its outputs from a resolved
//! [`Params`]. Adding an indicator to a [`Registry`](crate::Registry) means
//! adding one record.

use std::fmt;
use std::sync::Arc;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use tacalc::{Error, Result};

use crate::params::{ParamSpec, ParamValue, Params};

/// Indicator family, as listed by the reference library.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Group {
    /// Element-wise math functions.
    #[strum(serialize = "Math Transform")]
    MathTransform,
    /// Arithmetic and rolling reductions.
    #[strum(serialize = "Math Operators")]
    MathOperators,
    /// Bar price combinations.
    #[strum(serialize = "Price Transform")]
    PriceTransform,
    /// Averages and bands plotted over price.
    #[strum(serialize = "Overlap Studies")]
    OverlapStudies,
    /// Oscillators and directional indicators.
    #[strum(serialize = "Momentum Indicators")]
    MomentumIndicators,
    /// Range based volatility.
    #[strum(serialize = "Volatility Indicators")]
    VolatilityIndicators,
    /// Volume accumulation.
    #[strum(serialize = "Volume Indicators")]
    VolumeIndicators,
    /// Rolling statistics and regression.
    #[strum(serialize = "Statistic Functions")]
    StatisticFunctions,
    /// Hilbert transform cycle measures.
    #[strum(serialize = "Cycle Indicators")]
    CycleIndicators,
    /// Candlestick patterns.
    #[strum(serialize = "Pattern Recognition")]
    PatternRecognition,
}

/// Element type of an output series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum OutputKind {
    /// Real values with a NaN lookback prefix.
    Real,
    /// Pattern or mode signals with a 0 lookback prefix.
    Signal,
    /// Bar indices with a -1 lookback prefix.
    Index,
}

/// Declaration of one output series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSpec {
    /// Output name (`real`, `macdsignal`, `upperband`, ...).
    pub name: &'static str,
    /// Element type.
    pub kind: OutputKind,
}

impl OutputSpec {
    /// Declares a real output.
    #[must_use]
    pub const fn real(name: &'static str) -> Self {
        Self {
            name,
            kind: OutputKind::Real,
        }
    }

    /// Declares a signal output.
    #[must_use]
    pub const fn signal(name: &'static str) -> Self {
        Self {
            name,
            kind: OutputKind::Signal,
        }
    }

    /// Declares an index output.
    #[must_use]
    pub const fn index(name: &'static str) -> Self {
        Self {
            name,
            kind: OutputKind::Index,
        }
    }
}

/// One computed output series.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Real values.
    Real(Vec<f64>),
    /// Pattern or mode signals.
    Signal(Vec<i32>),
    /// Bar indices.
    Index(Vec<i64>),
}

impl Output {
    /// Returns the element type.
    #[must_use]
    pub const fn kind(&self) -> OutputKind {
        match self {
            Self::Real(_) => OutputKind::Real,
            Self::Signal(_) => OutputKind::Signal,
            Self::Index(_) => OutputKind::Index,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Real(v) => v.len(),
            Self::Signal(v) => v.len(),
            Self::Index(v) => v.len(),
        }
    }

    /// Returns `true` if the series has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows real values, if this is a real output.
    #[must_use]
    pub fn as_real(&self) -> Option<&[f64]> {
        match self {
            Self::Real(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows signals, if this is a signal output.
    #[must_use]
    pub fn as_signal(&self) -> Option<&[i32]> {
        match self {
            Self::Signal(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows indices, if this is an index output.
    #[must_use]
    pub fn as_index(&self) -> Option<&[i64]> {
        match self {
            Self::Index(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<f64>> for Output {
    fn from(v: Vec<f64>) -> Self {
        Self::Real(v)
    }
}

impl From<Vec<i32>> for Output {
    fn from(v: Vec<i32>) -> Self {
        Self::Signal(v)
    }
}

impl From<Vec<i64>> for Output {
    fn from(v: Vec<i64>) -> Self {
        Self::Index(v)
    }
}

/// Computes the lookback from resolved parameters.
pub type LookbackFn = Arc<dyn Fn(&Params) -> Result<usize> + Send + Sync>;

/// Computes the outputs from aligned input series and resolved parameters.
pub type ComputeFn = Arc<dyn Fn(&[&[f64]], &Params) -> Result<Vec<Output>> + Send + Sync>;

/// The record describing one indicator.
///
/// # Example
///
/// ```
/// use tacalc::indicators::{sma, sma_lookback};
/// use tacalc_registry::{Group, IndicatorDef, OutputSpec, ParamSpec};
///
/// let def = IndicatorDef::new("SMA", Group::OverlapStudies, "Simple Moving Average")
///     .with_inputs(&["real"])
///     .with_param(ParamSpec::integer("timeperiod", "Number of bars", 30))
///     .with_output(OutputSpec::real("real"))
///     .with_lookback(|p| sma_lookback(p.period("timeperiod")?))
///     .with_compute(|inputs, p| Ok(vec![sma(inputs[0], p.period("timeperiod")?)?.into()]));
///
/// let params = def.resolve(&[("timeperiod", 3.into())]).unwrap();
/// assert_eq!(def.lookback(&params).unwrap(), 2);
/// let out = def.compute(&[&[1.0, 2.0, 3.0, 4.0, 5.0]], &params).unwrap();
/// assert_eq!(out[0].as_real().unwrap()[2..], [2.0, 3.0, 4.0]);
/// ```
#[derive(Clone)]
pub struct IndicatorDef {
    name: &'static str,
    group: Group,
    description: &'static str,
    inputs: &'static [&'static str],
    params: Vec<ParamSpec>,
    outputs: Vec<OutputSpec>,
    lookback: LookbackFn,
    compute: ComputeFn,
}

impl IndicatorDef {
    /// Starts a record with one `real` input, no parameters and no outputs.
    #[must_use]
    pub fn new(name: &'static str, group: Group, description: &'static str) -> Self {
        Self {
            name,
            group,
            description,
            inputs: &["real"],
            params: Vec::new(),
            outputs: Vec::new(),
            lookback: Arc::new(|_| Ok(0)),
            compute: Arc::new(|_, _| Ok(Vec::new())),
        }
    }

    /// Sets the input series names.
    #[must_use]
    pub const fn with_inputs(mut self, inputs: &'static [&'static str]) -> Self {
        self.inputs = inputs;
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Appends an output.
    #[must_use]
    pub fn with_output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    /// Sets the lookback function.
    #[must_use]
    pub fn with_lookback<F>(mut self, f: F) -> Self
    where
        F: Fn(&Params) -> Result<usize> + Send + Sync + 'static,
    {
        self.lookback = Arc::new(f);
        self
    }

    /// Sets the compute function. Inputs arrive in declaration order and
    /// their count is already checked.
    #[must_use]
    pub fn with_compute<F>(mut self, f: F) -> Self
    where
        F: Fn(&[&[f64]], &Params) -> Result<Vec<Output>> + Send + Sync + 'static,
    {
        self.compute = Arc::new(f);
        self
    }

    /// Upper-case indicator name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Indicator family.
    #[must_use]
    pub const fn group(&self) -> Group {
        self.group
    }

    /// Human-readable name.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Input series names, in call order.
    #[must_use]
    pub const fn inputs(&self) -> &'static [&'static str] {
        self.inputs
    }

    /// Parameter schema with defaults.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Output schema, in result order.
    #[must_use]
    pub fn outputs(&self) -> &[OutputSpec] {
        &self.outputs
    }

    /// Merges overrides over the default parameters.
    ///
    /// # Errors
    ///
    /// See [`Params::resolve`].
    pub fn resolve(&self, overrides: &[(&str, ParamValue)]) -> Result<Params> {
        Params::resolve(self.name, &self.params, overrides)
    }

    /// Returns the lookback for `params`.
    ///
    /// # Errors
    ///
    /// Returns the indicator's parameter validation errors.
    pub fn lookback(&self, params: &Params) -> Result<usize> {
        (self.lookback)(params)
    }

    /// Computes every output.
    ///
    /// # Errors
    ///
    /// Returns `Error::InputCount` if `inputs` does not match the schema, and
    /// the indicator's own errors otherwise.
    pub fn compute(&self, inputs: &[&[f64]], params: &Params) -> Result<Vec<Output>> {
        if inputs.len() != self.inputs.len() {
            return Err(Error::InputCount {
                indicator: self.name,
                expected: self.inputs.len(),
                actual: inputs.len(),
            });
        }
        (self.compute)(inputs, params)
    }
}

impl fmt::Debug for IndicatorDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndicatorDef")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("inputs", &self.inputs)
            .field("params", &self.params)
            .field("outputs", &self.outputs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn spread() -> IndicatorDef {
        IndicatorDef::new("SPREAD", Group::MathOperators, "Difference")
            .with_inputs(&["real0", "real1"])
            .with_output(OutputSpec::real("real"))
            .with_compute(|i, _| {
                let diff = tacalc::indicators::math::sub(i[0], i[1])?;
                Ok(vec![diff.into()])
            })
    }

    #[test]
    fn test_group_names() {
        assert_eq!(Group::iter().count(), 10);
        assert_eq!(Group::OverlapStudies.to_string(), "Overlap Studies");
        let parsed = Group::from_str("pattern recognition").unwrap();
        assert_eq!(parsed, Group::PatternRecognition);
    }

    #[test]
    fn test_input_count_checked() {
        let def = spread();
        let params = def.resolve(&[]).unwrap();
        let err = def.compute(&[&[1.0]], &params).unwrap_err();
        assert_eq!(
            err,
            Error::InputCount {
                indicator: "SPREAD",
                expected: 2,
                actual: 1,
            }
        );
        let out = def.compute(&[&[3.0], &[1.0]], &params).unwrap();
        assert_eq!(out, vec![Output::Real(vec![2.0])]);
        assert_eq!(def.lookback(&params).unwrap(), 0);
    }

    #[test]
    fn test_output_accessors() {
        let out = Output::from(vec![0_i32, 100]);
        assert_eq!(out.kind(), OutputKind::Signal);
        assert_eq!(out.as_signal(), Some(&[0, 100][..]));
        assert!(out.as_real().is_none());
        assert_eq!(out.len(), 2);
        assert!(Output::Index(Vec::new()).is_empty());
    }

    #[test]
    fn test_debug_omits_closures() {
        let text = format!("{:?}", spread());
        assert!(text.contains("SPREAD"));
        assert!(text.contains(".."));
    }
}
