//! Parameter schema and resolved parameter sets.
//!
//! Every indicator declares its parameters as a list of [`ParamSpec`]s, each
//! carrying a documented default. A call supplies zero or more overrides by
//! name; [`Params::resolve`] merges them over the defaults and checks their
//! types. Range checks stay with the indicator functions themselves, so the
//! registry reports exactly the errors a direct call would.
//!
//! # Example
//!
//! ```
//! use tacalc_registry::params::{ParamSpec, ParamValue, Params};
//!
//! let specs = [
//!     ParamSpec::integer("timeperiod", "Number of bars", 14),
//!     ParamSpec::real("nbdev", "Deviation multiplier", 1.0),
//! ];
//!
//! let params = Params::resolve("STDDEV", &specs, &[("nbdev", ParamValue::Integer(2))]).unwrap();
//! assert_eq!(params.period("timeperiod").unwrap(), 14);
//! assert_eq!(params.real("nbdev").unwrap(), 2.0);
//! ```

use strum::{Display, IntoStaticStr};
use tacalc::indicators::MaType;
use tacalc::{Error, Result};

/// Value type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ParamKind {
    /// Whole number, e.g. a period.
    Integer,
    /// Floating-point factor, limit or ratio.
    Real,
    /// Moving average selector.
    MaType,
}

/// A concrete parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Whole number.
    Integer(i64),
    /// Floating-point value.
    Real(f64),
    /// Moving average selector.
    MaType(MaType),
}

impl ParamValue {
    /// Returns the value's type.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        match self {
            Self::Integer(_) => ParamKind::Integer,
            Self::Real(_) => ParamKind::Real,
            Self::MaType(_) => ParamKind::MaType,
        }
    }

    /// Converts the value to the given kind.
    ///
    /// Integers widen to reals and decode to moving average codes; nothing
    /// else converts, which yields `Ok(None)`. An integer naming no moving
    /// average is out of range rather than mistyped.
    fn coerce(self, name: &'static str, kind: ParamKind) -> Result<Option<Self>> {
        match (self, kind) {
            (Self::Integer(_), ParamKind::Integer)
            | (Self::Real(_), ParamKind::Real)
            | (Self::MaType(_), ParamKind::MaType) => Ok(Some(self)),
            #[allow(clippy::cast_precision_loss)]
            (Self::Integer(v), ParamKind::Real) => Ok(Some(Self::Real(v as f64))),
            #[allow(clippy::cast_precision_loss)]
            (Self::Integer(code), ParamKind::MaType) => MaType::from_code(code)
                .map(|ma| Some(Self::MaType(ma)))
                .map_err(|_| Error::InvalidParameter {
                    name,
                    value: code as f64,
                    reason: "moving average type must be 0..=8",
                }),
            _ => Ok(None),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<MaType> for ParamValue {
    fn from(v: MaType) -> Self {
        Self::MaType(v)
    }
}

/// Declaration of one indicator parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Parameter name, lowercase (`timeperiod`, `nbdevup`, `matype`, ...).
    pub name: &'static str,
    /// Short human-readable description.
    pub description: &'static str,
    /// Value used when the caller does not override it.
    pub default: ParamValue,
}

impl ParamSpec {
    /// Declares an integer parameter.
    #[must_use]
    pub const fn integer(name: &'static str, description: &'static str, default: i64) -> Self {
        Self {
            name,
            description,
            default: ParamValue::Integer(default),
        }
    }

    /// Declares a real parameter.
    #[must_use]
    pub const fn real(name: &'static str, description: &'static str, default: f64) -> Self {
        Self {
            name,
            description,
            default: ParamValue::Real(default),
        }
    }

    /// Declares a moving average selector.
    #[must_use]
    pub const fn ma_type(name: &'static str, description: &'static str, default: MaType) -> Self {
        Self {
            name,
            description,
            default: ParamValue::MaType(default),
        }
    }

    /// Returns the declared value type.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.default.kind()
    }
}

/// A full parameter set for one indicator, defaults merged with overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    indicator: &'static str,
    values: Vec<(&'static str, ParamValue)>,
}

impl Params {
    /// Merges `overrides` over the defaults in `specs`.
    ///
    /// Override names match case-insensitively. A later override of the
    /// same parameter wins.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownParameter` if an override names no declared parameter.
    /// - `Error::ParameterType` if an override cannot be converted to the
    ///   declared type.
    /// - `Error::InvalidParameter` if an integer override of a moving average
    ///   selector is not a valid code.
    pub fn resolve(
        indicator: &'static str,
        specs: &[ParamSpec],
        overrides: &[(&str, ParamValue)],
    ) -> Result<Self> {
        let mut values: Vec<_> = specs.iter().map(|s| (s.name, s.default)).collect();
        for &(name, value) in overrides {
            let slot = values
                .iter_mut()
                .find(|(declared, _)| declared.eq_ignore_ascii_case(name))
                .ok_or_else(|| Error::UnknownParameter {
                    indicator,
                    name: name.to_string(),
                })?;
            let (name, kind) = (slot.0, slot.1.kind());
            slot.1 = value.coerce(name, kind)?.ok_or(Error::ParameterType {
                indicator,
                name,
                expected: kind.into(),
            })?;
        }
        Ok(Self { indicator, values })
    }

    /// Indicator these parameters belong to.
    #[must_use]
    pub const fn indicator(&self) -> &'static str {
        self.indicator
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.values
            .iter()
            .find(|(declared, _)| declared.eq_ignore_ascii_case(name))
            .map(|&(_, v)| v)
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ParamValue)> + '_ {
        self.values.iter().copied()
    }

    fn require(&self, name: &'static str) -> Result<ParamValue> {
        self.get(name).ok_or_else(|| Error::UnknownParameter {
            indicator: self.indicator,
            name: name.to_string(),
        })
    }

    /// Reads an integer parameter as a period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for negative values, and the
    /// lookup errors of [`Params::get`] otherwise.
    pub fn period(&self, name: &'static str) -> Result<usize> {
        match self.require(name)? {
            #[allow(clippy::cast_precision_loss)]
            ParamValue::Integer(v) => usize::try_from(v).map_err(|_| Error::InvalidParameter {
                name,
                value: v as f64,
                reason: "must not be negative",
            }),
            _ => Err(self.type_error(name, ParamKind::Integer)),
        }
    }

    /// Reads a real parameter.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownParameter` or `Error::ParameterType`.
    pub fn real(&self, name: &'static str) -> Result<f64> {
        match self.require(name)? {
            ParamValue::Real(v) => Ok(v),
            _ => Err(self.type_error(name, ParamKind::Real)),
        }
    }

    /// Reads a moving average selector.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownParameter` or `Error::ParameterType`.
    pub fn ma_type(&self, name: &'static str) -> Result<MaType> {
        match self.require(name)? {
            ParamValue::MaType(v) => Ok(v),
            _ => Err(self.type_error(name, ParamKind::MaType)),
        }
    }

    fn type_error(&self, name: &'static str, expected: ParamKind) -> Error {
        Error::ParameterType {
            indicator: self.indicator,
            name,
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: [ParamSpec; 3] = [
        ParamSpec::integer("timeperiod", "Number of bars", 5),
        ParamSpec::real("nbdevup", "Upper multiplier", 2.0),
        ParamSpec::ma_type("matype", "Moving average", MaType::Sma),
    ];

    #[test]
    fn test_defaults() {
        let params = Params::resolve("BBANDS", &SPECS, &[]).unwrap();
        assert_eq!(params.period("timeperiod").unwrap(), 5);
        assert_eq!(params.real("nbdevup").unwrap(), 2.0);
        assert_eq!(params.ma_type("matype").unwrap(), MaType::Sma);
        assert_eq!(params.iter().count(), 3);
        assert_eq!(params.indicator(), "BBANDS");
    }

    #[test]
    fn test_overrides_and_coercion() {
        let params = Params::resolve(
            "BBANDS",
            &SPECS,
            &[
                ("TimePeriod", 20.into()),
                ("nbdevup", 3.into()),
                ("matype", 1.into()),
            ],
        )
        .unwrap();
        assert_eq!(params.period("timeperiod").unwrap(), 20);
        assert_eq!(params.real("nbdevup").unwrap(), 3.0);
        assert_eq!(params.ma_type("matype").unwrap(), MaType::Ema);
    }

    #[test]
    fn test_unknown_parameter() {
        let err = Params::resolve("BBANDS", &SPECS, &[("period", 3.into())]).unwrap_err();
        assert!(matches!(err, Error::UnknownParameter { ref name, .. } if name == "period"));
        assert!(err.is_usage());
    }

    #[test]
    fn test_type_mismatch() {
        let err = Params::resolve("BBANDS", &SPECS, &[("timeperiod", 2.5.into())]).unwrap_err();
        assert_eq!(
            err,
            Error::ParameterType {
                indicator: "BBANDS",
                name: "timeperiod",
                expected: "integer",
            }
        );
        // a real is never a moving average code
        let err = Params::resolve("BBANDS", &SPECS, &[("matype", 1.0.into())]).unwrap_err();
        assert!(matches!(err, Error::ParameterType { expected: "ma_type", .. }));
    }

    #[test]
    fn test_out_of_range_ma_code() {
        for code in [9_i32, 12, -1] {
            let err = Params::resolve("BBANDS", &SPECS, &[("matype", code.into())]).unwrap_err();
            let Error::InvalidParameter { name, value, .. } = &err else {
                panic!("code {code}: {err:?}");
            };
            assert_eq!(*name, "matype");
            assert_eq!(*value, f64::from(code));
            assert!(err.is_usage());
        }
    }

    #[test]
    fn test_negative_period() {
        let params = Params::resolve("BBANDS", &SPECS, &[("timeperiod", (-3).into())]).unwrap();
        assert!(params.period("timeperiod").unwrap_err().is_usage());
    }
}
