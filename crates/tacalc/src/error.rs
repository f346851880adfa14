//! Error types for tacalc.
//!
//! Every indicator call either returns its complete output series or one of
//! the errors below. Errors fall into three families, see [`ErrorKind`]:
//! usage errors (bad input shape or parameters), computation failures, and
//! lifecycle errors raised when a [`Context`](crate::context::Context) is not
//! ready to compute.

use thiserror::Error;

use crate::context::ContextState;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied inputs or parameters the indicator cannot accept.
    Usage,
    /// The algorithm could not produce a result for well-formed input.
    Computation,
    /// Computation was attempted outside the initialized window.
    Lifecycle,
}

/// The main error type for tacalc operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Sibling input series (e.g. high/low/close) have different lengths.
    #[error("{indicator}: input length mismatch, expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Indicator that rejected the inputs.
        indicator: &'static str,
        /// Length of the first input series.
        expected: usize,
        /// Length of the offending series.
        actual: usize,
    },

    /// The period parameter is outside the range accepted by the indicator.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A parameter (factor, limit, penetration, moving average code) is out
    /// of range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Description of the accepted range.
        reason: &'static str,
    },

    /// No indicator is registered under the requested name.
    #[error("unknown indicator {name}")]
    UnknownIndicator {
        /// The requested name.
        name: String,
    },

    /// A parameter override names a parameter the indicator does not have.
    #[error("{indicator}: unknown parameter {name}")]
    UnknownParameter {
        /// Indicator name.
        indicator: &'static str,
        /// The unrecognised parameter name.
        name: String,
    },

    /// A parameter override has the wrong value type.
    #[error("{indicator}: parameter {name} expects {expected}")]
    ParameterType {
        /// Indicator name.
        indicator: &'static str,
        /// Parameter name.
        name: &'static str,
        /// Expected value type.
        expected: &'static str,
    },

    /// The number of input series does not match the indicator's schema.
    #[error("{indicator}: expected {expected} input series, got {actual}")]
    InputCount {
        /// Indicator name.
        indicator: &'static str,
        /// Number of series the indicator consumes.
        expected: usize,
        /// Number of series supplied.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// Computation was requested while the context is not ready.
    #[error("cannot {operation} while context is {state}")]
    Lifecycle {
        /// State the context was in.
        state: ContextState,
        /// The rejected operation.
        operation: &'static str,
    },
}

impl Error {
    /// Classifies the error into usage, computation or lifecycle failures.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. }
            | Self::InvalidPeriod { .. }
            | Self::InvalidParameter { .. }
            | Self::UnknownIndicator { .. }
            | Self::UnknownParameter { .. }
            | Self::ParameterType { .. }
            | Self::InputCount { .. } => ErrorKind::Usage,
            Self::NumericConversion { .. } => ErrorKind::Computation,
            Self::Lifecycle { .. } => ErrorKind::Lifecycle,
        }
    }

    /// Returns `true` for errors caused by the caller's inputs or parameters.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self.kind(), ErrorKind::Usage)
    }
}

/// Convenience type alias for Results using the tacalc Error type.
pub type Result<T> = std::result::Result<T, Error>;
