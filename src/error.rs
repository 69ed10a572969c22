//! Error types
//!
//! Domain violations inside the arithmetic (NaN, infinity) are never errors: they
//! are carried as sentinel ranges. The enums below only cover configuration
//! problems that a caller can fix before computing anything.

use thiserror::Error;

/// Errors raised while building contexts and ranges
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Precision outside the range supported by MPFR
    #[error("invalid precision {precision}: must be between {min} and {max} bits")]
    InvalidPrecision { precision: u32, min: u32, max: u32 },

    /// Internal precision lower than the output precision
    #[error("internal precision {internal} is lower than output precision {precision}")]
    InternalPrecisionTooLow { internal: u32, precision: u32 },

    /// Deviation terms must be listed with strictly increasing symbols
    #[error("noise symbols are not strictly increasing at term {position}")]
    UnorderedSymbols { position: usize },

    /// Caller-supplied symbol not yet drawn from the context
    #[error("noise symbol e{symbol} was not issued by this context")]
    UnissuedSymbol { symbol: u64 },

    /// Constructor input was NaN or infinite
    #[error("non-finite value passed to {operation}")]
    NonFinite { operation: &'static str },

    /// Lower bound above upper bound
    #[error("empty interval: lower bound {lower} exceeds upper bound {upper}")]
    EmptyInterval { lower: String, upper: String },

    /// Rational coefficient with a zero denominator
    #[error("zero denominator in ratio {numerator}/0")]
    ZeroDenominator { numerator: i128 },
}

/// Errors raised by the ODE stepper framework
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OdeError {
    /// The system has no state groups
    #[error("system has no state groups")]
    EmptySystem,

    /// Each state group needs exactly one right-hand side
    #[error("system has {groups} state groups but {functions} right-hand side functions")]
    GroupCountMismatch { groups: usize, functions: usize },

    /// A state group has no variables
    #[error("state group {group} has no variables")]
    EmptyGroup { group: usize },

    /// Initial time or state is NaN or infinite
    #[error("initial {what} is not finite")]
    NonFiniteInitialValue { what: String },

    /// Step size is NaN or infinite
    #[error("step size is not finite")]
    InvalidStepSize,

    /// Integration was asked for zero steps
    #[error("number of steps must be greater than 0")]
    ZeroSteps,

    /// Building a coefficient or scratch range failed
    #[error("range construction failed: {0}")]
    Range(#[from] RangeError),

    /// A state variable degenerated during integration
    #[error("{kind} detected in state group {group}, variable {dim} at step {step}")]
    NonFiniteState {
        kind: &'static str,
        group: usize,
        dim: usize,
        step: usize,
    },
}
