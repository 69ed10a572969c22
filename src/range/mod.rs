//! Affine ranges
//!
//! A [`Range`] is an affine form
//!
//! ```text
//! x̂ = c + d₁·ε₁ + d₂·ε₂ + … + dₙ·εₙ,    εᵢ ∈ [−1, 1]
//! ```
//!
//! together with a rigorous enclosure of every value it can take. Each noise
//! symbol `εᵢ` is one independent source of uncertainty. Two ranges sharing a
//! symbol are correlated through it, which is what lets `x − x` collapse to zero
//! where plain interval arithmetic would double the width.
//!
//! # Representation
//!
//! | Field        | Precision           | Meaning                                  |
//! |--------------|---------------------|------------------------------------------|
//! | `centre`     | range precision     | `c`                                      |
//! | `terms`      | internal precision  | `(εᵢ, dᵢ)` with strictly increasing `εᵢ`  |
//! | `radius`     | internal precision  | upward-rounded bound on `Σ |dᵢ|`          |
//! | `true_range` | range precision     | outward-rounded enclosure                |
//!
//! # Domain states
//!
//! NaN and infinite ranges bypass the term representation entirely:
//!
//! - **NaN**: centre, radius and both bounds NaN, no terms
//! - **Infinity**: centre 0, radius +∞, bounds `[−∞, +∞]`, no terms
//!
//! # Example
//!
//! ```rust
//! use affine_rs::context::Context;
//! use affine_rs::range::{self, Range};
//!
//! let ctx = Context::new();
//! let x = Range::from_bounds(&ctx, 1.0, 2.0, 53).unwrap();
//!
//! let mut y = Range::new(53);
//! range::sub(&ctx, &mut y, &x, &x);
//! assert!(y.true_range().contains_value(&rug::Float::with_val(53, 0)));
//! assert_eq!(y.nterms(), 0);
//! ```

mod affine;
mod assign;
mod bounds;
mod mixed;
mod ops;
mod reduce;
mod rounding;

pub use affine::{affine_1, affine_2};
pub use assign::assign;
pub use bounds::compute_range;
pub use ops::{add, mul, neg, scale, sub};
pub use reduce::reduce_small;

use std::cmp::Ordering;
use std::fmt;

use rug::float::{Round, Special};
use rug::{Float, Rational};

use crate::context::{validate_precision, Context, Symbol};
use crate::error::RangeError;
use crate::interval::Interval;

use rounding::{rounding_error, zero};

// =================================================================================================
// Terms
// =================================================================================================

/// One deviation term `dᵢ·εᵢ`
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    symbol: Symbol,
    deviation: Float,
}

impl Term {
    pub(crate) fn new(symbol: Symbol, deviation: Float) -> Self {
        Self { symbol, deviation }
    }

    /// Noise symbol `εᵢ`
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Deviation magnitude `dᵢ` (signed)
    pub fn deviation(&self) -> &Float {
        &self.deviation
    }
}

/// Domain state of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Finite,
    Nan,
    Inf,
}

// =================================================================================================
// Range
// =================================================================================================

/// Affine form with a rigorous enclosure
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    centre: Float,
    radius: Float,
    true_range: Interval,
    precision: u32,
    terms: Vec<Term>,

    /// The last term is the error term of the operation that produced this
    /// value. Only set between the kernel and the mixed refinement.
    error_term: bool,
}

impl Range {
    /// The exact zero range.
    ///
    /// `precision` is not validated here; use [`validate_precision`] first when
    /// it comes from user input, or [`Range::zero`].
    pub fn new(precision: u32) -> Self {
        debug_assert!(
            validate_precision(precision).is_ok(),
            "precision {precision} outside the MPFR range"
        );
        Self {
            centre: zero(precision),
            radius: zero(precision),
            true_range: Interval::new(zero(precision), zero(precision)),
            precision,
            terms: Vec::new(),
            error_term: false,
        }
    }

    /// The exact zero range at the context's default precision
    pub fn zero(ctx: &Context) -> Self {
        Self::new(ctx.precision())
    }

    /// The NaN sentinel
    pub fn nan(precision: u32) -> Self {
        Self {
            centre: Float::with_val(precision, Special::Nan),
            radius: Float::with_val(precision, Special::Nan),
            true_range: Interval::nan(precision),
            precision,
            terms: Vec::new(),
            error_term: false,
        }
    }

    /// The infinity sentinel
    pub fn inf(precision: u32) -> Self {
        Self {
            centre: zero(precision),
            radius: Float::with_val(precision, Special::Infinity),
            true_range: Interval::entire(precision),
            precision,
            terms: Vec::new(),
            error_term: false,
        }
    }

    /// Range around `value` rounded to `precision`. The rounding error, if any,
    /// becomes a term with a fresh symbol.
    pub fn from_f64(ctx: &Context, value: f64, precision: u32) -> Result<Self, RangeError> {
        validate_precision(precision)?;
        if !value.is_finite() {
            return Err(RangeError::NonFinite { operation: "Range::from_f64" });
        }
        let (centre, ordering) = Float::with_val_round(precision, value, Round::Nearest);
        Ok(Self::from_rounded(ctx, centre, ordering, precision))
    }

    /// Range around an arbitrary-precision value rounded to `precision`.
    pub fn from_float(ctx: &Context, value: &Float, precision: u32) -> Result<Self, RangeError> {
        validate_precision(precision)?;
        if !value.is_finite() {
            return Err(RangeError::NonFinite { operation: "Range::from_float" });
        }
        let (centre, ordering) = Float::with_val_round(precision, value, Round::Nearest);
        Ok(Self::from_rounded(ctx, centre, ordering, precision))
    }

    /// Range around the rational `numerator / denominator`.
    ///
    /// Tableau coefficients such as `1/3` are built this way: the value is
    /// rounded once and the rounding error is carried as a term.
    pub fn from_ratio(
        ctx: &Context,
        numerator: i128,
        denominator: i128,
        precision: u32,
    ) -> Result<Self, RangeError> {
        validate_precision(precision)?;
        if denominator == 0 {
            return Err(RangeError::ZeroDenominator { numerator });
        }
        let ratio = Rational::from((numerator, denominator));
        let (centre, ordering) = Float::with_val_round(precision, &ratio, Round::Nearest);
        Ok(Self::from_rounded(ctx, centre, ordering, precision))
    }

    /// Range covering `[lower, upper]` with one fresh symbol for the width.
    pub fn from_bounds(ctx: &Context, lower: f64, upper: f64, precision: u32) -> Result<Self, RangeError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(RangeError::NonFinite { operation: "Range::from_bounds" });
        }
        let interval = Interval::from_f64(precision.max(53), lower, upper);
        Self::from_interval(ctx, &interval, precision)
    }

    /// Range covering `interval` with one fresh symbol for the width.
    ///
    /// The enclosure is intersected with the interval itself, so the true range
    /// is never wider than the input rounded outward to `precision`.
    pub fn from_interval(ctx: &Context, interval: &Interval, precision: u32) -> Result<Self, RangeError> {
        validate_precision(precision)?;
        if interval.has_nan() || interval.is_unbounded() {
            return Err(RangeError::NonFinite { operation: "Range::from_interval" });
        }
        if interval.is_empty() {
            return Err(RangeError::EmptyInterval {
                lower: interval.left().to_string(),
                upper: interval.right().to_string(),
            });
        }
        let internal = ctx.internal_precision();

        let mut centre = Float::with_val(precision, interval.left() + interval.right());
        centre /= 2u32;

        // Half-width measured from the rounded centre, so no separate error term
        // is needed.
        let (above, _) = Float::with_val_round(internal, interval.right() - &centre, Round::Up);
        let (below, _) = Float::with_val_round(internal, &centre - interval.left(), Round::Up);
        let deviation = if above > below { above } else { below };

        let mut range = Self::new(precision);
        range.centre = centre;
        if !deviation.is_zero() {
            range.terms.push(Term::new(ctx.next_symbol(), deviation));
        }
        compute_range(ctx, &mut range);
        range.error_term = false;

        let input = Interval::from_bounds(precision, interval.left(), interval.right());
        range.true_range = range.true_range.intersect(&input);
        Ok(range)
    }

    /// Range from an explicit centre and deviation terms.
    ///
    /// Symbols must be strictly increasing and already drawn from `ctx`. Zero
    /// deviations are dropped.
    pub fn with_terms(
        ctx: &Context,
        centre: f64,
        terms: &[(Symbol, f64)],
        precision: u32,
    ) -> Result<Self, RangeError> {
        validate_precision(precision)?;
        if !centre.is_finite() || terms.iter().any(|(_, d)| !d.is_finite()) {
            return Err(RangeError::NonFinite { operation: "Range::with_terms" });
        }
        if let Some(position) = terms.windows(2).position(|w| w[0].0 >= w[1].0) {
            return Err(RangeError::UnorderedSymbols { position: position + 1 });
        }
        // The error term drawn below must sort after every caller symbol.
        if let Some(&(symbol, _)) = terms.iter().find(|(s, _)| s.as_raw() >= ctx.symbols_issued()) {
            return Err(RangeError::UnissuedSymbol { symbol: symbol.as_raw() });
        }

        let internal = ctx.internal_precision();
        let mut error = zero(internal);

        let (c, ordering) = Float::with_val_round(precision, centre, Round::Nearest);
        rounding::track(&mut error, &c, ordering);

        let mut range = Self::new(precision);
        range.centre = c;
        for &(symbol, deviation) in terms {
            let (d, ordering) = Float::with_val_round(internal, deviation, Round::Nearest);
            rounding::track(&mut error, &d, ordering);
            if !d.is_zero() {
                range.terms.push(Term::new(symbol, d));
            }
        }
        range.push_error_term(ctx, error);
        compute_range(ctx, &mut range);
        range.error_term = false;
        Ok(range)
    }

    fn from_rounded(ctx: &Context, centre: Float, ordering: Ordering, precision: u32) -> Self {
        if ordering == Ordering::Equal {
            let true_range = Interval::point(precision, &centre);
            let mut range = Self::new(precision);
            range.centre = centre;
            range.true_range = true_range;
            return range;
        }

        let error = rounding_error(&centre, ordering, ctx.internal_precision());
        let mut range = Self::new(precision);
        range.centre = centre;
        range.push_error_term(ctx, error);
        compute_range(ctx, &mut range);
        range.error_term = false;
        range
    }

    /// Append a non-zero error bound as the operation's own term.
    pub(crate) fn push_error_term(&mut self, ctx: &Context, error: Float) {
        if !error.is_zero() {
            self.terms.push(Term::new(ctx.next_symbol(), error));
            self.error_term = true;
        }
    }

    pub(crate) fn from_parts(centre: Float, terms: Vec<Term>, precision: u32) -> Self {
        let mut range = Self::new(precision);
        range.centre = centre;
        range.terms = terms;
        range
    }

    // ====== Accessors ======

    /// Centre value `c`
    pub fn centre(&self) -> &Float {
        &self.centre
    }

    /// Upper bound on the total deviation from the centre
    pub fn radius(&self) -> &Float {
        &self.radius
    }

    /// Rigorous enclosure of every value of the form
    pub fn true_range(&self) -> &Interval {
        &self.true_range
    }

    /// Output precision in bits
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of deviation terms
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    /// Deviation terms in increasing symbol order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_nan(&self) -> bool {
        self.radius.is_nan()
    }

    pub fn is_inf(&self) -> bool {
        self.radius.is_infinite()
    }

    pub fn is_finite(&self) -> bool {
        !self.is_nan() && !self.is_inf()
    }

    pub fn domain(&self) -> Domain {
        if self.is_nan() {
            Domain::Nan
        } else if self.is_inf() {
            Domain::Inf
        } else {
            Domain::Finite
        }
    }

    /// `value` lies in the true range
    pub fn contains(&self, value: &Float) -> bool {
        self.true_range.contains_value(value)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.true_range)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
