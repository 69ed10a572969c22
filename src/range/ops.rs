//! Arithmetic operators
//!
//! Every operator follows the same protocol:
//!
//! 1. **Domain check**: NaN and infinite operands short-circuit to a sentinel
//!    without touching any term.
//! 2. **Kernel**: one [`affine_1`](super::affine_1) or [`affine_2`](super::affine_2)
//!    call with coefficients encoding the operator, which also closes the
//!    enclosure.
//! 3. **Refinement**: intersection with the interval result on the operands'
//!    true ranges, then collapse of degenerate results into sentinels.
//!
//! The destination's precision is the output precision. Results are built
//! separately and moved into the destination, so the destination's old terms
//! are released only once the new value exists.
//!
//! # Domain tables
//!
//! | operator   | NaN operand | ∞ operand          |
//! |------------|-------------|--------------------|
//! | neg, scale | NaN         | ∞                  |
//! | add, sub   | NaN         | ∞ (one), NaN (two) |
//! | mul        | NaN         | ∞                  |

use rug::float::Round;
use rug::Float;

use super::affine::{affine_1, affine_2, exact_product};
use super::mixed::refine;
use super::{Domain, Range};
use crate::context::Context;

/// Domain of a binary sum or difference
fn additive_domain(x1: &Range, x2: &Range) -> Domain {
    match (x1.domain(), x2.domain()) {
        (Domain::Nan, _) | (_, Domain::Nan) => Domain::Nan,
        (Domain::Inf, Domain::Inf) => Domain::Nan,
        (Domain::Inf, _) | (_, Domain::Inf) => Domain::Inf,
        (Domain::Finite, Domain::Finite) => Domain::Finite,
    }
}

/// Domain of a product
fn multiplicative_domain(x1: &Range, x2: &Range) -> Domain {
    match (x1.domain(), x2.domain()) {
        (Domain::Nan, _) | (_, Domain::Nan) => Domain::Nan,
        (Domain::Inf, _) | (_, Domain::Inf) => Domain::Inf,
        (Domain::Finite, Domain::Finite) => Domain::Finite,
    }
}

fn sentinel(domain: Domain, precision: u32) -> Option<Range> {
    match domain {
        Domain::Nan => Some(Range::nan(precision)),
        Domain::Inf => Some(Range::inf(precision)),
        Domain::Finite => None,
    }
}

fn constant(value: i32) -> Float {
    Float::with_val(32, value)
}

/// `y = −x`
pub fn neg(ctx: &Context, y: &mut Range, x: &Range) {
    let precision = y.precision;
    if let Some(s) = sentinel(x.domain(), precision) {
        *y = s;
        return;
    }

    let mut yy = affine_1(ctx, x, &constant(-1), &constant(0), &constant(0), precision);
    let interval = x.true_range.neg(precision);
    refine(ctx, &mut yy, &interval);
    *y = yy;
}

/// `y = x1 + x2`
pub fn add(ctx: &Context, y: &mut Range, x1: &Range, x2: &Range) {
    let precision = y.precision;
    if let Some(s) = sentinel(additive_domain(x1, x2), precision) {
        *y = s;
        return;
    }

    let one = constant(1);
    let zero = constant(0);
    let mut yy = affine_2(ctx, x1, x2, &one, &one, &zero, &zero, precision);
    let interval = x1.true_range.add(&x2.true_range, precision);
    refine(ctx, &mut yy, &interval);
    *y = yy;
}

/// `y = x1 − x2`
pub fn sub(ctx: &Context, y: &mut Range, x1: &Range, x2: &Range) {
    let precision = y.precision;
    if let Some(s) = sentinel(additive_domain(x1, x2), precision) {
        *y = s;
        return;
    }

    let zero = constant(0);
    let mut yy = affine_2(ctx, x1, x2, &constant(1), &constant(-1), &zero, &zero, precision);
    let interval = x1.true_range.sub(&x2.true_range, precision);
    refine(ctx, &mut yy, &interval);
    *y = yy;
}

/// `y = x1 · x2`
///
/// The linear part is `c₂·x̂₁ + c₁·x̂₂ − c₁·c₂`; the quadratic remainder is
/// bounded by `r₁·r₂` and becomes the error term.
pub fn mul(ctx: &Context, y: &mut Range, x1: &Range, x2: &Range) {
    let precision = y.precision;
    if let Some(s) = sentinel(multiplicative_domain(x1, x2), precision) {
        *y = s;
        return;
    }

    let mut gamma = exact_product(&x1.centre, &x2.centre);
    gamma = -gamma;
    let (delta, _) = Float::with_val_round(ctx.internal_precision(), &x1.radius * &x2.radius, Round::Up);

    let mut yy = affine_2(ctx, x1, x2, &x2.centre, &x1.centre, &gamma, &delta, precision);
    let interval = x1.true_range.mul(&x2.true_range, precision);
    refine(ctx, &mut yy, &interval);
    *y = yy;
}

/// `y = s · x` for an exact scalar `s`
pub fn scale(ctx: &Context, y: &mut Range, x: &Range, s: &Float) {
    let precision = y.precision;
    let domain = match x.domain() {
        Domain::Finite if s.is_nan() => Domain::Nan,
        Domain::Finite if s.is_infinite() => Domain::Inf,
        domain => domain,
    };
    if let Some(sentinel) = sentinel(domain, precision) {
        *y = sentinel;
        return;
    }

    let mut yy = affine_1(ctx, x, s, &constant(0), &constant(0), precision);
    let interval = x.true_range.scale(s, precision);
    refine(ctx, &mut yy, &interval);
    *y = yy;
}

// =================================================================================================
// Tests
// =================================================================================================
