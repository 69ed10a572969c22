//! Linear-combination kernel
//!
//! Every affine operation reduces to
//!
//! ```text
//! ŷ = α·x̂₁ + β·x̂₂ + γ + δ·εₖ
//! ```
//!
//! where `δ ≥ 0` bounds whatever the caller could not represent linearly (the
//! quadratic part of a product, the approximation error of a transcendental
//! function) and `εₖ` is a fresh symbol. The kernel also accounts for its own
//! rounding: every rounded centre and deviation contributes one ulp to `δ`.
//!
//! # Term merge
//!
//! Both term lists are sorted by symbol, so the result is built in a single
//! ordered pass:
//!
//! | symbol present in | deviation              |
//! |-------------------|------------------------|
//! | `x̂₁` only         | `α·d₁`                 |
//! | `x̂₂` only         | `β·d₂`                 |
//! | both              | `α·d₁ + β·d₂` (fused)  |
//!
//! The error term is appended last, so the result has at most `n₁ + n₂ + 1`
//! terms and its symbols stay strictly increasing.

use std::cmp::Ordering;

use rug::float::Round;
use rug::Float;

use super::bounds::compute_range;
use super::rounding::{self, add_up, zero};
use super::{Range, Term};
use crate::context::Context;

/// `α·x + γ + δ`, rounded to `precision`.
///
/// The result's bounds are computed before returning.
pub fn affine_1(
    ctx: &Context,
    x: &Range,
    alpha: &Float,
    gamma: &Float,
    delta: &Float,
    precision: u32,
) -> Range {
    let internal = ctx.internal_precision();
    let mut error = zero(internal);

    // ====== Centre ======

    let product = exact_product(alpha, &x.centre);
    let (centre, ordering) = Float::with_val_round(
        precision,
        Float::sum([&product, gamma].into_iter()),
        Round::Nearest,
    );
    rounding::track(&mut error, &centre, ordering);

    // ====== Deviations ======

    let mut terms = Vec::with_capacity(x.terms.len() + 1);
    for term in &x.terms {
        let (deviation, ordering) = Float::with_val_round(internal, alpha * &term.deviation, Round::Nearest);
        rounding::track(&mut error, &deviation, ordering);
        if !deviation.is_zero() {
            terms.push(Term::new(term.symbol, deviation));
        }
    }

    // ====== Error term ======

    add_up(&mut error, delta);
    let mut y = Range::from_parts(centre, terms, precision);
    y.push_error_term(ctx, error);
    compute_range(ctx, &mut y);
    y
}

/// `α·x₁ + β·x₂ + γ + δ`, rounded to `precision`.
///
/// The result's bounds are computed before returning.
#[allow(clippy::too_many_arguments)]
pub fn affine_2(
    ctx: &Context,
    x1: &Range,
    x2: &Range,
    alpha: &Float,
    beta: &Float,
    gamma: &Float,
    delta: &Float,
    precision: u32,
) -> Range {
    let internal = ctx.internal_precision();
    let mut error = zero(internal);

    // ====== Centre ======

    // Both products are exact, so the centre is rounded exactly once.
    let p1 = exact_product(alpha, &x1.centre);
    let p2 = exact_product(beta, &x2.centre);
    let (centre, ordering) = Float::with_val_round(
        precision,
        Float::sum([&p1, &p2, gamma].into_iter()),
        Round::Nearest,
    );
    rounding::track(&mut error, &centre, ordering);

    // ====== Deviations ======

    let mut terms = Vec::with_capacity(x1.terms.len() + x2.terms.len() + 1);
    let (mut i, mut j) = (0, 0);
    loop {
        let (symbol, (deviation, ordering)) = match (x1.terms.get(i), x2.terms.get(j)) {
            (None, None) => break,
            (Some(a), None) => {
                i += 1;
                (a.symbol, scaled(alpha, a, internal))
            }
            (None, Some(b)) => {
                j += 1;
                (b.symbol, scaled(beta, b, internal))
            }
            (Some(a), Some(b)) => match a.symbol.cmp(&b.symbol) {
                Ordering::Less => {
                    i += 1;
                    (a.symbol, scaled(alpha, a, internal))
                }
                Ordering::Greater => {
                    j += 1;
                    (b.symbol, scaled(beta, b, internal))
                }
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                    let combined = Float::with_val_round(
                        internal,
                        alpha.mul_add_mul_ref(&a.deviation, beta, &b.deviation),
                        Round::Nearest,
                    );
                    (a.symbol, combined)
                }
            },
        };

        rounding::track(&mut error, &deviation, ordering);
        if !deviation.is_zero() {
            terms.push(Term::new(symbol, deviation));
        }
    }

    // ====== Error term ======

    add_up(&mut error, delta);
    let mut y = Range::from_parts(centre, terms, precision);
    y.push_error_term(ctx, error);
    compute_range(ctx, &mut y);
    y
}

/// `a·b` without rounding.
pub(crate) fn exact_product(a: &Float, b: &Float) -> Float {
    let precision = a
        .prec()
        .saturating_add(b.prec())
        .min(rug::float::prec_max());
    Float::with_val(precision, a * b)
}

fn scaled(factor: &Float, term: &Term, internal: u32) -> (Float, Ordering) {
    Float::with_val_round(internal, factor * &term.deviation, Round::Nearest)
}

// =================================================================================================
// Tests
// =================================================================================================
