//! Copy with tracked rounding

use rug::float::Round;
use rug::Float;

use super::bounds::compute_range;
use super::rounding::{self, zero};
use super::{Range, Term};
use crate::context::Context;
use crate::interval::Interval;

/// Copy `x` into `z`, keeping `z`'s precision.
///
/// Re-rounding the centre to `z`'s precision (or a deviation to the context's
/// internal precision) is tracked: the summed error bound becomes one extra
/// term with a fresh symbol. When nothing rounds, the copy shares every symbol
/// with `x` and the bounds are taken over unchanged.
pub fn assign(ctx: &Context, z: &mut Range, x: &Range) {
    let precision = z.precision;
    if x.is_nan() {
        *z = Range::nan(precision);
        return;
    }
    if x.is_inf() {
        *z = Range::inf(precision);
        return;
    }

    let internal = ctx.internal_precision();
    let mut error = zero(internal);

    let (centre, ordering) = Float::with_val_round(precision, &x.centre, Round::Nearest);
    rounding::track(&mut error, &centre, ordering);

    let mut terms = Vec::with_capacity(x.terms.len() + 1);
    for term in &x.terms {
        let (deviation, ordering) = Float::with_val_round(internal, &term.deviation, Round::Nearest);
        rounding::track(&mut error, &deviation, ordering);
        if !deviation.is_zero() {
            terms.push(Term::new(term.symbol, deviation));
        }
    }

    let mut zz = Range::from_parts(centre, terms, precision);
    if error.is_zero() {
        zz.radius = Float::with_val_round(internal, &x.radius, Round::Up).0;
        zz.true_range = Interval::from_bounds(precision, x.true_range.left(), x.true_range.right());
    } else {
        zz.push_error_term(ctx, error);
        compute_range(ctx, &mut zz);
        zz.error_term = false;
    }
    *z = zz;
}
