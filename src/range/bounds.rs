//! Radius and enclosure of an affine form
//!
//! ```text
//! r     = RU(Σ |dᵢ|)
//! left  = RD(c − r)
//! right = RU(c + r)
//! ```
//!
//! Rounding the two bounds can push them further from the centre than `r`. That
//! slack is added back into the form (into the operation's own error term when
//! there is one), so `c ± r` keeps covering `[left, right]`.

use rug::float::Round;
use rug::Float;

use super::rounding::{add_up, rounding_error, sum_abs};
use super::{Range, Term};
use crate::context::Context;
use crate::interval::Interval;

/// Recompute the radius and true range of `y` from its centre and terms.
pub fn compute_range(ctx: &Context, y: &mut Range) {
    let internal = ctx.internal_precision();

    y.radius = sum_abs(y.terms.iter().map(|t| &t.deviation), internal);

    let (left, left_ordering) = Float::with_val_round(y.precision, &y.centre - &y.radius, Round::Down);
    let (right, right_ordering) = Float::with_val_round(y.precision, &y.centre + &y.radius, Round::Up);

    let left_error = rounding_error(&left, left_ordering, internal);
    let right_error = rounding_error(&right, right_ordering, internal);
    let error = if left_error > right_error { left_error } else { right_error };

    y.true_range = Interval::new(left, right);

    if error.is_zero() || error.is_nan() {
        return;
    }

    add_up(&mut y.radius, &error);
    match y.terms.last_mut() {
        Some(last) if y.error_term => add_up(&mut last.deviation, &error),
        _ => {
            y.terms.push(Term::new(ctx.next_symbol(), error));
            y.error_term = true;
        }
    }
}
