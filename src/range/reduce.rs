//! Term-count control
//!
//! Long-running computations accumulate one error term per operation. Terms
//! that contribute little to the radius can be merged into a single fresh term:
//! the enclosure stays sound but their correlations are forgotten.

use std::cmp::Ordering;

use rug::float::Round;
use rug::Float;

use super::bounds::compute_range;
use super::mixed::check_result;
use super::rounding::sum_abs;
use super::{Range, Term};
use crate::context::Context;

/// Merge the terms of `z` whose magnitude is at most `fraction · radius`.
///
/// Leaves `z` untouched when it has fewer than two terms, when `fraction` is
/// outside `[0, 1)` or NaN, when no term is small enough, or when `z` is NaN or
/// infinite. The true range can only grow.
pub fn reduce_small(ctx: &Context, z: &mut Range, fraction: f64) {
    if z.terms.len() < 2 || !(0.0..1.0).contains(&fraction) || !z.is_finite() {
        return;
    }
    let internal = ctx.internal_precision();

    let (threshold, _) = Float::with_val_round(internal, &z.radius * fraction, Round::Nearest);

    let (kept, small): (Vec<Term>, Vec<Term>) = std::mem::take(&mut z.terms)
        .into_iter()
        .partition(|term| term.deviation.cmp_abs(&threshold) == Some(Ordering::Greater));
    if small.is_empty() {
        z.terms = kept;
        return;
    }

    let merged = sum_abs(small.iter().map(|t| &t.deviation), internal);
    log::trace!(
        "reduce_small: kept {} terms, merged {} into {}",
        kept.len(),
        small.len(),
        merged.to_f64_round(Round::Up)
    );

    let old_range = z.true_range.clone();
    z.terms = kept;
    z.error_term = false;
    z.push_error_term(ctx, merged);

    // The new radius may round differently from the old one, so recompute the
    // bounds and keep everything the old enclosure already covered.
    compute_range(ctx, z);
    z.error_term = false;
    z.true_range = z.true_range.hull(&old_range);
    check_result(z);
}
