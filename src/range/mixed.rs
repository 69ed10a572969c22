//! Mixed interval/affine refinement
//!
//! Affine arithmetic is exact on linear operations but over-approximates
//! products; interval arithmetic does the opposite on correlated operands.
//! Each operator also computes the plain interval result on the operands' true
//! ranges and keeps the intersection of the two enclosures.
//!
//! In [`MixedMode::Trimmed`] the affine form itself is tightened: when its
//! enclosure overshoots the intersection on *both* sides, the smaller overshoot
//! is removed from the operation's own error term and from the radius.

use rug::float::Round;
use rug::ops::SubAssignRound;
use rug::Float;

use super::Range;
use crate::context::{Context, MixedMode};
use crate::interval::Interval;

/// Intersect with `interval` and, in trimmed mode, shrink the own error term.
pub(crate) fn mix_trim(ctx: &Context, y: &mut Range, interval: &Interval) {
    let mode = ctx.mixed_mode();
    if mode == MixedMode::Off || !y.is_finite() || interval.has_nan() {
        return;
    }

    let mixed = y.true_range.intersect(interval);
    if mixed.is_empty() {
        log::warn!(
            "disjoint affine {} and interval {} enclosures, keeping affine result",
            y.true_range,
            interval
        );
        return;
    }
    y.true_range = mixed;

    if mode != MixedMode::Trimmed || !y.error_term {
        return;
    }

    let internal = ctx.internal_precision();
    let (low, _) = Float::with_val_round(y.precision, &y.centre - &y.radius, Round::Down);
    let (high, _) = Float::with_val_round(y.precision, &y.centre + &y.radius, Round::Up);
    let left = y.true_range.left();
    let right = y.true_range.right();
    if !(low < *left && high > *right) {
        return;
    }

    let (below, _) = Float::with_val_round(internal, left - &low, Round::Down);
    let (above, _) = Float::with_val_round(internal, &high - right, Round::Down);
    let margin = if below < above { below } else { above };

    let Some(last) = y.terms.last_mut() else {
        return;
    };
    if margin >= last.deviation {
        y.radius.sub_assign_round(&last.deviation, Round::Up);
        y.terms.pop();
    } else {
        y.radius.sub_assign_round(&margin, Round::Up);
        last.deviation.sub_assign_round(&margin, Round::Up);
    }
}

/// Collapse a degenerate result into the matching sentinel.
pub(crate) fn check_result(y: &mut Range) {
    let precision = y.precision;
    if y.true_range.has_nan() || y.radius.is_nan() {
        log::warn!("result degenerated to NaN at {} bits", precision);
        *y = Range::nan(precision);
    } else if y.true_range.is_unbounded() || y.radius.is_infinite() {
        log::warn!("result degenerated to infinity at {} bits", precision);
        *y = Range::inf(precision);
    }
}

/// Refinement tail shared by every operator.
pub(crate) fn refine(ctx: &Context, y: &mut Range, interval: &Interval) {
    mix_trim(ctx, y, interval);
    check_result(y);
    y.error_term = false;
}
