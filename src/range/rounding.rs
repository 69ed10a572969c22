//! Rounding error bounds
//!
//! A value rounded to `p` bits with a non-exact result differs from the exact
//! value by at most one unit in the last place, `2^(exp − p)`. Every helper here
//! accumulates such bounds with upward rounding so the total never
//! under-estimates the true error.

use std::cmp::Ordering;

use rug::float::{Round, Special};
use rug::ops::AddAssignRound;
use rug::Float;

/// Exact zero at `precision`
pub(crate) fn zero(precision: u32) -> Float {
    Float::new(precision)
}

/// Bound on the error of `value`, given the ordering MPFR reported when it was
/// rounded. The bound is returned at `precision`.
pub(crate) fn rounding_error(value: &Float, ordering: Ordering, precision: u32) -> Float {
    if ordering == Ordering::Equal {
        return zero(precision);
    }
    if value.is_nan() {
        return Float::with_val(precision, Special::Nan);
    }
    if value.is_infinite() {
        return Float::with_val(precision, Special::Infinity);
    }

    // A rounded zero is an underflow: the lost value is below the smallest
    // positive value 2^(emin − 1), which is itself representable.
    let shift = match value.get_exp() {
        Some(exp) => exp.saturating_sub(i32::try_from(value.prec()).unwrap_or(i32::MAX)),
        None => rug::float::exp_min().saturating_sub(1),
    };

    let mut ulp = Float::with_val(precision, 1u32);
    ulp <<= shift;
    ulp
}

/// `error += bound(value)`, rounded up.
pub(crate) fn track(error: &mut Float, value: &Float, ordering: Ordering) {
    if ordering != Ordering::Equal {
        let bound = rounding_error(value, ordering, error.prec());
        error.add_assign_round(&bound, Round::Up);
    }
}

/// `acc += value`, rounded up.
pub(crate) fn add_up(acc: &mut Float, value: &Float) {
    acc.add_assign_round(value, Round::Up);
}

/// Σ |values|, correctly rounded up to `precision`.
pub(crate) fn sum_abs<'a, I>(values: I, precision: u32) -> Float
where
    I: IntoIterator<Item = &'a Float>,
{
    let magnitudes: Vec<_> = values.into_iter().map(|v| v.as_abs()).collect();
    let (sum, _) = Float::with_val_round(
        precision,
        Float::sum(magnitudes.iter().map(|m| &**m)),
        Round::Up,
    );
    sum
}
