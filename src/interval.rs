//! Interval arithmetic over MPFR floats
//!
//! This is the independent enclosure the affine operators are refined against.
//! Every endpoint is rounded outward: lower bounds toward −∞, upper bounds
//! toward +∞, so the result always contains the exact interval result.

use std::fmt;

use rug::float::{Round, Special};
use rug::Float;

/// Closed interval `[left, right]`
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    left: Float,
    right: Float,
}

impl Interval {
    /// Create an interval from its endpoints.
    pub fn new(left: Float, right: Float) -> Self {
        Self { left, right }
    }

    /// Degenerate interval `[value, value]` rounded outward to `precision`.
    pub fn point(precision: u32, value: &Float) -> Self {
        Self::from_bounds(precision, value, value)
    }

    /// Interval `[lower, upper]` rounded outward to `precision`.
    pub fn from_bounds(precision: u32, lower: &Float, upper: &Float) -> Self {
        let (left, _) = Float::with_val_round(precision, lower, Round::Down);
        let (right, _) = Float::with_val_round(precision, upper, Round::Up);
        Self { left, right }
    }

    /// Interval `[lower, upper]` from two `f64` values, rounded outward.
    pub fn from_f64(precision: u32, lower: f64, upper: f64) -> Self {
        let (left, _) = Float::with_val_round(precision, lower, Round::Down);
        let (right, _) = Float::with_val_round(precision, upper, Round::Up);
        Self { left, right }
    }

    /// `[NaN, NaN]`
    pub fn nan(precision: u32) -> Self {
        Self {
            left: Float::with_val(precision, Special::Nan),
            right: Float::with_val(precision, Special::Nan),
        }
    }

    /// `[−∞, +∞]`
    pub fn entire(precision: u32) -> Self {
        Self {
            left: Float::with_val(precision, Special::NegInfinity),
            right: Float::with_val(precision, Special::Infinity),
        }
    }

    /// Lower bound
    pub fn left(&self) -> &Float {
        &self.left
    }

    /// Upper bound
    pub fn right(&self) -> &Float {
        &self.right
    }

    /// Precision of the endpoints
    pub fn precision(&self) -> u32 {
        self.left.prec().max(self.right.prec())
    }

    /// Either endpoint is NaN
    pub fn has_nan(&self) -> bool {
        self.left.is_nan() || self.right.is_nan()
    }

    /// Either endpoint is infinite
    pub fn is_unbounded(&self) -> bool {
        self.left.is_infinite() || self.right.is_infinite()
    }

    /// Lower bound above upper bound (or NaN)
    pub fn is_empty(&self) -> bool {
        self.has_nan() || self.left > self.right
    }

    /// `other ⊆ self`
    pub fn contains(&self, other: &Interval) -> bool {
        self.left <= other.left && other.right <= self.right
    }

    /// `value ∈ self`
    pub fn contains_value(&self, value: &Float) -> bool {
        self.left <= *value && *value <= self.right
    }

    /// Width `right − left`, rounded up.
    pub fn width(&self) -> Float {
        let precision = self.precision();
        Float::with_val_round(precision, &self.right - &self.left, Round::Up).0
    }

    /// `−self`
    pub fn neg(&self, precision: u32) -> Interval {
        let (left, _) = Float::with_val_round(precision, -&self.right, Round::Down);
        let (right, _) = Float::with_val_round(precision, -&self.left, Round::Up);
        Interval { left, right }
    }

    /// `self + other`
    pub fn add(&self, other: &Interval, precision: u32) -> Interval {
        let (left, _) = Float::with_val_round(precision, &self.left + &other.left, Round::Down);
        let (right, _) = Float::with_val_round(precision, &self.right + &other.right, Round::Up);
        Interval { left, right }
    }

    /// `self − other`
    pub fn sub(&self, other: &Interval, precision: u32) -> Interval {
        let (left, _) = Float::with_val_round(precision, &self.left - &other.right, Round::Down);
        let (right, _) = Float::with_val_round(precision, &self.right - &other.left, Round::Up);
        Interval { left, right }
    }

    /// `self × other`
    pub fn mul(&self, other: &Interval, precision: u32) -> Interval {
        let pairs = [
            (&self.left, &other.left),
            (&self.left, &other.right),
            (&self.right, &other.left),
            (&self.right, &other.right),
        ];

        let mut left = Float::with_val(precision, Special::Infinity);
        let mut right = Float::with_val(precision, Special::NegInfinity);
        for (a, b) in pairs {
            let (lower, _) = Float::with_val_round(precision, a * b, Round::Down);
            let (upper, _) = Float::with_val_round(precision, a * b, Round::Up);
            if lower < left {
                left = lower;
            }
            if upper > right {
                right = upper;
            }
        }
        Interval { left, right }
    }

    /// `self × scalar` for an exact scalar
    pub fn scale(&self, scalar: &Float, precision: u32) -> Interval {
        self.mul(&Interval::point(scalar.prec(), scalar), precision)
    }

    /// `self ∩ other`; may be empty
    pub fn intersect(&self, other: &Interval) -> Interval {
        let left = if other.left > self.left { &other.left } else { &self.left };
        let right = if other.right < self.right { &other.right } else { &self.right };
        Interval {
            left: left.clone(),
            right: right.clone(),
        }
    }

    /// Smallest interval containing both
    pub fn hull(&self, other: &Interval) -> Interval {
        let left = if other.left < self.left { &other.left } else { &self.left };
        let right = if other.right > self.right { &other.right } else { &self.right };
        Interval {
            left: left.clone(),
            right: right.clone(),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left.to_f64_round(Round::Down), self.right.to_f64_round(Round::Up))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
