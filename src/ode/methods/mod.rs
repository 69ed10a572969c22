//! Explicit Runge-Kutta methods
//!
//! Every integrator is described by its Butcher tableau:
//!
//! ```text
//! c₁ |
//! c₂ | a₂₁
//! c₃ | a₃₁ a₃₂
//! …  | …
//! ---+------------------
//!    | b₁  b₂  …  bₛ        (solution weights)
//!    | b̂₁  b̂₂  …  b̂ₛ        (embedded weights)
//! ```
//!
//! Coefficients are stored as exact rationals `(numerator, denominator)`. The
//! stepper turns each one into a [`Range`](crate::range::Range) once, so a
//! coefficient such as `1/3` carries its representation error as a noise term
//! instead of silently dropping it.
//!
//! # Available Methods
//!
//! | Method                           | Order | Embedded | Stages |
//! |----------------------------------|-------|----------|--------|
//! | [`Method::Euler`]                | 1     | none     | 1      |
//! | [`Method::Trapezoidal`]          | 2     | 1        | 2      |
//! | [`Method::BogackiShampine32`]    | 3     | 2        | 4      |
//! | [`Method::DormandPrince54`]      | 5     | 4        | 7      |
//! | [`Method::DormandPrince87`]      | 8     | 7        | 13     |
//!
//! The embedded weights give the local error estimate `h·Σ (bⱼ − b̂ⱼ)·kⱼ`,
//! stored by the stepper for an external step-size controller.

mod bogacki_shampine;
mod dormand_prince;
mod euler;
mod trapezoidal;

use std::fmt;

/// Exact rational coefficient `(numerator, denominator)`
pub type Ratio = (i64, i64);

/// Butcher tableau of an explicit method
///
/// `a[s]` holds the `s` coefficients of stage `s` (so `a[0]` is empty).
/// `b_hat` is empty for methods without an embedded pair.
#[derive(Debug)]
pub struct Tableau {
    pub c: &'static [Ratio],
    pub a: &'static [&'static [Ratio]],
    pub b: &'static [Ratio],
    pub b_hat: &'static [Ratio],
}

impl Tableau {
    /// Number of stages
    pub fn stages(&self) -> usize {
        self.b.len()
    }

    /// Has embedded weights for error estimation
    pub fn has_embedded(&self) -> bool {
        !self.b_hat.is_empty()
    }

    /// Error weights `bⱼ − b̂ⱼ` as exact `i128` ratios
    pub fn error_weights(&self) -> Vec<(i128, i128)> {
        if !self.has_embedded() {
            return Vec::new();
        }
        self.b
            .iter()
            .zip(self.b_hat)
            .map(|(&(n1, d1), &(n2, d2))| {
                let (n1, d1, n2, d2) = (n1 as i128, d1 as i128, n2 as i128, d2 as i128);
                (n1 * d2 - n2 * d1, d1 * d2)
            })
            .collect()
    }
}

/// Explicit integrator selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Forward Euler
    Euler,

    /// Explicit trapezoidal rule (Heun) with embedded Euler
    Trapezoidal,

    /// Bogacki–Shampine 3(2)
    BogackiShampine32,

    /// Dormand–Prince 5(4)
    DormandPrince54,

    /// Prince–Dormand 8(7), 13 stages
    DormandPrince87,
}

impl Method {
    /// Every available method, lowest order first
    pub const ALL: [Method; 5] = [
        Method::Euler,
        Method::Trapezoidal,
        Method::BogackiShampine32,
        Method::DormandPrince54,
        Method::DormandPrince87,
    ];

    /// Butcher tableau of the method
    pub fn tableau(&self) -> &'static Tableau {
        match self {
            Method::Euler => &euler::TABLEAU,
            Method::Trapezoidal => &trapezoidal::TABLEAU,
            Method::BogackiShampine32 => &bogacki_shampine::TABLEAU,
            Method::DormandPrince54 => &dormand_prince::TABLEAU_54,
            Method::DormandPrince87 => &dormand_prince::TABLEAU_87,
        }
    }

    /// Right-hand side evaluations per step
    pub fn stages(&self) -> usize {
        self.tableau().stages()
    }

    /// Order of the propagated solution
    pub fn order(&self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Trapezoidal => 2,
            Method::BogackiShampine32 => 3,
            Method::DormandPrince54 => 5,
            Method::DormandPrince87 => 8,
        }
    }

    /// Order of the embedded solution, if any
    pub fn embedded_order(&self) -> Option<u32> {
        match self {
            Method::Euler => None,
            Method::Trapezoidal => Some(1),
            Method::BogackiShampine32 => Some(2),
            Method::DormandPrince54 => Some(4),
            Method::DormandPrince87 => Some(7),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Euler => "Forward Euler",
            Method::Trapezoidal => "Trapezoidal",
            Method::BogackiShampine32 => "Bogacki-Shampine 3(2)",
            Method::DormandPrince54 => "Dormand-Prince 5(4)",
            Method::DormandPrince87 => "Dormand-Prince 8(7)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
