//! Explicit trapezoidal rule (Heun's method)
//!
//! # Mathematical Background
//!
//! ```text
//! k₁    = f(tₙ, xₙ)
//! k₂    = f(tₙ + h, xₙ + h·k₁)
//! xₙ₊₁  = xₙ + h/2·(k₁ + k₂)
//! ```
//!
//! The embedded solution is the Euler step `xₙ + h·k₁`, so the error estimate
//! is `h/2·(k₂ − k₁)`.

use super::Tableau;

pub(super) static TABLEAU: Tableau = Tableau {
    c: &[(0, 1), (1, 1)],
    a: &[&[], &[(1, 1)]],
    b: &[(1, 2), (1, 2)],
    b_hat: &[(1, 1), (0, 1)],
};
