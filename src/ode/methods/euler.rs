//! Forward Euler
//!
//! # Mathematical Background
//!
//! ```text
//! k₁    = f(tₙ, xₙ)
//! xₙ₊₁  = xₙ + h·k₁
//! ```
//!
//! # Characteristics
//!
//! - **Order**: 1
//! - **Stages**: 1
//! - **Error estimate**: none; the stepper reports a zero range
//!
//! Every step costs one multiply and one add per state variable, which makes it
//! the cheapest way to watch rounding error propagate through a system.

use super::Tableau;

pub(super) static TABLEAU: Tableau = Tableau {
    c: &[(0, 1)],
    a: &[&[]],
    b: &[(1, 1)],
    b_hat: &[],
};
