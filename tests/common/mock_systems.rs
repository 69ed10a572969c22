//! Mock right-hand sides for testing
//!
//! These systems have known solutions of the discrete schemes, making them
//! ideal for checking that the stepper encloses what it claims to.

use affine_rs::context::Context;
use affine_rs::ode::{RightHandSide, System};
use affine_rs::range::{self, Range};
use rug::Float;

// =================================================================================================
// Exponential Growth: dx/dt = x
// =================================================================================================

/// Exponential growth: dx/dt = x
///
/// Forward Euler with step h gives x_n = x₀·(1 + h)ⁿ exactly.
pub struct ExponentialGrowth;

impl RightHandSide for ExponentialGrowth {
    fn evaluate(&self, ctx: &Context, dxdt: &mut Range, _t: &Range, x: &[Vec<Range>], group: usize, dim: usize) {
        range::assign(ctx, dxdt, &x[group][dim]);
    }

    fn name(&self) -> &str {
        "Exponential Growth"
    }
}

impl ExponentialGrowth {
    /// Single-variable system starting at `x0`, t = 0
    pub fn system(x0: Range) -> System {
        let precision = x0.precision();
        let mut system = System::new(Range::new(precision));
        system.add_group(vec![x0], ExponentialGrowth);
        system
    }
}

// =================================================================================================
// Exponential Decay: dx/dt = -k*x
// =================================================================================================

/// Exponential decay: dx/dt = -k*x
pub struct ExponentialDecay {
    pub rate: f64,
}

impl RightHandSide for ExponentialDecay {
    fn evaluate(&self, ctx: &Context, dxdt: &mut Range, _t: &Range, x: &[Vec<Range>], group: usize, dim: usize) {
        let factor = Float::with_val(53, -self.rate);
        range::scale(ctx, dxdt, &x[group][dim], &factor);
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

impl ExponentialDecay {
    pub fn system(x0: Range, rate: f64) -> System {
        let precision = x0.precision();
        let mut system = System::new(Range::new(precision));
        system.add_group(vec![x0], ExponentialDecay { rate });
        system
    }
}

// =================================================================================================
// Constant Growth: dx/dt = c
// =================================================================================================

/// Constant growth: dx/dt = c
///
/// Every explicit method is exact for this problem.
pub struct ConstantGrowth {
    pub rate: f64,
}

impl RightHandSide for ConstantGrowth {
    fn evaluate(&self, ctx: &Context, dxdt: &mut Range, _t: &Range, _x: &[Vec<Range>], _group: usize, _dim: usize) {
        let precision = dxdt.precision();
        *dxdt = Range::from_f64(ctx, self.rate, precision).unwrap_or_else(|_| Range::nan(precision));
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Harmonic Oscillator: x' = y, y' = -x
// =================================================================================================

/// Harmonic oscillator as one group of two variables
///
/// Variable 0 is the position, variable 1 the velocity.
pub struct HarmonicOscillator;

impl RightHandSide for HarmonicOscillator {
    fn evaluate(&self, ctx: &Context, dxdt: &mut Range, _t: &Range, x: &[Vec<Range>], group: usize, dim: usize) {
        match dim {
            0 => range::assign(ctx, dxdt, &x[group][1]),
            _ => range::neg(ctx, dxdt, &x[group][0]),
        }
    }

    fn name(&self) -> &str {
        "Harmonic Oscillator"
    }
}

impl HarmonicOscillator {
    pub fn system(position: Range, velocity: Range) -> System {
        let precision = position.precision();
        let mut system = System::new(Range::new(precision));
        system.add_group(vec![position, velocity], HarmonicOscillator);
        system
    }
}
