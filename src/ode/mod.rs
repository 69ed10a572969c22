//! ODE integration over affine ranges
//!
//! The framework separates three concerns:
//!
//! 1. **System** ([`System`]): WHAT to integrate. Grouped state ranges, the
//!    independent variable and one [`RightHandSide`] per group.
//! 2. **Method** ([`Method`]): HOW to integrate. An explicit Runge-Kutta tableau.
//! 3. **Stepper** ([`Stepper`]): binds the two, owns the stage workspace and
//!    drives the range operators.
//!
//! # Quick Start Example
//!
//! ```rust
//! use affine_rs::context::Context;
//! use affine_rs::ode::{Method, Stepper, System};
//! use affine_rs::range::{self, Range};
//!
//! let ctx = Context::new();
//!
//! // dx/dt = x, x(0) ∈ [0.9, 1.1]
//! let mut system = System::new(Range::new(53));
//! system.add_group(
//!     vec![Range::from_bounds(&ctx, 0.9, 1.1, 53).unwrap()],
//!     |ctx: &Context, dxdt: &mut Range, _t: &Range, x: &[Vec<Range>], g: usize, d: usize| {
//!         range::assign(ctx, dxdt, &x[g][d]);
//!     },
//! );
//!
//! let h = Range::from_ratio(&ctx, 1, 10, 53).unwrap();
//! let mut stepper = Stepper::new(&ctx, &mut system, Method::Euler).unwrap();
//! let trajectory = stepper.integrate(&ctx, &h, 10).unwrap();
//!
//! let x = &trajectory.final_state().unwrap()[0][0];
//! assert!(x.contains(&rug::Float::with_val(53, 1).exp()));
//! ```

pub mod methods;
pub mod stepper;
pub mod system;
pub mod trajectory;

pub use methods::{Method, Tableau};
pub use stepper::Stepper;
pub use system::{RightHandSide, System};
pub use trajectory::Trajectory;

use crate::error::OdeError;
use crate::range::{Domain, Range};

/// Check that no state variable has degenerated into a sentinel.
pub(crate) fn validate_state(state: &[Vec<Range>], step: usize) -> Result<(), OdeError> {
    for (group, variables) in state.iter().enumerate() {
        for (dim, variable) in variables.iter().enumerate() {
            let kind = match variable.domain() {
                Domain::Finite => continue,
                Domain::Nan => "NaN",
                Domain::Inf => "Infinity",
            };
            return Err(OdeError::NonFiniteState { kind, group, dim, step });
        }
    }
    Ok(())
}
