//! affine-rs: Rigorous affine arithmetic and certified ODE steppers
//!
//! Every quantity is a centre value plus a linear combination of independent
//! noise symbols, each bounded by a tracked deviation. Every operation returns
//! a range guaranteed to enclose the exact mathematical result, accounting for
//! the uncertainty of its inputs and for its own floating-point rounding.
//!
//! # Architecture
//!
//! affine-rs is built on two layers:
//!
//! 1. **Range arithmetic** ([`range`])
//!    - Affine forms over arbitrary-precision MPFR floats
//!    - Linear-combination kernel with rigorous rounding bounds
//!    - Mixed interval/affine refinement against [`interval::Interval`]
//!
//! 2. **ODE integration** ([`ode`])
//!    - Explicit Runge-Kutta methods from Euler to Dormand-Prince 8(7)
//!    - Every stage computed with range operators
//!
//! All state that used to be global (the noise-symbol counter, precisions) lives
//! in an explicit [`context::Context`].
//!
//! # Quick Start
//!
//! ```rust
//! use affine_rs::prelude::*;
//!
//! # fn main() -> Result<(), RangeError> {
//! let ctx = Context::new();
//!
//! // 1. Create uncertain inputs
//! let x = Range::from_bounds(&ctx, 1.0, 2.0, 53)?;
//! let y = Range::from_ratio(&ctx, 1, 3, 53)?;
//!
//! // 2. Combine them
//! let mut z = Range::new(53);
//! range::mul(&ctx, &mut z, &x, &y);
//!
//! // 3. Read the enclosure
//! assert!(z.contains(&rug::Float::with_val(53, 0.5)));
//! println!("x·y ∈ {}", z);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`context`]: Symbol allocator and precision settings
//! - [`interval`]: Outward-rounded interval arithmetic
//! - [`range`]: Affine ranges and their operators
//! - [`ode`]: Systems, methods and the stepper
//! - [`error`]: Error types

pub mod context;
pub mod error;
pub mod interval;
pub mod ode;
pub mod range;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use affine_rs::prelude::*;
    //! ```
    pub use crate::context::{Context, ContextConfig, MixedMode, Symbol};
    pub use crate::error::{OdeError, RangeError};
    pub use crate::interval::Interval;
    pub use crate::ode::{Method, RightHandSide, Stepper, System, Trajectory};
    pub use crate::range::{self, Domain, Range, Term};
}
