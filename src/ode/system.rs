//! ODE systems
//!
//! A [`System`] holds the independent variable `t` and one or more *groups* of
//! state variables. Each group has its own right-hand side, so loosely coupled
//! subsystems (say, a population and its environment) can be written as separate
//! functions that still read the whole state.
//!
//! # Example
//!
//! ```rust
//! use affine_rs::context::Context;
//! use affine_rs::ode::System;
//! use affine_rs::range::{self, Range};
//!
//! let ctx = Context::new();
//! let t0 = Range::new(53);
//! let x0 = Range::from_f64(&ctx, 1.0, 53).unwrap();
//!
//! // dx/dt = x
//! let mut system = System::new(t0);
//! system.add_group(
//!     vec![x0],
//!     |ctx: &Context, dxdt: &mut Range, _t: &Range, x: &[Vec<Range>], group: usize, dim: usize| {
//!         range::assign(ctx, dxdt, &x[group][dim]);
//!     },
//! );
//!
//! assert_eq!(system.groups(), 1);
//! assert!(system.validate().is_ok());
//! ```

use crate::context::Context;
use crate::error::OdeError;
use crate::range::Range;

/// Right-hand side `f(t, x)` of one state group
///
/// `evaluate` writes the derivative of variable `x[group][dim]` into `dxdt`,
/// reading any part of the stage state `x`. Per-group parameters live in the
/// implementing value.
pub trait RightHandSide {
    fn evaluate(
        &self,
        ctx: &Context,
        dxdt: &mut Range,
        t: &Range,
        x: &[Vec<Range>],
        group: usize,
        dim: usize,
    );

    /// Name used in logs and trajectory metadata
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> RightHandSide for F
where
    F: Fn(&Context, &mut Range, &Range, &[Vec<Range>], usize, usize),
{
    fn evaluate(
        &self,
        ctx: &Context,
        dxdt: &mut Range,
        t: &Range,
        x: &[Vec<Range>],
        group: usize,
        dim: usize,
    ) {
        self(ctx, dxdt, t, x, group, dim)
    }
}

/// Independent variable, grouped state and one right-hand side per group
pub struct System {
    pub(crate) t: Range,
    pub(crate) x: Vec<Vec<Range>>,
    pub(crate) rhs: Vec<Box<dyn RightHandSide>>,
}

impl System {
    /// Empty system starting at `t`
    pub fn new(t: Range) -> Self {
        Self {
            t,
            x: Vec::new(),
            rhs: Vec::new(),
        }
    }

    /// System from already assembled parts. Checked by [`System::validate`].
    pub fn from_parts(t: Range, x: Vec<Vec<Range>>, rhs: Vec<Box<dyn RightHandSide>>) -> Self {
        Self { t, x, rhs }
    }

    /// Add a state group and its right-hand side. Returns the group index.
    pub fn add_group<R>(&mut self, state: Vec<Range>, rhs: R) -> usize
    where
        R: RightHandSide + 'static,
    {
        self.x.push(state);
        self.rhs.push(Box::new(rhs));
        self.x.len() - 1
    }

    /// Number of state groups
    pub fn groups(&self) -> usize {
        self.x.len()
    }

    /// Number of variables in `group`
    pub fn dims(&self, group: usize) -> usize {
        self.x.get(group).map_or(0, Vec::len)
    }

    /// Total number of state variables
    pub fn total_dims(&self) -> usize {
        self.x.iter().map(Vec::len).sum()
    }

    /// Independent variable
    pub fn time(&self) -> &Range {
        &self.t
    }

    /// State ranges, grouped
    pub fn state(&self) -> &[Vec<Range>] {
        &self.x
    }

    /// One state variable
    pub fn variable(&self, group: usize, dim: usize) -> Option<&Range> {
        self.x.get(group).and_then(|g| g.get(dim))
    }

    /// Names of the right-hand sides, in group order
    pub fn rhs_names(&self) -> Vec<&str> {
        self.rhs.iter().map(|f| f.name()).collect()
    }

    /// Check the system can be integrated
    pub fn validate(&self) -> Result<(), OdeError> {
        if self.x.is_empty() {
            return Err(OdeError::EmptySystem);
        }
        if self.rhs.len() != self.x.len() {
            return Err(OdeError::GroupCountMismatch {
                groups: self.x.len(),
                functions: self.rhs.len(),
            });
        }
        if let Some(group) = self.x.iter().position(Vec::is_empty) {
            return Err(OdeError::EmptyGroup { group });
        }
        if !self.t.is_finite() {
            return Err(OdeError::NonFiniteInitialValue {
                what: "time".to_string(),
            });
        }
        for (group, variables) in self.x.iter().enumerate() {
            if let Some(dim) = variables.iter().position(|v| !v.is_finite()) {
                return Err(OdeError::NonFiniteInitialValue {
                    what: format!("state of group {group}, variable {dim}"),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("System")
            .field("t", &self.t)
            .field("x", &self.x)
            .field("rhs", &self.rhs_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl RightHandSide for Constant {
        fn evaluate(&self, ctx: &Context, dxdt: &mut Range, _t: &Range, _x: &[Vec<Range>], _g: usize, _d: usize) {
            *dxdt = Range::from_f64(ctx, self.0, dxdt.precision()).unwrap_or_else(|_| Range::nan(dxdt.precision()));
        }

        fn name(&self) -> &str {
            "constant"
        }
    }

    fn scalar(ctx: &Context, value: f64) -> Range {
        Range::from_f64(ctx, value, 53).unwrap()
    }

    #[test]
    fn test_add_group_returns_index() {
        let ctx = Context::new();
        let mut system = System::new(Range::new(53));
        assert_eq!(system.add_group(vec![scalar(&ctx, 1.0)], Constant(1.0)), 0);
        assert_eq!(system.add_group(vec![scalar(&ctx, 2.0), scalar(&ctx, 3.0)], Constant(0.0)), 1);

        assert_eq!(system.groups(), 2);
        assert_eq!(system.dims(1), 2);
        assert_eq!(system.total_dims(), 3);
        assert_eq!(system.rhs_names(), vec!["constant", "constant"]);
    }

    #[test]
    fn test_empty_system_rejected() {
        let system = System::new(Range::new(53));
        assert_eq!(system.validate(), Err(OdeError::EmptySystem));
    }

    #[test]
    fn test_group_count_mismatch() {
        let ctx = Context::new();
        let system = System::from_parts(Range::new(53), vec![vec![scalar(&ctx, 1.0)]], Vec::new());
        assert_eq!(
            system.validate(),
            Err(OdeError::GroupCountMismatch { groups: 1, functions: 0 })
        );
    }

    #[test]
    fn test_empty_group_rejected() {
        let mut system = System::new(Range::new(53));
        system.add_group(Vec::new(), Constant(1.0));
        assert_eq!(system.validate(), Err(OdeError::EmptyGroup { group: 0 }));
    }

    #[test]
    fn test_non_finite_state_rejected() {
        let ctx = Context::new();
        let mut system = System::new(Range::new(53));
        system.add_group(vec![scalar(&ctx, 1.0), Range::nan(53)], Constant(1.0));
        assert!(matches!(
            system.validate(),
            Err(OdeError::NonFiniteInitialValue { .. })
        ));

        let mut system = System::new(Range::inf(53));
        system.add_group(vec![scalar(&ctx, 1.0)], Constant(1.0));
        assert_eq!(
            system.validate(),
            Err(OdeError::NonFiniteInitialValue { what: "time".to_string() })
        );
    }
}
