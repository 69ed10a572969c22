//! Affine Runge-Kutta stepper
//!
//! # Algorithm
//!
//! For a tableau with `s` stages and step size `h`:
//!
//! ```text
//! tᵢ = t + h·cᵢ
//! xᵢ = x + Σⱼ₍ⱼ₌₁..ᵢ₋₁₎ (h·aᵢⱼ)·kⱼ
//! kᵢ = f(tᵢ, xᵢ)
//!
//! x     ← x + Σⱼ (h·bⱼ)·kⱼ
//! error ← Σⱼ (h·(bⱼ − b̂ⱼ))·kⱼ
//! t     ← t + h
//! ```
//!
//! Every product and sum is a range operation, so the propagated input
//! uncertainty and the rounding error of each stage both end up in the new
//! state. What the enclosure bounds is the *discrete* scheme: truncation error
//! of the method is reported through the error estimate, not enclosed.
//!
//! # Lifecycle
//!
//! ```text
//! Stepper::new ──► ready ──step──► stepped ──► ready ──step──► …
//!                    │                                 │
//!                    └────────── reset / clear ◄───────┘
//! ```

use crate::context::Context;
use crate::error::{OdeError, RangeError};
use crate::ode::methods::{Method, Ratio, Tableau};
use crate::ode::system::System;
use crate::ode::trajectory::Trajectory;
use crate::ode::validate_state;
use crate::range::{self, Range};

// =================================================================================================
// Prepared coefficients
// =================================================================================================

/// Tableau coefficient as a range
#[derive(Debug, Clone)]
enum Coefficient {
    Zero,
    One,
    Value(Range),
}

impl Coefficient {
    fn from_ratio(ctx: &Context, numerator: i128, denominator: i128) -> Result<Self, RangeError> {
        if numerator == 0 {
            Ok(Coefficient::Zero)
        } else if numerator == denominator {
            Ok(Coefficient::One)
        } else {
            Range::from_ratio(ctx, numerator, denominator, ctx.internal_precision()).map(Coefficient::Value)
        }
    }

    /// `h·self`, or `None` when the coefficient is zero
    fn scaled(&self, ctx: &Context, h: &Range) -> Option<Range> {
        match self {
            Coefficient::Zero => None,
            Coefficient::One => Some(h.clone()),
            Coefficient::Value(value) => {
                let mut scaled = Range::new(ctx.internal_precision());
                range::mul(ctx, &mut scaled, h, value);
                Some(scaled)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Coefficients {
    c: Vec<Coefficient>,
    a: Vec<Vec<Coefficient>>,
    b: Vec<Coefficient>,
    e: Vec<Coefficient>,
}

impl Coefficients {
    fn prepare(ctx: &Context, tableau: &Tableau) -> Result<Self, RangeError> {
        let row = |ratios: &[Ratio]| -> Result<Vec<Coefficient>, RangeError> {
            ratios
                .iter()
                .map(|&(n, d)| Coefficient::from_ratio(ctx, i128::from(n), i128::from(d)))
                .collect()
        };

        Ok(Self {
            c: row(tableau.c)?,
            a: tableau.a.iter().map(|&r| row(r)).collect::<Result<_, _>>()?,
            b: row(tableau.b)?,
            e: tableau
                .error_weights()
                .into_iter()
                .map(|(n, d)| Coefficient::from_ratio(ctx, n, d))
                .collect::<Result<_, _>>()?,
        })
    }

    fn scaled(ctx: &Context, coefficients: &[Coefficient], h: &Range) -> Vec<Option<Range>> {
        coefficients.iter().map(|c| c.scaled(ctx, h)).collect()
    }
}

/// One zero range per state variable, at that variable's precision
fn zeros_like(state: &[Vec<Range>]) -> Vec<Vec<Range>> {
    state
        .iter()
        .map(|group| group.iter().map(|v| Range::new(v.precision())).collect())
        .collect()
}

/// `acc ← acc + coefficient·k`
fn mul_add(ctx: &Context, acc: &mut Range, coefficient: &Range, k: &Range) {
    let precision = acc.precision();
    let mut product = Range::new(precision);
    range::mul(ctx, &mut product, coefficient, k);
    let mut sum = Range::new(precision);
    range::add(ctx, &mut sum, acc, &product);
    *acc = sum;
}

// =================================================================================================
// Stepper
// =================================================================================================

/// Binds a [`System`] to a [`Method`] and owns the stage workspace
pub struct Stepper<'a> {
    method: Method,
    system: &'a mut System,
    coefficients: Coefficients,

    /// `k[stage][group][dim]`
    stages: Vec<Vec<Vec<Range>>>,

    /// State at which the current stage is evaluated
    stage_state: Vec<Vec<Range>>,

    /// Local error estimate of the last step
    error: Vec<Vec<Range>>,

    steps: usize,
}

impl<'a> Stepper<'a> {
    /// Validate `system` and allocate scratch for `method`.
    pub fn new(ctx: &Context, system: &'a mut System, method: Method) -> Result<Self, OdeError> {
        // ====== Step 1: Validation ======

        system.validate()?;

        // ====== Step 2: Coefficients ======

        let tableau = method.tableau();
        let coefficients = Coefficients::prepare(ctx, tableau)?;

        // ====== Step 3: Scratch ======

        let stages = (0..tableau.stages()).map(|_| zeros_like(&system.x)).collect();
        let stage_state = zeros_like(&system.x);
        let error = zeros_like(&system.x);

        log::debug!(
            "stepper initialised: {}, {} groups, {} variables, {} stages",
            method,
            system.groups(),
            system.total_dims(),
            tableau.stages()
        );

        Ok(Self {
            method,
            system,
            coefficients,
            stages,
            stage_state,
            error,
            steps: 0,
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn system(&self) -> &System {
        self.system
    }

    /// Local error estimate of the last step. Zero for methods without an
    /// embedded pair.
    pub fn error_estimate(&self) -> &[Vec<Range>] {
        &self.error
    }

    /// Steps taken since creation
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Zero the stage workspace and the error estimate.
    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            *stage = zeros_like(stage);
        }
        self.stage_state = zeros_like(&self.stage_state);
        self.error = zeros_like(&self.error);
    }

    /// Release the workspace. The system keeps its current state.
    pub fn clear(self) {
        log::debug!("stepper cleared after {} steps", self.steps);
    }

    /// Advance `t` and every state variable by `h`.
    pub fn step(&mut self, ctx: &Context, h: &Range) -> Result<(), OdeError> {
        if !h.is_finite() {
            return Err(OdeError::InvalidStepSize);
        }

        // ====== Step 1: Scale coefficients ======

        let hc = Coefficients::scaled(ctx, &self.coefficients.c, h);
        let ha: Vec<_> = self
            .coefficients
            .a
            .iter()
            .map(|row| Coefficients::scaled(ctx, row, h))
            .collect();
        let hb = Coefficients::scaled(ctx, &self.coefficients.b, h);
        let he = Coefficients::scaled(ctx, &self.coefficients.e, h);

        let system = &mut *self.system;

        // ====== Step 2: Stages ======

        for (s, row) in ha.iter().enumerate() {
            let t_s = match &hc[s] {
                None => system.t.clone(),
                Some(offset) => {
                    let mut t_s = Range::new(system.t.precision());
                    range::add(ctx, &mut t_s, &system.t, offset);
                    t_s
                }
            };

            for (g, group) in system.x.iter().enumerate() {
                for (d, x) in group.iter().enumerate() {
                    let mut acc = x.clone();
                    for (j, coefficient) in row.iter().enumerate() {
                        if let Some(coefficient) = coefficient {
                            mul_add(ctx, &mut acc, coefficient, &self.stages[j][g][d]);
                        }
                    }
                    self.stage_state[g][d] = acc;
                }
            }

            for (g, rhs) in system.rhs.iter().enumerate() {
                for d in 0..system.x[g].len() {
                    rhs.evaluate(ctx, &mut self.stages[s][g][d], &t_s, &self.stage_state, g, d);
                }
            }
        }

        // ====== Step 3: Update state and error estimate ======

        for (g, group) in system.x.iter_mut().enumerate() {
            for (d, x) in group.iter_mut().enumerate() {
                let mut next = x.clone();
                let mut error = Range::new(x.precision());
                for (j, k) in self.stages.iter().enumerate() {
                    let k = &k[g][d];
                    if let Some(coefficient) = &hb[j] {
                        mul_add(ctx, &mut next, coefficient, k);
                    }
                    if let Some(Some(coefficient)) = he.get(j) {
                        mul_add(ctx, &mut error, coefficient, k);
                    }
                }
                *x = next;
                self.error[g][d] = error;
            }
        }

        let mut t = Range::new(system.t.precision());
        range::add(ctx, &mut t, &system.t, h);
        system.t = t;

        self.steps += 1;
        log::trace!("{} step {} done, t = {}", self.method, self.steps, system.t);
        Ok(())
    }

    /// Take `steps` fixed steps of size `h`, recording every state.
    pub fn integrate(&mut self, ctx: &Context, h: &Range, steps: usize) -> Result<Trajectory, OdeError> {
        // ====== Step 1: Validation ======

        if steps == 0 {
            return Err(OdeError::ZeroSteps);
        }
        if !h.is_finite() {
            return Err(OdeError::InvalidStepSize);
        }

        // ====== Step 2: Time integration ======

        let mut trajectory = Trajectory::new(self.system.t.clone(), self.system.x.clone());
        for step in 0..steps {
            self.step(ctx, h)?;
            validate_state(&self.system.x, step + 1)?;
            trajectory.push(self.system.t.clone(), self.system.x.clone(), self.error.clone());
        }

        // ====== Step 3: Metadata ======

        trajectory.add_metadata("method", self.method.name());
        trajectory.add_metadata("steps", &steps.to_string());
        trajectory.add_metadata("h", &h.to_string());
        trajectory.add_metadata("internal precision", &ctx.internal_precision().to_string());
        trajectory.add_metadata("symbols issued", &ctx.symbols_issued().to_string());

        Ok(trajectory)
    }
}

impl std::fmt::Debug for Stepper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stepper")
            .field("method", &self.method)
            .field("steps", &self.steps)
            .field("system", &self.system)
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
