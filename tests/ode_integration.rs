//! ODE integration tests
//!
//! The stepper encloses the discrete scheme: for every value the inputs and the
//! step size can take, the exact result of the method lies in the computed
//! range. These tests check that on problems with known discrete solutions,
//! then check accuracy and error estimates against the continuous solution.

use affine_rs::context::Context;
use affine_rs::ode::{Method, Stepper, System};
use affine_rs::range::Range;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use rug::{Float, Rational};

mod common;
use common::{assert_encloses, exact, ConstantGrowth, ExponentialDecay, ExponentialGrowth, HarmonicOscillator};

fn euler_number() -> Float {
    Float::with_val(256, 1).exp()
}

/// `(1 + 1/10)ⁿ` as an exact rational
fn growth_factor(n: u32) -> Rational {
    let mut value = Rational::from(1);
    for _ in 0..n {
        value *= Rational::from((11, 10));
    }
    value
}

fn encloses_rational(range: &Range, value: &Rational) -> bool {
    *range.true_range().left() <= *value && *range.true_range().right() >= *value
}

// ====== Enclosure Tests ======

#[test]
fn test_euler_uncertain_start_encloses_e() {
    let ctx = Context::new();
    let x0 = Range::from_bounds(&ctx, 0.9, 1.1, 53).unwrap();
    let mut system = ExponentialGrowth::system(x0);
    let h = Range::from_ratio(&ctx, 1, 10, 53).unwrap();

    let mut stepper = Stepper::new(&ctx, &mut system, Method::Euler).unwrap();
    let trajectory = stepper.integrate(&ctx, &h, 10).unwrap();

    let x = &trajectory.final_state().unwrap()[0][0];
    assert_encloses(x, &euler_number(), "x(1) with x(0) in [0.9, 1.1]");

    // Propagated input uncertainty only grows
    let radii: Vec<f64> = trajectory.variable(0, 0).map(|x| x.radius().to_f64()).collect();
    for pair in radii.windows(2) {
        assert!(pair[1] >= pair[0], "radius shrank: {:?}", radii);
    }
}

#[test]
fn test_euler_encloses_discrete_solution() {
    let ctx = Context::new();
    let mut system = ExponentialGrowth::system(exact(&ctx, 1.0));
    let h = Range::from_ratio(&ctx, 1, 10, 53).unwrap();

    let mut stepper = Stepper::new(&ctx, &mut system, Method::Euler).unwrap();
    let trajectory = stepper.integrate(&ctx, &h, 10).unwrap();

    for (n, x) in trajectory.variable(0, 0).enumerate() {
        assert!(
            encloses_rational(x, &growth_factor(n as u32)),
            "step {}: {} does not enclose 1.1^{}",
            n,
            x,
            n
        );
    }
    assert!(trajectory.times[10].contains(&Float::with_val(53, 1)));
}

#[test]
fn test_constant_growth_enclosed_by_every_method() {
    for method in Method::ALL {
        let ctx = Context::new();
        let mut system = System::new(Range::new(53));
        system.add_group(vec![exact(&ctx, 0.0)], ConstantGrowth { rate: 2.0 });

        let mut stepper = Stepper::new(&ctx, &mut system, method).unwrap();
        let trajectory = stepper.integrate(&ctx, &exact(&ctx, 0.5), 4).unwrap();

        let x = &trajectory.final_state().unwrap()[0][0];
        assert_encloses(x, &Float::with_val(53, 4), method.name());
        assert!(x.radius().to_f64() < 1e-12, "{}: radius {}", method, x.radius());
    }
}

// ====== Exact Arithmetic Tests ======

#[test]
fn test_euler_decay_on_dyadic_grid_is_exact() {
    let ctx = Context::new();
    let mut system = ExponentialDecay::system(exact(&ctx, 1.0), 0.5);

    let mut stepper = Stepper::new(&ctx, &mut system, Method::Euler).unwrap();
    let trajectory = stepper.integrate(&ctx, &exact(&ctx, 0.25), 4).unwrap();

    // x₄ = (1 − 0.125)⁴ = 2401/4096
    let x = &trajectory.final_state().unwrap()[0][0];
    assert_eq!(*x.centre(), 2401.0 / 4096.0);
    assert_eq!(x.nterms(), 0);
    assert_eq!(ctx.symbols_issued(), 0);
}

#[test]
fn test_coupled_variables_read_stage_state() {
    let ctx = Context::new();
    let mut system = HarmonicOscillator::system(exact(&ctx, 1.0), exact(&ctx, 0.0));
    let h = exact(&ctx, 0.5);

    let mut stepper = Stepper::new(&ctx, &mut system, Method::Euler).unwrap();
    stepper.step(&ctx, &h).unwrap();
    stepper.step(&ctx, &h).unwrap();
    stepper.clear();

    let position = system.variable(0, 0).unwrap();
    let velocity = system.variable(0, 1).unwrap();
    assert_eq!(*position.centre(), 0.75);
    assert_eq!(*velocity.centre(), -1.0);
    assert!(position.radius().is_zero());
    assert_eq!(*system.time().centre(), 1.0);
    assert_eq!(system.rhs_names(), vec!["Harmonic Oscillator"]);
}

// ====== Accuracy Tests ======

#[test]
fn test_methods_match_their_stability_polynomials() {
    let cases = [
        (Method::Euler, 1.1f64.powi(10)),
        (Method::Trapezoidal, 1.105f64.powi(10)),
        (Method::BogackiShampine32, (1.0 + 0.1 + 0.005 + 0.1f64.powi(3) / 6.0).powi(10)),
    ];

    for (method, expected) in cases {
        let ctx = Context::new();
        let mut system = ExponentialGrowth::system(exact(&ctx, 1.0));
        let h = Range::from_ratio(&ctx, 1, 10, 53).unwrap();

        let mut stepper = Stepper::new(&ctx, &mut system, method).unwrap();
        let trajectory = stepper.integrate(&ctx, &h, 10).unwrap();

        let x = trajectory.final_state().unwrap()[0][0].centre().to_f64();
        assert_relative_eq!(x, expected, max_relative = 1e-12);
    }
}

#[test]
fn test_accuracy_improves_with_order() {
    let e = std::f64::consts::E;
    let mut errors = Vec::new();

    for method in Method::ALL {
        let ctx = Context::new();
        let mut system = ExponentialGrowth::system(exact(&ctx, 1.0));
        let h = Range::from_ratio(&ctx, 1, 10, 53).unwrap();

        let mut stepper = Stepper::new(&ctx, &mut system, method).unwrap();
        let trajectory = stepper.integrate(&ctx, &h, 10).unwrap();

        let x = trajectory.final_state().unwrap()[0][0].centre().to_f64();
        errors.push((method, (x - e).abs()));
    }

    for pair in errors.windows(2).take(3) {
        assert!(pair[1].1 < pair[0].1, "{} not more accurate than {}", pair[1].0, pair[0].0);
    }

    let (_, dp54) = errors[3];
    let (_, dp87) = errors[4];
    assert_abs_diff_eq!(dp54, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(dp87, 0.0, epsilon = 1e-10);
}

// ====== Error Estimate Tests ======

fn first_step_error(method: Method, denominator: i128) -> f64 {
    let ctx = Context::new();
    let mut system = ExponentialGrowth::system(exact(&ctx, 1.0));
    let h = Range::from_ratio(&ctx, 1, denominator, 53).unwrap();

    let mut stepper = Stepper::new(&ctx, &mut system, method).unwrap();
    stepper.step(&ctx, &h).unwrap();

    let estimate = &stepper.error_estimate()[0][0];
    assert!(estimate.is_finite());
    estimate.centre().to_f64().abs()
}

#[test]
fn test_error_estimate_shrinks_with_step() {
    for method in [Method::BogackiShampine32, Method::DormandPrince54] {
        let coarse = first_step_error(method, 10);
        let fine = first_step_error(method, 20);
        assert!(coarse > 0.0, "{}: no error estimate", method);
        assert!(fine < coarse / 4.0, "{}: {} vs {}", method, fine, coarse);
    }
}

#[test]
fn test_euler_has_no_error_estimate() {
    assert_eq!(first_step_error(Method::Euler, 10), 0.0);
}

// ====== Lifecycle Tests ======

#[test]
fn test_new_stepper_continues_from_current_state() {
    let ctx = Context::new();
    let mut system = ExponentialDecay::system(exact(&ctx, 1.0), 0.5);
    let h = exact(&ctx, 0.25);

    let mut stepper = Stepper::new(&ctx, &mut system, Method::Euler).unwrap();
    stepper.integrate(&ctx, &h, 2).unwrap();
    stepper.clear();

    let mut stepper = Stepper::new(&ctx, &mut system, Method::Euler).unwrap();
    let trajectory = stepper.integrate(&ctx, &h, 2).unwrap();

    assert_eq!(*trajectory.times[0].centre(), 0.5);
    assert_eq!(*trajectory.times[2].centre(), 1.0);
    assert_eq!(*trajectory.final_state().unwrap()[0][0].centre(), 2401.0 / 4096.0);
    assert_eq!(trajectory.metadata("method"), Some("Forward Euler"));
}
