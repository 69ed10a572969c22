//! Helper functions for integration tests

use std::collections::HashMap;

use affine_rs::context::{Context, ContextConfig, MixedMode, Symbol};
use affine_rs::range::Range;
use rand::Rng;
use rug::Float;

/// Precision used to evaluate forms exactly in tests
pub const EXACT_PRECISION: u32 = 4096;

/// Context with default precisions and the given mixed mode
pub fn context_with_mode(mixed: MixedMode) -> Context {
    Context::with_config(ContextConfig { mixed, ..ContextConfig::default() })
        .expect("default precisions are valid")
}

/// Range holding exactly `value` at 53 bits
pub fn exact(ctx: &Context, value: f64) -> Range {
    let range = Range::from_f64(ctx, value, 53).expect("finite value");
    assert_eq!(range.nterms(), 0, "{} is not exact at 53 bits", value);
    range
}

/// Every symbol referenced by `ranges`, sorted and deduplicated
pub fn symbols_of(ranges: &[&Range]) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = ranges
        .iter()
        .flat_map(|r| r.terms().iter().map(|t| t.symbol()))
        .collect();
    symbols.sort();
    symbols.dedup();
    symbols
}

/// Random noise assignment in [-1, 1], endpoints included now and then
pub fn sample_assignment<R: Rng>(rng: &mut R, symbols: &[Symbol]) -> HashMap<Symbol, f64> {
    symbols
        .iter()
        .map(|&s| {
            let epsilon = match rng.gen_range(0..8) {
                0 => -1.0,
                1 => 1.0,
                _ => rng.gen_range(-1.0..=1.0),
            };
            (s, epsilon)
        })
        .collect()
}

/// Value of the form `c + Σ dᵢ·εᵢ` under `assignment`, computed exactly.
///
/// Symbols missing from the assignment are taken at zero.
pub fn evaluate(range: &Range, assignment: &HashMap<Symbol, f64>) -> Float {
    let mut value = Float::with_val(EXACT_PRECISION, range.centre());
    for term in range.terms() {
        let epsilon = assignment.get(&term.symbol()).copied().unwrap_or(0.0);
        value += Float::with_val(EXACT_PRECISION, term.deviation() * epsilon);
    }
    value
}

/// Assert that the true range of `range` contains `value`
pub fn assert_encloses(range: &Range, value: &Float, message: &str) {
    let bounds = range.true_range();
    assert!(
        bounds.left() <= value && value <= bounds.right(),
        "{}: {} not in {}",
        message,
        value.to_f64(),
        range
    );
}
