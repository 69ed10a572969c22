//! Common utilities for integration tests

#![allow(dead_code)]

pub mod mock_systems;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_systems::{ConstantGrowth, ExponentialDecay, ExponentialGrowth, HarmonicOscillator};
pub use test_helpers::{
    assert_encloses,
    context_with_mode,
    evaluate,
    exact,
    sample_assignment,
    symbols_of,
};
