//! Integration results

use std::collections::HashMap;

use crate::range::Range;

/// Recorded time points and states of a fixed-step integration
///
/// `times[0]` and `states[0]` hold the initial condition; entry `n` holds the
/// values after step `n`. `errors[n - 1]` is the local error estimate of step
/// `n`.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub times: Vec<Range>,
    pub states: Vec<Vec<Vec<Range>>>,
    pub errors: Vec<Vec<Vec<Range>>>,
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Trajectory holding only the initial condition
    pub fn new(t0: Range, x0: Vec<Vec<Range>>) -> Self {
        Self {
            times: vec![t0],
            states: vec![x0],
            errors: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Record the values after one more step
    pub fn push(&mut self, t: Range, x: Vec<Vec<Range>>, error: Vec<Vec<Range>>) {
        self.times.push(t);
        self.states.push(x);
        self.errors.push(error);
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Number of steps recorded
    pub fn steps(&self) -> usize {
        self.errors.len()
    }

    /// State after the last step
    pub fn final_state(&self) -> Option<&[Vec<Range>]> {
        self.states.last().map(Vec::as_slice)
    }

    /// Time series of one variable, initial condition first
    pub fn variable(&self, group: usize, dim: usize) -> impl Iterator<Item = &Range> + '_ {
        self.states.iter().filter_map(move |x| x.get(group).and_then(|g| g.get(dim)))
    }
}
