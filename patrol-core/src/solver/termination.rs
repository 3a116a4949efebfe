#[cfg(test)]
#[path = "../../tests/unit/solver/termination_test.rs"]
mod termination_test;

use std::collections::VecDeque;

/// Detects convergence of a sequence of per iteration values: the sequence is converged when all
/// values of the last `window` iterations are within `tolerance` of the most recent ones.
pub struct ConvergenceTracker {
    window: usize,
    tolerance: f64,
    history: VecDeque<Vec<f64>>,
}

impl ConvergenceTracker {
    /// Creates a new instance of `ConvergenceTracker`.
    pub fn new(window: usize, tolerance: f64) -> Self {
        assert_ne!(window, 0);
        Self { window, tolerance, history: VecDeque::with_capacity(window) }
    }

    /// Adds values of the next iteration and returns true if the sequence has converged.
    pub fn add_and_check(&mut self, values: Vec<f64>) -> bool {
        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back(values);

        self.is_converged()
    }

    /// Returns true if the sequence has converged.
    pub fn is_converged(&self) -> bool {
        let Some(latest) = self.history.back() else {
            return false;
        };

        self.history.len() == self.window
            && self.history.iter().all(|values| {
                values.len() == latest.len()
                    && values.iter().zip(latest.iter()).all(|(value, last)| (value - last).abs() <= self.tolerance)
            })
    }
}
