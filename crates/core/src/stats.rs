//! Prediction statistics collection and reporting.
//!
//! Counts dynamic conditional branches and mispredictions over a run and derives
//! the misprediction rate reported at the end of a simulation.

use std::fmt;

use crate::common::Outcome;

/// Branch prediction accuracy counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PredictionStats {
    /// Number of conditional branches predicted.
    pub branches: u64,
    /// Number of predictions that disagreed with the resolved outcome.
    pub incorrect: u64,
}

impl PredictionStats {
    /// Creates zeroed statistics.
    pub const fn new() -> Self {
        Self {
            branches: 0,
            incorrect: 0,
        }
    }

    /// Records one prediction against the resolved outcome.
    pub fn record(&mut self, predicted: Outcome, actual: Outcome) {
        self.branches += 1;
        if predicted != actual {
            self.incorrect += 1;
        }
    }

    /// Number of correct predictions.
    pub const fn correct(&self) -> u64 {
        self.branches - self.incorrect
    }

    /// Mispredictions as a percentage of branches; `0.0` before any branch.
    pub fn misprediction_rate(&self) -> f64 {
        if self.branches == 0 {
            return 0.0;
        }
        100.0 * self.incorrect as f64 / self.branches as f64
    }

    /// Fraction of correct predictions; `0.0` before any branch.
    pub fn accuracy(&self) -> f64 {
        if self.branches == 0 {
            return 0.0;
        }
        self.correct() as f64 / self.branches as f64
    }
}

impl fmt::Display for PredictionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branches:        {:>10}", self.branches)?;
        writeln!(f, "Incorrect:       {:>10}", self.incorrect)?;
        write!(f, "Misprediction Rate: {:>10.4}", self.misprediction_rate())
    }
}
