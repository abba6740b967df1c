//! Static Branch Predictor.
//!
//! Predicts every conditional branch as taken and keeps no state. Serves as the
//! baseline the dynamic schemes are measured against.

use super::BranchPredictor;
use crate::common::Outcome;

/// Static "always taken" predictor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Creates a new Static Predictor.
    pub const fn new() -> Self {
        Self
    }
}

impl BranchPredictor for StaticPredictor {
    fn name(&self) -> &'static str {
        "Static"
    }

    /// Always predicts taken.
    fn predict(&self, _pc: u32) -> Outcome {
        Outcome::Taken
    }

    /// Stateless; training has no effect.
    fn train(&mut self, _pc: u32, _outcome: Outcome) {}
}
