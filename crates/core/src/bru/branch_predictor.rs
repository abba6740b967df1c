//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that every prediction scheme
//! implements. A driver calls [`BranchPredictor::predict`] once per dynamic branch,
//! then [`BranchPredictor::train`] once with the resolved outcome, in program order.

use std::fmt;

use crate::common::Outcome;

/// Trait for branch direction prediction algorithms.
///
/// Implementations must keep `predict` a pure read of their state; `train` is the
/// only method allowed to mutate it. `train` for a branch is always called after
/// `predict` for the same branch and before `predict` for the next one, so any
/// index derived from history in `predict` can be recomputed unchanged in `train`.
pub trait BranchPredictor: fmt::Debug {
    /// Short display name of the scheme.
    fn name(&self) -> &'static str;

    /// Predicts the direction of the conditional branch at `pc`.
    fn predict(&self, pc: u32) -> Outcome;

    /// Trains the predictor with the resolved direction of the branch at `pc`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch, the same value passed to `predict`.
    /// * `outcome` - The direction the branch actually went.
    fn train(&mut self, pc: u32, outcome: Outcome);
}
