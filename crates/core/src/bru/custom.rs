//! Custom Predictor Slot.
//!
//! An open extension point. The slot either holds a caller-supplied policy, to which
//! it forwards every call, or nothing, in which case it predicts not-taken and
//! ignores training.

use super::BranchPredictor;
use crate::common::Outcome;

/// Holder for an optional user-defined [`BranchPredictor`].
#[derive(Debug, Default)]
pub struct CustomPredictor {
    policy: Option<Box<dyn BranchPredictor>>,
}

impl CustomPredictor {
    /// A slot with no policy installed.
    pub const fn empty() -> Self {
        Self { policy: None }
    }

    /// A slot forwarding to `policy`.
    pub fn new(policy: Box<dyn BranchPredictor>) -> Self {
        Self {
            policy: Some(policy),
        }
    }

    /// Whether a policy is installed.
    pub const fn is_defined(&self) -> bool {
        self.policy.is_some()
    }

    /// Name of the installed policy, if any.
    pub fn policy_name(&self) -> Option<&'static str> {
        self.policy.as_ref().map(|p| p.name())
    }
}

impl BranchPredictor for CustomPredictor {
    fn name(&self) -> &'static str {
        "Custom"
    }

    fn predict(&self, pc: u32) -> Outcome {
        self.policy
            .as_ref()
            .map_or(Outcome::NotTaken, |p| p.predict(pc))
    }

    fn train(&mut self, pc: u32, outcome: Outcome) {
        if let Some(policy) = self.policy.as_mut() {
            policy.train(pc, outcome);
        }
    }
}
