//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the counter and history primitives, the prediction
//! schemes built from them (static, gshare, tournament, and a custom slot), and
//! the [`PredictorEngine`] that dispatches to whichever scheme is configured.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait.
pub mod branch_predictor;

/// Two-bit saturating counter.
pub mod counter;

/// Custom predictor slot.
pub mod custom;

/// Global history branch predictor (gshare algorithm).
pub mod gshare;

/// Global and local history registers.
pub mod history;

/// Perceptron-based branch predictor, usable as a custom policy.
pub mod perceptron;

/// Static branch predictor (always taken).
pub mod static_bp;

/// Power-of-two counter tables.
pub mod table;

/// Tournament branch predictor (combines local and global predictors).
pub mod tournament;

use tracing::{debug, warn};

use self::{
    custom::CustomPredictor, gshare::GSharePredictor, static_bp::StaticPredictor,
    tournament::TournamentPredictor,
};
use crate::common::{ConfigError, Outcome};
use crate::config::{Config, PredictorType};

/// Enum wrapper for static dispatch of Branch Predictors.
///
/// An engine only exists once a configuration has been validated, so there is no
/// way to predict or train before configuration.
#[derive(Debug)]
pub enum PredictorEngine {
    /// Always taken.
    Static(StaticPredictor),
    /// PC XOR global history.
    GShare(GSharePredictor),
    /// Global/local hybrid with a choice table.
    Tournament(TournamentPredictor),
    /// User-defined policy, possibly absent.
    Custom(CustomPredictor),
}

impl PredictorEngine {
    /// Builds the scheme selected by `config`, allocating all of its tables.
    ///
    /// Selecting [`PredictorType::Custom`] yields an empty slot that predicts
    /// not-taken; use [`PredictorEngine::with_custom`] to install a policy.
    ///
    /// # Errors
    ///
    /// Returns the [`Config::validate`] error if any width is out of range.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let engine = match config.predictor {
            PredictorType::Static => Self::Static(StaticPredictor::new()),
            PredictorType::GShare => Self::GShare(GSharePredictor::new(config.ghistory_bits)),
            PredictorType::Tournament => Self::Tournament(TournamentPredictor::new(config)),
            PredictorType::Custom => {
                warn!("custom predictor selected without a policy; predicting not-taken");
                Self::Custom(CustomPredictor::empty())
            }
        };

        debug!(
            predictor = config.predictor.name(),
            ghistory_bits = config.ghistory_bits,
            lhistory_bits = config.lhistory_bits,
            pc_index_bits = config.pc_index_bits,
            "predictor engine built"
        );
        Ok(engine)
    }

    /// Builds a custom engine forwarding to `policy`.
    ///
    /// `config.predictor` is ignored; its widths are still validated since policies
    /// such as [`PerceptronPredictor`](perceptron::PerceptronPredictor) are sized from them.
    ///
    /// # Errors
    ///
    /// Returns the [`Config::validate`] error if any width is out of range.
    pub fn with_custom(
        config: &Config,
        policy: Box<dyn BranchPredictor>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(policy = policy.name(), "custom predictor engine built");
        Ok(Self::Custom(CustomPredictor::new(policy)))
    }

    /// The scheme this engine runs.
    pub const fn predictor_type(&self) -> PredictorType {
        match self {
            Self::Static(_) => PredictorType::Static,
            Self::GShare(_) => PredictorType::GShare,
            Self::Tournament(_) => PredictorType::Tournament,
            Self::Custom(_) => PredictorType::Custom,
        }
    }
}

impl BranchPredictor for PredictorEngine {
    fn name(&self) -> &'static str {
        match self {
            Self::Static(bp) => bp.name(),
            Self::GShare(bp) => bp.name(),
            Self::Tournament(bp) => bp.name(),
            Self::Custom(bp) => bp.name(),
        }
    }

    #[inline(always)]
    fn predict(&self, pc: u32) -> Outcome {
        match self {
            Self::Static(bp) => bp.predict(pc),
            Self::GShare(bp) => bp.predict(pc),
            Self::Tournament(bp) => bp.predict(pc),
            Self::Custom(bp) => bp.predict(pc),
        }
    }

    #[inline(always)]
    fn train(&mut self, pc: u32, outcome: Outcome) {
        match self {
            Self::Static(bp) => bp.train(pc, outcome),
            Self::GShare(bp) => bp.train(pc, outcome),
            Self::Tournament(bp) => bp.train(pc, outcome),
            Self::Custom(bp) => bp.train(pc, outcome),
        }
    }
}
