//! Simulator: owns a predictor engine and its statistics side-by-side.
//!
//! Each record goes through exactly one `predict` followed by exactly one `train`,
//! the protocol every [`BranchPredictor`] relies on.

use tracing::{debug, trace};

use super::trace::BranchRecord;
use crate::bru::{BranchPredictor, PredictorEngine};
use crate::common::{ConfigError, Outcome, TraceError};
use crate::config::Config;
use crate::stats::PredictionStats;

/// Top-level simulator: predictor engine + accuracy statistics.
#[derive(Debug)]
pub struct Simulator {
    engine: PredictorEngine,
    stats: PredictionStats,
    verbose: bool,
}

impl Simulator {
    /// Builds the engine selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns the configuration error if the engine cannot be built.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(PredictorEngine::new(config)?, config.verbose))
    }

    /// Wraps an already built engine.
    pub const fn with_engine(engine: PredictorEngine, verbose: bool) -> Self {
        Self {
            engine,
            stats: PredictionStats::new(),
            verbose,
        }
    }

    /// Predicts, scores and trains one branch. Returns the prediction.
    pub fn step(&mut self, record: BranchRecord) -> Outcome {
        let BranchRecord { pc, outcome } = record;
        let prediction = self.engine.predict(pc);
        self.stats.record(prediction, outcome);
        if self.verbose {
            debug!(pc, %prediction, %outcome, "branch");
        } else {
            trace!(pc, %prediction, %outcome, "branch");
        }
        self.engine.train(pc, outcome);
        prediction
    }

    /// Feeds every record through [`Simulator::step`].
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first trace error. Records before it have already
    /// been simulated and counted.
    pub fn run<I>(&mut self, records: I) -> Result<&PredictionStats, TraceError>
    where
        I: IntoIterator<Item = Result<BranchRecord, TraceError>>,
    {
        for record in records {
            let _ = self.step(record?);
        }
        debug!(
            branches = self.stats.branches,
            incorrect = self.stats.incorrect,
            "trace finished"
        );
        Ok(&self.stats)
    }

    /// The engine being driven.
    pub const fn engine(&self) -> &PredictorEngine {
        &self.engine
    }

    /// Statistics so far.
    pub const fn stats(&self) -> &PredictionStats {
        &self.stats
    }
}
