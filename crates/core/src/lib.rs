//! Trace-driven branch direction predictor simulator.
//!
//! This crate evaluates branch prediction schemes against a stream of
//! `(pc, outcome)` events with the following:
//! 1. **Predictors:** Saturating counters, history registers, and the static, gshare,
//!    tournament and custom schemes built from them.
//! 2. **Configuration:** Validated bit-widths and scheme selection.
//! 3. **Simulation:** Trace reading, the predict/train loop, and accuracy statistics.
//!
//! ```
//! use bpsim_core::{BranchPredictor, Config, Outcome, PredictorEngine};
//!
//! let config: Config = "gshare:2".parse()?;
//! let mut engine = PredictorEngine::new(&config)?;
//! let guess = engine.predict(0x4);
//! engine.train(0x4, Outcome::Taken);
//! assert_eq!(guess, Outcome::NotTaken);
//! # Ok::<(), bpsim_core::ConfigError>(())
//! ```

/// Branch prediction unit (primitives, schemes, dispatch).
pub mod bru;
/// Common types (outcome, constants, errors).
pub mod common;
/// Predictor configuration.
pub mod config;
/// Trace reading and the simulation loop.
pub mod sim;
/// Prediction statistics.
pub mod stats;

/// Interface every scheme implements.
pub use crate::bru::BranchPredictor;
/// Configured engine; build with `PredictorEngine::new`.
pub use crate::bru::PredictorEngine;
/// Error types.
pub use crate::common::{ConfigError, SimError, TraceError};
/// Branch direction.
pub use crate::common::Outcome;
/// Root configuration type; use `Config::default()`, parse an option string, or load JSON.
pub use crate::config::{Config, PredictorType};
/// Predict/train driver.
pub use crate::sim::Simulator;
/// Accuracy counters.
pub use crate::stats::PredictionStats;
