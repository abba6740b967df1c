//! Trace-driven simulation.
//!
//! Provides the branch trace reader and the loop that feeds its records through a
//! predictor engine while collecting statistics.

/// Simulation driver.
pub mod simulator;

/// Branch trace reader.
pub mod trace;

pub use simulator::Simulator;
pub use trace::{BranchRecord, TraceReader};
