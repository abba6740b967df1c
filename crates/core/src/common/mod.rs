//! Common types shared by every part of the simulator.
//!
//! This module provides the small vocabulary the rest of the crate is built on:
//! 1. **Outcome:** The resolved or predicted direction of a conditional branch.
//! 2. **Constants:** Counter width and the bit-width ceiling for configured tables.
//! 3. **Error Handling:** Configuration, trace and simulation error types.

/// Counter and table-size constants.
pub mod constants;

/// Error types for configuration, trace input and simulation.
pub mod error;

/// Branch direction type.
pub mod outcome;

pub use constants::{COUNTER_BITS, COUNTER_MAX, MAX_HISTORY_BITS};
pub use error::{ConfigError, SimError, TraceError};
pub use outcome::Outcome;
