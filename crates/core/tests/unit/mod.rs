//! # Unit Components
//!
//! Tests grouped by the source module they exercise.

/// Outcome type and error display tests.
pub mod common;
