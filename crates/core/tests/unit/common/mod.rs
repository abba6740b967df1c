//! Tests for the shared vocabulary types.

/// Error messages and conversions.
pub mod error;
