//! Error definitions.
//!
//! The predictor engine itself cannot fail once built. Errors only arise from:
//! 1. **Configuration:** Bit-widths outside the representable range, or option strings
//!    that do not name a scheme.
//! 2. **Trace Input:** Unreadable input or lines that are not a `<pc> <outcome>` pair.
//! 3. **Simulation:** Either of the above, surfaced to the driver through [`SimError`].

use std::path::PathBuf;

use thiserror::Error;

/// Rejected predictor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A history or index width exceeds the supported maximum.
    #[error("{field} = {bits} exceeds the maximum of {max} bits")]
    BitsOutOfRange {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The requested width.
        bits: u32,
        /// The largest accepted width.
        max: u32,
    },

    /// The scheme name is not one of static, gshare, tournament or custom.
    #[error("unknown predictor type '{0}'")]
    UnknownPredictor(String),

    /// An option string names a scheme but its parameters cannot be used.
    #[error("invalid predictor option '{option}': {reason}")]
    InvalidOption {
        /// The option as supplied.
        option: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The widths are in range but the table they describe is too large to allocate.
    #[error("{predictor} table of {entries} entries exceeds the limit of {max}")]
    TableTooLarge {
        /// Scheme whose table was being sized.
        predictor: &'static str,
        /// Entries the widths ask for.
        entries: u64,
        /// Largest accepted entry count.
        max: u64,
    },

    /// A configuration file could not be read.
    #[error("cannot read configuration file '{}': {source}", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A JSON configuration document could not be deserialized.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure while reading a branch trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The underlying reader failed.
    #[error("trace I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line does not have exactly two fields.
    #[error("line {line}: expected '<pc> <outcome>', got '{content}'")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// The PC field is not a 32-bit hexadecimal value.
    #[error("line {line}: invalid branch address '{value}'")]
    InvalidPc {
        /// 1-based line number.
        line: usize,
        /// The PC field as written.
        value: String,
    },

    /// The outcome field is neither `0` nor `1`.
    #[error("line {line}: invalid branch outcome '{value}' (expected 0 or 1)")]
    InvalidOutcome {
        /// 1-based line number.
        line: usize,
        /// The outcome field as written.
        value: String,
    },
}

/// Any error the simulation driver can report.
#[derive(Debug, Error)]
pub enum SimError {
    /// Configuration was rejected before the run started.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The trace could not be read to completion.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
