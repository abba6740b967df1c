//! Branch Trace Reader.
//!
//! Traces are plain text, one dynamic conditional branch per line:
//!
//! ```text
//! 0x40061c 1
//! 0x400630 0
//! ```
//!
//! The first field is the branch PC in hexadecimal (the `0x` prefix is optional),
//! the second is `1` for taken or `0` for not taken. Blank lines and lines starting
//! with `#` are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::common::{Outcome, TraceError};

/// One dynamic conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchRecord {
    /// Program counter of the branch.
    pub pc: u32,
    /// Resolved direction.
    pub outcome: Outcome,
}

impl BranchRecord {
    /// Creates a record.
    pub const fn new(pc: u32, outcome: Outcome) -> Self {
        Self { pc, outcome }
    }
}

/// Parses one trace line.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns a [`TraceError`] carrying `line_no` if the line is not a valid record.
pub fn parse_line(line_no: usize, text: &str) -> Result<Option<BranchRecord>, TraceError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let mut fields = text.split_whitespace();
    let (Some(pc), Some(outcome), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(TraceError::Malformed {
            line: line_no,
            content: text.to_string(),
        });
    };

    let digits = pc
        .strip_prefix("0x")
        .or_else(|| pc.strip_prefix("0X"))
        .unwrap_or(pc);
    let invalid_pc = || TraceError::InvalidPc {
        line: line_no,
        value: pc.to_string(),
    };
    // `from_str_radix` also takes a leading sign.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid_pc());
    }
    let pc = u32::from_str_radix(digits, 16).map_err(|_| invalid_pc())?;

    let outcome = match outcome {
        "0" => Outcome::NotTaken,
        "1" => Outcome::Taken,
        other => {
            return Err(TraceError::InvalidOutcome {
                line: line_no,
                value: other.to_string(),
            });
        }
    };

    Ok(Some(BranchRecord { pc, outcome }))
}

/// Iterator over the records of a trace.
///
/// Yields one `Result` per record; an error does not end iteration, so callers
/// decide whether to stop or skip.
#[derive(Debug)]
pub struct TraceReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> TraceReader<R> {
    /// Reads records from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl TraceReader<BufReader<File>> {
    /// Opens the trace file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] if the file cannot be opened.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<BranchRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            match parse_line(self.line_no, &line) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
