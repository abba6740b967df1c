//! Helpers shared by the unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use bpsim_core::{BranchPredictor, Config, Outcome, PredictorType};
use tracing::Level;

/// Shorthand for [`Outcome::Taken`].
pub const T: Outcome = Outcome::Taken;
/// Shorthand for [`Outcome::NotTaken`].
pub const N: Outcome = Outcome::NotTaken;

/// Builds a configuration with explicit widths.
pub fn config(predictor: PredictorType, g: u32, l: u32, p: u32) -> Config {
    Config {
        ghistory_bits: g,
        lhistory_bits: l,
        pc_index_bits: p,
        predictor,
        verbose: false,
    }
}

/// Runs each `(pc, outcome)` through `predict` then `train`, returning the predictions.
pub fn drive<P: BranchPredictor>(bp: &mut P, events: &[(u32, Outcome)]) -> Vec<Outcome> {
    events
        .iter()
        .map(|&(pc, outcome)| {
            let prediction = bp.predict(pc);
            bp.train(pc, outcome);
            prediction
        })
        .collect()
}

/// Trains `n` occurrences of the same branch outcome.
pub fn train_n<P: BranchPredictor>(bp: &mut P, pc: u32, outcome: Outcome, n: usize) {
    for _ in 0..n {
        bp.train(pc, outcome);
    }
}

/// `n` events alternating taken / not-taken at one PC, starting with taken.
pub fn alternating(pc: u32, n: usize) -> Vec<(u32, Outcome)> {
    (0..n).map(|i| (pc, Outcome::from(i % 2 == 0))).collect()
}

/// Routes `tracing` output to the test harness; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// In-memory sink shared between a subscriber and the test reading it.
#[derive(Clone, Debug, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a subscriber enabled up to `level` and returns what it logged.
pub fn capture_logs(level: Level, f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
