//! Perceptron Branch Predictor.
//!
//! Uses a single-layer perceptron to predict branch direction. Instead of
//! saturating counters, it uses a table of weight vectors. The prediction is the
//! sign of the dot product of the weights and the global history vector.
//!
//! Shipped as a ready-made policy for the custom slot; see
//! [`PredictorEngine::with_custom`](super::PredictorEngine::with_custom).

use super::BranchPredictor;
use super::history::HistoryRegister;
use crate::common::{ConfigError, Outcome};
use crate::config::Config;

/// Coefficient used to calculate the training threshold.
const THETA_COEFF: f64 = 1.93;
/// Bias used to calculate the training threshold.
const THETA_BIAS: f64 = 14.0;

/// Largest weight table [`PerceptronPredictor::from_config`] allocates (one byte per weight).
pub const MAX_WEIGHTS: u64 = 1 << 30;

/// Perceptron Predictor structure.
#[derive(Clone, Debug)]
pub struct PerceptronPredictor {
    /// Global History Register.
    ghr: HistoryRegister,
    /// Table of weights (flattened), `row_size` weights per row.
    table: Vec<i8>,
    /// Mask for indexing the table.
    table_mask: u32,
    /// Size of a single row in the table (history length + bias).
    row_size: usize,
    /// Training threshold (theta).
    threshold: i32,
}

impl PerceptronPredictor {
    /// Creates a predictor with `2^table_bits` rows over `history_length` history bits.
    ///
    /// Allocates `2^table_bits * (history_length + 1)` weights without checking;
    /// `history_length` must be below 32.
    pub fn new(history_length: u32, table_bits: u32) -> Self {
        let rows = 1usize << table_bits;
        let row_size = history_length as usize + 1;
        let threshold = THETA_COEFF.mul_add(f64::from(history_length), THETA_BIAS) as i32;

        Self {
            ghr: HistoryRegister::new(history_length),
            table: vec![0; rows * row_size],
            table_mask: super::history::history_mask(table_bits),
            row_size,
            threshold,
        }
    }

    /// Sizes the history from the global history width and the table from the PC index width.
    ///
    /// # Errors
    ///
    /// Returns the [`Config::validate`] error for out-of-range widths, or
    /// [`ConfigError::TableTooLarge`] if the table would exceed [`MAX_WEIGHTS`].
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let weights = (1u64 << config.pc_index_bits) * (u64::from(config.ghistory_bits) + 1);
        if weights > MAX_WEIGHTS {
            return Err(ConfigError::TableTooLarge {
                predictor: "Perceptron",
                entries: weights,
                max: MAX_WEIGHTS,
            });
        }
        Ok(Self::new(config.ghistory_bits, config.pc_index_bits))
    }

    /// Training threshold.
    pub const fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Calculates the row index using a PC and GHR hash.
    fn index(&self, pc: u32) -> usize {
        ((pc ^ self.ghr.value()) & self.table_mask) as usize
    }

    /// History bit `i` as a perceptron input: +1 for taken, -1 for not taken.
    fn input(&self, i: usize) -> i32 {
        if (self.ghr.value() >> i) & 1 != 0 { 1 } else { -1 }
    }

    /// Computes the perceptron output (dot product) for the row selected by `pc`.
    pub fn output(&self, pc: u32) -> i32 {
        let base = self.index(pc) * self.row_size;
        let row = &self.table[base..base + self.row_size];
        let bias = i32::from(row[0]);
        row[1..]
            .iter()
            .enumerate()
            .fold(bias, |y, (i, &w)| y + i32::from(w) * self.input(i))
    }
}

/// Clamps a weight value to the 8-bit signed integer range.
fn clamp_weight(v: i32) -> i8 {
    v.clamp(i32::from(i8::MIN), i32::from(i8::MAX)) as i8
}

impl BranchPredictor for PerceptronPredictor {
    fn name(&self) -> &'static str {
        "Perceptron"
    }

    /// Predicts taken if the perceptron output is non-negative.
    fn predict(&self, pc: u32) -> Outcome {
        Outcome::from(self.output(pc) >= 0)
    }

    /// Trains the row on a misprediction or when the output magnitude is at or
    /// below the threshold, then advances the history.
    fn train(&mut self, pc: u32, outcome: Outcome) {
        let y = self.output(pc);
        let t = if outcome.is_taken() { 1 } else { -1 };

        if y.abs() <= self.threshold || Outcome::from(y >= 0) != outcome {
            let base = self.index(pc) * self.row_size;
            self.table[base] = clamp_weight(i32::from(self.table[base]) + t);
            for i in 0..self.row_size - 1 {
                let x = self.input(i);
                let w = &mut self.table[base + 1 + i];
                *w = clamp_weight(i32::from(*w) + t * x);
            }
        }

        self.ghr.push(outcome);
    }
}
