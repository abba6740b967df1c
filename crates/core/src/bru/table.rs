//! Counter Tables.
//!
//! Every predictor table in the crate is a power-of-two array of
//! [`SaturatingCounter`]s. Indices are masked to the table size before use, so a
//! lookup can never fall outside the allocation.

use super::counter::SaturatingCounter;
use super::history::history_mask;
use crate::common::Outcome;

/// A `2^bits`-entry table of saturating counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTable {
    entries: Vec<SaturatingCounter>,
    mask: u32,
}

impl CounterTable {
    /// Allocates `2^bits` counters set to `init`.
    pub fn new(bits: u32, init: SaturatingCounter) -> Self {
        Self {
            entries: vec![init; 1usize << bits],
            mask: history_mask(bits),
        }
    }

    /// Mask applied to every index.
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Number of counters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a table has at least one counter.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counter at `index`, after masking.
    #[inline(always)]
    pub fn get(&self, index: u32) -> SaturatingCounter {
        self.entries[(index & self.mask) as usize]
    }

    /// Direction predicted by the counter at `index`.
    #[inline(always)]
    pub fn direction(&self, index: u32) -> Outcome {
        self.get(index).direction()
    }

    /// Moves the counter at `index` one step toward `outcome`.
    #[inline(always)]
    pub fn train(&mut self, index: u32, outcome: Outcome) {
        self.entries[(index & self.mask) as usize].train(outcome);
    }

    /// Increments the counter at `index`.
    #[inline(always)]
    pub fn increment(&mut self, index: u32) {
        self.train(index, Outcome::Taken);
    }

    /// Decrements the counter at `index`.
    #[inline(always)]
    pub fn decrement(&mut self, index: u32) {
        self.train(index, Outcome::NotTaken);
    }

    /// All counters, in index order.
    pub fn entries(&self) -> &[SaturatingCounter] {
        &self.entries
    }
}
