//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts without a separate per-PC table.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(1)
//!   - `train()`: O(1)
//! - **Space Complexity:** O(2^G) two-bit counters, G being the global history width
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Uncorrelated branches, or many PCs aliasing in a small table

use super::BranchPredictor;
use super::counter::SaturatingCounter;
use super::history::HistoryRegister;
use super::table::CounterTable;
use crate::common::Outcome;

/// GShare Predictor structure.
#[derive(Clone, Debug)]
pub struct GSharePredictor {
    /// Global History Register storing recent branch outcomes.
    ghr: HistoryRegister,
    /// Branch History Table of 2-bit saturating counters, `2^G` entries.
    bht: CounterTable,
}

impl GSharePredictor {
    /// Creates a GShare predictor with a `ghistory_bits`-wide history.
    ///
    /// Every counter starts weakly not-taken and the history starts at zero.
    pub fn new(ghistory_bits: u32) -> Self {
        Self {
            ghr: HistoryRegister::new(ghistory_bits),
            bht: CounterTable::new(ghistory_bits, SaturatingCounter::WEAKLY_NOT_TAKEN),
        }
    }

    /// Calculates the Branch History Table index for `pc`.
    ///
    /// XOR of the PC and the current Global History Register, masked to G bits.
    #[inline(always)]
    pub const fn index(&self, pc: u32) -> u32 {
        (pc ^ self.ghr.value()) & self.bht.mask()
    }

    /// Global History Register.
    pub const fn ghr(&self) -> &HistoryRegister {
        &self.ghr
    }

    /// Branch History Table.
    pub const fn table(&self) -> &CounterTable {
        &self.bht
    }
}

impl BranchPredictor for GSharePredictor {
    fn name(&self) -> &'static str {
        "Gshare"
    }

    /// Predicts taken if the counter at the hashed index is in its upper half.
    fn predict(&self, pc: u32) -> Outcome {
        self.bht.direction(self.index(pc))
    }

    /// Trains the counter that produced the prediction, then advances the history.
    fn train(&mut self, pc: u32, outcome: Outcome) {
        let idx = self.index(pc);
        self.bht.train(idx, outcome);
        self.ghr.push(outcome);
    }
}
