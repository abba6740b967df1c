//! Tournament Branch Predictor.
//!
//! A hybrid predictor that employs a meta-predictor (Choice table) to select
//! between a Global predictor and a Local predictor (PAg). This allows the
//! predictor to adapt to different types of branch behaviors.
//!
//! 1. **Global:** A table of `2^G` counters indexed directly by the Global History Register.
//! 2. **Local:** A `2^P`-entry Local History Table, indexed by the low PC bits, whose
//!    `L`-bit histories index a table of `2^L` counters.
//! 3. **Choice:** `2^G` counters indexed by the Global History Register. Upper half
//!    trusts the global predictor, lower half trusts the local one.
//!
//! The choice counter only moves when exactly one of the two components was right.
//! Both components train on every branch regardless of which one was trusted.

use super::BranchPredictor;
use super::counter::SaturatingCounter;
use super::history::{HistoryRegister, LocalHistoryTable};
use super::table::CounterTable;
use crate::common::Outcome;
use crate::config::Config;

/// Tournament Predictor structure.
#[derive(Clone, Debug)]
pub struct TournamentPredictor {
    /// Global History Register.
    ghr: HistoryRegister,

    /// Global Pattern History Table (2-bit counters), indexed by GHR.
    global_pht: CounterTable,

    /// Local History Table storing history patterns per PC bucket.
    local_history_table: LocalHistoryTable,

    /// Local Pattern History Table indexed by local history patterns.
    local_pht: CounterTable,

    /// Choice Prediction Table (2-bit counters), indexed by GHR.
    /// Selects between Local (0,1) and Global (2,3) predictors.
    choice_pht: CounterTable,
}

impl TournamentPredictor {
    /// Creates a new Tournament Predictor based on the provided configuration.
    ///
    /// Prediction tables start weakly not-taken, the choice table starts weakly
    /// preferring the global predictor, and all histories start at zero.
    pub fn new(config: &Config) -> Self {
        let g = config.ghistory_bits;
        let l = config.lhistory_bits;

        Self {
            ghr: HistoryRegister::new(g),
            global_pht: CounterTable::new(g, SaturatingCounter::WEAKLY_NOT_TAKEN),
            local_history_table: LocalHistoryTable::new(config.pc_index_bits, l),
            local_pht: CounterTable::new(l, SaturatingCounter::WEAKLY_NOT_TAKEN),
            choice_pht: CounterTable::new(g, SaturatingCounter::WEAKLY_TAKEN),
        }
    }

    /// Prediction of the Global component for the current history.
    pub fn global_prediction(&self) -> Outcome {
        self.global_pht.direction(self.ghr.value())
    }

    /// Prediction of the Local component for the branch at `pc`.
    pub fn local_prediction(&self, pc: u32) -> Outcome {
        self.local_pht.direction(self.local_history_table.get(pc))
    }

    /// Whether the choice counter for the current history trusts the Global component.
    pub fn prefers_global(&self) -> bool {
        self.choice_pht.direction(self.ghr.value()).is_taken()
    }

    /// Global History Register.
    pub const fn ghr(&self) -> &HistoryRegister {
        &self.ghr
    }

    /// Local history of the bucket selected by `pc`.
    pub fn local_history(&self, pc: u32) -> u32 {
        self.local_history_table.get(pc)
    }

    /// Global Pattern History Table.
    pub const fn global_table(&self) -> &CounterTable {
        &self.global_pht
    }

    /// Local Pattern History Table.
    pub const fn local_table(&self) -> &CounterTable {
        &self.local_pht
    }

    /// Choice Prediction Table.
    pub const fn choice_table(&self) -> &CounterTable {
        &self.choice_pht
    }
}

impl BranchPredictor for TournamentPredictor {
    fn name(&self) -> &'static str {
        "Tournament"
    }

    /// Queries the component selected by the choice counter for the current history.
    fn predict(&self, pc: u32) -> Outcome {
        if self.prefers_global() {
            self.global_prediction()
        } else {
            self.local_prediction(pc)
        }
    }

    /// Scores both components against `outcome`, updates the choice counter, trains
    /// both components, then advances the global and local histories.
    fn train(&mut self, pc: u32, outcome: Outcome) {
        // Everything below reads the histories the prediction was made with.
        let g_idx = self.ghr.value();
        let l_idx = self.local_history_table.get(pc);

        let global_correct = self.global_pht.direction(g_idx) == outcome;
        let local_correct = self.local_pht.direction(l_idx) == outcome;

        match (global_correct, local_correct) {
            (true, false) => self.choice_pht.increment(g_idx),
            (false, true) => self.choice_pht.decrement(g_idx),
            _ => {}
        }

        self.global_pht.train(g_idx, outcome);
        self.local_pht.train(l_idx, outcome);

        self.ghr.push(outcome);
        self.local_history_table.push(pc, outcome);
    }
}
