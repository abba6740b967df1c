//! Branch History Registers.
//!
//! Histories are sliding windows of the most recent outcomes, newest outcome in bit 0.
//! This module provides:
//! 1. **Shift primitive:** [`shift_in`], the pure update rule shared by every register.
//! 2. **Global history:** [`HistoryRegister`], one register for all branches.
//! 3. **Local history:** [`LocalHistoryTable`], one register per PC-index bucket.

use std::fmt;

use crate::common::Outcome;

/// Mask selecting the low `width` bits.
#[inline(always)]
pub const fn history_mask(width: u32) -> u32 {
    if width >= u32::BITS {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Returns `((reg << 1) | outcome) mod 2^width`.
#[inline(always)]
pub const fn shift_in(reg: u32, outcome: Outcome, width: u32) -> u32 {
    ((reg << 1) | outcome.bit()) & history_mask(width)
}

/// A `width`-bit shift register of recent branch outcomes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRegister {
    value: u32,
    width: u32,
}

impl HistoryRegister {
    /// Creates an all-zero register.
    pub const fn new(width: u32) -> Self {
        Self { value: 0, width }
    }

    /// Current contents.
    #[inline(always)]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Register width in bits.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Shifts `outcome` in, discarding the oldest bit.
    #[inline(always)]
    pub const fn push(&mut self, outcome: Outcome) {
        self.value = shift_in(self.value, outcome, self.width);
    }
}

// Oldest outcome on the left, newest on the right.
impl fmt::Display for HistoryRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        write!(f, "{:0width$b}", self.value, width = self.width as usize)
    }
}

/// Per-branch histories, indexed by the low bits of the PC.
///
/// Branches whose PCs share the low `index_bits` bits share a history register.
#[derive(Clone, Debug)]
pub struct LocalHistoryTable {
    entries: Vec<u32>,
    index_mask: u32,
    width: u32,
}

impl LocalHistoryTable {
    /// Creates `2^index_bits` all-zero registers of `width` bits each.
    pub fn new(index_bits: u32, width: u32) -> Self {
        Self {
            entries: vec![0; 1usize << index_bits],
            index_mask: history_mask(index_bits),
            width,
        }
    }

    /// Bucket selected by `pc`.
    #[inline(always)]
    pub const fn index(&self, pc: u32) -> u32 {
        pc & self.index_mask
    }

    /// History register for `pc`.
    #[inline(always)]
    pub fn get(&self, pc: u32) -> u32 {
        self.entries[self.index(pc) as usize]
    }

    /// Shifts `outcome` into the history register for `pc`.
    #[inline(always)]
    pub fn push(&mut self, pc: u32, outcome: Outcome) {
        let idx = self.index(pc) as usize;
        self.entries[idx] = shift_in(self.entries[idx], outcome, self.width);
    }

    /// Number of history registers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a table has at least one register.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
