//! Simulator-wide constants.

/// Width of every saturating counter in the predictor tables, in bits.
///
/// Two bits give the classic four-state machine: strongly not-taken (0),
/// weakly not-taken (1), weakly taken (2), strongly taken (3).
pub const COUNTER_BITS: u32 = 2;

/// Largest value a saturating counter can hold (`2^COUNTER_BITS - 1`).
pub const COUNTER_MAX: u8 = (1 << COUNTER_BITS) - 1;

/// Largest accepted history or PC-index width, in bits.
///
/// Every table is sized `2^bits`, so this bounds the largest table at 2^30
/// entries. All history registers are `u32` and are masked to this width.
pub const MAX_HISTORY_BITS: u32 = 30;
