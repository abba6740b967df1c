//! Saturating Counter.
//!
//! A fixed-width counter that clamps at both ends instead of wrapping. The top bit
//! is the predicted direction, the remaining bits are hysteresis: a strongly biased
//! counter needs two wrong outcomes in a row before its prediction flips.

use crate::common::{COUNTER_BITS, COUNTER_MAX, Outcome};

/// A [`COUNTER_BITS`]-wide saturating counter.
///
/// Values are ordered `0..=COUNTER_MAX`; the lower half predicts not-taken and the
/// upper half predicts taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaturatingCounter(u8);

impl SaturatingCounter {
    /// State 0.
    pub const STRONGLY_NOT_TAKEN: Self = Self(0);
    /// State 1, the initial state of every prediction table.
    pub const WEAKLY_NOT_TAKEN: Self = Self(1);
    /// State 2, the initial state of the tournament choice table.
    pub const WEAKLY_TAKEN: Self = Self(2);
    /// State `COUNTER_MAX`.
    pub const STRONGLY_TAKEN: Self = Self(COUNTER_MAX);

    /// Creates a counter, clamping `value` to the counter range.
    pub const fn new(value: u8) -> Self {
        if value > COUNTER_MAX {
            Self(COUNTER_MAX)
        } else {
            Self(value)
        }
    }

    /// Raw counter value.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `min(value + 1, COUNTER_MAX)`.
    #[inline(always)]
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 == COUNTER_MAX {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    /// Returns `max(value - 1, 0)`.
    #[inline(always)]
    #[must_use]
    pub const fn decrement(self) -> Self {
        match self.0.checked_sub(1) {
            Some(v) => Self(v),
            None => self,
        }
    }

    /// Predicted direction: taken iff the top bit is set.
    #[inline(always)]
    pub const fn direction(self) -> Outcome {
        if self.0 >> (COUNTER_BITS - 1) != 0 {
            Outcome::Taken
        } else {
            Outcome::NotTaken
        }
    }

    /// Moves one step toward `outcome`.
    #[inline(always)]
    #[must_use]
    pub const fn update(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Taken => self.increment(),
            Outcome::NotTaken => self.decrement(),
        }
    }

    /// In-place form of [`SaturatingCounter::update`].
    #[inline(always)]
    pub const fn train(&mut self, outcome: Outcome) {
        *self = self.update(outcome);
    }

    /// `true` when the counter sits at either bound.
    pub const fn is_saturated(self) -> bool {
        self.0 == 0 || self.0 == COUNTER_MAX
    }
}

impl Default for SaturatingCounter {
    fn default() -> Self {
        Self::WEAKLY_NOT_TAKEN
    }
}
