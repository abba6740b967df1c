//! Branch outcome type.

use std::fmt;
use std::ops::Not;

/// Direction of a conditional branch, either predicted or resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The branch falls through.
    #[default]
    NotTaken,
    /// The branch jumps to its target.
    Taken,
}

impl Outcome {
    /// Returns the outcome as the single history bit shifted into registers.
    #[inline(always)]
    pub const fn bit(self) -> u32 {
        match self {
            Self::NotTaken => 0,
            Self::Taken => 1,
        }
    }

    /// Returns `true` for [`Outcome::Taken`].
    #[inline(always)]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }
}

impl From<bool> for Outcome {
    fn from(taken: bool) -> Self {
        if taken { Self::Taken } else { Self::NotTaken }
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> Self {
        outcome.is_taken()
    }
}

impl Not for Outcome {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::NotTaken => Self::Taken,
            Self::Taken => Self::NotTaken,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotTaken => write!(f, "N"),
            Self::Taken => write!(f, "T"),
        }
    }
}
