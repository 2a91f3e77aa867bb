//! Numbered codeword slots (1-26)

use std::fmt;
use thiserror::Error;

/// Number of slots in a codeword grid, one per letter of the alphabet
pub const SLOT_COUNT: usize = 26;

/// One of the 26 numbered slots of a codeword puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u8);

/// Error for a slot number outside 1-26
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("slot number must be between 1 and 26, got {0}")]
pub struct SlotError(pub i64);

impl Slot {
    /// Create a slot from its puzzle number
    ///
    /// # Errors
    /// Returns `SlotError` if `number` is not in 1-26.
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::Slot;
    ///
    /// assert_eq!(Slot::new(1).unwrap().number(), 1);
    /// assert!(Slot::new(0).is_err());
    /// assert!(Slot::new(27).is_err());
    /// ```
    pub fn new(number: i64) -> Result<Self, SlotError> {
        match u8::try_from(number) {
            Ok(n) if (1..=SLOT_COUNT as u8).contains(&n) => Ok(Self(n)),
            _ => Err(SlotError(number)),
        }
    }

    /// Puzzle number (1-26)
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based storage index (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All slots in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=SLOT_COUNT as u8).map(Self)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
