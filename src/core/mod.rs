//! Core domain types for codeword puzzles
//!
//! Slots, candidate sets and the alphabet state that the solver narrows.
//! Nothing here touches the dictionary or the filesystem.

mod alphabet;
mod letter;
mod letter_set;
mod puzzle;
mod slot;

pub use alphabet::Alphabet;
pub use letter::LetterState;
pub use letter_set::LetterSet;
pub use puzzle::{Clue, Puzzle};
pub use slot::{SLOT_COUNT, Slot, SlotError};
