//! Puzzle words and clues

use super::{Alphabet, SLOT_COUNT, Slot};
use std::fmt;

/// One word of the grid, as the sequence of slot numbers in its cells
///
/// Positions sharing a slot must decode to the same letter. Positions with
/// different slots carry no distinctness constraint of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    slots: Vec<Slot>,
}

impl Puzzle {
    #[must_use]
    pub const fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Word length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `true` for slots that occur more than once in this word
    #[must_use]
    pub fn repeated_slots(&self) -> [bool; SLOT_COUNT] {
        let mut counts = [0u8; SLOT_COUNT];
        for slot in &self.slots {
            counts[slot.index()] = counts[slot.index()].saturating_add(1);
        }
        counts.map(|count| count > 1)
    }

    /// Current reading of the word, `?` for unresolved slots
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::{Alphabet, Puzzle, Slot};
    ///
    /// let slots = [1, 2, 1].map(|n| Slot::new(n).unwrap()).to_vec();
    /// let puzzle = Puzzle::new(slots);
    ///
    /// let mut alphabet = Alphabet::new();
    /// alphabet.solve(Slot::new(1).unwrap(), 'e');
    /// assert_eq!(puzzle.decode(&alphabet), "e?e");
    /// ```
    #[must_use]
    pub fn decode(&self, alphabet: &Alphabet) -> String {
        self.slots
            .iter()
            .map(|&slot| alphabet.answer(slot).unwrap_or('?'))
            .collect()
    }

    /// `true` once every slot in the word has an answer
    #[must_use]
    pub fn is_solved(&self, alphabet: &Alphabet) -> bool {
        self.slots.iter().all(|&slot| alphabet.answer(slot).is_some())
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<String> = self.slots.iter().map(ToString::to_string).collect();
        write!(f, "{}", numbers.join(" "))
    }
}

/// A given slot-to-letter assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clue {
    pub slot: Slot,
    pub letter: char,
}

impl Clue {
    #[must_use]
    pub const fn new(slot: Slot, letter: char) -> Self {
        Self { slot, letter }
    }

    /// Apply the clue as ground truth
    pub fn apply(&self, alphabet: &mut Alphabet) {
        alphabet.solve(self.slot, self.letter);
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.letter.to_ascii_uppercase(), self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(numbers: &[i64]) -> Puzzle {
        Puzzle::new(numbers.iter().map(|&n| Slot::new(n).unwrap()).collect())
    }

    #[test]
    fn repeated_slots() {
        let repeated = puzzle(&[2, 3, 1, 3]).repeated_slots();
        assert!(repeated[2]);
        assert!(!repeated[0]);
        assert!(!repeated[1]);
    }

    #[test]
    fn decode_and_solved() {
        let word = puzzle(&[1, 2, 3]);
        let mut alphabet = Alphabet::new();
        assert_eq!(word.decode(&alphabet), "???");
        assert!(!word.is_solved(&alphabet));

        for (n, letter) in [(1, 'a'), (2, 'n'), (3, 't')] {
            alphabet.solve(Slot::new(n).unwrap(), letter);
        }
        assert_eq!(word.decode(&alphabet), "ant");
        assert!(word.is_solved(&alphabet));
    }

    #[test]
    fn display() {
        assert_eq!(puzzle(&[12, 1, 26]).to_string(), "12 1 26");
        let clue = Clue::new(Slot::new(7).unwrap(), 'q');
        assert_eq!(clue.to_string(), "Q=7");
    }

    #[test]
    fn clue_apply_solves_slot() {
        let mut alphabet = Alphabet::new();
        Clue::new(Slot::new(3).unwrap(), 'z').apply(&mut alphabet);
        assert_eq!(alphabet.answer(Slot::new(3).unwrap()), Some('z'));
    }
}
