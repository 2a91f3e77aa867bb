//! The 26 slot states of a codeword puzzle
//!
//! Whenever a slot is solved, its letter is removed from every other slot.
//! Removal can itself solve another slot, so exclusion cascades until no
//! new answers appear.

use super::{LetterSet, LetterState, SLOT_COUNT, Slot};

/// Letter state for every slot 1-26
///
/// # Examples
/// ```
/// use codeword_solver::core::{Alphabet, LetterSet, Slot};
///
/// let one = Slot::new(1).unwrap();
/// let two = Slot::new(2).unwrap();
///
/// let mut alphabet = Alphabet::new();
/// alphabet.solve(one, 'a');
/// assert!(!alphabet.possibles(two).contains('a'));
///
/// alphabet.update(two, "ab".chars().collect());
/// assert_eq!(alphabet.answer(two), Some('b'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: [LetterState; SLOT_COUNT],
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

impl Alphabet {
    /// All slots unconstrained
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: std::array::from_fn(|_| LetterState::new()),
        }
    }

    /// Set a slot's answer (from a clue) and exclude the letter elsewhere
    pub fn solve(&mut self, slot: Slot, letter: char) {
        if let Some(holder) = self.slot_with_answer(letter)
            && holder != slot
        {
            log::warn!(
                "Conflicting clue: '{letter}' is already the answer for {holder}, not assigning it to {slot}"
            );
            return;
        }
        if self.letters[slot.index()].solve(letter) {
            self.propagate(slot);
        }
    }

    /// Narrow a slot's candidates, propagating any resulting answer
    pub fn update(&mut self, slot: Slot, possibles: LetterSet) {
        let state = &mut self.letters[slot.index()];
        let solved = state.update(possibles);
        if state.is_empty() {
            log::warn!("Slot {slot} has no remaining candidates");
        }
        if solved {
            log::debug!("Slot {slot} resolved to '{}'", state.answer().unwrap_or('?'));
            self.propagate(slot);
        }
    }

    /// Resolved letter for a slot
    #[inline]
    #[must_use]
    pub fn answer(&self, slot: Slot) -> Option<char> {
        self.letters[slot.index()].answer()
    }

    /// Candidate letters for a slot
    #[inline]
    #[must_use]
    pub fn possibles(&self, slot: Slot) -> LetterSet {
        self.letters[slot.index()].possibles()
    }

    /// Slots with their states, in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &LetterState)> {
        Slot::all().zip(self.letters.iter())
    }

    /// Number of slots with a resolved answer
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.letters.iter().filter(|state| state.is_solved()).count()
    }

    /// Sum of candidate-set sizes across all slots
    #[must_use]
    pub fn unknowns(&self) -> usize {
        self.letters.iter().map(LetterState::len).sum()
    }

    /// Eliminated possibilities out of the theoretical `26 * 26`
    #[must_use]
    pub fn quality(&self) -> usize {
        (SLOT_COUNT * SLOT_COUNT).saturating_sub(self.unknowns())
    }

    fn slot_with_answer(&self, letter: char) -> Option<Slot> {
        self.iter()
            .find(|(_, state)| state.answer() == Some(letter))
            .map(|(slot, _)| slot)
    }

    /// Remove each newly solved letter from every other slot
    ///
    /// Worklist of solved slots: a removal that solves another slot queues
    /// that slot in turn.
    fn propagate(&mut self, origin: Slot) {
        let mut pending = vec![origin];
        while let Some(solved) = pending.pop() {
            let Some(letter) = self.answer(solved) else {
                continue;
            };
            for other in Slot::all().filter(|&other| other != solved) {
                if self.letters[other.index()].remove(letter) {
                    log::debug!(
                        "Slot {other} resolved to '{}' by elimination",
                        self.answer(other).unwrap_or('?')
                    );
                    pending.push(other);
                }
            }
        }
    }
}
