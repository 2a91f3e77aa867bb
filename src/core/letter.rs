//! Candidate tracking for a single slot
//!
//! A slot starts with all 26 letters possible. It becomes solved either
//! explicitly (a clue) or when narrowing leaves exactly one candidate.
//! Solving is one-way: a solved slot never returns to unsolved.

use super::LetterSet;
use std::fmt;

/// Candidate letters and resolved answer for one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterState {
    possibles: LetterSet,
    answer: Option<char>,
}

impl Default for LetterState {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterState {
    /// Fully unconstrained slot
    #[must_use]
    pub const fn new() -> Self {
        Self {
            possibles: LetterSet::FULL,
            answer: None,
        }
    }

    /// Force the answer, e.g. from a clue
    ///
    /// Overwrites any previous state. The candidate set collapses to the
    /// single letter so that `answer` and `possibles` stay in agreement.
    /// Anything but `a`-`z` is refused and returns `false`.
    pub fn solve(&mut self, letter: char) -> bool {
        if !letter.is_ascii_lowercase() {
            log::warn!("Ignoring solve with '{letter}', not a lowercase letter");
            return false;
        }
        self.answer = Some(letter);
        self.possibles = LetterSet::single(letter);
        true
    }

    /// Current candidate letters
    #[inline]
    #[must_use]
    pub const fn possibles(&self) -> LetterSet {
        self.possibles
    }

    /// Resolved letter, if any
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> Option<char> {
        self.answer
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.answer.is_some()
    }

    /// Number of remaining candidates
    ///
    /// 26 when unconstrained, 1 when solved. 0 means the accumulated
    /// constraints contradict each other.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.possibles.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.possibles.is_empty()
    }

    /// Intersect the candidates with `possibles`
    ///
    /// Returns `true` if this call resolved the slot.
    pub fn update(&mut self, possibles: LetterSet) -> bool {
        if let Some(answer) = self.answer {
            if !possibles.contains(answer) {
                log::warn!(
                    "Ignoring update {{{possibles}}} that excludes solved letter '{answer}'"
                );
            }
            return false;
        }
        self.possibles = self.possibles & possibles;
        self.check_solved()
    }

    /// Drop `letter` from the candidates if present
    ///
    /// Returns `true` if this call resolved the slot.
    pub fn remove(&mut self, letter: char) -> bool {
        if let Some(answer) = self.answer {
            if answer == letter {
                log::warn!("Refusing to remove '{letter}' from a slot solved as '{answer}'");
            }
            return false;
        }
        self.possibles.remove(letter) && self.check_solved()
    }

    /// Resolve the answer once exactly one candidate remains
    fn check_solved(&mut self) -> bool {
        if self.answer.is_none()
            && let Some(letter) = self.possibles.single_letter()
        {
            self.answer = Some(letter);
            return true;
        }
        false
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.answer {
            Some(letter) => write!(f, "Answer: {letter}"),
            None => {
                let letters: Vec<String> =
                    self.possibles.iter().map(String::from).collect();
                write!(f, "Possibles: {} ({})", letters.join(" "), self.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(letters: &str) -> LetterSet {
        letters.chars().collect()
    }

    #[test]
    fn starts_unconstrained() {
        let state = LetterState::new();
        assert_eq!(state.len(), 26);
        assert_eq!(state.answer(), None);
        assert!(!state.is_solved());
    }

    #[test]
    fn solve_collapses_candidates() {
        let mut state = LetterState::new();
        state.solve('q');
        assert_eq!(state.answer(), Some('q'));
        assert_eq!(state.possibles(), LetterSet::single('q'));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn solve_overwrites() {
        let mut state = LetterState::new();
        state.solve('q');
        state.solve('r');
        assert_eq!(state.answer(), Some('r'));
        assert_eq!(state.possibles(), LetterSet::single('r'));
    }

    #[test]
    fn solve_refuses_non_letters() {
        let mut state = LetterState::new();
        for letter in ['A', '7', ' ', 'é'] {
            assert!(!state.solve(letter));
            assert_eq!(state, LetterState::new());
        }

        state.solve('k');
        assert!(!state.solve('K'));
        assert_eq!(state.answer(), Some('k'));
        assert_eq!(state.possibles(), LetterSet::single('k'));
    }

    #[test]
    fn update_intersects() {
        let mut state = LetterState::new();
        assert!(!state.update(set("abc")));
        assert!(!state.update(set("bcd")));
        assert_eq!(state.possibles(), set("bc"));
        assert!(!state.is_solved());
    }

    #[test]
    fn update_auto_resolves_singleton() {
        let mut state = LetterState::new();
        assert!(state.update(set("n")));
        assert_eq!(state.answer(), Some('n'));
    }

    #[test]
    fn update_on_solved_slot_is_noop() {
        let mut state = LetterState::new();
        state.update(set("n"));
        assert!(!state.update(set("mno")));
        assert_eq!(state.answer(), Some('n'));
        assert_eq!(state.len(), 1);

        // Contract violation: solved letter missing from the update
        assert!(!state.update(set("xyz")));
        assert_eq!(state.answer(), Some('n'));
        assert_eq!(state.possibles(), set("n"));
    }

    #[test]
    fn update_to_empty_is_reportable_not_fatal() {
        let mut state = LetterState::new();
        state.update(set("ab"));
        assert!(!state.update(set("cd")));
        assert!(state.is_empty());
        assert!(!state.is_solved());
    }

    #[test]
    fn remove_auto_resolves() {
        let mut state = LetterState::new();
        state.update(set("ab"));
        assert!(state.remove('a'));
        assert_eq!(state.answer(), Some('b'));
    }

    #[test]
    fn remove_absent_letter_is_noop() {
        let mut state = LetterState::new();
        state.update(set("ab"));
        assert!(!state.remove('z'));
        assert_eq!(state.possibles(), set("ab"));
    }

    #[test]
    fn remove_never_unsolves() {
        let mut state = LetterState::new();
        state.solve('a');
        assert!(!state.remove('a'));
        assert_eq!(state.answer(), Some('a'));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn narrowing_is_monotonic() {
        let mut state = LetterState::new();
        let mut previous = state.len();
        for update in ["abcdefgh", "bcdefghij", "cdeg", "xyz", "c"] {
            state.update(set(update));
            assert!(state.len() <= previous);
            previous = state.len();
        }
        for letter in "abcdefg".chars() {
            state.remove(letter);
            assert!(state.len() <= previous);
            previous = state.len();
        }
    }

    #[test]
    fn display() {
        let mut state = LetterState::new();
        state.update(set("tab"));
        assert_eq!(state.to_string(), "Possibles: a b t (3)");
        state.remove('b');
        state.remove('t');
        assert_eq!(state.to_string(), "Answer: a");
    }
}
