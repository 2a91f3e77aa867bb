//! Matching patterns built from the current alphabet state
//!
//! Each puzzle becomes an anchored regular expression with one token per
//! cell:
//! - solved slot: the literal letter
//! - unsolved slot: a character class of its candidates, alphabetical
//! - repeated unsolved slot: a capture group on first occurrence and a
//!   back-reference afterwards, so every occurrence reads the same letter
//!
//! Back-references need `fancy_regex`; the `regex` crate does not support them.

use crate::core::{Alphabet, Puzzle, SLOT_COUNT, Slot};
use fancy_regex::Regex;
use std::fmt;
use std::fmt::Write;
use thiserror::Error;

/// Why a pattern could not be built for a puzzle
#[derive(Debug, Error)]
pub enum PatternError {
    /// A slot ran out of candidates, so no word could ever match
    #[error("slot {slot} has no remaining candidates (puzzle {puzzle})")]
    EmptyCandidates { slot: Slot, puzzle: String },

    #[error("invalid pattern {pattern}: {error}")]
    Regex {
        pattern: String,
        #[source]
        error: Box<fancy_regex::Error>,
    },
}

/// Compiled matcher for one puzzle
#[derive(Debug, Clone)]
pub struct WordPattern {
    source: String,
    regex: Regex,
    length: usize,
}

impl WordPattern {
    /// Build the pattern for `puzzle` from the current state
    ///
    /// # Errors
    /// Returns `PatternError::EmptyCandidates` if an unsolved slot has no
    /// candidates left.
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::{Alphabet, Puzzle, Slot};
    /// use codeword_solver::solver::WordPattern;
    ///
    /// let mut alphabet = Alphabet::new();
    /// alphabet.solve(Slot::new(1).unwrap(), 'a');
    ///
    /// let puzzle = Puzzle::new(vec![Slot::new(1).unwrap()]);
    /// let pattern = WordPattern::build(&alphabet, &puzzle).unwrap();
    /// assert_eq!(pattern.as_str(), "^a$");
    /// assert!(pattern.is_match("a"));
    /// ```
    pub fn build(alphabet: &Alphabet, puzzle: &Puzzle) -> Result<Self, PatternError> {
        let repeated = puzzle.repeated_slots();
        let mut group_of = [0usize; SLOT_COUNT];
        let mut groups = 0;

        let mut source = String::from("^");
        for &slot in puzzle.slots() {
            if let Some(letter) = alphabet.answer(slot) {
                source.push(letter);
                continue;
            }

            let candidates = alphabet.possibles(slot);
            if candidates.is_empty() {
                return Err(PatternError::EmptyCandidates {
                    slot,
                    puzzle: puzzle.to_string(),
                });
            }

            let idx = slot.index();
            if !repeated[idx] {
                let _ = write!(source, "[{candidates}]");
            } else if group_of[idx] == 0 {
                groups += 1;
                group_of[idx] = groups;
                let _ = write!(source, "([{candidates}])");
            } else {
                let _ = write!(source, "\\{}", group_of[idx]);
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|error| PatternError::Regex {
            pattern: source.clone(),
            error: Box::new(error),
        })?;

        Ok(Self {
            source,
            regex,
            length: puzzle.len(),
        })
    }

    /// Regular-expression source
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of letters a matching word has
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// Full-word match
    ///
    /// A matcher failure (e.g. backtracking limit) counts as no match.
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        match self.regex.is_match(word) {
            Ok(matched) => matched,
            Err(err) => {
                log::warn!("Matching '{word}' against {} failed: {err}", self.source);
                false
            }
        }
    }
}

impl fmt::Display for WordPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
