//! Dictionary matching and per-slot letter aggregation

use super::WordPattern;
use crate::core::{LetterSet, Puzzle, Slot};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Letters seen at each slot across all dictionary words matching a puzzle
///
/// An empty aggregate means "no new information", never "any letter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    possibles: FxHashMap<Slot, LetterSet>,
    /// Slots in order of first appearance in the puzzle
    order: Vec<Slot>,
    matches: usize,
}

impl Aggregate {
    /// Letters observed for `slot`, if the puzzle contains it and anything matched
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<LetterSet> {
        self.possibles.get(&slot).copied()
    }

    /// Number of dictionary words that matched
    #[inline]
    #[must_use]
    pub const fn matches(&self) -> usize {
        self.matches
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.possibles.is_empty()
    }

    /// Entries in the order their slots first appear in the puzzle
    pub fn entries(&self) -> impl Iterator<Item = (Slot, LetterSet)> + '_ {
        self.order
            .iter()
            .filter_map(|&slot| self.get(slot).map(|set| (slot, set)))
    }
}

/// Dictionary words of the right length that fully match `pattern`
pub fn matching_words<'a>(
    pattern: &'a WordPattern,
    dictionary: &'a Dictionary,
) -> impl Iterator<Item = &'a str> + 'a {
    dictionary
        .words_of_length(pattern.word_length())
        .iter()
        .map(String::as_str)
        .filter(move |word| pattern.is_match(word))
}

/// Count matching words without aggregating
#[must_use]
pub fn count_matches(pattern: &WordPattern, dictionary: &Dictionary) -> usize {
    matching_words(pattern, dictionary).count()
}

/// Scan the dictionary and collect, per slot, every letter that appears in
/// that slot's positions among matching words
///
/// # Examples
/// ```
/// use codeword_solver::core::{Alphabet, Puzzle, Slot};
/// use codeword_solver::dictionary::Dictionary;
/// use codeword_solver::solver::{WordPattern, collect_possibles};
///
/// let dictionary = Dictionary::from_words(["cat", "cut", "dog"]);
/// let puzzle = Puzzle::new([1, 2, 3].map(|n| Slot::new(n).unwrap()).to_vec());
///
/// let mut alphabet = Alphabet::new();
/// alphabet.solve(Slot::new(1).unwrap(), 'c');
///
/// let pattern = WordPattern::build(&alphabet, &puzzle).unwrap();
/// let aggregate = collect_possibles(&puzzle, &pattern, &dictionary);
/// assert_eq!(aggregate.matches(), 2);
/// assert_eq!(aggregate.get(Slot::new(2).unwrap()).unwrap().to_string(), "au");
/// ```
#[must_use]
pub fn collect_possibles(
    puzzle: &Puzzle,
    pattern: &WordPattern,
    dictionary: &Dictionary,
) -> Aggregate {
    let mut aggregate = Aggregate::default();

    for word in matching_words(pattern, dictionary) {
        for (&slot, letter) in puzzle.slots().iter().zip(word.chars()) {
            match aggregate.possibles.entry(slot) {
                Entry::Occupied(mut seen) => {
                    seen.get_mut().insert(letter);
                }
                Entry::Vacant(slot_entry) => {
                    slot_entry.insert(LetterSet::single(letter));
                    aggregate.order.push(slot);
                }
            }
        }
        aggregate.matches += 1;
    }

    if aggregate.matches == 0 {
        log::warn!("Couldn't match {pattern}");
        return Aggregate::default();
    }

    log::debug!("{pattern} matched {} words", aggregate.matches);
    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn slot(n: i64) -> Slot {
        Slot::new(n).unwrap()
    }

    fn puzzle(numbers: &[i64]) -> Puzzle {
        Puzzle::new(numbers.iter().map(|&n| slot(n)).collect())
    }

    fn set(letters: &str) -> LetterSet {
        letters.chars().collect()
    }

    /// State where puzzle `1 2 3` reads `c?t`
    fn c_blank_t() -> Alphabet {
        let mut alphabet = Alphabet::new();
        alphabet.solve(slot(1), 'c');
        alphabet.solve(slot(3), 't');
        alphabet
    }

    #[test]
    fn aggregates_letters_per_slot() {
        let dictionary = Dictionary::from_words(["cat", "dog", "cut"]);
        let word = puzzle(&[1, 2, 3]);
        let pattern = WordPattern::build(&c_blank_t(), &word).unwrap();

        let aggregate = collect_possibles(&word, &pattern, &dictionary);

        assert_eq!(aggregate.matches(), 2);
        assert_eq!(aggregate.get(slot(1)), Some(set("c")));
        assert_eq!(aggregate.get(slot(2)), Some(set("au")));
        assert_eq!(aggregate.get(slot(3)), Some(set("t")));
        assert_eq!(aggregate.entries().count(), 3);
    }

    #[test]
    fn no_match_yields_empty_aggregate() {
        let dictionary = Dictionary::from_words(["dog", "bird"]);
        let word = puzzle(&[1, 2, 3]);
        let mut alphabet = c_blank_t();
        alphabet.update(slot(2), set("aeiou"));
        let pattern = WordPattern::build(&alphabet, &word).unwrap();
        assert_eq!(pattern.as_str(), "^c[aeiou]t$");

        let aggregate = collect_possibles(&word, &pattern, &dictionary);

        assert!(aggregate.is_empty());
        assert_eq!(aggregate.matches(), 0);
        assert_eq!(aggregate.get(slot(2)), None);
    }

    #[test]
    fn repeated_slot_letters_merge() {
        let dictionary = Dictionary::from_words(["noon", "deed", "need", "peep"]);
        let word = puzzle(&[1, 2, 2, 1]);
        let pattern = WordPattern::build(&Alphabet::new(), &word).unwrap();

        let aggregate = collect_possibles(&word, &pattern, &dictionary);

        // "need" fails the outer back-reference
        assert_eq!(aggregate.matches(), 3);
        assert_eq!(aggregate.get(slot(1)), Some(set("dnp")));
        assert_eq!(aggregate.get(slot(2)), Some(set("eo")));
    }

    #[test]
    fn only_words_of_puzzle_length_considered() {
        let dictionary = Dictionary::from_words(["a", "at", "ate", "atom"]);
        let word = puzzle(&[1, 2]);
        let pattern = WordPattern::build(&Alphabet::new(), &word).unwrap();

        assert_eq!(count_matches(&pattern, &dictionary), 1);
        let words: Vec<&str> = matching_words(&pattern, &dictionary).collect();
        assert_eq!(words, vec!["at"]);
    }

    #[test]
    fn entries_follow_puzzle_order() {
        let dictionary = Dictionary::from_words(["hexes"]);
        let word = puzzle(&[9, 4, 17, 4, 2]);
        let pattern = WordPattern::build(&Alphabet::new(), &word).unwrap();

        let aggregate = collect_possibles(&word, &pattern, &dictionary);
        let order: Vec<u8> = aggregate.entries().map(|(s, _)| s.number()).collect();
        assert_eq!(order, vec![9, 4, 17, 2]);
    }
}
