//! A set of lowercase ASCII letters stored as a bitmask
//!
//! Bit 0 is `a`, bit 25 is `z`. Iteration always yields letters in
//! alphabetical order, which keeps generated patterns deterministic.

use std::fmt;
use std::ops::{BitAnd, BitOr};

const FULL_MASK: u32 = (1 << 26) - 1;

/// A set of candidate letters for a slot
///
/// # Examples
/// ```
/// use codeword_solver::core::LetterSet;
///
/// let mut set = LetterSet::FULL;
/// set.remove('e');
/// assert_eq!(set.len(), 25);
/// assert!(!set.contains('e'));
///
/// let vowels: LetterSet = "aeiou".chars().collect();
/// assert_eq!((set & vowels).to_string(), "aiou");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const FULL: Self = Self(FULL_MASK);

    /// Bit for a letter, or `None` if it is not a lowercase ASCII letter
    #[inline]
    const fn bit(letter: char) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter as u32 - 'a' as u32))
        } else {
            None
        }
    }

    /// A set holding exactly one letter
    ///
    /// Characters outside `a..=z` produce an empty set.
    #[must_use]
    pub const fn single(letter: char) -> Self {
        match Self::bit(letter) {
            Some(bit) => Self(bit),
            None => Self::EMPTY,
        }
    }

    /// Add a letter. Returns `true` if it was not already present.
    ///
    /// Characters outside `a..=z` are ignored.
    pub fn insert(&mut self, letter: char) -> bool {
        let Some(bit) = Self::bit(letter) else {
            return false;
        };
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Remove a letter. Returns `true` if it was present.
    pub fn remove(&mut self, letter: char) -> bool {
        let Some(bit) = Self::bit(letter) else {
            return false;
        };
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// `true` if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// The only letter in the set, if it holds exactly one
    #[must_use]
    pub fn single_letter(self) -> Option<char> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        (b'a'..=b'z')
            .map(char::from)
            .filter(move |&letter| self.contains(letter))
    }
}

impl BitAnd for LetterSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitOr for LetterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    /// Letters concatenated in alphabetical order, e.g. `aeiou`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
