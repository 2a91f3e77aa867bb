//! Word list used as the universe of candidate words
//!
//! Words are bucketed by length, so matching a puzzle only scans words
//! that could possibly fit it.

pub mod loader;

use rustc_hash::FxHashMap;

/// Read-only set of lowercase words, grouped by length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<String>>,
    total: usize,
}

impl Dictionary {
    /// Build from already-filtered words, dropping duplicates
    ///
    /// Each length bucket is kept sorted.
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["dog", "cat", "cat", "bird"]);
    /// assert_eq!(dictionary.len(), 3);
    /// assert_eq!(dictionary.words_of_length(3), ["cat", "dog"]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        for word in words {
            let word: String = word.into();
            by_length.entry(word.chars().count()).or_default().push(word);
        }

        let mut total = 0;
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
            bucket.dedup();
            total += bucket.len();
        }
        Self { by_length, total }
    }

    /// Words with exactly `length` letters
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length
            .get(&length)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Total number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
