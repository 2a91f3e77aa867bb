//! Puzzle analysis command
//!
//! Shows, for each puzzle, the pattern the current state produces and the
//! dictionary words still consistent with it.

use crate::core::{Alphabet, Puzzle};
use crate::dictionary::Dictionary;
use crate::solver::{WordPattern, count_matches, matching_words};

/// Analysis of one puzzle
pub struct PuzzleAnalysis {
    pub puzzle: Puzzle,
    pub reading: String,
    /// Pattern source, or the reason it could not be built
    pub pattern: Result<String, String>,
    pub match_count: usize,
    /// First few matching words
    pub samples: Vec<String>,
}

/// Analyze every puzzle against the given state
#[must_use]
pub fn analyze_puzzles(
    alphabet: &Alphabet,
    puzzles: &[Puzzle],
    dictionary: &Dictionary,
    samples: usize,
) -> Vec<PuzzleAnalysis> {
    puzzles
        .iter()
        .map(|puzzle| analyze_puzzle(alphabet, puzzle, dictionary, samples))
        .collect()
}

fn analyze_puzzle(
    alphabet: &Alphabet,
    puzzle: &Puzzle,
    dictionary: &Dictionary,
    samples: usize,
) -> PuzzleAnalysis {
    let reading = puzzle.decode(alphabet);

    match WordPattern::build(alphabet, puzzle) {
        Ok(pattern) => {
            let mut words: Vec<String> = matching_words(&pattern, dictionary)
                .take(samples)
                .map(String::from)
                .collect();
            words.sort_unstable();
            PuzzleAnalysis {
                puzzle: puzzle.clone(),
                reading,
                match_count: count_matches(&pattern, dictionary),
                pattern: Ok(pattern.as_str().to_string()),
                samples: words,
            }
        }
        Err(err) => PuzzleAnalysis {
            puzzle: puzzle.clone(),
            reading,
            pattern: Err(err.to_string()),
            match_count: 0,
            samples: Vec::new(),
        },
    }
}
