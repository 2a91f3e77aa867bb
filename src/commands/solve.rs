//! Puzzle solving command
//!
//! Applies the clues, runs the solver passes and collects what each
//! puzzle reads as afterwards.

use crate::core::{Alphabet, Puzzle};
use crate::dictionary::Dictionary;
use crate::input::PuzzleFile;
use crate::solver::{PassSummary, Solver, SolverConfig};

/// A puzzle and its reading after solving
pub struct PuzzleReading {
    pub puzzle: Puzzle,
    /// Decoded word, `?` for unresolved cells
    pub reading: String,
    pub solved: bool,
}

/// Result of solving a puzzle file
pub struct SolveResult {
    pub alphabet: Alphabet,
    pub passes: Vec<PassSummary>,
    pub readings: Vec<PuzzleReading>,
    pub clues: usize,
    pub skipped_lines: usize,
}

/// Solve all puzzles in `file` against `dictionary`
#[must_use]
pub fn solve_file(file: &PuzzleFile, dictionary: &Dictionary, config: SolverConfig) -> SolveResult {
    let mut alphabet = Alphabet::new();
    for clue in &file.clues {
        clue.apply(&mut alphabet);
    }

    let solver = Solver::new(dictionary, config);
    let passes = solver.run(&mut alphabet, &file.puzzles);

    let readings = file
        .puzzles
        .iter()
        .map(|puzzle| PuzzleReading {
            puzzle: puzzle.clone(),
            reading: puzzle.decode(&alphabet),
            solved: puzzle.is_solved(&alphabet),
        })
        .collect();

    SolveResult {
        alphabet,
        passes,
        readings,
        clues: file.clues.len(),
        skipped_lines: file.skipped.len(),
    }
}
