//! Pass-based solving driver

use super::{WordPattern, collect_possibles};
use crate::core::{Alphabet, Puzzle};
use crate::dictionary::Dictionary;

/// Number of passes run when not configured otherwise
pub const DEFAULT_PASSES: usize = 3;

/// Solver tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Upper bound on passes over the puzzle list
    pub passes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }
}

/// What processing one puzzle achieved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleOutcome {
    /// At least one dictionary word matched and its letters were applied
    Matched { words: usize },
    /// No dictionary word matched; nothing was learned
    NoMatch,
    /// A slot in the puzzle has no candidates, so it was skipped
    DeadEnd,
}

/// Statistics after one pass over every puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// 1-based pass number
    pub pass: usize,
    pub solved: usize,
    pub quality: usize,
    pub no_match: usize,
    pub dead_ends: usize,
    /// Whether the pass narrowed anything
    pub changed: bool,
}

/// Iterates the puzzles against the dictionary, narrowing the alphabet
///
/// Each pass processes every puzzle once, in order. A slot solved late in
/// one pass tightens the patterns of puzzles handled earlier only on the
/// next pass, hence several passes.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: SolverConfig) -> Self {
        Self { dictionary, config }
    }

    /// Narrow the alphabet using one puzzle
    pub fn solve_puzzle(&self, alphabet: &mut Alphabet, puzzle: &Puzzle) -> PuzzleOutcome {
        let pattern = match WordPattern::build(alphabet, puzzle) {
            Ok(pattern) => pattern,
            Err(err) => {
                log::warn!("Skipping puzzle {puzzle}: {err}");
                return PuzzleOutcome::DeadEnd;
            }
        };

        let aggregate = collect_possibles(puzzle, &pattern, self.dictionary);
        if aggregate.is_empty() {
            return PuzzleOutcome::NoMatch;
        }

        for (slot, letters) in aggregate.entries() {
            alphabet.update(slot, letters);
        }
        PuzzleOutcome::Matched {
            words: aggregate.matches(),
        }
    }

    /// One pass over every puzzle
    pub fn run_pass(&self, alphabet: &mut Alphabet, puzzles: &[Puzzle], pass: usize) -> PassSummary {
        let before = alphabet.clone();
        let mut no_match = 0;
        let mut dead_ends = 0;

        for puzzle in puzzles {
            match self.solve_puzzle(alphabet, puzzle) {
                PuzzleOutcome::Matched { .. } => {}
                PuzzleOutcome::NoMatch => no_match += 1,
                PuzzleOutcome::DeadEnd => dead_ends += 1,
            }
        }

        let summary = PassSummary {
            pass,
            solved: alphabet.solved_count(),
            quality: alphabet.quality(),
            no_match,
            dead_ends,
            changed: *alphabet != before,
        };
        log::info!(
            "Pass {pass}: solved {}/26, quality {}, {no_match} unmatched, {dead_ends} dead ends",
            summary.solved,
            summary.quality
        );
        summary
    }

    /// Run up to `config.passes` passes
    ///
    /// Stops early once a pass changes nothing: the next pass would see the
    /// same state and build the same patterns.
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::{Alphabet, Puzzle, Slot};
    /// use codeword_solver::dictionary::Dictionary;
    /// use codeword_solver::solver::{Solver, SolverConfig};
    ///
    /// let dictionary = Dictionary::from_words(["ant", "dog"]);
    /// let puzzles = vec![Puzzle::new([1, 2, 3].map(|n| Slot::new(n).unwrap()).to_vec())];
    ///
    /// let mut alphabet = Alphabet::new();
    /// alphabet.solve(Slot::new(1).unwrap(), 'a');
    ///
    /// let solver = Solver::new(&dictionary, SolverConfig::default());
    /// solver.run(&mut alphabet, &puzzles);
    /// assert_eq!(alphabet.solved_count(), 3);
    /// ```
    pub fn run(&self, alphabet: &mut Alphabet, puzzles: &[Puzzle]) -> Vec<PassSummary> {
        let mut summaries = Vec::with_capacity(self.config.passes);
        for pass in 1..=self.config.passes {
            let summary = self.run_pass(alphabet, puzzles, pass);
            summaries.push(summary);
            if !summary.changed {
                log::debug!("Pass {pass} changed nothing, stopping");
                break;
            }
        }
        summaries
    }
}
