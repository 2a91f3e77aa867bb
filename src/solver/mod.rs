//! Constraint-propagation engine
//!
//! Builds a pattern per puzzle, matches it against the dictionary and feeds
//! the letters it sees back into the alphabet, pass after pass.

mod aggregate;
mod engine;
mod pattern;

pub use aggregate::{Aggregate, collect_possibles, count_matches, matching_words};
pub use engine::{DEFAULT_PASSES, PassSummary, PuzzleOutcome, Solver, SolverConfig};
pub use pattern::{PatternError, WordPattern};
