//! Command implementations

pub mod analyze;
pub mod solve;

pub use analyze::{PuzzleAnalysis, analyze_puzzles};
pub use solve::{PuzzleReading, SolveResult, solve_file};
