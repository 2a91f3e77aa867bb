//! Codeword Solver
//!
//! Solves codeword puzzles, where every grid cell holds a number 1-26 standing
//! for an unknown letter. The solver narrows each number's candidate letters by
//! matching puzzle words against a dictionary, pass after pass.
//!
//! # Quick Start
//!
//! ```rust
//! use codeword_solver::dictionary::Dictionary;
//! use codeword_solver::input::parse_puzzle_text;
//! use codeword_solver::commands::solve_file;
//! use codeword_solver::solver::SolverConfig;
//!
//! let file = parse_puzzle_text("A=1\n1 2 3\n");
//! let dictionary = Dictionary::from_words(["ant", "dog"]);
//!
//! let result = solve_file(&file, &dictionary, SolverConfig::default());
//! assert_eq!(result.readings[0].reading, "ant");
//! ```

// Core domain types
pub mod core;

// Constraint propagation
pub mod solver;

// Word list
pub mod dictionary;

// Puzzle file parsing
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
