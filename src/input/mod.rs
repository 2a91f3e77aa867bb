//! Puzzle file reading and parsing
//!
//! A puzzle file holds one entry per line:
//! - `# ...` comments and blank lines are ignored
//! - clue lines `<letter>=<number>`, e.g. `E=14`
//! - puzzle lines, whitespace-separated slot numbers, e.g. `3 14 22 14`
//!
//! Bad lines never abort parsing. They are logged and collected in
//! [`PuzzleFile::skipped`].

mod parser;

pub use parser::{InputError, PuzzleFile, parse_lines, parse_puzzle_text, read_puzzle_file};
