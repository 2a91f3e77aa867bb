use crate::core::{Clue, Puzzle, Slot};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Reason a puzzle-file line was skipped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unhandled line: {line} - expected <letter>=<number>")]
    MalformedClue { line: String },

    #[error("Bad line: {line} - couldn't convert '{token}'")]
    NotANumber { line: String, token: String },

    #[error("Bad line: {line} - numbers out of bound ({number})")]
    OutOfRange { line: String, number: i64 },
}

/// Clues and puzzles parsed from a puzzle file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleFile {
    pub clues: Vec<Clue>,
    pub puzzles: Vec<Puzzle>,
    pub skipped: Vec<InputError>,
}

/// Read and parse a puzzle file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read. Malformed lines are
/// not errors; see [`PuzzleFile::skipped`].
pub fn read_puzzle_file<P: AsRef<Path>>(path: P) -> io::Result<PuzzleFile> {
    let content = fs::read_to_string(path)?;
    Ok(parse_puzzle_text(&content))
}

/// Parse the contents of a puzzle file
///
/// # Examples
/// ```
/// use codeword_solver::input::parse_puzzle_text;
///
/// let file = parse_puzzle_text("# sample\nA=1\n\n1 2 3\n");
/// assert_eq!(file.clues.len(), 1);
/// assert_eq!(file.puzzles.len(), 1);
/// assert!(file.skipped.is_empty());
/// ```
#[must_use]
pub fn parse_puzzle_text(text: &str) -> PuzzleFile {
    parse_lines(text.lines())
}

/// Parse raw lines, separating clues from puzzles
pub fn parse_lines<'a, I>(lines: I) -> PuzzleFile
where
    I: IntoIterator<Item = &'a str>,
{
    let mut file = PuzzleFile::default();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = if line.starts_with(|c: char| c.is_ascii_alphabetic()) {
            parse_clue(line).map(|clue| file.clues.push(clue))
        } else {
            parse_puzzle(line).map(|puzzle| file.puzzles.push(puzzle))
        };

        if let Err(err) = parsed {
            log::warn!("{err}");
            file.skipped.push(err);
        }
    }

    log::debug!(
        "Parsed {} clues and {} puzzles ({} lines skipped)",
        file.clues.len(),
        file.puzzles.len(),
        file.skipped.len()
    );
    file
}

fn parse_clue(line: &str) -> Result<Clue, InputError> {
    let malformed = || InputError::MalformedClue {
        line: line.to_string(),
    };

    let (letter, number) = line.split_once('=').ok_or_else(malformed)?;
    let mut letters = letter.trim().chars();
    let (Some(letter), None) = (letters.next(), letters.next()) else {
        return Err(malformed());
    };
    if !letter.is_ascii_alphabetic() {
        return Err(malformed());
    }

    let number: i64 = number.trim().parse().map_err(|_| malformed())?;
    let slot = Slot::new(number).map_err(|_| InputError::OutOfRange {
        line: line.to_string(),
        number,
    })?;

    Ok(Clue::new(slot, letter.to_ascii_lowercase()))
}

fn parse_puzzle(line: &str) -> Result<Puzzle, InputError> {
    let numbers = line
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| InputError::NotANumber {
                line: line.to_string(),
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i64>, _>>()?;

    let slots = numbers
        .into_iter()
        .map(|number| {
            Slot::new(number).map_err(|_| InputError::OutOfRange {
                line: line.to_string(),
                number,
            })
        })
        .collect::<Result<Vec<Slot>, _>>()?;

    Ok(Puzzle::new(slots))
}
