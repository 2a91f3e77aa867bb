//! Dictionary loading utilities
//!
//! Only lines whose very first character is a lowercase letter are kept,
//! which drops proper nouns, abbreviations, symbol and indented entries.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize one dictionary line, or `None` if it should be skipped
fn accept_entry(line: &str) -> Option<String> {
    let first = line.chars().next()?;
    first.is_ascii_lowercase().then(|| line.trim().to_lowercase())
}

/// Build a dictionary from newline-separated text
///
/// # Examples
/// ```
/// use codeword_solver::dictionary::loader::load_from_str;
///
/// let dictionary = load_from_str("apple\nParis\n'tis\nzebra\n");
/// assert_eq!(dictionary.len(), 2);
/// ```
#[must_use]
pub fn load_from_str(text: &str) -> Dictionary {
    Dictionary::from_words(text.lines().filter_map(accept_entry))
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use codeword_solver::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path.as_ref())?;
    let dictionary = load_from_str(&content);
    log::info!(
        "Loaded {} words from {}",
        dictionary.len(),
        path.as_ref().display()
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proper_nouns_skipped() {
        let dictionary = load_from_str("London\nlondoner\nNASA\n");
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.words_of_length(8), ["londoner"]);
    }

    #[test]
    fn symbols_and_blank_lines_skipped() {
        let dictionary = load_from_str("\n  \n-ism\n3rd\n'em\nok\n");
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.words_of_length(2), ["ok"]);
    }

    #[test]
    fn trailing_whitespace_trimmed() {
        let dictionary = load_from_str("cat \r\ndog\t\n");
        assert_eq!(dictionary.words_of_length(3), ["cat", "dog"]);
    }

    #[test]
    fn leading_whitespace_rejects_entry() {
        let dictionary = load_from_str("  cat\n\tdog\nant\n");
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.words_of_length(3), ["ant"]);
    }

    #[test]
    fn later_uppercase_is_lowered() {
        let dictionary = load_from_str("iPhone\n");
        assert_eq!(dictionary.words_of_length(6), ["iphone"]);
    }

    #[test]
    fn missing_file_is_error() {
        let result = load_from_file("/nonexistent/path/to/dictionary.txt");
        assert!(result.is_err());
    }
}
