//! Codeword Solver - CLI
//!
//! Reads a puzzle file of clues and numbered words, narrows every number's
//! letter against a dictionary and prints what could be deduced.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codeword_solver::{
    commands::{analyze_puzzles, solve_file},
    dictionary::{Dictionary, loader::load_from_file},
    input::{PuzzleFile, read_puzzle_file},
    logging::init_logger,
    output::{print_analysis, print_solve_result},
    solver::{DEFAULT_PASSES, SolverConfig},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "codeword_solver",
    about = "Codeword puzzle solver using dictionary patterns and constraint propagation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list, one word per line
    #[arg(short, long, global = true, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Maximum number of passes over the puzzle words
    #[arg(short, long, global = true, default_value_t = DEFAULT_PASSES)]
    passes: usize,

    /// Log per-puzzle patterns and match counts
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle file and print every number's letter or candidates
    Solve {
        /// Puzzle file with clue lines (E=14) and word lines (3 14 22 14)
        puzzle: PathBuf,

        /// Show per-pass progress and the decoded words
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve, then show each word's pattern and remaining dictionary matches
    Analyze {
        /// Puzzle file with clue lines (E=14) and word lines (3 14 22 14)
        puzzle: PathBuf,

        /// Number of example matches to list per word
        #[arg(short = 'n', long, default_value = "5")]
        samples: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let config = SolverConfig::default().with_passes(cli.passes);
    let dictionary = load_dictionary(&cli.dictionary)?;

    match cli.command {
        Commands::Solve { puzzle, verbose } => {
            let file = load_puzzles(&puzzle)?;
            let result = solve_file(&file, &dictionary, config);
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { puzzle, samples } => {
            let file = load_puzzles(&puzzle)?;
            let result = solve_file(&file, &dictionary, config);
            let analyses = analyze_puzzles(&result.alphabet, &file.puzzles, &dictionary, samples);
            print_analysis(&analyses);
        }
    }
    Ok(())
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let dictionary = load_from_file(path)
        .with_context(|| format!("Failed to load dictionary from '{}'", path.display()))?;
    if dictionary.is_empty() {
        log::warn!("Dictionary '{}' has no usable words", path.display());
    }
    Ok(dictionary)
}

fn load_puzzles(path: &Path) -> Result<PuzzleFile> {
    read_puzzle_file(path)
        .with_context(|| format!("Failed to read puzzle file '{}'", path.display()))
}
