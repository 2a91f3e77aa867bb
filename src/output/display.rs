//! Display functions for command results

use super::formatters::{percent, quality_bar, slot_line};
use crate::commands::{PuzzleAnalysis, SolveResult};
use crate::core::{Alphabet, SLOT_COUNT};
use colored::Colorize;

/// Print every slot followed by the solved count and quality
pub fn print_solution(alphabet: &Alphabet) {
    for (slot, state) in alphabet.iter() {
        let line = slot_line(slot.number(), state);
        if state.is_solved() {
            println!("{}", line.green());
        } else if state.is_empty() {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }

    let solved = alphabet.solved_count();
    let quality = alphabet.quality();
    let max = SLOT_COUNT * SLOT_COUNT;

    println!(
        "Solved: {}/{SLOT_COUNT} = {}",
        solved.to_string().bright_yellow().bold(),
        percent(solved, SLOT_COUNT)
    );
    println!(
        "Quality: {} ({}) Unknowns: {}",
        quality.to_string().bright_yellow().bold(),
        percent(quality, max),
        alphabet.unknowns()
    );
}

/// Print the result of solving a puzzle file
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Clues: {}   Puzzles: {}   Skipped lines: {}",
        result.clues,
        result.readings.len(),
        result.skipped_lines
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("\n📈 {}", "Passes:".bright_cyan().bold());
        for pass in &result.passes {
            println!(
                "   Pass {}: [{}] solved {:2}/{SLOT_COUNT}  quality {:3}  unmatched {}  dead ends {}",
                pass.pass,
                quality_bar(pass.quality, 20).green(),
                pass.solved,
                pass.quality,
                pass.no_match,
                pass.dead_ends
            );
        }

        println!("\n📖 {}", "Words:".bright_cyan().bold());
        for reading in &result.readings {
            let word = if reading.solved {
                reading.reading.green().bold()
            } else {
                reading.reading.normal()
            };
            println!("   {word:<16} {}", reading.puzzle.to_string().bright_black());
        }
        println!();
    }

    print_solution(&result.alphabet);
}

/// Print per-puzzle analysis
pub fn print_analysis(analyses: &[PuzzleAnalysis]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for analysis in analyses {
        println!(
            "\n{}  {}",
            analysis.reading.bright_yellow().bold(),
            analysis.puzzle.to_string().bright_black()
        );
        match &analysis.pattern {
            Ok(pattern) => {
                println!("   Pattern:  {pattern}");
                let count = analysis.match_count.to_string();
                let count = match analysis.match_count {
                    0 => count.red(),
                    1 => count.green(),
                    _ => count.yellow(),
                };
                println!("   Matches:  {count}");
                if !analysis.samples.is_empty() {
                    println!("   Examples: {}", analysis.samples.join(", "));
                }
            }
            Err(reason) => println!("   {}", reason.red()),
        }
    }
}
