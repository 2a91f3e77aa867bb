//! Formatting utilities for terminal output

use crate::core::{LetterState, SLOT_COUNT};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage with one decimal, e.g. `11.5%`
#[must_use]
pub fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / whole as f64 * 100.0)
}

/// Bar showing eliminated possibilities out of `26 * 26`
#[must_use]
pub fn quality_bar(quality: usize, width: usize) -> String {
    create_progress_bar(quality as f64, (SLOT_COUNT * SLOT_COUNT) as f64, width)
}

/// One report line for a slot, e.g. `3\tPossibles: a e (2)`
#[must_use]
pub fn slot_line(number: u8, state: &LetterState) -> String {
    format!("{number}\t{state}")
}
