//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};

/// Color one letter the way the puzzle shows it
#[must_use]
pub fn colored_letter(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Correct => tile.black().on_green().bold(),
        Mark::Present => tile.black().on_yellow().bold(),
        Mark::Absent => tile.white().on_bright_black(),
    }
}

/// Render feedback as a row of colored tiles
#[must_use]
pub fn feedback_to_colored(feedback: &Feedback) -> String {
    feedback
        .cells()
        .iter()
        .map(|cell| colored_letter(cell.letter as char, cell.mark).to_string())
        .collect()
}

/// Explain the accepted feedback symbols
#[must_use]
pub fn mark_legend() -> String {
    [
        (Mark::Correct, "G/g/🟩", "correct position"),
        (Mark::Present, "Y/y/🟨", "wrong position"),
        (Mark::Absent, "-/_/⬜", "not in word"),
    ]
    .iter()
    .map(|(mark, symbols, meaning)| {
        format!(
            "  {} {symbols:<8} {meaning} (compact '{}')",
            colored_letter('a', *mark),
            mark.symbol()
        )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter's divisiveness as a bar
///
/// Scores are shown on a log scale so an even split stands out without flattening
/// every other letter.
#[must_use]
pub fn divisiveness_bar(score: f64, max_score: f64, width: usize) -> String {
    create_progress_bar(score.ln_1p(), max_score.ln_1p(), width)
}
