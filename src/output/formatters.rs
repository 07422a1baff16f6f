//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::{ColoredString, Colorize};

/// Terminal color for a peg, cycling when there are more colors than entries
#[must_use]
pub fn peg_color(color: Color) -> colored::Color {
    const PALETTE: [colored::Color; 8] = [
        colored::Color::Red,
        colored::Color::Green,
        colored::Color::Blue,
        colored::Color::Yellow,
        colored::Color::Magenta,
        colored::Color::Cyan,
        colored::Color::White,
        colored::Color::BrightBlack,
    ];
    PALETTE[usize::from(color) % PALETTE.len()]
}

/// Format a code as colored pegs labelled with their color index
#[must_use]
pub fn code_to_pegs(code: &Code) -> String {
    code.pegs()
        .iter()
        .map(|&color| peg(color).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn peg(color: Color) -> ColoredString {
    format!("●{color}").color(peg_color(color)).bold()
}

/// Format feedback as key pegs: ● black, ○ white, · empty
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, code_length: usize) -> String {
    let empty = code_length.saturating_sub(feedback.black() + feedback.white());
    format!(
        "{}{}{}",
        "●".repeat(feedback.black()),
        "○".repeat(feedback.white()),
        "·".repeat(empty)
    )
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
