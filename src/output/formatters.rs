//! Formatting utilities for terminal output

use crate::core::{Cell, Position};

/// Two-character label for a cell: the letter (or `.`) followed by its modifier marker
#[must_use]
pub fn cell_label(cell: &Cell) -> String {
    let mut label = String::with_capacity(2);
    label.push(cell.letter().unwrap_or('.'));
    label.push(cell.modifier().marker().unwrap_or(' '));
    label
}

/// Format a tile path as `(r, c) → (r, c) → ...`
#[must_use]
pub fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

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

/// Bar for a word score relative to the best score of the run
#[must_use]
pub fn score_bar(score: u64, best: u64, width: usize) -> String {
    create_progress_bar(score as f64, best as f64, width)
}
