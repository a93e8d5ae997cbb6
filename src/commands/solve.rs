//! Grid solving command
//!
//! Solves one grid against a dictionary and returns the ranked words.

use crate::boundary::parse_letter_values;
use crate::core::{Grid, GridError, LetterValues, PrefixIndex};
use crate::solver::{FoundWord, ScoredWord, SearchEngine};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for solving a grid
pub struct SolveConfig {
    pub grid: Grid,
    pub letter_values: LetterValues,
    pub parallel: bool,
    pub list_all: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            letter_values: LetterValues::standard(),
            parallel: true,
            list_all: false,
        }
    }
}

/// Result of solving a grid
pub struct SolveResult {
    pub grid: Grid,
    pub top_words: Vec<ScoredWord>,
    /// Every word occurrence, best first; empty unless `list_all` was set
    pub all_words: Vec<FoundWord>,
    pub dictionary_words: usize,
    pub duration: Duration,
}

/// Solve a grid with the given dictionary
///
/// # Errors
///
/// Returns `GridError::EmptyCell` if any cell has no letter.
pub fn solve_grid(config: SolveConfig, index: &PrefixIndex) -> Result<SolveResult, GridError> {
    config.grid.ensure_complete()?;

    let start = Instant::now();
    let engine = SearchEngine::new(index, &config.grid, &config.letter_values);
    let top = if config.parallel {
        engine.solve_parallel()
    } else {
        engine.solve()
    };

    let mut all_words = Vec::new();
    if config.list_all {
        all_words = engine.find_all();
        all_words.sort_by(|a, b| b.score.cmp(&a.score));
    }
    let duration = start.elapsed();

    info!(
        ranked = top.len(),
        elapsed_ms = duration.as_millis(),
        "grid solved"
    );

    Ok(SolveResult {
        grid: config.grid,
        top_words: top.into_vec(),
        all_words,
        dictionary_words: index.len(),
        duration,
    })
}

/// Read a letter value table from a JSON object such as `{"A": 1, "B": 4}`
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON object of non-negative
/// integers, or has a key that is not a single letter.
pub fn load_letter_values<P: AsRef<Path>>(path: P) -> Result<LetterValues> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let table: BTreeMap<String, u32> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(parse_letter_values(&table)?)
}
