//! Benchmark command
//!
//! Solves random grids sequentially and in parallel, timing both passes.

use crate::core::{Grid, GridError, LetterValues, Position, PrefixIndex, TileModifier};
use crate::solver::{ScoredWord, SearchEngine};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Letter bag with roughly English tile frequencies
const LETTER_BAG: &[u8] = b"EEEEEEEEEEEEAAAAAAAAAIIIIIIIIIOOOOOOOONNNNNNRRRRRRTTTTTTLLLLSSSSUUUUDDDDGGGBBCCMMPPFFHHVVWWYYKJXQZ";

/// Chance that a tile is double letter
const DOUBLE_LETTER_PROBABILITY: f64 = 0.08;

/// Chance that a tile is double word
const DOUBLE_WORD_PROBABILITY: f64 = 0.04;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub grids: usize,
    pub sequential: Duration,
    pub parallel: Duration,
    /// Grids where the two passes disagreed (should always be 0)
    pub mismatches: usize,
    pub best: Option<(Grid, ScoredWord)>,
    pub grids_per_second: f64,
}

/// Draw a complete grid with random letters and modifiers
///
/// # Errors
///
/// Returns `GridError` if a drawn tile is rejected by the grid.
pub fn random_grid<R: Rng>(rng: &mut R) -> Result<Grid, GridError> {
    let mut grid = Grid::new();
    for pos in Position::all() {
        let letter = char::from(LETTER_BAG[rng.random_range(0..LETTER_BAG.len())]);
        let modifier = if rng.random_bool(DOUBLE_WORD_PROBABILITY) {
            TileModifier::DoubleWord
        } else if rng.random_bool(DOUBLE_LETTER_PROBABILITY) {
            TileModifier::DoubleLetter
        } else {
            TileModifier::Normal
        };
        grid.set_letter(pos, letter)?;
        grid.set_modifier(pos, modifier)?;
    }
    Ok(grid)
}

/// Solve `count` random grids drawn from `seed`
///
/// # Errors
///
/// Returns `GridError` if grid generation fails.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a compile-time constant).
pub fn run_benchmark(
    index: &PrefixIndex,
    values: &LetterValues,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult, GridError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let grids = (0..count)
        .map(|_| random_grid(&mut rng))
        .collect::<Result<Vec<_>, _>>()?;

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut sequential = Duration::ZERO;
    let mut parallel = Duration::ZERO;
    let mut mismatches = 0;
    let mut best: Option<(Grid, ScoredWord)> = None;

    for grid in grids {
        let engine = SearchEngine::new(index, &grid, values);

        let start = Instant::now();
        let seq_results = engine.solve();
        sequential += start.elapsed();

        let start = Instant::now();
        let par_results = engine.solve_parallel();
        parallel += start.elapsed();

        if seq_results != par_results {
            mismatches += 1;
        }

        if let Some(top) = seq_results.best()
            && best.as_ref().is_none_or(|(_, current)| top.score > current.score)
        {
            pb.set_message(format!("Best: {} ({})", top.word, top.score));
            best = Some((grid.clone(), top.clone()));
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete!");

    Ok(BenchmarkResult {
        grids: count,
        sequential,
        parallel,
        mismatches,
        best,
        grids_per_second: count as f64 / parallel.as_secs_f64().max(f64::EPSILON),
    })
}
