//! Exhaustive backtracking word search
//!
//! Runs a depth-first traversal from every cell, walking the prefix tree in step with
//! the path so that any letter sequence no dictionary word starts with is cut off at once.

use super::score::calculate_score;
use super::top::TopResults;
use crate::core::{CELL_COUNT, Grid, LetterValues, Position, PrefixIndex, TrieNode};
use rayon::prelude::*;
use tracing::{debug, trace};

/// A dictionary word located on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub score: u64,
    pub path: Vec<Position>,
}

/// Live state of one traversal branch
///
/// Grows on descent and shrinks on return, so it always mirrors the recursion depth.
#[derive(Debug, Default)]
struct SearchPath {
    positions: Vec<Position>,
    word: String,
    /// Bit `i` set when the cell with row-major index `i` is on the path
    visited: u32,
}

impl SearchPath {
    #[inline]
    const fn contains(&self, pos: Position) -> bool {
        self.visited & (1 << pos.index()) != 0
    }

    #[inline]
    fn push(&mut self, pos: Position, letter: char) {
        self.positions.push(pos);
        self.word.push(letter);
        self.visited |= 1 << pos.index();
    }

    #[inline]
    fn pop(&mut self) {
        if let Some(pos) = self.positions.pop() {
            self.word.pop();
            self.visited &= !(1 << pos.index());
        }
    }
}

/// Word search over one grid with one dictionary and value table
///
/// All three inputs are read-only for the lifetime of the engine, so the engine
/// can be shared across threads.
pub struct SearchEngine<'a> {
    index: &'a PrefixIndex,
    grid: &'a Grid,
    values: &'a LetterValues,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine
    ///
    /// The grid is expected to be complete; cells without a letter end a branch.
    #[must_use]
    pub const fn new(index: &'a PrefixIndex, grid: &'a Grid, values: &'a LetterValues) -> Self {
        Self {
            index,
            grid,
            values,
        }
    }

    /// Search from every starting cell in row-major order
    ///
    /// # Examples
    /// ```
    /// use tile_solver::core::{Grid, LetterValues, PrefixIndex};
    /// use tile_solver::solver::SearchEngine;
    ///
    /// let grid: Grid = "CATXX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
    /// let index = PrefixIndex::from_words(["cat", "at"]);
    /// let values = LetterValues::standard();
    ///
    /// let results = SearchEngine::new(&index, &grid, &values).solve();
    /// assert_eq!(results.len(), 2);
    /// assert_eq!(results.best().unwrap().score, 8);
    /// ```
    #[must_use]
    pub fn solve(&self) -> TopResults {
        let mut results = TopResults::new();
        for start in Position::all() {
            self.search_from(start, &mut results);
        }
        results
    }

    /// Search every starting cell on the rayon thread pool
    ///
    /// Each start gets its own `TopResults`; they are merged in row-major order, which
    /// gives exactly the ranking `solve` produces.
    #[must_use]
    pub fn solve_parallel(&self) -> TopResults {
        let per_start: Vec<TopResults> = (0..CELL_COUNT)
            .into_par_iter()
            .map(|index| {
                let mut results = TopResults::new();
                self.search_from(Position::from_index(index), &mut results);
                results
            })
            .collect();

        per_start
            .into_iter()
            .fold(TopResults::new(), |mut merged, results| {
                merged.merge(results);
                merged
            })
    }

    /// Offer every word reachable from `start` to `results`
    pub fn search_from(&self, start: Position, results: &mut TopResults) {
        self.walk_from(start, &mut |_, word, score| {
            if results.would_admit(score) {
                results.offer(word, score);
            }
        });
    }

    /// Every word occurrence on the grid with its path, in discovery order
    #[must_use]
    pub fn find_all(&self) -> Vec<FoundWord> {
        let mut found = Vec::new();
        for start in Position::all() {
            self.walk_from(start, &mut |path, word, score| {
                found.push(FoundWord {
                    word: word.to_string(),
                    score,
                    path: path.to_vec(),
                });
            });
        }
        found
    }

    fn walk_from<F>(&self, start: Position, on_word: &mut F)
    where
        F: FnMut(&[Position], &str, u64),
    {
        let mut path = SearchPath::default();
        self.visit(start, self.index.root(), &mut path, on_word);
    }

    fn visit<F>(&self, pos: Position, node: &TrieNode, path: &mut SearchPath, on_word: &mut F)
    where
        F: FnMut(&[Position], &str, u64),
    {
        if !pos.in_bounds() || path.contains(pos) {
            return;
        }
        let Some(letter) = self.grid.letter(pos) else {
            return;
        };
        let Some(next) = node.child(letter) else {
            trace!(prefix = %path.word, %letter, "pruned");
            return;
        };

        path.push(pos, letter);

        if next.is_end_of_word() {
            let score = calculate_score(&path.positions, self.grid, self.values);
            debug!(word = %path.word, score, "found word");
            on_word(&path.positions, &path.word, score);
        }

        for neighbor in pos.neighbors() {
            self.visit(neighbor, next, path, on_word);
        }

        path.pop();
    }
}
