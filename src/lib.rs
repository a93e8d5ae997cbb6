//! Tile Solver
//!
//! Finds the highest-scoring dictionary words traceable on a 5x5 letter grid.
//! Words follow chains of adjacent tiles (diagonals included) without reusing a tile,
//! and a prefix trie prunes every branch that cannot extend to a word.
//!
//! # Quick Start
//!
//! ```rust
//! use tile_solver::core::{Grid, LetterValues, PrefixIndex};
//! use tile_solver::solver::SearchEngine;
//!
//! let index = PrefixIndex::from_words(["cat", "cats", "act"]);
//! let grid: Grid = "CAT+SX/XXXXX/XXXXX/XXXXX/XXXXX".parse().unwrap();
//! let values = LetterValues::standard();
//!
//! let top = SearchEngine::new(&index, &grid, &values).solve();
//! assert_eq!(top.best().map(|w| w.word.as_str()), Some("CATS"));
//! ```

// Core domain types
pub mod core;

// Scoring and grid search
pub mod solver;

// Request handling and the background worker
pub mod boundary;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;
