//! Core domain types for the tile grid
//!
//! Dictionary prefix tree, grid geometry and the letter value table.
//! Everything here is pure and independent of how a solve is dispatched.

mod grid;
mod letters;
mod trie;

pub use grid::{CELL_COUNT, Cell, GRID_SIZE, Grid, GridError, Position, TileModifier};
pub use letters::LetterValues;
pub use trie::{PrefixIndex, SerializedNode, TrieError, TrieNode, normalize_letter};
