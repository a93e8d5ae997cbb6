//! Wire payloads exchanged across the execution boundary
//!
//! Everything arriving here is untrusted. Conversion into core types validates
//! dimensions, letters, dictionary keys and value keys before any search starts.

use super::error::{BoundaryError, Result};
use crate::core::{
    GRID_SIZE, Grid, LetterValues, Position, PrefixIndex, SerializedNode, TileModifier,
};
use crate::solver::{ScoredWord, TopResults};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One grid tile: a single letter (or empty) and its modifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPayload {
    #[serde(default)]
    pub letter: String,
    #[serde(default)]
    pub state: TileModifier,
}

/// Solve request: grid snapshot, serialized dictionary and letter value table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    #[serde(alias = "board")]
    pub grid: Vec<Vec<CellPayload>>,
    #[serde(alias = "trieData")]
    pub dictionary: SerializedNode,
    #[serde(alias = "values")]
    pub letter_values: BTreeMap<String, u32>,
}

/// Validated, owned inputs for one solve
#[derive(Debug, Clone)]
pub struct SolveInput {
    pub grid: Grid,
    pub index: PrefixIndex,
    pub values: LetterValues,
}

impl SolveRequest {
    /// Build a request from core types
    #[must_use]
    pub fn new(grid: &Grid, index: &PrefixIndex, values: &LetterValues) -> Self {
        let grid = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| CellPayload {
                        letter: cell.letter().map(String::from).unwrap_or_default(),
                        state: cell.modifier(),
                    })
                    .collect()
            })
            .collect();

        let letter_values = values
            .sorted_entries()
            .into_iter()
            .map(|(letter, value)| (letter.to_string(), value))
            .collect();

        Self {
            grid,
            dictionary: index.serialize(),
            letter_values,
        }
    }

    /// Validate every part of the request and rebuild the dictionary
    ///
    /// # Errors
    /// Returns `BoundaryError` for wrong grid dimensions, invalid letters, an incomplete
    /// grid, malformed dictionary keys or invalid letter value keys.
    pub fn to_input(&self) -> Result<SolveInput> {
        let grid = self.to_grid()?;
        grid.ensure_complete()?;

        Ok(SolveInput {
            grid,
            index: PrefixIndex::deserialize(&self.dictionary)?,
            values: self.to_letter_values()?,
        })
    }

    /// Convert the grid snapshot, without requiring every cell to be filled
    ///
    /// # Errors
    /// Returns `BoundaryError::GridDimensions` or `BoundaryError::InvalidLetter`.
    pub fn to_grid(&self) -> Result<Grid> {
        let rows = self.grid.len();
        if let Some(cols) = self
            .grid
            .iter()
            .map(Vec::len)
            .find(|&len| len != GRID_SIZE)
            .or((rows != GRID_SIZE).then_some(GRID_SIZE))
        {
            return Err(BoundaryError::GridDimensions { rows, cols });
        }

        let mut grid = Grid::new();
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let position = Position::new(r, c);
                let mut chars = cell.letter.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => {}
                    (Some(letter), None) if letter.is_ascii_alphabetic() => {
                        grid.set_letter(position, letter)?;
                    }
                    _ => {
                        return Err(BoundaryError::InvalidLetter {
                            position,
                            value: cell.letter.clone(),
                        });
                    }
                }
                grid.set_modifier(position, cell.state)?;
            }
        }
        Ok(grid)
    }

    /// Convert the letter value table
    ///
    /// # Errors
    /// Returns `BoundaryError::InvalidLetterValue` for keys that are not a single letter.
    pub fn to_letter_values(&self) -> Result<LetterValues> {
        parse_letter_values(&self.letter_values)
    }
}

/// Convert a string-keyed value table, requiring every key to be a single letter
///
/// # Errors
/// Returns `BoundaryError::InvalidLetterValue` naming the first bad key.
pub fn parse_letter_values(table: &BTreeMap<String, u32>) -> Result<LetterValues> {
    table
        .iter()
        .map(|(key, &value)| {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_ascii_alphabetic() => Ok((letter, value)),
                _ => Err(BoundaryError::InvalidLetterValue(key.clone())),
            }
        })
        .collect()
}

/// Solve response: up to three ranked words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    #[serde(rename = "topWords")]
    pub top_words: Vec<ScoredWord>,
}

impl From<&TopResults> for SolveResponse {
    fn from(results: &TopResults) -> Self {
        Self {
            top_words: results.entries().to_vec(),
        }
    }
}

/// Message envelope, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BoundaryMessage {
    Solve(SolveRequest),
    Reset,
}
