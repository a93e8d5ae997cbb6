use crate::core::{GridError, Position, TrieError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoundaryError>;

/// Rejections raised before a request reaches the search engine
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("Grid must be 5x5, got {rows} rows with a row of {cols} cells")]
    GridDimensions { rows: usize, cols: usize },

    #[error("Invalid letter {value:?} at {position}")]
    InvalidLetter { position: Position, value: String },

    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("Malformed dictionary: {0}")]
    MalformedDictionary(#[from] TrieError),

    #[error("Letter value key must be a single letter, got {0:?}")]
    InvalidLetterValue(String),

    #[error("A solve request is already in flight")]
    Busy,

    #[error("No solve request is in flight")]
    Idle,

    #[error("Solver worker has shut down")]
    Disconnected,

    #[error("Invalid message: {0}")]
    Json(#[from] serde_json::Error),
}
