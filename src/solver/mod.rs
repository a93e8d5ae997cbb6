//! Word-finding engine
//!
//! Scoring, top-result tracking and the backtracking grid search.

mod engine;
pub mod score;
pub mod top;

pub use engine::{FoundWord, SearchEngine};
pub use score::{LENGTH_BONUS, LENGTH_BONUS_MIN_LETTERS, calculate_score};
pub use top::{ScoredWord, TOP_K, TopResults};
