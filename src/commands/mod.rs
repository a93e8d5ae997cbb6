//! Command implementations

pub mod benchmark;
pub mod dictionary;
pub mod serve;
pub mod solve;

pub use benchmark::{BenchmarkResult, random_grid, run_benchmark};
pub use dictionary::{DictionaryStats, export_dictionary};
pub use serve::{ServeSummary, run_serve};
pub use solve::{SolveConfig, SolveResult, load_letter_values, solve_grid};
