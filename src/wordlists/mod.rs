//! Dictionaries for the grid search
//!
//! Provides an embedded default dictionary and loaders for word lists and serialized tries.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
