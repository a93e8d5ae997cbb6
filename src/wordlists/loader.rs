//! Dictionary loading utilities
//!
//! Builds a `PrefixIndex` from the embedded list, a plain word list file, or a
//! serialized trie in JSON form.

use super::DICTIONARY;
use crate::core::{PrefixIndex, SerializedNode};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Normalize a dictionary entry
///
/// Returns the uppercased word, or `None` for blank lines, `#` comments and entries
/// containing anything other than ASCII letters.
#[must_use]
pub fn normalize_word(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// Load words from a file with one word per line
///
/// Invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use tile_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize_word).collect())
}

/// Build an index from a word slice
///
/// # Examples
/// ```
/// use tile_solver::wordlists::loader::index_from_slice;
/// use tile_solver::wordlists::DICTIONARY;
///
/// let index = index_from_slice(DICTIONARY);
/// assert_eq!(index.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn index_from_slice(slice: &[&str]) -> PrefixIndex {
    PrefixIndex::from_words(slice.iter().filter_map(|&s| normalize_word(s)))
}

/// Index over the embedded dictionary
#[must_use]
pub fn embedded_index() -> PrefixIndex {
    index_from_slice(DICTIONARY)
}

/// Load a dictionary file into an index
///
/// Files ending in `.json` are read as a serialized trie; anything else as a word list.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or contains a
/// malformed trie node.
pub fn load_index<P: AsRef<Path>>(path: P) -> Result<PrefixIndex> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let index = if is_json {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let data: SerializedNode = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        PrefixIndex::deserialize(&data)
            .with_context(|| format!("Malformed dictionary in {}", path.display()))?
    } else {
        let words = load_from_file(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        PrefixIndex::from_words(words)
    };

    info!(path = %path.display(), words = index.len(), "dictionary loaded");
    Ok(index)
}
