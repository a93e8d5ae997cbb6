//! Prefix tree over dictionary words
//!
//! Answers "is this a valid prefix" and "is this a complete word" in O(length) time.
//! Letters are normalized to ASCII uppercase on insertion, deserialization and lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Normalize a letter to the case stored in the index
#[inline]
#[must_use]
pub const fn normalize_letter(letter: char) -> char {
    letter.to_ascii_uppercase()
}

/// A single node of the prefix tree
///
/// Each node exclusively owns its children, so no node is ever reachable by two paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    end_of_word: bool,
}

impl TrieNode {
    /// Child reached by `letter`, if any
    #[inline]
    #[must_use]
    pub fn child(&self, letter: char) -> Option<&Self> {
        self.children.get(&normalize_letter(letter))
    }

    /// Whether a complete dictionary word ends at this node
    #[inline]
    #[must_use]
    pub const fn is_end_of_word(&self) -> bool {
        self.end_of_word
    }

    /// Iterate over `(letter, child)` pairs in no particular order
    pub fn children(&self) -> impl Iterator<Item = (char, &Self)> {
        self.children.iter().map(|(&letter, child)| (letter, child))
    }

    fn node_count(&self) -> usize {
        1 + self.children.values().map(Self::node_count).sum::<usize>()
    }
}

/// Dictionary stored as a prefix tree
///
/// # Examples
/// ```
/// use tile_solver::core::PrefixIndex;
///
/// let index = PrefixIndex::from_words(["cat", "cats"]);
/// assert!(index.contains_prefix("CA"));
/// assert!(index.contains_word("cat"));
/// assert!(!index.contains_word("ca"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixIndex {
    root: TrieNode,
    word_count: usize,
}

impl PrefixIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index by inserting every word
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    /// Insert a word, creating missing nodes along the way
    ///
    /// Returns `true` if the word was not already present. Empty words are ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for letter in word.chars() {
            node = node.children.entry(normalize_letter(letter)).or_default();
        }

        if node.end_of_word {
            return false;
        }
        node.end_of_word = true;
        self.word_count += 1;
        true
    }

    /// Whether any dictionary word starts with `prefix`
    ///
    /// The empty prefix is always contained. A miss is an ordinary outcome used for pruning.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    /// Whether `word` was inserted as a complete word
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.descend(word).is_some_and(TrieNode::is_end_of_word)
    }

    /// Root node, representing the empty prefix
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Total number of nodes, including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Convert to the nested transfer representation
    #[must_use]
    pub fn serialize(&self) -> SerializedNode {
        SerializedNode::from(&self.root)
    }

    /// Rebuild an owned index from the nested transfer representation
    ///
    /// Child keys are normalized, so keys differing only in case are merged.
    ///
    /// # Errors
    /// Returns `TrieError::InvalidKey` if a child key is not exactly one character.
    pub fn deserialize(data: &SerializedNode) -> Result<Self, TrieError> {
        let mut root = TrieNode::default();
        let word_count = rebuild(&mut root, data)?;
        Ok(Self { root, word_count })
    }

    fn descend(&self, letters: &str) -> Option<&TrieNode> {
        letters
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }
}

/// Merge `data` into `node`, returning how many new words were marked
fn rebuild(node: &mut TrieNode, data: &SerializedNode) -> Result<usize, TrieError> {
    let mut words = 0;
    if data.is_end_of_word && !node.end_of_word {
        node.end_of_word = true;
        words += 1;
    }

    for (key, child_data) in &data.children {
        let mut chars = key.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(TrieError::InvalidKey(key.clone()));
        };
        let child = node.children.entry(normalize_letter(letter)).or_default();
        words += rebuild(child, child_data)?;
    }

    Ok(words)
}

/// Nested transfer representation of a trie node
///
/// JSON shape: `{ "children": { "A": { ... } }, "isEndOfWord": true }`.
/// Both fields are optional when decoding, and `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: BTreeMap<String, SerializedNode>,
    #[serde(rename = "isEndOfWord", default, deserialize_with = "null_as_default")]
    pub is_end_of_word: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&TrieNode> for SerializedNode {
    fn from(node: &TrieNode) -> Self {
        Self {
            children: node
                .children
                .iter()
                .map(|(letter, child)| (letter.to_string(), Self::from(child)))
                .collect(),
            is_end_of_word: node.end_of_word,
        }
    }
}

/// Error type for malformed serialized dictionaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    InvalidKey(String),
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(key) => {
                write!(f, "Dictionary child key must be a single character, got {key:?}")
            }
        }
    }
}

impl std::error::Error for TrieError {}
