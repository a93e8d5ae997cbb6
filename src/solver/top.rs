//! Bounded ranking of the best words found
//!
//! Keeps at most three entries, highest score first. Ties keep the earlier find.

use serde::{Deserialize, Serialize};

/// Maximum number of ranked entries
pub const TOP_K: usize = 3;

/// A dictionary word with its score
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: u64,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: impl Into<String>, score: u64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Top-K tracker, sorted by descending score
///
/// No deduplication: the same word found along two paths may appear twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopResults {
    entries: Vec<ScoredWord>,
}

impl TopResults {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(TOP_K + 1),
        }
    }

    /// Whether a candidate with `score` would be admitted
    ///
    /// True while fewer than three entries are held, afterwards only when `score`
    /// strictly exceeds the third-ranked score.
    #[inline]
    #[must_use]
    pub fn would_admit(&self, score: u64) -> bool {
        self.entries
            .get(TOP_K - 1)
            .is_none_or(|third| score > third.score)
    }

    /// Offer a candidate, returning whether it was admitted
    ///
    /// # Examples
    /// ```
    /// use tile_solver::solver::TopResults;
    ///
    /// let mut top = TopResults::new();
    /// for (word, score) in [("CAT", 8), ("TAR", 5), ("ACT", 8), ("RAT", 5)] {
    ///     top.offer(word, score);
    /// }
    ///
    /// let words: Vec<&str> = top.entries().iter().map(|e| e.word.as_str()).collect();
    /// assert_eq!(words, ["CAT", "ACT", "TAR"]);
    /// ```
    pub fn offer(&mut self, word: impl Into<String>, score: u64) -> bool {
        if !self.would_admit(score) {
            return false;
        }

        self.entries.push(ScoredWord::new(word, score));
        // Stable: a newcomer lands behind entries with an equal score
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(TOP_K);
        true
    }

    /// Offer every entry of `other`, in its ranked order
    ///
    /// Merging per-segment results in segment order yields the same ranking as
    /// offering every candidate of those segments one by one.
    pub fn merge(&mut self, other: Self) {
        for entry in other.entries {
            self.offer(entry.word, entry.score);
        }
    }

    /// Ranked entries, best first
    #[must_use]
    pub fn entries(&self) -> &[ScoredWord] {
        &self.entries
    }

    /// Best entry, if any
    #[must_use]
    pub fn best(&self) -> Option<&ScoredWord> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ScoredWord> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(top: &TopResults) -> Vec<u64> {
        top.entries().iter().map(|e| e.score).collect()
    }

    #[test]
    fn never_exceeds_three() {
        let mut top = TopResults::new();
        for score in [4, 9, 1, 7, 3, 12, 8] {
            top.offer("WORD", score);
            assert!(top.len() <= TOP_K);
        }
        assert_eq!(scores(&top), vec![12, 9, 8]);
    }

    #[test]
    fn admits_anything_until_full() {
        let mut top = TopResults::new();
        assert!(top.offer("A", 0));
        assert!(top.offer("B", 0));
        assert!(top.offer("C", 0));
        assert!(!top.offer("D", 0));
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn equal_to_third_is_rejected() {
        let mut top = TopResults::new();
        top.offer("A", 10);
        top.offer("B", 8);
        top.offer("C", 5);

        assert!(!top.would_admit(5));
        assert!(!top.offer("D", 5));
        assert!(top.offer("E", 6));
        assert_eq!(scores(&top), vec![10, 8, 6]);
    }

    #[test]
    fn ties_keep_first_found() {
        let mut top = TopResults::new();
        top.offer("FIRST", 7);
        top.offer("LOW", 1);
        top.offer("SECOND", 7);
        top.offer("THIRD", 7);

        let words: Vec<&str> = top.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut top = TopResults::new();
        top.offer("CAT", 8);
        top.offer("CAT", 16);

        assert_eq!(top.len(), 2);
        assert_eq!(top.best(), Some(&ScoredWord::new("CAT", 16)));
    }

    #[test]
    fn merge_matches_sequential_offers() {
        let first = [("A", 3), ("B", 9), ("C", 9), ("D", 2)];
        let second = [("E", 9), ("F", 4), ("G", 10)];

        let mut sequential = TopResults::new();
        for (word, score) in first.iter().chain(second.iter()) {
            sequential.offer(*word, *score);
        }

        let mut left = TopResults::new();
        for (word, score) in first {
            left.offer(word, score);
        }
        let mut right = TopResults::new();
        for (word, score) in second {
            right.offer(word, score);
        }
        let mut merged = TopResults::new();
        merged.merge(left);
        merged.merge(right);

        assert_eq!(merged, sequential);
    }

    #[test]
    fn clear_empties() {
        let mut top = TopResults::new();
        top.offer("CAT", 8);
        top.clear();
        assert!(top.is_empty());
        assert!(top.would_admit(0));
    }
}
