//! Per-letter score table

use rustc_hash::FxHashMap;

/// Standard tile values
const STANDARD_VALUES: [(char, u32); 26] = [
    ('A', 1),
    ('E', 1),
    ('I', 1),
    ('O', 1),
    ('N', 2),
    ('R', 2),
    ('S', 2),
    ('T', 2),
    ('D', 3),
    ('G', 3),
    ('L', 3),
    ('B', 4),
    ('H', 4),
    ('P', 4),
    ('M', 4),
    ('U', 4),
    ('Y', 4),
    ('C', 5),
    ('F', 5),
    ('V', 5),
    ('W', 5),
    ('K', 6),
    ('J', 7),
    ('X', 7),
    ('Q', 8),
    ('Z', 8),
];

/// Mapping from uppercase letter to its point value
///
/// Missing letters are worth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterValues {
    values: FxHashMap<char, u32>,
}

impl LetterValues {
    /// A table with no entries
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }

    /// The standard table
    ///
    /// # Examples
    /// ```
    /// use tile_solver::core::LetterValues;
    ///
    /// let values = LetterValues::standard();
    /// assert_eq!(values.get('q'), 8);
    /// assert_eq!(values.get('E'), 1);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_VALUES.into_iter().collect()
    }

    /// Value of `letter`, 0 if absent
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> u32 {
        self.values
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// Set the value of `letter`, returning the previous entry
    pub fn set(&mut self, letter: char, value: u32) -> Option<u32> {
        self.values.insert(letter.to_ascii_uppercase(), value)
    }

    /// Entries sorted by letter
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(char, u32)> {
        let mut entries: Vec<(char, u32)> = self.values.iter().map(|(&c, &v)| (c, v)).collect();
        entries.sort_unstable();
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for LetterValues {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<(char, u32)> for LetterValues {
    fn from_iter<I: IntoIterator<Item = (char, u32)>>(iter: I) -> Self {
        let mut values = Self::empty();
        for (letter, value) in iter {
            values.set(letter, value);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_covers_alphabet() {
        let values = LetterValues::standard();
        assert_eq!(values.len(), 26);
        for letter in 'A'..='Z' {
            assert!(values.get(letter) > 0, "{letter} has no value");
        }
    }

    #[test]
    fn missing_letter_is_zero() {
        let values: LetterValues = [('C', 5)].into_iter().collect();
        assert_eq!(values.get('C'), 5);
        assert_eq!(values.get('Z'), 0);
        assert_eq!(values.get('?'), 0);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let mut values = LetterValues::empty();
        values.set('k', 6);
        assert_eq!(values.get('K'), 6);
        assert_eq!(values.set('K', 7), Some(6));
        assert_eq!(values.get('k'), 7);
    }

    #[test]
    fn sorted_entries_order() {
        let values: LetterValues = [('T', 2), ('A', 1), ('C', 5)].into_iter().collect();
        assert_eq!(values.sorted_entries(), vec![('A', 1), ('C', 5), ('T', 2)]);
    }
}
