//! Word scoring with tile modifiers
//!
//! Sums letter values along a path, applying double-letter tiles per letter and
//! double-word tiles multiplicatively to the whole word, then adds a flat length bonus.

use crate::core::{Grid, LetterValues, Position, TileModifier};

/// Paths at least this long earn the length bonus
pub const LENGTH_BONUS_MIN_LETTERS: usize = 5;

/// Flat bonus added after word multipliers
pub const LENGTH_BONUS: u64 = 10;

/// Score the word spelled by `path` on `grid`
///
/// # Formula
/// score = (Σ letter × letter multiplier) × Π word multipliers + bonus
///
/// The bonus applies when the path has at least five letters and is never multiplied.
///
/// # Examples
/// ```
/// use tile_solver::core::{Grid, LetterValues, Position};
/// use tile_solver::solver::calculate_score;
///
/// let grid: Grid = "CATXX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
/// let values: LetterValues = [('C', 5), ('A', 1), ('T', 2)].into_iter().collect();
/// let path = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
///
/// assert_eq!(calculate_score(&path, &grid, &values), 8);
/// ```
#[must_use]
pub fn calculate_score(path: &[Position], grid: &Grid, values: &LetterValues) -> u64 {
    let mut total: u64 = 0;
    let mut word_multiplier: u64 = 1;

    for &pos in path {
        let mut letter_score = grid.letter(pos).map_or(0, |letter| u64::from(values.get(letter)));

        match grid.modifier(pos) {
            TileModifier::Normal => {}
            TileModifier::DoubleLetter => letter_score *= 2,
            TileModifier::DoubleWord => word_multiplier = word_multiplier.saturating_mul(2),
        }

        total = total.saturating_add(letter_score);
    }

    let mut score = total.saturating_mul(word_multiplier);
    if path.len() >= LENGTH_BONUS_MIN_LETTERS {
        score = score.saturating_add(LENGTH_BONUS);
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> LetterValues {
        [('C', 5), ('A', 1), ('T', 2)].into_iter().collect()
    }

    fn row(len: usize) -> Vec<Position> {
        (0..len).map(|col| Position::new(0, col)).collect()
    }

    #[test]
    fn plain_three_letter_word() {
        let grid: Grid = "CATXX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
        assert_eq!(calculate_score(&row(3), &grid, &values()), 8);
    }

    #[test]
    fn double_letter_doubles_one_letter() {
        let grid: Grid = "CA+TXX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
        assert_eq!(calculate_score(&row(3), &grid, &values()), 9);
    }

    #[test]
    fn double_word_with_length_bonus() {
        // B A A B X = 2 + 1 + 1 + 2 + 0 = 6
        let values: LetterValues = [('B', 2), ('A', 1)].into_iter().collect();
        let grid: Grid = "BAA*BX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
        assert_eq!(calculate_score(&row(5), &grid, &values), 6 * 2 + 10);
    }

    #[test]
    fn two_double_words_compound() {
        let values: LetterValues = [('B', 2), ('A', 1)].into_iter().collect();
        let grid: Grid = "BA*A*BX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
        assert_eq!(calculate_score(&row(5), &grid, &values), 6 * 4 + 10);
    }

    #[test]
    fn bonus_is_not_multiplied() {
        let values = LetterValues::empty();
        let grid: Grid = "X*XXXX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
        assert_eq!(calculate_score(&row(5), &grid, &values), 10);
        assert_eq!(calculate_score(&row(4), &grid, &values), 0);
    }

    #[test]
    fn missing_values_score_zero() {
        let grid: Grid = "QQQXX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
        assert_eq!(calculate_score(&row(3), &grid, &values()), 0);
    }

    #[test]
    fn empty_path() {
        let grid = Grid::new();
        assert_eq!(calculate_score(&[], &grid, &values()), 0);
    }

    #[test]
    fn order_of_tiles_does_not_matter() {
        let grid: Grid = "CA+T*XX XXXXX XXXXX XXXXX XXXXX".parse().unwrap();
        let forward = row(3);
        let backward: Vec<Position> = forward.iter().rev().copied().collect();
        assert_eq!(
            calculate_score(&forward, &grid, &values()),
            calculate_score(&backward, &grid, &values())
        );
    }
}
